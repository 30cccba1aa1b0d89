//! Benchmarks for mnemonic encoding, decoding and seed derivation

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cryypt_mnemonic::{EnglishWordlist, Mnemonic, Wordlist, derive_seed};

const SIZES: [u16; 5] = [128, 160, 192, 224, 256];

/// Benchmark entropy -> phrase across all entropy sizes
fn benchmark_encode(c: &mut Criterion) {
    let wordlist = EnglishWordlist::new();
    let mut group = c.benchmark_group("encode");

    for size in SIZES {
        let data = vec![0x5Au8; usize::from(size / 8)];
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_with_input(BenchmarkId::new("to_phrase", size), &data, |b, data| {
            b.iter(|| {
                let mnemonic = Mnemonic::from_bytes(data).expect("valid entropy");
                let phrase = mnemonic.to_phrase(&wordlist).expect("english list");
                std::hint::black_box(phrase);
            });
        });
    }
    group.finish();
}

/// Benchmark phrase -> entropy, including checksum verification
fn benchmark_decode(c: &mut Criterion) {
    let wordlist = EnglishWordlist::new();
    let mut group = c.benchmark_group("decode");

    for size in SIZES {
        let data = vec![0xA5u8; usize::from(size / 8)];
        let phrase = Mnemonic::from_bytes(&data)
            .and_then(|m| m.to_phrase(&wordlist))
            .expect("encodable entropy");

        group.bench_with_input(BenchmarkId::new("from_phrase", size), &phrase, |b, phrase| {
            b.iter(|| {
                let mnemonic = Mnemonic::from_phrase(phrase, &wordlist).expect("valid phrase");
                std::hint::black_box(mnemonic);
            });
        });
    }
    group.finish();
}

/// Benchmark binary-search lookup against the embedded list
fn benchmark_lookup(c: &mut Criterion) {
    let wordlist = EnglishWordlist::new();

    c.bench_function("index_of_english", |b| {
        b.iter(|| {
            for word in ["abandon", "legal", "zoo", "missing"] {
                std::hint::black_box(wordlist.index_of(std::hint::black_box(word)));
            }
        });
    });
}

/// Benchmark PBKDF2 seed stretching
fn benchmark_seed(c: &mut Criterion) {
    let phrase = "legal winner thank year wave sausage worth useful legal winner thank yellow";
    let mut group = c.benchmark_group("seed");
    group.sample_size(20);

    group.bench_function("derive_no_passphrase", |b| {
        b.iter(|| std::hint::black_box(derive_seed(phrase, None)));
    });
    group.bench_function("derive_with_passphrase", |b| {
        b.iter(|| std::hint::black_box(derive_seed(phrase, Some("TREZOR"))));
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_lookup,
    benchmark_seed
);
criterion_main!(benches);
