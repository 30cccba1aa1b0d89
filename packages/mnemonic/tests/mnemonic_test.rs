//! Mnemonic encoding and decoding tests

use cryypt_mnemonic::{
    EnglishWordlist, Entropy, FileWordlist, Mnemonic, MnemonicError, WORDLIST_SIZE,
    entropy_bits_for, validate_phrase, word_count,
};

fn english() -> EnglishWordlist {
    EnglishWordlist::new()
}

fn repeat(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}

#[test]
fn test_word_count_table() {
    assert_eq!(word_count(128), 12);
    assert_eq!(word_count(160), 15);
    assert_eq!(word_count(192), 18);
    assert_eq!(word_count(224), 21);
    assert_eq!(word_count(256), 24);
}

#[test]
fn test_valid_sizes_pack_into_whole_words() {
    for size in [128u16, 160, 192, 224, 256] {
        let bits = usize::from(size) + usize::from(size / 32);
        assert_eq!(bits % 11, 0);
        assert_eq!(word_count(size) * 11, bits);
        assert_eq!(entropy_bits_for(word_count(size)), Some(size));
    }
}

#[test]
fn test_entropy_bits_for_word_counts() {
    assert_eq!(entropy_bits_for(12), Some(128));
    assert_eq!(entropy_bits_for(15), Some(160));
    assert_eq!(entropy_bits_for(18), Some(192));
    assert_eq!(entropy_bits_for(21), Some(224));
    assert_eq!(entropy_bits_for(24), Some(256));

    for count in [0usize, 1, 9, 11, 13, 14, 16, 23, 25, 27, 48] {
        assert_eq!(entropy_bits_for(count), None, "count {count}");
    }
}

#[test]
fn test_generate_produces_expected_word_counts() {
    let wordlist = english();
    for (size, count) in [(128u16, 12usize), (160, 15), (192, 18), (224, 21), (256, 24)] {
        let mnemonic = Mnemonic::generate(size).expect("valid size");
        assert_eq!(mnemonic.word_count(), count);
        assert_eq!(mnemonic.indices().len(), count);
        assert_eq!(mnemonic.to_words(&wordlist).expect("english").len(), count);
        assert!(mnemonic
            .indices()
            .iter()
            .all(|&index| usize::from(index) < WORDLIST_SIZE));
    }
}

#[test]
fn test_generate_rejects_invalid_sizes() {
    assert!(matches!(
        Mnemonic::generate(127),
        Err(MnemonicError::Entropy(_))
    ));
    assert!(matches!(
        Mnemonic::generate(136),
        Err(MnemonicError::Entropy(_))
    ));
    assert!(matches!(
        Mnemonic::from_bytes(&[0u8; 12]),
        Err(MnemonicError::Entropy(_))
    ));
}

#[test]
fn test_zero_entropy_encodes_to_abandon_about() {
    let mnemonic = Mnemonic::from_bytes(&[0u8; 16]).expect("valid entropy");
    assert_eq!(mnemonic.indices(), &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3]);
    assert_eq!(mnemonic.checksum(), 3);

    let phrase = mnemonic.to_phrase(&english()).expect("english");
    assert_eq!(
        phrase.as_str(),
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
    );
}

#[test]
fn test_all_ones_entropy_ends_with_checksum_word() {
    let mnemonic = Mnemonic::from_bytes(&[0xFFu8; 32]).expect("valid entropy");
    let indices = mnemonic.indices();
    assert!(indices[..23].iter().all(|&i| i == 2047));
    // 111 from the entropy, then checksum 0xAF
    assert_eq!(indices[23], 0b111_1010_1111);
    assert_eq!(mnemonic.checksum(), 0xAF);
}

#[test]
fn test_decode_recovers_entropy() {
    let wordlist = english();
    for size in [128u16, 160, 192, 224, 256] {
        let original = Mnemonic::generate(size).expect("valid size");
        let phrase = original.to_phrase(&wordlist).expect("english");

        let decoded = Mnemonic::from_phrase(&phrase, &wordlist).expect("valid phrase");
        assert_eq!(decoded.entropy(), original.entropy());
        assert_eq!(decoded.checksum(), original.checksum());
        assert_eq!(decoded, original);
    }
}

#[test]
fn test_from_words_accepts_owned_and_borrowed() {
    let wordlist = english();
    let mnemonic = Mnemonic::from_bytes(&[0x11u8; 20]).expect("valid entropy");

    let owned = mnemonic.to_words(&wordlist).expect("english");
    let from_owned = Mnemonic::from_words(&owned, &wordlist).expect("valid words");

    let borrowed: Vec<&str> = owned.iter().map(String::as_str).collect();
    let from_borrowed = Mnemonic::from_words(&borrowed, &wordlist).expect("valid words");

    assert_eq!(from_owned, from_borrowed);
    assert_eq!(from_owned.entropy().as_bytes(), &[0x11u8; 20]);
}

#[test]
fn test_decode_rejects_bad_word_counts() {
    let wordlist = english();
    for count in [0usize, 11, 13, 25] {
        let phrase = repeat("abandon", count);
        match Mnemonic::from_phrase(&phrase, &wordlist) {
            Err(MnemonicError::WordCount { count: found }) => assert_eq!(found, count),
            other => panic!("expected word count error for {count}, got {other:?}"),
        }
    }
}

#[test]
fn test_decode_reports_unknown_word_position() {
    let wordlist = english();
    let mut words = vec!["abandon"; 12];
    words[7] = "bitcoin";

    match Mnemonic::from_words(&words, &wordlist) {
        Err(MnemonicError::UnknownWord { word, position }) => {
            assert_eq!(word, "bitcoin");
            assert_eq!(position, 7);
        }
        other => panic!("expected unknown word, got {other:?}"),
    }
}

#[test]
fn test_unknown_word_message_omits_word() {
    let wordlist = english();
    let err = Mnemonic::from_phrase(&format!("{} hunter2", repeat("abandon", 11)), &wordlist)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("11"));
    assert!(!message.contains("hunter2"));
}

#[test]
fn test_decode_is_case_sensitive() {
    let wordlist = english();
    let phrase = format!("ABANDON {} about", repeat("abandon", 10));
    assert!(matches!(
        Mnemonic::from_phrase(&phrase, &wordlist),
        Err(MnemonicError::UnknownWord { position: 0, .. })
    ));
}

#[test]
fn test_decode_detects_checksum_mismatch() {
    let wordlist = english();

    match Mnemonic::from_phrase(&repeat("abandon", 12), &wordlist) {
        Err(MnemonicError::ChecksumMismatch { expected, found }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 0);
        }
        other => panic!("expected checksum mismatch, got {other:?}"),
    }

    match Mnemonic::from_phrase(&repeat("zoo", 24), &wordlist) {
        Err(MnemonicError::ChecksumMismatch { expected, found }) => {
            assert_eq!(expected, 0xAF);
            assert_eq!(found, 0xFF);
        }
        other => panic!("expected checksum mismatch, got {other:?}"),
    }
}

#[test]
fn test_decode_tolerates_irregular_whitespace() {
    let wordlist = english();
    let phrase = "  abandon\tabandon abandon\nabandon abandon  abandon abandon abandon\r\nabandon abandon abandon   about ";
    let mnemonic = Mnemonic::from_phrase(phrase, &wordlist).expect("valid phrase");
    assert_eq!(mnemonic.entropy().as_bytes(), &[0u8; 16]);
}

#[test]
fn test_validate_phrase() {
    let wordlist = english();
    let good = format!("{} vote", repeat("zoo", 23));
    assert!(validate_phrase(&good, &wordlist).is_ok());
    assert!(validate_phrase(&repeat("zoo", 24), &wordlist).is_err());
    assert!(validate_phrase("", &wordlist).is_err());
}

#[test]
fn test_from_entropy_keeps_entropy() {
    let entropy = Entropy::from_bytes(&[0x33u8; 28]).expect("valid entropy");
    let mnemonic = Mnemonic::from_entropy(entropy.clone()).expect("valid entropy");
    assert_eq!(mnemonic.entropy(), &entropy);
    assert_eq!(mnemonic.word_count(), 21);
}

#[test]
fn test_to_seed_matches_phrase_derivation() {
    let wordlist = english();
    let mnemonic = Mnemonic::from_bytes(&[0u8; 16]).expect("valid entropy");
    let phrase = mnemonic.to_phrase(&wordlist).expect("english");

    let direct = cryypt_mnemonic::derive_seed(&phrase, Some("TREZOR"));
    let via_mnemonic = mnemonic.to_seed(&wordlist, Some("TREZOR")).expect("english");
    assert_eq!(direct, via_mnemonic);
}

#[test]
fn test_debug_hides_secret_material() {
    let mnemonic = Mnemonic::from_bytes(&[0u8; 16]).expect("valid entropy");
    let debug = format!("{mnemonic:?}");
    assert!(debug.contains("word_count: 12"));
    assert!(!debug.contains("indices"));
    assert!(!debug.contains("abandon"));
}

#[test]
fn test_phrase_round_trip_with_accented_wordlist() {
    let mut words: Vec<String> = (0..2047).map(|i| format!("a{i:04}")).collect();
    words.push("z\u{e9}".to_owned());
    let wordlist = FileWordlist::parse("Accented", &words.join("\n")).expect("valid list");

    let mnemonic = Mnemonic::from_bytes(&[0xFFu8; 32]).expect("valid entropy");
    let phrase = mnemonic.to_phrase(&wordlist).expect("indices in range");

    let decoded = Mnemonic::from_phrase(&phrase, &wordlist).expect("own output decodes");
    assert_eq!(decoded, mnemonic);

    // Composed input from a user decodes the same way
    let composed = phrase.replace("ze\u{301}", "z\u{e9}");
    assert_ne!(composed, phrase.as_str());
    let decoded = Mnemonic::from_phrase(&composed, &wordlist).expect("composed input decodes");
    assert_eq!(decoded, mnemonic);
}

#[test]
fn test_decode_failures_report_distinct_kinds() {
    let wordlist = english();
    let kind = |phrase: &str| {
        Mnemonic::from_phrase(phrase, &wordlist)
            .map(|_| ())
            .unwrap_err()
            .kind()
    };

    assert_eq!(kind(&repeat("abandon", 11)), "word_count");
    assert_eq!(kind(&repeat("bitcoin", 12)), "unknown_word");
    assert_eq!(kind(&repeat("abandon", 12)), "checksum_mismatch");
    assert_eq!(
        MnemonicError::from(cryypt_mnemonic::EntropyError::OutOfRange { bits: 8 }).kind(),
        "entropy"
    );
}
