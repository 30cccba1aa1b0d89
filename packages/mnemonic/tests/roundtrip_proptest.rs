//! Property tests for encode/decode over arbitrary entropy

use cryypt_mnemonic::{EnglishWordlist, Mnemonic, MnemonicError, Wordlist, checksum};
use proptest::prelude::*;

fn valid_entropy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![Just(16usize), Just(20), Just(24), Just(28), Just(32)]
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn entropy_survives_phrase_round_trip(data in valid_entropy()) {
        let wordlist = EnglishWordlist::new();
        let mnemonic = Mnemonic::from_bytes(&data).unwrap();
        let phrase = mnemonic.to_phrase(&wordlist).unwrap();

        let decoded = Mnemonic::from_phrase(&phrase, &wordlist).unwrap();
        prop_assert_eq!(decoded.entropy().as_bytes(), data.as_slice());
        prop_assert_eq!(decoded.checksum(), checksum(decoded.entropy()));
        prop_assert_eq!(decoded.word_count(), (data.len() * 8 + data.len() / 4) / 11);
    }

    #[test]
    fn indices_stay_in_range(data in valid_entropy()) {
        let mnemonic = Mnemonic::from_bytes(&data).unwrap();
        prop_assert!(mnemonic.indices().iter().all(|&i| i < 2048));
    }

    #[test]
    fn changed_last_word_is_rejected_or_distinct(data in valid_entropy(), delta in 1u16..2048) {
        let wordlist = EnglishWordlist::new();
        let mnemonic = Mnemonic::from_bytes(&data).unwrap();
        let mut indices = mnemonic.indices().to_vec();
        let last = indices.len() - 1;
        indices[last] = (indices[last] + delta) % 2048;

        let words: Vec<String> = indices
            .iter()
            .map(|&i| wordlist.word_at(i).unwrap().to_owned())
            .collect();

        match Mnemonic::from_words(&words, &wordlist) {
            Ok(other) => {
                prop_assert_ne!(other.entropy(), mnemonic.entropy());
            }
            Err(err) => {
                prop_assert!(
                    matches!(err, MnemonicError::ChecksumMismatch { .. }),
                    "expected ChecksumMismatch"
                );
            }
        }
    }
}
