//! Word lists loaded from text files
//!
//! The file format is the one published alongside BIP-39: one word per line,
//! sorted ascending, newline-terminated. Both LF and CRLF line endings are
//! accepted. Words are stored NFKD-normalized, the form phrases are decoded
//! in.

use crate::{Result, WORDLIST_SIZE, Wordlist, WordlistError};
use cryypt_common::LoggingTransformer;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Word list backed by an owned table read from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWordlist {
    language: String,
    words: Box<[String; WORDLIST_SIZE]>,
}

impl FileWordlist {
    /// Read and validate a word list file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The contents fail any of the checks in [`FileWordlist::parse`]
    pub fn load(language: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WordlistError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse(language, &text)?;
        LoggingTransformer::log_wordlist_loaded(
            &list.language,
            &path.display().to_string(),
            text.as_bytes(),
        );
        Ok(list)
    }

    /// Parse and validate word list text
    ///
    /// Trailing line breaks are ignored. Each word is NFKD-normalized before
    /// the order check.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A line inside the list is blank
    /// - The text does not hold exactly 2048 words
    /// - The words are not strictly ascending
    pub fn parse(language: impl Into<String>, text: &str) -> Result<Self> {
        let words = text
            .trim_end_matches(['\r', '\n'])
            .lines()
            .enumerate()
            .map(|(line, word)| {
                if word.is_empty() {
                    Err(WordlistError::EmptyWord { line: line + 1 })
                } else {
                    Ok(word.nfkd().collect::<String>())
                }
            })
            .collect::<Result<Vec<String>>>()?;

        let actual = words.len();
        let words: Box<[String; WORDLIST_SIZE]> = words
            .into_boxed_slice()
            .try_into()
            .map_err(|_| WordlistError::WordCount {
                expected: WORDLIST_SIZE,
                actual,
            })?;

        if let Some(position) = words.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(WordlistError::Unsorted {
                position: position + 1,
            });
        }

        Ok(Self {
            language: language.into(),
            words,
        })
    }
}

impl Wordlist for FileWordlist {
    type Word = String;

    fn language(&self) -> &str {
        &self.language
    }

    fn words(&self) -> &[Self::Word; WORDLIST_SIZE] {
        &self.words
    }
}
