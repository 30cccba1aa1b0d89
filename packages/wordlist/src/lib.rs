//! # Cyrup Word Lists
//!
//! BIP-39 word lists: the lookup capability shared by every language, the
//! embedded English list, and a loader for list files on disk.
//!
//! ```rust
//! use cryypt_wordlist::{EnglishWordlist, Wordlist};
//!
//! let english = EnglishWordlist::new();
//! assert_eq!(english.word_at(0).ok(), Some("abandon"));
//! assert_eq!(english.index_of("zoo"), Some(2047));
//! ```

#![forbid(unsafe_code)]

pub mod english;
pub mod error;
pub mod file;

pub use english::EnglishWordlist;
pub use error::{Result, WordlistError};
pub use file::FileWordlist;

/// Number of words in every BIP-39 word list
pub const WORDLIST_SIZE: usize = 2048;

/// A fixed, sorted 2048-word vocabulary for one language
///
/// Implementors only provide the language name and the backing table; index
/// and word lookups come from the default methods. The table must be sorted
/// ascending by byte-wise string order, otherwise [`Wordlist::index_of`]
/// returns wrong answers. Words must be in NFKD form, since phrases are
/// normalized that way before lookup.
pub trait Wordlist: Send + Sync {
    /// Storage type of a single word
    type Word: AsRef<str>;

    /// Human-readable language name
    fn language(&self) -> &str;

    /// The full ordered table
    fn words(&self) -> &[Self::Word; WORDLIST_SIZE];

    /// Word at `index`
    ///
    /// # Errors
    ///
    /// Returns [`WordlistError::IndexOutOfRange`] if `index` is 2048 or above.
    fn word_at(&self, index: u16) -> Result<&str> {
        self.words()
            .get(usize::from(index))
            .map(|word| word.as_ref())
            .ok_or(WordlistError::IndexOutOfRange { index })
    }

    /// Position of `word` in the table, by binary search on exact equality
    fn index_of(&self, word: &str) -> Option<u16> {
        find_word_in(self.words(), word).and_then(|index| u16::try_from(index).ok())
    }
}

impl<T: Wordlist + ?Sized> Wordlist for &T {
    type Word = T::Word;

    fn language(&self) -> &str {
        (**self).language()
    }

    fn words(&self) -> &[Self::Word; WORDLIST_SIZE] {
        (**self).words()
    }
}

/// Binary search for `target` in an ascending slice of words
///
/// Returns the position of the exact match, or `None`.
#[must_use]
pub fn find_word_in<S: AsRef<str>>(words: &[S], target: &str) -> Option<usize> {
    words
        .binary_search_by(|probe| probe.as_ref().cmp(target))
        .ok()
}
