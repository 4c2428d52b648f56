use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{Error, InvalidArgument};

/// An immutable, non-empty set of lower-cased words.
///
/// Words are normalized to lower case and deduplicated when the pool is built, so `"Apple"` and
/// `"apple"` collapse into a single entry. Entries keep the order in which they were first seen,
/// which gives every word a stable index for sampling.
///
/// Cloning a [WordPool] is cheap; clones share the same storage.
///
/// # Examples
///
/// ```
/// # use word_sampler::{Error, WordPool};
/// # fn main() -> Result<(), Error> {
///     let pool = WordPool::new(["Correct", "horse", "HORSE", "battery"])?;
///     assert_eq!(pool.words(), ["correct", "horse", "battery"]);
/// #   Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPool {
    words: Arc<[String]>,
}

impl WordPool {
    /// Build a pool from the provided words.
    ///
    /// Returns [Error::InvalidArgument] with [InvalidArgument::EmptyWords] if `words` yields
    /// nothing. Case-only duplicates are merged without error.
    pub fn new<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();
        let mut supplied = 0_usize;

        for word in words {
            supplied += 1;
            let word = word.as_ref().to_lowercase();
            if seen.insert(word.clone()) {
                normalized.push(word);
            }
        }

        if supplied == 0 {
            return Err(InvalidArgument::EmptyWords.into());
        }

        let merged = supplied - normalized.len();
        if merged > 0 {
            debug!(
                "Merged {} duplicate words; pool holds {} of {} supplied",
                merged,
                normalized.len(),
                supplied
            );
        }

        Ok(Self {
            words: normalized.into(),
        })
    }

    /// Returns the normalized words in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a pool cannot be built from an empty list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Whether `word` is in the pool. The comparison is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|w| *w == word)
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashset;
    use std::collections::HashSet;
    use test_case::test_case;

    use super::*;

    #[test]
    fn pool_merges_case_only_duplicates() {
        let pool = WordPool::new(["A", "a", "B"]).expect("pool should build");

        assert_eq!(2, pool.len());
        let words: HashSet<&str> = pool.words().iter().map(String::as_str).collect();
        assert_eq!(hashset! {"a", "b"}, words);
    }

    #[test]
    fn pool_keeps_first_seen_order() {
        let pool = WordPool::new(["dec", "ABC", "g", "Dec", "cbc"]).expect("pool should build");
        assert_eq!(pool.words(), ["dec", "abc", "g", "cbc"]);
    }

    #[test]
    fn empty_input_is_rejected() {
        let words: Vec<String> = Vec::new();
        assert_eq!(
            Err(Error::InvalidArgument(InvalidArgument::EmptyWords)),
            WordPool::new(words)
        );
    }

    #[test]
    fn pool_accepts_owned_and_borrowed_strings() {
        let owned = WordPool::new(vec!["x".to_string(), "y".to_string()]).unwrap();
        let borrowed = WordPool::new(["x", "y"]).unwrap();
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn a_list_of_one_repeated_word_is_still_valid() {
        let pool = WordPool::new(["Echo", "ECHO", "echo"]).unwrap();
        assert_eq!(pool.words(), ["echo"]);
        assert!(!pool.is_empty());
    }

    #[test_case("abc", true)]
    #[test_case("ABC", true)]
    #[test_case("Cbc", true)]
    #[test_case("xyz", false)]
    #[test_case("", false)]
    fn contains_ignores_case(word: &str, expected: bool) {
        let pool = WordPool::new(["abc", "dec", "cbc", "g"]).unwrap();
        assert_eq!(expected, pool.contains(word));
    }

    #[test]
    fn get_returns_none_past_the_end() {
        let pool = WordPool::new(["abc", "dec"]).unwrap();
        assert_eq!(Some("dec"), pool.get(1));
        assert_eq!(None, pool.get(2));
    }

    #[test]
    fn clones_share_storage() {
        let pool = WordPool::new(["abc", "dec"]).unwrap();
        let clone = pool.clone();
        assert!(Arc::ptr_eq(&pool.words, &clone.words));
    }

    #[test]
    fn merging_duplicates_is_logged() {
        testing_logger::setup();

        WordPool::new(["A", "a", "B"]).unwrap();

        testing_logger::validate(|captured_logs| {
            assert_eq!(1, captured_logs.len());
            assert_eq!(
                "Merged 1 duplicate words; pool holds 2 of 3 supplied",
                captured_logs[0].body
            );
            assert_eq!(log::Level::Debug, captured_logs[0].level);
        });
    }

    #[test]
    fn distinct_input_is_not_logged() {
        testing_logger::setup();

        WordPool::new(["a", "b"]).unwrap();

        testing_logger::validate(|captured_logs| {
            assert!(captured_logs.is_empty());
        });
    }
}
