use std::collections::HashSet;

use crate::config::{Config, Selection};
use crate::error::{Error, InvalidArgument};
use crate::pool::WordPool;
use crate::random_source::RandomSource;

/// Draws random words, or fixed-size lists of words, from a [WordPool].
///
/// A sampler owns its pool and a [RandomSource]. It keeps no state between calls: every result
/// depends only on the pool and on the values the source hands out. Pass `&mut source` instead of
/// the source itself to keep ownership of it on the calling side.
///
/// A sampler is not synchronized. Share one between threads only behind a lock, or give each
/// thread its own sampler and source.
///
/// # Examples
///
/// Drawing a four word passphrase with a seeded generator.
/// ```
/// # use word_sampler::{Error, RngSource, WordSampler};
/// # use rand::{rngs::StdRng, SeedableRng};
/// # fn main() -> Result<(), Error> {
///     let source = RngSource::new(StdRng::seed_from_u64(7));
///     let mut sampler = WordSampler::new(["correct", "horse", "battery", "staple"], source)?;
///     let passphrase = sampler.draw_many(4, false)?;
///     assert_eq!(4, passphrase.len());
/// #   Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WordSampler<S: RandomSource> {
    pool: WordPool,
    source: S,
    config: Config,
}

impl<S: RandomSource> WordSampler<S> {
    /// Create a sampler with default configuration.
    ///
    /// Fails with [Error::InvalidArgument] if `words` is empty.
    pub fn new<I, W>(words: I, source: S) -> Result<Self, Error>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        WordSamplerBuilder::new()
            .words(words)
            .random_source(source)
            .build()
    }

    /// Create a sampler over a pool that has already been built.
    pub fn with_pool(pool: WordPool, source: S, config: Config) -> Self {
        Self {
            pool,
            source,
            config,
        }
    }

    /// Returns the pool words are drawn from.
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Returns the configuration of this sampler.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of distinct words available.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Always false; see [WordPool::is_empty].
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Draw a single word. Consumes exactly one value from the random source.
    pub fn draw_one(&mut self) -> String {
        let index = self.next_index();
        self.word(index)
    }

    /// Draw `count` words.
    ///
    /// When `allow_duplicates` is false, every word in the result is distinct. Words appear in the
    /// order they were drawn. A `count` of zero returns an empty list without touching the random
    /// source.
    ///
    /// # Errors
    ///
    /// - [Error::InvalidSize] if `count` is negative.
    /// - [Error::InsufficientPool] if `allow_duplicates` is false and `count` exceeds the pool
    ///   size.
    pub fn draw_many(&mut self, count: i64, allow_duplicates: bool) -> Result<Vec<String>, Error> {
        let count = usize::try_from(count).map_err(|_| Error::InvalidSize(count))?;

        if !allow_duplicates && count > self.pool.len() {
            return Err(Error::InsufficientPool {
                requested: count,
                available: self.pool.len(),
            });
        }

        let indices = match (allow_duplicates, self.config.selection()) {
            (true, _) => (0..count).map(|_| self.next_index()).collect(),
            (false, Selection::Rejection) => self.reject_duplicates(count),
            (false, Selection::PartialShuffle) => self.partial_shuffle(count),
        };

        Ok(indices.into_iter().map(|i| self.word(i)).collect())
    }

    /// Draw `count` words, allowing the same word to appear more than once.
    ///
    /// Equivalent to `draw_many(count, true)`.
    pub fn draw_many_with_duplicates(&mut self, count: i64) -> Result<Vec<String>, Error> {
        self.draw_many(count, true)
    }

    fn next_index(&mut self) -> usize {
        self.source.next_index(self.pool.len())
    }

    fn word(&self, index: usize) -> String {
        self.pool.words()[index].clone()
    }

    fn reject_duplicates(&mut self, count: usize) -> Vec<usize> {
        let mut picked = HashSet::with_capacity(count);
        let mut selection = Vec::with_capacity(count);
        let mut draws = 0_usize;

        while selection.len() < count {
            let index = self.next_index();
            draws += 1;
            if picked.insert(index) {
                selection.push(index);
            }
        }

        trace!(
            "Selected {} distinct words from {} after {} draws",
            count,
            self.pool.len(),
            draws
        );
        selection
    }

    fn partial_shuffle(&mut self, count: usize) -> Vec<usize> {
        let len = self.pool.len();
        let mut indices: Vec<usize> = (0..len).collect();

        for i in 0..count {
            let j = i + self.source.next_index(len - i);
            indices.swap(i, j);
        }

        indices.truncate(count);
        indices
    }
}

/// Used to create a [WordSampler] when the words, the source, or the configuration are supplied
/// separately.
///
/// Every part except the configuration is required; [WordSamplerBuilder::build] reports a missing
/// part as [Error::InvalidArgument].
///
/// # Examples
///
/// ```
/// # use word_sampler::{ConfigBuilder, Error, RngSource, Selection, WordSamplerBuilder};
/// # fn main() -> Result<(), Error> {
///     let mut sampler = WordSamplerBuilder::new()
///         .words(["abc", "dec", "cbc", "g"])
///         .random_source(RngSource::new(rand::rng()))
///         .config(ConfigBuilder::new().selection(Selection::PartialShuffle).build())
///         .build()?;
///     assert_eq!(2, sampler.draw_many(2, false)?.len());
/// #   Ok(())
/// # }
/// ```
pub struct WordSamplerBuilder<S: RandomSource> {
    words: Option<Vec<String>>,
    source: Option<S>,
    config: Option<Config>,
}

impl<S: RandomSource> WordSamplerBuilder<S> {
    /// Create a new, empty [WordSamplerBuilder].
    pub fn new() -> Self {
        Self {
            words: None,
            source: None,
            config: None,
        }
    }

    /// Set the words to sample from.
    pub fn words<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        self.words = Some(words.into_iter().map(|w| w.as_ref().to_owned()).collect());
        self
    }

    /// Set the source of randomness.
    pub fn random_source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the sampler configuration. Defaults to [Config::default].
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Create a new [WordSampler] based on the builder configuration.
    pub fn build(self) -> Result<WordSampler<S>, Error> {
        let source = self.source.ok_or(InvalidArgument::MissingRandomSource)?;
        let words = self.words.ok_or(InvalidArgument::MissingWords)?;
        let pool = WordPool::new(words)?;

        Ok(WordSampler::with_pool(
            pool,
            source,
            self.config.unwrap_or_default(),
        ))
    }
}

impl<S: RandomSource> Default for WordSamplerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
