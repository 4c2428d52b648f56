//! word-sampler draws random words from a deduplicated word list.
//!
//! The crate is built around [WordSampler], which owns a [WordPool] of lower-cased, unique words
//! and a [RandomSource]. A sampler draws single words with [WordSampler::draw_one], or lists of
//! words, with or without repeats, with [WordSampler::draw_many].
//!
//! Any [rand::Rng] can serve as the source through [RngSource]. Seed a
//! [rand::rngs::StdRng] to make draws reproducible.
//!
//! ```
//! # use word_sampler::{Error, RngSource, WordSampler};
//! # fn main() -> Result<(), Error> {
//!     let source = RngSource::new(rand::rng());
//!     let mut sampler = WordSampler::new(["abc", "dec", "cbc", "g"], source)?;
//!     let passphrase = sampler.draw_many_with_duplicates(6)?;
//!     assert_eq!(6, passphrase.len());
//! #   Ok(())
//! # }
//! ```

#![deny(rustdoc::missing_crate_level_docs)]
#![deny(missing_docs)]

#[macro_use]
extern crate log;

pub use config::{Config, ConfigBuilder, Selection};
pub use error::{Error, InvalidArgument};
pub use pool::WordPool;
pub use random_source::{RandomSource, RngSource};
pub use word_sampler::{WordSampler, WordSamplerBuilder};

mod config;
mod error;
mod pool;
mod random_source;
mod test_common;
mod word_sampler;

/// Return the crate version
pub fn version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
