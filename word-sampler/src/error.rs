use thiserror::Error;

/// The argument that was missing or unusable when building a [crate::WordSampler].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// No word list was supplied.
    MissingWords,
    /// No random source was supplied.
    MissingRandomSource,
    /// The word list was supplied but contained no words.
    EmptyWords,
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            InvalidArgument::MissingWords => "word list must be provided",
            InvalidArgument::MissingRandomSource => "random source must be provided",
            InvalidArgument::EmptyWords => "word list must not be empty",
        };
        f.write_str(message)
    }
}

/// Error type used to represent failures when building a sampler or drawing words from it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required constructor argument was missing, or the word list was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(InvalidArgument),

    /// The number of words requested was negative.
    #[error("number of words to select must not be negative, got {0}")]
    InvalidSize(i64),

    /// More distinct words were requested than the pool holds.
    #[error("cannot select {requested} distinct words from a pool of {available}")]
    InsufficientPool {
        /// The number of distinct words asked for.
        requested: usize,
        /// The number of words in the pool.
        available: usize,
    },
}

impl From<InvalidArgument> for Error {
    fn from(argument: InvalidArgument) -> Self {
        Self::InvalidArgument(argument)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(
        InvalidArgument::MissingWords.into(),
        "invalid argument: word list must be provided";
        "missing words"
    )]
    #[test_case(
        InvalidArgument::EmptyWords.into(),
        "invalid argument: word list must not be empty";
        "empty words"
    )]
    #[test_case(
        Error::InvalidSize(-3),
        "number of words to select must not be negative, got -3";
        "negative size"
    )]
    #[test_case(
        Error::InsufficientPool { requested: 5, available: 4 },
        "cannot select 5 distinct words from a pool of 4";
        "insufficient pool"
    )]
    fn errors_render_readable_messages(error: Error, expected: &str) {
        assert_eq!(expected, error.to_string());
    }

    #[test]
    fn invalid_argument_converts_into_error() {
        let error: Error = InvalidArgument::MissingRandomSource.into();
        assert_eq!(
            Error::InvalidArgument(InvalidArgument::MissingRandomSource),
            error
        );
    }
}
