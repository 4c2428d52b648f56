use std::fmt;
use std::str::FromStr;

/// Strategy used to pick words when duplicates are not allowed.
///
/// Both strategies select uniformly without replacement. They differ in how many values they pull
/// from the [crate::RandomSource] and therefore in the order of the words they return for a given
/// random stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Draw a word at random and keep it only if it has not been picked yet.
    ///
    /// The expected number of draws grows like the coupon collector's problem as the request
    /// approaches the pool size, which is fine for the small pools this is meant for.
    #[default]
    Rejection,

    /// Partial Fisher-Yates shuffle over the pool indices. Uses exactly one draw per word.
    PartialShuffle,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Rejection => f.write_str("rejection"),
            Selection::PartialShuffle => f.write_str("shuffle"),
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rejection" => Ok(Selection::Rejection),
            "shuffle" | "partial-shuffle" => Ok(Selection::PartialShuffle),
            other => Err(format!("unknown selection strategy '{}'", other)),
        }
    }
}

/// Immutable configuration object for [crate::WordSampler].
///
/// [Config] instances can be created using a [ConfigBuilder].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    selection: Selection,
}

impl Config {
    /// Returns the strategy used for duplicate-free draws.
    pub fn selection(&self) -> Selection {
        self.selection
    }
}

/// Used to create a [Config] struct for creating [crate::WordSampler] instances.
///
/// # Examples
///
/// Switch duplicate-free draws to a partial shuffle.
/// ```
/// # use word_sampler::{ConfigBuilder, Selection};
/// # fn main() {
///     let config = ConfigBuilder::new().selection(Selection::PartialShuffle).build();
///     assert_eq!(Selection::PartialShuffle, config.selection());
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    selection: Option<Selection>,
}

impl ConfigBuilder {
    /// Create a new instance of the [ConfigBuilder] with default values.
    pub fn new() -> Self {
        Self { selection: None }
    }

    /// Set the strategy used when duplicates are not allowed.
    ///
    /// By default, the sampler uses [Selection::Rejection].
    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Create a new instance of [Config] based on the [ConfigBuilder] configuration.
    pub fn build(self) -> Config {
        Config {
            selection: self.selection.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn unconfigured_builder_uses_rejection_sampling() {
        let config = ConfigBuilder::new().build();

        assert_eq!(Selection::Rejection, config.selection());
        assert_eq!(Config::default(), config);
    }

    #[test]
    fn builder_applies_selection() {
        let config = ConfigBuilder::new()
            .selection(Selection::PartialShuffle)
            .build();

        assert_eq!(Selection::PartialShuffle, config.selection());
    }

    #[test_case("rejection", Ok(Selection::Rejection))]
    #[test_case(" Rejection ", Ok(Selection::Rejection); "whitespace and case are ignored")]
    #[test_case("shuffle", Ok(Selection::PartialShuffle))]
    #[test_case("partial-shuffle", Ok(Selection::PartialShuffle))]
    #[test_case("fisher", Err("unknown selection strategy 'fisher'".to_string()))]
    fn selection_can_be_parsed(input: &str, expected: Result<Selection, String>) {
        assert_eq!(expected, input.parse::<Selection>());
    }

    #[test_case(Selection::Rejection)]
    #[test_case(Selection::PartialShuffle)]
    fn selection_display_parses_back(selection: Selection) {
        assert_eq!(Ok(selection), selection.to_string().parse::<Selection>());
    }
}
