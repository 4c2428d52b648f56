use std::collections::HashMap;
use std::env;

use thiserror::Error;
use word_sampler::{Config, ConfigBuilder, Selection, WordPool};

const DEFAULT_APP_NAME: &str = "passphrase";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
const DEFAULT_WORDS: [&str; 4] = ["abc", "dec", "cbc", "g"];
const DEFAULT_WORD_COUNT: i64 = 6;
const DEFAULT_MAX_WORDS: i64 = 64;

const APP_NAME_VAR: &str = "PASSPHRASE_APP_NAME";
const BIND_VAR: &str = "PASSPHRASE_BIND";
const WORDS_VAR: &str = "PASSPHRASE_WORDS";
const WORD_COUNT_VAR: &str = "PASSPHRASE_WORD_COUNT";
const ALLOW_DUPLICATES_VAR: &str = "PASSPHRASE_ALLOW_DUPLICATES";
const SELECTION_VAR: &str = "PASSPHRASE_SELECTION";
const MAX_WORDS_VAR: &str = "PASSPHRASE_MAX_WORDS";

/// Error type used when the environment holds an unusable setting.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("word list is unusable: {0}")]
    Words(#[from] word_sampler::Error),
}

/// Server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub app_name: String,
    pub bind_address: String,
    pub pool: WordPool,
    pub word_count: i64,
    /// Largest `count` a single request may ask for.
    pub max_words: i64,
    pub allow_duplicates: bool,
    pub config: Config,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_vars(env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, SettingsError> {
        let app_name = vars
            .get(APP_NAME_VAR)
            .cloned()
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let bind_address = vars
            .get(BIND_VAR)
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let pool = match vars.get(WORDS_VAR) {
            Some(words) => WordPool::new(
                words
                    .split(',')
                    .map(str::trim)
                    .filter(|word| !word.is_empty()),
            )?,
            None => WordPool::new(DEFAULT_WORDS)?,
        };

        let max_words = match vars.get(MAX_WORDS_VAR) {
            Some(value) => {
                let max_words: i64 = value
                    .trim()
                    .parse()
                    .map_err(|e| invalid(MAX_WORDS_VAR, value, e))?;
                if max_words < 1 {
                    return Err(invalid(MAX_WORDS_VAR, value, "must be at least 1"));
                }
                max_words
            }
            None => DEFAULT_MAX_WORDS,
        };

        let allow_duplicates = match vars.get(ALLOW_DUPLICATES_VAR) {
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|e| invalid(ALLOW_DUPLICATES_VAR, value, e))?,
            None => true,
        };

        let word_count = match vars.get(WORD_COUNT_VAR) {
            Some(value) => {
                let word_count: i64 = value
                    .trim()
                    .parse()
                    .map_err(|e| invalid(WORD_COUNT_VAR, value, e))?;
                if word_count < 0 {
                    return Err(invalid(WORD_COUNT_VAR, value, "must not be negative"));
                }
                word_count
            }
            None => DEFAULT_WORD_COUNT,
        };

        if word_count > max_words {
            return Err(invalid(
                WORD_COUNT_VAR,
                &word_count.to_string(),
                format!("exceeds the maximum of {} words", max_words),
            ));
        }

        if !allow_duplicates && word_count as usize > pool.len() {
            return Err(invalid(
                WORD_COUNT_VAR,
                &word_count.to_string(),
                format!("exceeds the {} distinct words in the pool", pool.len()),
            ));
        }

        let selection = match vars.get(SELECTION_VAR) {
            Some(value) => value
                .parse::<Selection>()
                .map_err(|e| invalid(SELECTION_VAR, value, e))?,
            None => Selection::default(),
        };

        Ok(Settings {
            app_name,
            bind_address,
            pool,
            word_count,
            max_words,
            allow_duplicates,
            config: ConfigBuilder::new().selection(selection).build(),
        })
    }
}

fn invalid(name: &'static str, value: &str, reason: impl ToString) -> SettingsError {
    SettingsError::InvalidValue {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
