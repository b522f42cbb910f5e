//! Quiz configuration.
//!
//! Load quiz settings from TOML files:
//!
//! ```
//! use color_quiz::QuizConfig;
//!
//! let config = QuizConfig::from_toml_str(r#"
//!     question_count = 5
//!     random_seed = 42
//!
//!     [data]
//!     colors = "data/colors.json"
//! "#).unwrap();
//!
//! assert_eq!(config.question_count, 5);
//! assert_eq!(config.gradient_question_count, 10);
//! assert!(!config.unlock_gating);
//! ```

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::AccessPolicy;
use crate::quiz::DEFAULT_QUESTION_COUNT;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn default_question_count() -> usize { DEFAULT_QUESTION_COUNT }

/// Main quiz configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QuizConfig {
    /// Questions per multiple choice quiz.
    #[serde(default = "default_question_count")]
    pub question_count: usize,

    /// Questions per gradient ordering quiz.
    #[serde(default = "default_question_count")]
    pub gradient_question_count: usize,

    /// Random seed for reproducible quizzes.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Require locked levels to be unlocked before they start.
    #[serde(default)]
    pub unlock_gating: bool,

    /// Dataset locations.
    #[serde(default)]
    pub data: DataConfig,
}

/// Paths of the JSON datasets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataConfig {
    /// Colors of the multiple choice quizzes.
    #[serde(default)]
    pub colors: Option<PathBuf>,

    /// Question bank of the gradient quiz.
    #[serde(default)]
    pub gradient: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            gradient_question_count: DEFAULT_QUESTION_COUNT,
            random_seed: None,
            unlock_gating: false,
            data: DataConfig::default(),
        }
    }
}

impl QuizConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or
    /// fails [`QuizConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both quizzes ask at least one question.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.question_count == 0 {
            return Err(ConfigError::Invalid("question_count must be positive".into()));
        }
        if self.gradient_question_count == 0 {
            return Err(ConfigError::Invalid(
                "gradient_question_count must be positive".into()));
        }
        Ok(())
    }

    /// Sets the number of multiple choice questions.
    pub fn with_question_count(mut self, n: usize) -> Self {
        self.question_count = n;
        self
    }

    /// Sets the number of gradient questions.
    pub fn with_gradient_question_count(mut self, n: usize) -> Self {
        self.gradient_question_count = n;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Turns the unlock gate on or off.
    pub fn with_unlock_gating(mut self, gating: bool) -> Self {
        self.unlock_gating = gating;
        self
    }

    /// Returns a generator seeded with `random_seed`, or from the
    /// operating system when no seed is configured.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    pub fn access_policy(&self) -> AccessPolicy {
        AccessPolicy::new(self.unlock_gating)
    }
}

#[cfg(test)]
mod tests;
