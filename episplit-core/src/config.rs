use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default minimum duration in seconds a black span must exceed to count
pub const DEFAULT_MIN_BLACK_DURATION: f64 = 1.0;

/// How the batch runner reacts when one file fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Log the failure, skip the file and keep going
    #[default]
    Continue,

    /// Stop the whole batch at the first failing file
    Abort,
}

/// Configuration for episplit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Directory searched for files to split
    pub input_dir: PathBuf,

    /// Minimum duration in seconds a black span must exceed to count
    #[serde(default = "default_min_black_duration")]
    pub min_black_duration: f64,

    /// What to do when splitting one file fails
    #[serde(default)]
    pub error_policy: ErrorPolicy,

    /// Number of files to process in parallel
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

fn default_min_black_duration() -> f64 {
    DEFAULT_MIN_BLACK_DURATION
}

fn default_jobs() -> usize {
    1
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::new(),
            min_black_duration: default_min_black_duration(),
            error_policy: ErrorPolicy::default(),
            jobs: default_jobs(),
            verbose: false,
        }
    }
}

impl SplitConfig {
    /// Create a configuration for the given input directory with defaults
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.input_dir.is_dir() {
            return Err(crate::error::SplitError::Config(format!(
                "Input directory not found: {:?}",
                self.input_dir
            )));
        }

        if !self.min_black_duration.is_finite() || self.min_black_duration < 0.0 {
            return Err(crate::error::SplitError::Config(format!(
                "Minimum black duration must be zero or positive, got {}",
                self.min_black_duration
            )));
        }

        if self.jobs == 0 {
            return Err(crate::error::SplitError::Config(
                "Parallel jobs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
