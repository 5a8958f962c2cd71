//! Core library for splitting concatenated TV episode recordings using
//! ffmpeg and ffprobe.
//!
//! This crate estimates where the episode boundaries of a multi-episode
//! recording fall by matching detected black frame spans against the
//! positions the filename's episode count predicts, then trims the file
//! into one output per planned segment.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use episplit_core::{SplitConfig, process_directory};
//! use episplit_core::media::FfprobeProber;
//! use episplit_core::trim::FfmpegTrimmer;
//! use std::path::PathBuf;
//!
//! let config = SplitConfig::new(PathBuf::from("/path/to/recordings"));
//! config.validate().unwrap();
//!
//! let prober = FfprobeProber::new(config.min_black_duration);
//! let report = process_directory(&config, &prober, &FfmpegTrimmer).unwrap();
//! println!(
//!     "Split {} file(s) into {} segment(s)",
//!     report.results.len(),
//!     report.total_segments()
//! );
//! ```

pub mod command;
pub mod config;
pub mod cutpoints;
pub mod discovery;
pub mod error;
pub mod estimate;
pub mod frameset;
pub mod logging;
pub mod media;
pub mod processing;
pub mod trim;

// Re-exports for public API
pub use config::{DEFAULT_MIN_BLACK_DURATION, ErrorPolicy, SplitConfig};
pub use cutpoints::{Segment, SplitPlan, cutpoints};
pub use discovery::find_processable_files;
pub use error::{Result, SplitError};
pub use estimate::{
    SWEETSPOT_FUZZ_SECS, estimate_episode_count, overlapping_framesets, sweetspots,
};
pub use frameset::{Frameset, reduce_framesets, sort_by_duration};
pub use media::{FfprobeProber, MediaFile, MediaProber};
pub use processing::{BatchReport, SplitResult, process_directory, process_files};
pub use trim::{FfmpegTrimmer, VideoTrimmer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
