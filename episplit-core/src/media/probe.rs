//! ffprobe wrappers for duration lookup and black frame detection

use log::{debug, info};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::process::Command;

use super::MediaFile;
use crate::command;
use crate::error::{Result, SplitError};
use crate::frameset;

/// Source of media metadata for the processing pipeline
///
/// Implemented by the real ffprobe wrapper and by test doubles.
pub trait MediaProber {
    /// Inspect a file and return its metadata and black frame spans
    fn probe(&self, path: &Path) -> Result<MediaFile>;
}

/// Probes media files by running ffprobe
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    min_black_duration: f64,
}

impl FfprobeProber {
    /// Create a prober keeping black spans longer than `min_black_duration` seconds
    pub fn new(min_black_duration: f64) -> Self {
        Self { min_black_duration }
    }

    /// Check if ffprobe is available on the system
    pub fn is_available() -> bool {
        command::is_tool_available("ffprobe")
    }

    /// Read the container duration in seconds
    fn file_duration(&self, path: &Path) -> Result<f64> {
        let mut cmd = Command::new("ffprobe");
        cmd.args(["-v", "quiet", "-print_format", "json", "-show_format"])
            .arg(path);

        let output = command::run_command(&mut cmd)?;

        let json: Value = serde_json::from_slice(&output.stdout).map_err(|e| {
            SplitError::ExternalTool(format!("Failed to parse ffprobe output: {}", e))
        })?;

        json["format"]["duration"]
            .as_str()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| SplitError::MediaFile(format!("No duration reported for {:?}", path)))
    }

    /// Run the blackdetect filter and return the raw marker stream
    fn black_frame_markers(&self, path: &Path) -> Result<Vec<String>> {
        let graph = format!("movie={},blackdetect[out0]", path.display());

        let mut cmd = Command::new("ffprobe");
        cmd.args([
            "-f",
            "lavfi",
            "-i",
            &graph,
            "-show_entries",
            "tags=lavfi.black_start,lavfi.black_end",
            "-of",
            "default=nw=1",
            "-v",
            "quiet",
        ]);

        let output = command::run_command(&mut cmd)?;
        let output_str = String::from_utf8_lossy(&output.stdout);

        Ok(extract_markers(&output_str))
    }
}

impl MediaProber for FfprobeProber {
    fn probe(&self, path: &Path) -> Result<MediaFile> {
        if !path.exists() {
            return Err(SplitError::MediaFile(format!("File not found: {:?}", path)));
        }

        let duration = self.file_duration(path)?;
        debug!("Duration of {:?}: {:.3}s", path, duration);

        let markers = self.black_frame_markers(path)?;
        let framesets = frameset::reduce_framesets(&markers, self.min_black_duration)?;
        info!(
            "Found {} black frame span(s) in {:?}",
            framesets.len(),
            path
        );

        Ok(MediaFile::new(path.to_path_buf(), duration, framesets))
    }
}

/// Pull black frame markers out of ffprobe's tag output
///
/// Keeps only `TAG:lavfi.black_start` and `TAG:lavfi.black_end` lines,
/// drops repeated lines while preserving first-seen order, and returns
/// the bare timestamp values.
fn extract_markers(output: &str) -> Vec<String> {
    let tag_re = Regex::new(r"^TAG:lavfi\.black_(?:start|end)=(.*)$").unwrap();

    let mut seen = HashSet::new();
    let mut markers = Vec::new();

    for line in output.lines() {
        let line = line.trim_end();
        if let Some(cap) = tag_re.captures(line) {
            if seen.insert(line.to_string()) {
                markers.push(cap[1].to_string());
            }
        }
    }

    markers
}
