//! Segment extraction with ffmpeg

use log::info;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::command;
use crate::cutpoints::Segment;
use crate::error::Result;

/// Writes one segment of a source file out as its own file
///
/// Implemented by the real ffmpeg wrapper and by test doubles.
pub trait VideoTrimmer {
    /// Extract the segment from the source file and return the output path
    fn trim(&self, source: &Path, segment: &Segment) -> Result<PathBuf>;
}

/// Trims segments by running ffmpeg
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegTrimmer;

impl FfmpegTrimmer {
    /// Check if ffmpeg is available on the system
    pub fn is_available() -> bool {
        command::is_tool_available("ffmpeg")
    }
}

impl VideoTrimmer for FfmpegTrimmer {
    fn trim(&self, source: &Path, segment: &Segment) -> Result<PathBuf> {
        let output_path = trimmed_output_path(source, segment.index);
        let filter = format!(
            "trim=start={:.3}:end={:.3},setpts=PTS-STARTPTS",
            segment.start, segment.end
        );

        info!(
            "Trimming {:?} segment {} ({:.3}s - {:.3}s) to {:?}",
            source, segment.index, segment.start, segment.end, output_path
        );

        let mut cmd = Command::new("ffmpeg");
        cmd.args(["-hide_banner", "-loglevel", "warning", "-y", "-i"])
            .arg(source)
            .args(["-vf", &filter])
            .arg(&output_path);

        command::run_command(&mut cmd)?;

        Ok(output_path)
    }
}

/// Output path for a trimmed segment, next to the source file
pub fn trimmed_output_path(source: &Path, index: usize) -> PathBuf {
    PathBuf::from(format!("{}-{}-out.mkv", source.display(), index))
}
