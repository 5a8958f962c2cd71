//! Cutpoint sequencing and split planning
//!
//! Turns matched black frame spans into a flat cutpoint sequence and
//! pairs consecutive cutpoints into the segments to trim.

use log::{debug, info};

use crate::error::{Result, SplitError};
use crate::estimate;
use crate::frameset::Frameset;
use crate::media::MediaFile;

/// One span of the source file to extract
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Position of the segment within the file, starting at zero
    pub index: usize,

    /// Trim start in seconds
    pub start: f64,

    /// Trim end in seconds
    pub end: f64,
}

/// The full set of segments to extract from one source file
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPlan {
    pub segments: Vec<Segment>,
}

/// Build the flat cutpoint sequence for a file
///
/// The sequence starts at zero, carries the midpoint of every matched
/// black frame span in match order, and ends at the total duration.
///
/// # Arguments
///
/// * `matches` - Black frame spans matched against boundary windows
/// * `total_duration` - Total duration of the file in seconds
///
/// # Returns
///
/// * The cutpoint timestamps in sequence order
pub fn cutpoints(matches: &[Frameset], total_duration: f64) -> Vec<f64> {
    let mut points = Vec::with_capacity(matches.len() + 2);

    points.push(0.0);
    for frameset in matches {
        points.push(frameset.midpoint());
    }
    points.push(total_duration);

    points
}

impl SplitPlan {
    /// Pair consecutive cutpoints into segments
    ///
    /// Cutpoints are consumed two at a time: the first pair bounds the
    /// first segment, the next pair the second, and so on. The sequence
    /// must be non-decreasing and even in length.
    pub fn from_cutpoints(points: &[f64]) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1] < pair[0] {
                return Err(SplitError::UnorderedCutpoints {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }

        let mut segments = Vec::with_capacity(points.len() / 2);
        for (index, pair) in points.chunks(2).enumerate() {
            if let [start, end] = *pair {
                segments.push(Segment { index, start, end });
            } else {
                return Err(SplitError::UnpairedCutpoint(pair[0]));
            }
        }

        Ok(Self { segments })
    }

    /// Plan the split for a probed media file
    ///
    /// Estimates the episode count from the filename, matches the
    /// detected black frame spans against the boundary windows, and
    /// pairs the resulting cutpoints into segments. A file with no
    /// matched spans yields a single segment covering the whole file.
    pub fn for_media(media: &MediaFile) -> Result<Self> {
        let episode_count = estimate::estimate_episode_count(&media.name)?;
        info!(
            "({}) Estimated episode count: {}",
            media.basename, episode_count
        );

        let spots = estimate::sweetspots(media.duration, episode_count);
        let matches = estimate::overlapping_framesets(&spots, &media.framesets);
        for frameset in &matches {
            info!("({}) Found a boundary candidate: {}", media.basename, frameset);
        }

        let points = cutpoints(&matches, media.duration);
        debug!("({}) Cutpoints: {:?}", media.basename, points);

        Self::from_cutpoints(&points)
    }
}
