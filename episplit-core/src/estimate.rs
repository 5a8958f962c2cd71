//! Episode boundary estimation
//!
//! Works out how many episodes a recording holds from its filename and
//! where their boundaries should roughly fall, then matches detected
//! black frame spans against those windows.

use log::debug;
use regex::Regex;

use crate::error::{Result, SplitError};
use crate::frameset::Frameset;

/// Width in seconds of the window searched around each expected boundary
pub const SWEETSPOT_FUZZ_SECS: f64 = 30.0;

/// Estimate the number of episodes in a file from its name
///
/// Filenames for concatenated recordings carry an `E<number>` marker per
/// episode, so the last such marker names the episode count. Matching is
/// case sensitive: a lowercase `e` does not count.
///
/// # Arguments
///
/// * `filename` - File name (with or without extension) to inspect
///
/// # Returns
///
/// * The number taken from the last `E<number>` marker
pub fn estimate_episode_count(filename: &str) -> Result<u32> {
    let marker_re = Regex::new(r"E([0-9]+)").unwrap();

    let value = marker_re
        .captures_iter(filename)
        .last()
        .map(|cap| cap[1].to_string())
        .ok_or_else(|| SplitError::EpisodeCountNotFound(filename.to_string()))?;

    match value.parse::<u32>() {
        Ok(count) => {
            debug!("Estimated episode count for {}: {}", filename, count);
            Ok(count)
        }
        Err(_) => Err(SplitError::EpisodeCountParse {
            value,
            filename: filename.to_string(),
        }),
    }
}

/// Compute the search windows around each expected episode boundary
///
/// A file holding `episode_count` episodes has `episode_count - 1`
/// internal boundaries. Each window is centered on an equal-parts
/// boundary and spans `SWEETSPOT_FUZZ_SECS` seconds.
///
/// # Arguments
///
/// * `duration` - Total duration of the file in seconds
/// * `episode_count` - Number of episodes the file holds
///
/// # Returns
///
/// * One window per internal boundary, in playback order
pub fn sweetspots(duration: f64, episode_count: u32) -> Vec<Frameset> {
    let equal_parts = duration / f64::from(episode_count);

    let mut spots = Vec::new();
    for i in 1..episode_count {
        let center = equal_parts * f64::from(i);
        let spot = Frameset::new(
            center - SWEETSPOT_FUZZ_SECS / 2.0,
            center + SWEETSPOT_FUZZ_SECS / 2.0,
        );
        debug!("Sweetspot {}: {}", i, spot);
        spots.push(spot);
    }

    spots
}

/// Match detected black frame spans against boundary windows
///
/// A span matches a window when either of its endpoints falls inside the
/// window, endpoints inclusive. A span that covers a window without an
/// endpoint inside it does not match. Matches are collected window by
/// window, so a span sitting in two windows appears twice.
///
/// # Arguments
///
/// * `sweetspots` - Boundary windows in playback order
/// * `black_frames` - Detected black frame spans
///
/// # Returns
///
/// * The matching spans, grouped by window
pub fn overlapping_framesets(sweetspots: &[Frameset], black_frames: &[Frameset]) -> Vec<Frameset> {
    let mut matches = Vec::new();

    for spot in sweetspots {
        for black in black_frames {
            if spot.contains(black.start) {
                debug!("Black span starting inside sweetspot {}: {}", spot, black);
                matches.push(*black);
            } else if spot.contains(black.end) {
                debug!("Black span ending inside sweetspot {}: {}", spot, black);
                matches.push(*black);
            }
        }
    }

    matches
}
