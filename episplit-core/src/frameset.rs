//! Black frame interval bookkeeping
//!
//! A `Frameset` is a span of near-black video with a start, an end and a
//! derived duration. The reducer turns the raw marker stream reported by
//! ffprobe's blackdetect filter into framesets, dropping spans too short
//! to be episode boundaries.

use log::debug;
use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, SplitError};

/// A span of near-black video, in seconds from the start of the file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frameset {
    /// Start of the span in seconds
    pub start: f64,
    /// End of the span in seconds
    pub end: f64,
    /// Length of the span in seconds, always `end - start`
    pub duration: f64,
}

impl Frameset {
    /// Create a frameset from its endpoints, deriving the duration
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            duration: end - start,
        }
    }

    /// Timestamp halfway through the span
    pub fn midpoint(&self) -> f64 {
        self.start + self.duration / 2.0
    }

    /// Whether a timestamp falls inside the span, endpoints included
    pub fn contains(&self, timestamp: f64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}

impl fmt::Display for Frameset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3}s - {:.3}s ({:.3}s)",
            self.start, self.end, self.duration
        )
    }
}

/// Pair up a raw marker stream into framesets, keeping the long ones
///
/// Markers arrive as a flat list of timestamps alternating between the
/// start and the end of a detected black span. Spans lasting
/// `min_duration` seconds or less are discarded; a `min_duration` of
/// zero disables the filter entirely.
///
/// # Arguments
///
/// * `markers` - Alternating start/end timestamps as reported by ffprobe
/// * `min_duration` - Duration in seconds a span must exceed to be kept
///
/// # Returns
///
/// * The framesets that passed the duration filter, in marker order
pub fn reduce_framesets<S: AsRef<str>>(markers: &[S], min_duration: f64) -> Result<Vec<Frameset>> {
    let mut framesets = Vec::with_capacity(markers.len() / 2);

    for pair in markers.chunks(2) {
        if let [start, end] = pair {
            let start = parse_marker(start.as_ref())?;
            let end = parse_marker(end.as_ref())?;

            if end < start {
                return Err(SplitError::InvertedMarkers { start, end });
            }

            let frameset = Frameset::new(start, end);
            if min_duration == 0.0 || frameset.duration > min_duration {
                framesets.push(frameset);
            } else {
                debug!("Dropping short black span: {}", frameset);
            }
        } else {
            return Err(SplitError::UnpairedMarker(pair[0].as_ref().to_string()));
        }
    }

    Ok(framesets)
}

fn parse_marker(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SplitError::MarkerParse(value.to_string()))
}

/// Sort framesets by descending duration, longest first
pub fn sort_by_duration(mut framesets: Vec<Frameset>) -> Vec<Frameset> {
    framesets.sort_by(|a, b| b.duration.partial_cmp(&a.duration).unwrap_or(Ordering::Equal));
    framesets
}
