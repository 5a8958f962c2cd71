//! Media file metadata and probing

mod probe;

pub use probe::{FfprobeProber, MediaProber};

use std::path::{Path, PathBuf};

use crate::frameset::{self, Frameset};

/// Everything the planner needs to know about one source file
#[derive(Debug, Clone)]
pub struct MediaFile {
    /// File name without the extension
    pub name: String,

    /// File name with the extension
    pub basename: String,

    /// Full path to the file
    pub path: PathBuf,

    /// Total duration in seconds
    pub duration: f64,

    /// Detected black frame spans, longest first
    pub framesets: Vec<Frameset>,
}

impl MediaFile {
    /// Assemble a media file record, sorting the framesets longest first
    pub fn new(path: PathBuf, duration: f64, framesets: Vec<Frameset>) -> Self {
        let basename = file_name_string(&path);
        let name = file_stem_string(&path);

        Self {
            name,
            basename,
            path,
            duration,
            framesets: frameset::sort_by_duration(framesets),
        }
    }
}

fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem_string(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_file_derives_names() {
        let media = MediaFile::new(PathBuf::from("/videos/Show.S01E01E02.mkv"), 3600.0, vec![]);

        assert_eq!(media.basename, "Show.S01E01E02.mkv");
        assert_eq!(media.name, "Show.S01E01E02");
        assert_eq!(media.duration, 3600.0);
    }

    #[test]
    fn test_media_file_sorts_framesets_longest_first() {
        let media = MediaFile::new(
            PathBuf::from("/videos/Show.S01E01E02.mkv"),
            3600.0,
            vec![Frameset::new(0.0, 1.0), Frameset::new(10.0, 20.0)],
        );

        assert_eq!(media.framesets[0].duration, 10.0);
        assert_eq!(media.framesets[1].duration, 1.0);
    }
}
