//! File discovery module for finding video files to process.
//!
//! Searches the provided directory and its subdirectories for .mkv
//! files (case-insensitive).

use crate::error::{Result, SplitError};

use log::debug;
use std::path::{Path, PathBuf};

/// Finds video files eligible for processing under the specified directory.
///
/// Scans the directory tree rooted at `input_dir` for .mkv files
/// (case-insensitive) and returns their paths in sorted order.
///
/// # Arguments
///
/// * `input_dir` - The directory to search for video files
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths to the discovered .mkv files
/// * `Err(SplitError::Io)` - If an error occurs during directory traversal
/// * `Err(SplitError::NoFilesFound)` - If no .mkv files are found
///
/// # Examples
///
/// ```rust,no_run
/// use episplit_core::find_processable_files;
/// use std::path::Path;
///
/// let input_dir = Path::new("/path/to/videos");
/// match find_processable_files(input_dir) {
///     Ok(files) => {
///         println!("Found {} video files:", files.len());
///         for file in files {
///             println!("  {}", file.display());
///         }
///     },
///     Err(e) => println!("Error finding video files: {}", e),
/// }
/// ```
pub fn find_processable_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_video_files(input_dir, &mut files)?;

    if files.is_empty() {
        return Err(SplitError::NoFilesFound);
    }

    files.sort();
    debug!("Discovered {} processable file(s)", files.len());
    Ok(files)
}

fn collect_video_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            collect_video_files(&path, files)?;
        } else if path.is_file() && is_processable(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_processable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| ext_str.eq_ignore_ascii_case("mkv"))
        .unwrap_or(false)
}
