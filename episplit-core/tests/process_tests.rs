// episplit-core/tests/process_tests.rs
//
// Exercises the batch pipeline with in-memory stand-ins for ffprobe
// and ffmpeg.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use episplit_core::config::{ErrorPolicy, SplitConfig};
use episplit_core::cutpoints::Segment;
use episplit_core::error::SplitError;
use episplit_core::frameset::Frameset;
use episplit_core::media::{MediaFile, MediaProber};
use episplit_core::processing::{process_directory, process_files};
use episplit_core::trim::{VideoTrimmer, trimmed_output_path};

/// Prober that fabricates a 90 second recording with black spans at the
/// thirds, without touching the filesystem
struct StubProber;

impl MediaProber for StubProber {
    fn probe(&self, path: &Path) -> episplit_core::Result<MediaFile> {
        Ok(MediaFile::new(
            path.to_path_buf(),
            90.0,
            vec![Frameset::new(29.0, 31.0), Frameset::new(59.0, 61.0)],
        ))
    }
}

/// Prober that fails every probe
struct FailingProber;

impl MediaProber for FailingProber {
    fn probe(&self, path: &Path) -> episplit_core::Result<MediaFile> {
        Err(SplitError::MediaFile(format!("probe refused: {:?}", path)))
    }
}

/// Trimmer that records the requested cuts instead of running ffmpeg
#[derive(Default)]
struct RecordingTrimmer {
    calls: Mutex<Vec<(PathBuf, usize, f64, f64)>>,
}

impl VideoTrimmer for RecordingTrimmer {
    fn trim(&self, source: &Path, segment: &Segment) -> episplit_core::Result<PathBuf> {
        self.calls.lock().unwrap().push((
            source.to_path_buf(),
            segment.index,
            segment.start,
            segment.end,
        ));
        Ok(trimmed_output_path(source, segment.index))
    }
}

fn test_config(error_policy: ErrorPolicy, jobs: usize) -> SplitConfig {
    let mut config = SplitConfig::default();
    config.error_policy = error_policy;
    config.jobs = jobs;
    config
}

#[test]
fn test_continue_policy_records_failures_and_keeps_going() {
    let files = vec![
        PathBuf::from("/videos/A.S01E01E03.mkv"),
        PathBuf::from("/videos/No.Marker.Here.mkv"),
        PathBuf::from("/videos/B.S01E01E03.mkv"),
    ];
    let trimmer = RecordingTrimmer::default();

    let report = process_files(
        &test_config(ErrorPolicy::Continue, 1),
        &StubProber,
        &trimmer,
        &files,
    )
    .unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.total_segments(), 4);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, files[1]);
    assert!(matches!(
        report.failures[0].1,
        SplitError::EpisodeCountNotFound(_)
    ));
}

#[test]
fn test_continue_policy_trims_planned_segments() {
    let files = vec![PathBuf::from("/videos/A.S01E01E03.mkv")];
    let trimmer = RecordingTrimmer::default();

    let report = process_files(
        &test_config(ErrorPolicy::Continue, 1),
        &StubProber,
        &trimmer,
        &files,
    )
    .unwrap();

    assert_eq!(report.results.len(), 1);
    assert_eq!(
        report.results[0].outputs,
        vec![
            PathBuf::from("/videos/A.S01E01E03.mkv-0-out.mkv"),
            PathBuf::from("/videos/A.S01E01E03.mkv-1-out.mkv"),
        ]
    );

    let calls = trimmer.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            (files[0].clone(), 0, 0.0, 30.0),
            (files[0].clone(), 1, 60.0, 90.0),
        ]
    );
}

#[test]
fn test_abort_policy_stops_at_first_failure() {
    let files = vec![
        PathBuf::from("/videos/No.Marker.Here.mkv"),
        PathBuf::from("/videos/A.S01E01E03.mkv"),
    ];
    let trimmer = RecordingTrimmer::default();

    let result = process_files(
        &test_config(ErrorPolicy::Abort, 1),
        &StubProber,
        &trimmer,
        &files,
    );

    assert!(matches!(result, Err(SplitError::EpisodeCountNotFound(_))));
    assert!(trimmer.calls.lock().unwrap().is_empty());
}

#[test]
fn test_parallel_continue_processes_all_files() {
    let files = vec![
        PathBuf::from("/videos/A.S01E01E03.mkv"),
        PathBuf::from("/videos/No.Marker.Here.mkv"),
        PathBuf::from("/videos/B.S01E01E03.mkv"),
        PathBuf::from("/videos/C.S01E01E03.mkv"),
    ];
    let trimmer = RecordingTrimmer::default();

    let report = process_files(
        &test_config(ErrorPolicy::Continue, 2),
        &StubProber,
        &trimmer,
        &files,
    )
    .unwrap();

    assert_eq!(report.results.len(), 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, files[1]);
    assert_eq!(report.total_segments(), 6);
}

#[test]
fn test_parallel_abort_reports_the_failure() {
    let files = vec![
        PathBuf::from("/videos/A.S01E01E03.mkv"),
        PathBuf::from("/videos/No.Marker.Here.mkv"),
    ];
    let trimmer = RecordingTrimmer::default();

    let result = process_files(
        &test_config(ErrorPolicy::Abort, 2),
        &StubProber,
        &trimmer,
        &files,
    );

    assert!(matches!(result, Err(SplitError::EpisodeCountNotFound(_))));
}

#[test]
fn test_probe_failures_respect_the_policy() {
    let files = vec![PathBuf::from("/videos/A.S01E01E03.mkv")];
    let trimmer = RecordingTrimmer::default();

    let report = process_files(
        &test_config(ErrorPolicy::Continue, 1),
        &FailingProber,
        &trimmer,
        &files,
    )
    .unwrap();

    assert!(report.results.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0].1, SplitError::MediaFile(_)));
    assert!(trimmer.calls.lock().unwrap().is_empty());
}

#[test]
fn test_process_directory_discovers_then_splits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::File::create(dir.path().join("A.S01E01E03.mkv"))?;
    std::fs::File::create(dir.path().join("notes.txt"))?;

    let config = SplitConfig::new(dir.path().to_path_buf());
    let trimmer = RecordingTrimmer::default();

    let report = process_directory(&config, &StubProber, &trimmer)?;

    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].basename, "A.S01E01E03.mkv");
    assert_eq!(report.total_segments(), 2);

    dir.close()?;
    Ok(())
}
