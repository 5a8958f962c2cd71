//! Batch processing pipeline
//!
//! Drives the probe, plan and trim stages for one file or a whole
//! directory, sequentially or across a rayon thread pool.

use log::{error, info};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::{ErrorPolicy, SplitConfig};
use crate::cutpoints::SplitPlan;
use crate::discovery;
use crate::error::{Result, SplitError};
use crate::media::MediaProber;
use crate::trim::VideoTrimmer;

/// Outcome of splitting one source file
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// Path of the source file
    pub path: PathBuf,

    /// File name of the source file
    pub basename: String,

    /// Paths of the extracted segment files, in segment order
    pub outputs: Vec<PathBuf>,
}

/// Summary of one batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files that were split, in completion order
    pub results: Vec<SplitResult>,

    /// Files that could not be split, with the error for each
    pub failures: Vec<(PathBuf, SplitError)>,
}

impl BatchReport {
    /// Total number of segment files written
    pub fn total_segments(&self) -> usize {
        self.results.iter().map(|result| result.outputs.len()).sum()
    }
}

/// Discover and split every processable file under the configured directory
///
/// # Arguments
///
/// * `config` - Batch configuration, including the directory to scan
/// * `prober` - Source of media metadata, normally the ffprobe wrapper
/// * `trimmer` - Segment writer, normally the ffmpeg wrapper
///
/// # Returns
///
/// * A report of the files split and the files that failed
pub fn process_directory<P, T>(config: &SplitConfig, prober: &P, trimmer: &T) -> Result<BatchReport>
where
    P: MediaProber + Sync,
    T: VideoTrimmer + Sync,
{
    info!("Scanning directory: {:?}", config.input_dir);

    let files = discovery::find_processable_files(&config.input_dir)?;
    process_files(config, prober, trimmer, &files)
}

/// Split the given files according to the configured error policy
///
/// With `ErrorPolicy::Continue` a failing file is logged and recorded in
/// the report while the rest of the batch keeps going. With
/// `ErrorPolicy::Abort` the first failure stops the batch and is
/// returned as the error.
pub fn process_files<P, T>(
    config: &SplitConfig,
    prober: &P,
    trimmer: &T,
    files: &[PathBuf],
) -> Result<BatchReport>
where
    P: MediaProber + Sync,
    T: VideoTrimmer + Sync,
{
    info!(
        "Processing {} file(s) with {} job(s)",
        files.len(),
        config.jobs
    );

    let report = if config.jobs > 1 {
        process_parallel(config, prober, trimmer, files)?
    } else {
        process_sequential(config, prober, trimmer, files)?
    };

    info!(
        "Processed {} file(s) into {} segment(s), {} failure(s)",
        report.results.len(),
        report.total_segments(),
        report.failures.len()
    );

    Ok(report)
}

fn process_sequential<P, T>(
    config: &SplitConfig,
    prober: &P,
    trimmer: &T,
    files: &[PathBuf],
) -> Result<BatchReport>
where
    P: MediaProber,
    T: VideoTrimmer,
{
    let mut report = BatchReport::default();

    for path in files {
        match split_file(prober, trimmer, path) {
            Ok(result) => report.results.push(result),
            Err(e) => match config.error_policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Continue => {
                    error!("Failed to split {:?}: {}", path, e);
                    report.failures.push((path.clone(), e));
                }
            },
        }
    }

    Ok(report)
}

fn process_parallel<P, T>(
    config: &SplitConfig,
    prober: &P,
    trimmer: &T,
    files: &[PathBuf],
) -> Result<BatchReport>
where
    P: MediaProber + Sync,
    T: VideoTrimmer + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| SplitError::Other(format!("Failed to initialize thread pool: {}", e)))?;

    match config.error_policy {
        ErrorPolicy::Abort => {
            let results = Mutex::new(Vec::with_capacity(files.len()));

            pool.install(|| {
                files.par_iter().try_for_each(|path| -> Result<()> {
                    let result = split_file(prober, trimmer, path)?;
                    results.lock().unwrap().push(result);
                    Ok(())
                })
            })?;

            let results = results
                .into_inner()
                .map_err(|e| SplitError::Other(format!("Mutex error: {}", e)))?;

            Ok(BatchReport {
                results,
                failures: Vec::new(),
            })
        }
        ErrorPolicy::Continue => {
            let outcomes: Vec<(PathBuf, Result<SplitResult>)> = pool.install(|| {
                files
                    .par_iter()
                    .map(|path| (path.clone(), split_file(prober, trimmer, path)))
                    .collect()
            });

            let mut report = BatchReport::default();
            for (path, outcome) in outcomes {
                match outcome {
                    Ok(result) => report.results.push(result),
                    Err(e) => {
                        error!("Failed to split {:?}: {}", path, e);
                        report.failures.push((path, e));
                    }
                }
            }

            Ok(report)
        }
    }
}

/// Probe one file, plan its cutpoints and trim every planned segment
fn split_file<P, T>(prober: &P, trimmer: &T, path: &Path) -> Result<SplitResult>
where
    P: MediaProber,
    T: VideoTrimmer,
{
    info!("Scanning file: {:?}", path);

    let media = prober.probe(path)?;
    let plan = SplitPlan::for_media(&media)?;

    let mut outputs = Vec::with_capacity(plan.segments.len());
    for segment in &plan.segments {
        info!(
            "({}) Cutpoint {}: {:.3}s - {:.3}s",
            media.basename, segment.index, segment.start, segment.end
        );
        outputs.push(trimmer.trim(&media.path, segment)?);
    }

    Ok(SplitResult {
        path: media.path.clone(),
        basename: media.basename,
        outputs,
    })
}
