use clap::{Parser, Subcommand};
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process;

use episplit_core::config::{ErrorPolicy, SplitConfig};
use episplit_core::cutpoints::SplitPlan;
use episplit_core::error::{Result, SplitError};
use episplit_core::media::{FfprobeProber, MediaProber};
use episplit_core::trim::FfmpegTrimmer;
use episplit_core::{estimate, processing};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split every multi-episode recording found under a directory
    Split {
        /// Directory to search for recordings
        #[arg(short, long)]
        input: PathBuf,

        /// Minimum duration in seconds a black span must exceed to count
        #[arg(long, default_value_t = episplit_core::DEFAULT_MIN_BLACK_DURATION)]
        min_black_duration: f64,

        /// Number of files to process in parallel
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,

        /// Stop the whole batch at the first failing file
        #[arg(long)]
        abort_on_error: bool,
    },

    /// Show the split plan for a single file without writing anything
    Inspect {
        /// Input file path
        #[arg(short, long)]
        input: PathBuf,

        /// Minimum duration in seconds a black span must exceed to count
        #[arg(long, default_value_t = episplit_core::DEFAULT_MIN_BLACK_DURATION)]
        min_black_duration: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    episplit_core::logging::init(cli.verbose);

    info!("episplit v{} starting up", episplit_core::VERSION);

    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Split {
            input,
            min_black_duration,
            jobs,
            abort_on_error,
        } => {
            // Configure the batch run
            let mut config = SplitConfig::new(input);
            config.min_black_duration = min_black_duration;
            config.jobs = jobs;
            config.error_policy = if abort_on_error {
                ErrorPolicy::Abort
            } else {
                ErrorPolicy::Continue
            };
            config.verbose = cli.verbose;

            debug!("Configuration: {:?}", config);

            config.validate()?;
            check_tools()?;

            split(config)
        }
        Commands::Inspect {
            input,
            min_black_duration,
        } => {
            if !FfprobeProber::is_available() {
                return Err(SplitError::DependencyNotFound("ffprobe".to_string()));
            }

            inspect(&input, min_black_duration)
        }
    }
}

fn check_tools() -> Result<()> {
    if !FfprobeProber::is_available() {
        return Err(SplitError::DependencyNotFound("ffprobe".to_string()));
    }

    if !FfmpegTrimmer::is_available() {
        return Err(SplitError::DependencyNotFound("ffmpeg".to_string()));
    }

    Ok(())
}

fn split(config: SplitConfig) -> Result<()> {
    let prober = FfprobeProber::new(config.min_black_duration);
    let report = processing::process_directory(&config, &prober, &FfmpegTrimmer)?;

    println!(
        "Split {} file(s) into {} segment(s)",
        report.results.len(),
        report.total_segments()
    );
    for result in &report.results {
        println!("  {}: {} segment(s)", result.basename, result.outputs.len());
    }

    if !report.failures.is_empty() {
        println!("{} file(s) failed:", report.failures.len());
        for (path, e) in &report.failures {
            println!("  {}: {}", path.display(), e);
        }
        process::exit(1);
    }

    Ok(())
}

fn inspect(input: &Path, min_black_duration: f64) -> Result<()> {
    let prober = FfprobeProber::new(min_black_duration);
    let media = prober.probe(input)?;

    println!("File: {}", media.basename);
    println!("Duration: {:.3}s", media.duration);

    println!("\nBlack frame spans ({}):", media.framesets.len());
    for frameset in &media.framesets {
        println!("  {}", frameset);
    }

    let episode_count = estimate::estimate_episode_count(&media.name)?;
    println!("\nEstimated episode count: {}", episode_count);

    let spots = estimate::sweetspots(media.duration, episode_count);
    println!("\nBoundary windows ({}):", spots.len());
    for spot in &spots {
        println!("  {}", spot);
    }

    let plan = SplitPlan::for_media(&media)?;
    println!("\nPlanned segments ({}):", plan.segments.len());
    for segment in &plan.segments {
        println!(
            "  {}: {:.3}s - {:.3}s",
            segment.index, segment.start, segment.end
        );
    }

    Ok(())
}
