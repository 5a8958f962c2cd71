use thiserror::Error;

/// Custom error types for episplit
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Media file error: {0}")]
    MediaFile(String),

    #[error("External tool error: {0}")]
    ExternalTool(String),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("No episode count found in filename: {0}")]
    EpisodeCountNotFound(String),

    #[error("Episode count {value:?} in filename {filename} is not a usable integer")]
    EpisodeCountParse { value: String, filename: String },

    #[error("Black frame marker {0:?} is not a valid timestamp")]
    MarkerParse(String),

    #[error("Black frame marker {0:?} has no matching end marker")]
    UnpairedMarker(String),

    #[error("Black frame interval ends at {end} before it starts at {start}")]
    InvertedMarkers { start: f64, end: f64 },

    #[error("Cutpoint at {0} has no end point to pair with")]
    UnpairedCutpoint(f64),

    #[error("Cutpoints out of order: {prev} followed by {next}")]
    UnorderedCutpoints { prev: f64, next: f64 },

    #[error("No processable video files found")]
    NoFilesFound,

    #[error("Unexpected error: {0}")]
    Other(String),
}

/// Result type for episplit operations
pub type Result<T> = std::result::Result<T, SplitError>;
