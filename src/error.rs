//! Error types for extraction jobs

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating or running an extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input path was empty or does not exist
    #[error("Please select a valid input file")]
    InvalidInput,

    /// Output path was left empty
    #[error("Please specify output file")]
    MissingOutput,

    /// Failed to read the input file
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file is not valid UTF-8 text
    #[error("Failed to decode {} as UTF-8 text", path.display())]
    Decode { path: PathBuf },

    /// Failed to write the output file
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// True for errors raised before any work starts
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput | Self::MissingOutput)
    }
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
