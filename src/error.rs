use std::error::Error as _;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("Source directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ImageProcessing(#[from] image::ImageError),

    #[error(transparent)]
    Walkdir(#[from] walkdir::Error),

    #[error("Failed to clean directory {path:?}")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path:?}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scale factor: {0}. Must be a finite number greater than 0")]
    InvalidScale(f64),

    #[error("Invalid output dimensions: {0}x{1}. Each side must be between 1 and {2}")]
    InvalidDimensions(u32, u32, u32),

    #[error("Invalid file name: {0}")]
    InvalidFileName(PathBuf),

    #[error("Invalid worker count: {0}. Must be at least 1")]
    InvalidWorkerCount(usize),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("Failed to process {path:?}")]
    Task {
        path: PathBuf,
        #[source]
        source: Box<ResizeError>,
    },

    #[error("Operation cancelled")]
    Cancelled,
}

impl ResizeError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ResizeError::Cancelled)
    }

    /// Attaches the source file to a per-file failure. Cancellation passes
    /// through untouched so callers can still match on it.
    pub fn for_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ResizeError::Cancelled => ResizeError::Cancelled,
            other => ResizeError::Task {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// The message followed by every underlying cause, `: `-separated.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut cause = self.source();
        while let Some(inner) = cause {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            cause = inner.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, ResizeError>;
