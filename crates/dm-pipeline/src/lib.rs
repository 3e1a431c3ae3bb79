//! dm-pipeline: file-system layer around the converter.
//!
//! Reads documents from disk, repairs their encoding, strips null bytes,
//! converts them and writes the markdown back out. Directory mode runs
//! files on a bounded worker pool; one file failing never stops the rest.

pub mod batch;
pub mod config;
pub mod decode;
pub mod discover;
pub mod file;

pub use batch::{process_directory, BatchReport, FileFailure};
pub use config::PipelineConfig;
pub use file::{process_file, FileReport};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("read failed: {path}: {message}")]
    Read { path: String, message: String },
    #[error("write failed: {path}: {message}")]
    Write { path: String, message: String },
    #[error("output {output} is already produced from {first}")]
    OutputCollision { output: String, first: String },
    #[error("config error: {0}")]
    Config(String),
    #[error("worker error: {0}")]
    Worker(String),
}
