//! Directory mode — convert every discovered document on a bounded pool.

use crate::config::PipelineConfig;
use crate::discover::find_documents;
use crate::file::{output_path_for, process_file, FileReport};
use crate::PipelineError;
use chrono::{DateTime, Utc};
use dm_convert::Converter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub succeeded: Vec<FileReport>,
    pub failed: Vec<FileFailure>,
    /// Files skipped because they already carry a cleaned marker.
    pub skipped: usize,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn processed(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Convert every document under `root`.
///
/// Each file is converted independently in `spawn_blocking`, at most
/// `config.effective_jobs()` at a time. Per-file errors are logged and
/// collected into the report; only a missing root fails the whole call.
///
/// Inputs that differ only by extension (`plan.md`, `plan.txt`) map to the
/// same output. The first in path order is converted; later ones are
/// reported as failures instead of overwriting it.
pub async fn process_directory(
    root: &Path,
    output_dir: Option<&Path>,
    config: &PipelineConfig,
) -> Result<BatchReport, PipelineError> {
    let started_at = Utc::now();

    let discovery = find_documents(root, &config.extensions, output_dir)?;
    tracing::info!(
        root = %root.display(),
        files = discovery.files.len(),
        skipped = discovery.skipped.len(),
        "discovered documents"
    );

    let jobs = config.effective_jobs();
    let semaphore = Arc::new(Semaphore::new(jobs));
    let converter = Arc::new(Converter::new(config.converter.clone()));
    let mut handles = Vec::with_capacity(discovery.files.len());
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut failed = Vec::new();

    for input in discovery.files {
        let output = output_path_for(&input, root, output_dir);
        if let Some(first) = claimed.get(&output) {
            let err = PipelineError::OutputCollision {
                output: output.display().to_string(),
                first: first.display().to_string(),
            };
            tracing::warn!(path = %input.display(), "{err}");
            failed.push(FileFailure {
                input,
                error: err.to_string(),
            });
            continue;
        }
        claimed.insert(output.clone(), input.clone());

        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .map_err(|e| PipelineError::Worker(e.to_string()))?;
        let converter = Arc::clone(&converter);
        let task_input = input.clone();

        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            process_file(&task_input, &output, &converter)
        });
        handles.push((input, handle));
    }

    let mut succeeded = Vec::new();

    for (input, handle) in handles {
        match handle.await {
            Ok(Ok(report)) => succeeded.push(report),
            Ok(Err(e)) => {
                tracing::warn!(path = %input.display(), "conversion failed: {e}");
                failed.push(FileFailure {
                    input,
                    error: e.to_string(),
                });
            }
            Err(e) => {
                tracing::error!(path = %input.display(), "worker join error: {e}");
                failed.push(FileFailure {
                    input,
                    error: PipelineError::Worker(e.to_string()).to_string(),
                });
            }
        }
    }

    let report = BatchReport {
        started_at,
        completed_at: Utc::now(),
        succeeded,
        failed,
        skipped: discovery.skipped.len(),
    };

    tracing::info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        skipped = report.skipped,
        jobs,
        "batch finished"
    );

    Ok(report)
}
