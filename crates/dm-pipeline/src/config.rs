//! Pipeline configuration, loaded from JSON.

use crate::PipelineError;
use dm_core::options::ConverterOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_extensions() -> Vec<String> {
    vec!["md".into(), "txt".into()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub converter: ConverterOptions,

    /// File extensions picked up in directory mode (without the dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Worker count for directory mode; `None` uses available parallelism.
    #[serde(default)]
    pub jobs: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            converter: ConverterOptions::default(),
            extensions: default_extensions(),
            jobs: None,
        }
    }
}

impl PipelineConfig {
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::Config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| PipelineError::Config(format!("{}: {e}", path.display())))
    }

    pub fn effective_jobs(&self) -> usize {
        self.jobs.filter(|&n| n > 0).unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_converter_options() {
        let cfg: PipelineConfig = serde_json::from_str(
            r#"{"converter": {"collapse_consecutive": false}, "jobs": 2}"#,
        )
        .unwrap();
        assert!(!cfg.converter.collapse_consecutive);
        assert_eq!(cfg.converter.max_header_len, 60);
        assert_eq!(cfg.extensions, vec!["md", "txt"]);
        assert_eq!(cfg.effective_jobs(), 2);
    }

    #[test]
    fn zero_jobs_falls_back_to_parallelism() {
        let cfg = PipelineConfig {
            jobs: Some(0),
            ..Default::default()
        };
        assert!(cfg.effective_jobs() >= 1);
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docmark.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(PipelineConfig::load(&path), Err(PipelineError::Config(_))));
    }
}
