//! Converter options — thresholds and switches for header inference.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_min_header_len() -> usize {
    2
}

fn default_max_header_len() -> usize {
    60
}

fn default_max_title_len() -> usize {
    50
}

fn default_toc_min_run() -> usize {
    3
}

fn default_title_keywords() -> Vec<String> {
    ["목적", "개요", "요약", "결론", "배경"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Demote headers adjacent to other headers or ending with a colon.
    #[serde(default = "default_true")]
    pub collapse_consecutive: bool,

    /// Minimum header text length in characters (after trimming).
    #[serde(default = "default_min_header_len")]
    pub min_header_len: usize,

    /// Maximum header text length in characters (after trimming).
    #[serde(default = "default_max_header_len")]
    pub max_header_len: usize,

    /// Keyword titles longer than this are body text.
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,

    /// Consecutive TOC-shaped lines required to accept a TOC span.
    #[serde(default = "default_toc_min_run")]
    pub toc_min_run: usize,

    /// Keywords that promote a short line to a level-1 title when no
    /// Roman-numeral section has been seen.
    #[serde(default = "default_title_keywords")]
    pub title_keywords: Vec<String>,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            collapse_consecutive: default_true(),
            min_header_len: default_min_header_len(),
            max_header_len: default_max_header_len(),
            max_title_len: default_max_title_len(),
            toc_min_run: default_toc_min_run(),
            title_keywords: default_title_keywords(),
        }
    }
}
