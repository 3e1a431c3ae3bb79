//! Per-document conversion statistics.

use crate::line::TocSpan;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionStats {
    /// Input lines after splitting on `\n`.
    pub total_lines: usize,
    #[serde(default)]
    pub toc_span: Option<TocSpan>,
    /// Lines kept verbatim because they fell inside the TOC span.
    pub toc_lines: usize,
    pub headers_h1: usize,
    pub headers_h2: usize,
    /// Headers turned back into text by the collapser.
    pub demoted: usize,
    pub roman_seen: bool,
    /// Blank lines dropped while collapsing blank runs.
    pub blank_lines_collapsed: usize,
}

impl ConversionStats {
    pub fn headers(&self) -> usize {
        self.headers_h1 + self.headers_h2
    }
}
