//! Line-level types — per-line classification records and the TOC span.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Line category
// ---------------------------------------------------------------------------

/// Semantic category assigned to a single document line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    Empty,
    /// Inside the detected table-of-contents span; rendered verbatim.
    TocContent,
    /// Parenthesized enumeration (`1)`, `가)`, `a)`); never a header.
    Excluded,
    Roman,
    Numbered,
    NumberedSimple,
    Title,
    Text,
    /// A header demoted back to plain text by the collapser.
    ConvertedText,
}

// ---------------------------------------------------------------------------
// Line record
// ---------------------------------------------------------------------------

/// One record per input line. Immutable once built; stages that change a
/// line's interpretation build a replacement record instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineRecord {
    /// The line's de-headered, trimmed text.
    pub original: String,
    pub category: LineCategory,
    /// 0 for body text, 1 or 2 for headings.
    pub level: u8,
    /// Text rendered after the `#` markers when this line is a header.
    pub content: String,
    /// Zero-based position in the document.
    pub index: usize,
    /// Set when the collapser demoted this line from header to text.
    #[serde(default)]
    pub forced_text: bool,
}

impl LineRecord {
    /// A level-0 record whose content mirrors its original text.
    pub fn plain(category: LineCategory, text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        Self {
            content: text.clone(),
            original: text,
            category,
            level: 0,
            index,
            forced_text: false,
        }
    }

    pub fn header(
        category: LineCategory,
        level: u8,
        text: impl Into<String>,
        index: usize,
    ) -> Self {
        let text = text.into();
        Self {
            content: text.clone(),
            original: text,
            category,
            level,
            index,
            forced_text: false,
        }
    }

    pub fn is_header(&self) -> bool {
        self.level > 0
    }

    /// Build the plain-text replacement for a demoted header. Leading `#`
    /// markers are stripped from the content.
    pub fn demoted(&self) -> Self {
        let cleaned = self.content.trim_start_matches('#').trim().to_string();
        Self {
            original: cleaned.clone(),
            content: cleaned,
            category: LineCategory::ConvertedText,
            level: 0,
            index: self.index,
            forced_text: true,
        }
    }
}

// ---------------------------------------------------------------------------
// TOC span
// ---------------------------------------------------------------------------

/// A contiguous run of table-of-contents lines, inclusive on both ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocSpan {
    pub start: usize,
    pub end: usize,
}

impl TocSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(end >= start, "TOC span end before start");
        Self { start, end }
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Number of lines covered by the span.
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
