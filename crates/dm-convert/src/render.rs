//! Markdown renderer.

use dm_core::line::{LineCategory, LineRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub markdown: String,
    /// Blank lines dropped by [`collapse_blank_lines`].
    pub blank_lines_collapsed: usize,
}

/// Render one output line per record.
pub fn render_lines(records: &[LineRecord]) -> Vec<String> {
    records.iter().map(render_line).collect()
}

fn render_line(record: &LineRecord) -> String {
    if record.category == LineCategory::TocContent {
        return record.original.clone();
    }
    if record.is_header() {
        return format!("{} {}", "#".repeat(usize::from(record.level)), record.content);
    }
    record.original.clone()
}

/// Reduce every run of blank lines to a single blank line.
pub fn collapse_blank_lines(lines: Vec<String>) -> (Vec<String>, usize) {
    let mut out = Vec::with_capacity(lines.len());
    let mut dropped = 0;
    let mut prev_blank = false;

    for line in lines {
        let blank = line.trim().is_empty();
        if blank && prev_blank {
            dropped += 1;
            continue;
        }
        prev_blank = blank;
        out.push(line);
    }

    (out, dropped)
}

pub fn render(records: &[LineRecord]) -> Rendered {
    let (lines, blank_lines_collapsed) = collapse_blank_lines(render_lines(records));
    Rendered {
        markdown: lines.join("\n"),
        blank_lines_collapsed,
    }
}
