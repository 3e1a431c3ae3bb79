//! Top-level converter — wires the four stages together.

use crate::classifier::ClassificationContext;
use crate::{collapse, normalize, render, toc};
use dm_core::line::{LineCategory, LineRecord, TocSpan};
use dm_core::options::ConverterOptions;
use dm_core::stats::ConversionStats;

/// Full result of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub markdown: String,
    pub stats: ConversionStats,
    /// Records straight out of the classifier.
    pub classified: Vec<LineRecord>,
    /// Records after the collapser (identical to `classified` when
    /// collapsing is disabled).
    pub records: Vec<LineRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub fn convert(&self, text: &str) -> String {
        self.convert_with_stats(text).markdown
    }

    /// Run all stages. Every call starts from fresh per-document state.
    pub fn convert_with_stats(&self, text: &str) -> Conversion {
        let lines = normalize::normalize_lines(text);

        let toc_span = toc::detect_toc_span(&lines, self.options.toc_min_run);
        if let Some(span) = toc_span {
            tracing::debug!(
                start = span.start + 1,
                end = span.end + 1,
                lines = span.line_count(),
                "TOC section detected"
            );
        }

        let mut ctx = ClassificationContext::new(&self.options, toc_span);
        let classified: Vec<LineRecord> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| ctx.classify(line, i))
            .collect();
        let roman_seen = ctx.roman_seen();

        let records = if self.options.collapse_consecutive {
            collapse::collapse_consecutive(&classified)
        } else {
            classified.clone()
        };

        let rendered = render::render(&records);
        let stats = collect_stats(&records, toc_span, roman_seen, rendered.blank_lines_collapsed);

        if stats.toc_lines > 0 || stats.demoted > 0 {
            tracing::debug!(
                toc_lines = stats.toc_lines,
                demoted = stats.demoted,
                "kept TOC lines as text and demoted clustered headers"
            );
        }

        Conversion {
            markdown: rendered.markdown,
            stats,
            classified,
            records,
        }
    }
}

fn collect_stats(
    records: &[LineRecord],
    toc_span: Option<TocSpan>,
    roman_seen: bool,
    blank_lines_collapsed: usize,
) -> ConversionStats {
    let mut stats = ConversionStats {
        total_lines: records.len(),
        toc_span,
        roman_seen,
        blank_lines_collapsed,
        ..Default::default()
    };

    for record in records {
        match (record.category, record.level) {
            (LineCategory::TocContent, _) => stats.toc_lines += 1,
            (_, 1) => stats.headers_h1 += 1,
            (_, 2) => stats.headers_h2 += 1,
            _ if record.forced_text => stats.demoted += 1,
            _ => {}
        }
    }

    stats
}
