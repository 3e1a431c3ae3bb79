//! Line Classifier — ordered rule table, first match wins.
//!
//! Rule order:
//! 1. empty            → `Empty`
//! 2. inside TOC span  → `TocContent` (frozen, never a header)
//! 3. `1)`/`가)`/`a)`  → `Excluded`
//! 4. Roman numeral    → `Roman`, level 1, sets `roman_seen`
//! 5. `1.`, `1.2.`     → `Numbered`, level 1 or 2
//! 6. `1 제목`         → `NumberedSimple`, level 1 or 2
//! 7. keyword title    → `Title`, level 1 (only before any Roman section)
//!
//! Anything else is `Text`. Symbol-prefixed lines (□ ○ • ※ -) have no rule
//! of their own and fall through to the title check.

use crate::patterns::{
    is_valid_roman_numeral, EXCLUDED, MEANINGLESS, NUMBERED_HIERARCHICAL, NUMBERED_SIMPLE,
    ROMAN_ASCII, ROMAN_UNICODE,
};
use crate::toc::is_toc_line;
use dm_core::line::{LineCategory, LineRecord, TocSpan};
use dm_core::options::ConverterOptions;

type Rule = fn(&mut ClassificationContext<'_>, &str, usize) -> Option<LineRecord>;

const RULES: &[(&str, Rule)] = &[
    ("empty", rule_empty),
    ("toc_content", rule_toc_content),
    ("excluded", rule_excluded),
    ("roman", rule_roman),
    ("numbered", rule_numbered),
    ("numbered_simple", rule_numbered_simple),
    ("title", rule_title),
];

/// Per-document classification state.
///
/// Built fresh for every conversion, so `roman_seen` never leaks from one
/// document into the next.
#[derive(Debug)]
pub struct ClassificationContext<'a> {
    options: &'a ConverterOptions,
    toc_span: Option<TocSpan>,
    roman_seen: bool,
}

impl<'a> ClassificationContext<'a> {
    pub fn new(options: &'a ConverterOptions, toc_span: Option<TocSpan>) -> Self {
        Self {
            options,
            toc_span,
            roman_seen: false,
        }
    }

    pub fn roman_seen(&self) -> bool {
        self.roman_seen
    }

    pub fn toc_span(&self) -> Option<TocSpan> {
        self.toc_span
    }

    /// Classify one line. Lines must be fed in document order since a Roman
    /// header changes how later numbered lines are levelled.
    pub fn classify(&mut self, line: &str, index: usize) -> LineRecord {
        let line = line.trim();

        for &(name, rule) in RULES {
            if let Some(record) = rule(self, line, index) {
                tracing::trace!(index, rule = name, level = record.level, "line classified");
                return record;
            }
        }

        LineRecord::plain(LineCategory::Text, line, index)
    }

    fn in_toc(&self, index: usize) -> bool {
        self.toc_span.is_some_and(|span| span.contains(index))
    }

    /// Header text gate: length bounds plus the meaningless-shape list.
    pub fn is_valid_header_text(&self, text: &str) -> bool {
        is_valid_header_text(text, self.options)
    }
}

pub fn is_valid_header_text(text: &str, options: &ConverterOptions) -> bool {
    let clean = text.trim();
    let len = clean.chars().count();

    if len < options.min_header_len || len > options.max_header_len {
        return false;
    }

    !MEANINGLESS.is_match(clean)
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn rule_empty(_: &mut ClassificationContext<'_>, line: &str, index: usize) -> Option<LineRecord> {
    line.is_empty()
        .then(|| LineRecord::plain(LineCategory::Empty, "", index))
}

fn rule_toc_content(
    ctx: &mut ClassificationContext<'_>,
    line: &str,
    index: usize,
) -> Option<LineRecord> {
    ctx.in_toc(index)
        .then(|| LineRecord::plain(LineCategory::TocContent, line, index))
}

fn rule_excluded(_: &mut ClassificationContext<'_>, line: &str, index: usize) -> Option<LineRecord> {
    EXCLUDED
        .is_match(line)
        .then(|| LineRecord::plain(LineCategory::Excluded, line, index))
}

fn rule_roman(ctx: &mut ClassificationContext<'_>, line: &str, index: usize) -> Option<LineRecord> {
    // TOC-shaped lines never open a Roman section, even outside the TOC span.
    if is_toc_line(line) {
        return None;
    }

    let header_text = extract_roman_header(line)?;
    if !ctx.is_valid_header_text(header_text) {
        return None;
    }

    ctx.roman_seen = true;
    Some(LineRecord::header(LineCategory::Roman, 1, line, index))
}

fn extract_roman_header(line: &str) -> Option<&str> {
    if let Some(caps) = ROMAN_UNICODE.captures(line) {
        return caps.get(2).map(|m| m.as_str().trim());
    }

    let caps = ROMAN_ASCII.captures(line)?;
    if !is_valid_roman_numeral(&caps[1]) {
        return None;
    }
    caps.get(2).map(|m| m.as_str().trim())
}

fn rule_numbered(ctx: &mut ClassificationContext<'_>, line: &str, index: usize) -> Option<LineRecord> {
    let caps = NUMBERED_HIERARCHICAL.captures(line)?;
    if !ctx.is_valid_header_text(&caps[2]) {
        return None;
    }

    let level = if ctx.roman_seen || caps[1].contains('.') {
        2
    } else {
        1
    };
    Some(LineRecord::header(LineCategory::Numbered, level, line, index))
}

fn rule_numbered_simple(
    ctx: &mut ClassificationContext<'_>,
    line: &str,
    index: usize,
) -> Option<LineRecord> {
    let caps = NUMBERED_SIMPLE.captures(line)?;
    if !ctx.is_valid_header_text(&caps[2]) {
        return None;
    }

    let level = if ctx.roman_seen { 2 } else { 1 };
    Some(LineRecord::header(LineCategory::NumberedSimple, level, line, index))
}

fn rule_title(ctx: &mut ClassificationContext<'_>, line: &str, index: usize) -> Option<LineRecord> {
    if ctx.roman_seen || line.chars().count() > ctx.options.max_title_len {
        return None;
    }
    if !ctx.is_valid_header_text(line) {
        return None;
    }

    ctx.options
        .title_keywords
        .iter()
        .any(|kw| line.contains(kw.as_str()))
        .then(|| LineRecord::header(LineCategory::Title, 1, line, index))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_all(lines: &[&str], toc_span: Option<TocSpan>) -> Vec<LineRecord> {
        let options = ConverterOptions::default();
        let mut ctx = ClassificationContext::new(&options, toc_span);
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| ctx.classify(line, i))
            .collect()
    }

    fn one(line: &str) -> LineRecord {
        classify_all(&[line], None).remove(0)
    }

    #[test]
    fn roman_sections_push_numbers_to_level_two() {
        let recs = classify_all(&["Ⅰ. 개요", "내용입니다", "1. 세부사항", "1.1 하위항목"], None);

        assert_eq!(recs[0].category, LineCategory::Roman);
        assert_eq!(recs[0].level, 1);
        assert_eq!(recs[1].category, LineCategory::Text);
        assert_eq!(recs[2].category, LineCategory::Numbered);
        assert_eq!(recs[2].level, 2);
        assert_eq!(recs[3].category, LineCategory::Numbered);
        assert_eq!(recs[3].level, 2);
    }

    #[test]
    fn without_roman_top_numbers_are_level_one() {
        let recs = classify_all(&["1. 추진배경", "1.2. 세부과제", "3 추진목표"], None);

        assert_eq!((recs[0].category, recs[0].level), (LineCategory::Numbered, 1));
        assert_eq!((recs[1].category, recs[1].level), (LineCategory::Numbered, 2));
        assert_eq!((recs[2].category, recs[2].level), (LineCategory::NumberedSimple, 1));
    }

    #[test]
    fn simple_numbers_follow_roman_flag() {
        let recs = classify_all(&["II. 추진계획", "1 추진목표"], None);
        assert_eq!(recs[0].category, LineCategory::Roman);
        assert_eq!((recs[1].category, recs[1].level), (LineCategory::NumberedSimple, 2));
    }

    #[test]
    fn parenthesized_enumerations_are_excluded() {
        for line in ["가) 첫째", "나) 둘째", "1) 항목", "a) item"] {
            let rec = one(line);
            assert_eq!(rec.category, LineCategory::Excluded, "{line}");
            assert_eq!(rec.level, 0);
        }
    }

    #[test]
    fn toc_span_freezes_header_shaped_lines() {
        let recs = classify_all(&["Ⅰ. 개요", "1. 현황", "본문"], Some(TocSpan::new(0, 1)));
        assert_eq!(recs[0].category, LineCategory::TocContent);
        assert_eq!(recs[1].category, LineCategory::TocContent);
        assert_eq!(recs[0].content, "Ⅰ. 개요");
        assert_eq!(recs[2].category, LineCategory::Text);
    }

    #[test]
    fn blank_inside_toc_is_still_empty() {
        let recs = classify_all(&["", "  "], Some(TocSpan::new(0, 1)));
        assert!(recs.iter().all(|r| r.category == LineCategory::Empty));
    }

    #[test]
    fn isolated_toc_shaped_roman_line_is_not_a_header() {
        // Known quirk: the Roman rule rejects dotted-leader lines even when
        // no TOC span was detected.
        let rec = one("Ⅲ. 기대효과 ······ 12");
        assert_eq!(rec.category, LineCategory::Text);
        assert_eq!(rec.level, 0);
    }

    #[test]
    fn invalid_roman_numeral_falls_through() {
        assert_eq!(one("IIII. 추진계획").category, LineCategory::Text);
        assert_eq!(one("XXI 추진계획").category, LineCategory::Text);
    }

    #[test]
    fn ascii_roman_without_separator() {
        let recs = classify_all(&["IV결론", "본문", "1. 현황"], None);
        assert_eq!((recs[0].category, recs[0].level), (LineCategory::Roman, 1));
        assert_eq!((recs[2].category, recs[2].level), (LineCategory::Numbered, 2));
    }

    #[test]
    fn words_starting_with_numeral_letters_open_a_section() {
        // Known quirk: "Vi" is read as the numeral VI with "sion 2030" as the title.
        let rec = one("Vision 2030");
        assert_eq!((rec.category, rec.level), (LineCategory::Roman, 1));
    }

    #[test]
    fn header_text_validity() {
        // too short
        assert_eq!(one("1. 가").category, LineCategory::Text);
        // date-stamp phrase
        assert_eq!(one("1. 인구현황(2023.12.31.기준)").category, LineCategory::Text);
        // too long
        let long = format!("1. {}", "가".repeat(61));
        assert_eq!(one(&long).category, LineCategory::Text);
    }

    #[test]
    fn keyword_titles_only_before_roman() {
        assert_eq!((one("사업 개요").category, one("사업 개요").level), (LineCategory::Title, 1));

        let recs = classify_all(&["Ⅰ. 서론", "사업 개요"], None);
        assert_eq!(recs[1].category, LineCategory::Text);

        let long = format!("{} 개요", "가".repeat(50));
        assert_eq!(one(&long).category, LineCategory::Text);
    }

    #[test]
    fn symbol_bullets_are_not_promoted() {
        assert_eq!(one("□ 세부 추진내용").category, LineCategory::Text);
        assert_eq!(one("○ 현장 점검").category, LineCategory::Text);
        assert_eq!(one("※ 참고사항").category, LineCategory::Text);
        assert_eq!(one("- 항목").category, LineCategory::Text);
    }

    #[test]
    fn roman_flag_is_reported_by_context() {
        let options = ConverterOptions::default();
        let mut ctx = ClassificationContext::new(&options, None);
        ctx.classify("1. 현황", 0);
        assert!(!ctx.roman_seen());
        ctx.classify("Ⅱ. 추진계획", 1);
        assert!(ctx.roman_seen());
    }
}
