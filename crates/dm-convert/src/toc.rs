//! TOC Detector — find the table-of-contents block so its lines are kept
//! as plain text instead of being promoted to headers.

use crate::patterns::{TOC_DOTTED, TOC_GENERAL, TOC_NUMBERED, TOC_ROMAN};
use dm_core::line::TocSpan;

/// Whether a single line has the shape of a TOC entry.
///
/// Blank lines and bare leader lines count as TOC-shaped so that spacing
/// inside a TOC block does not break the run.
pub fn is_toc_line(line: &str) -> bool {
    let line = line.trim();

    if line.is_empty() || TOC_DOTTED.is_match(line) {
        return true;
    }

    TOC_ROMAN.is_match(line) || TOC_NUMBERED.is_match(line) || TOC_GENERAL.is_match(line)
}

/// Find the first run of at least `min_run` consecutive TOC-shaped lines.
///
/// The scan stops at the first qualifying run; a later, longer run is not
/// considered. Runs shorter than `min_run` are discarded and scanning
/// resumes after them.
pub fn detect_toc_span<S: AsRef<str>>(lines: &[S], min_run: usize) -> Option<TocSpan> {
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut run = 0;

    for (i, line) in lines.iter().enumerate() {
        if is_toc_line(line.as_ref()) {
            start.get_or_insert(i);
            end = i;
            run += 1;
        } else if run >= min_run {
            break;
        } else {
            start = None;
            run = 0;
        }
    }

    if run < min_run {
        return None;
    }
    start.map(|s| TocSpan::new(s, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toc_line_shapes() {
        assert!(is_toc_line(""));
        assert!(is_toc_line("   "));
        assert!(is_toc_line("······"));
        assert!(is_toc_line("Ⅰ. 추진배경 ······ 1"));
        assert!(is_toc_line("1.2. 세부과제 ·· 14"));
        assert!(is_toc_line("[참고] 관련 법령 ······ 30"));
        assert!(is_toc_line("부록     45"));

        assert!(!is_toc_line("Ⅰ. 추진배경"));
        assert!(!is_toc_line("1. 현황"));
        assert!(!is_toc_line("2023년 예산 12"));
    }

    #[test]
    fn detects_five_line_run() {
        let lines = [
            "목차",
            "Ⅰ. 추진배경 ······ 1",
            "1. 현황 ······ 2",
            "2. 문제점 ······ 5",
            "Ⅱ. 추진계획 ······ 8",
            "1.1. 세부과제 ······ 9",
            "본문 시작",
        ];
        assert_eq!(detect_toc_span(&lines, 3), Some(TocSpan::new(1, 5)));
    }

    #[test]
    fn short_runs_are_reset() {
        let lines = [
            "개요 ······ 1",
            "배경 ······ 2",
            "본문",
            "현황 ······ 3",
        ];
        assert_eq!(detect_toc_span(&lines, 3), None);
    }

    #[test]
    fn first_qualifying_run_wins() {
        let lines = [
            "가 ······ 1",
            "나 ······ 2",
            "다 ······ 3",
            "본문",
            "라 ······ 4",
            "마 ······ 5",
            "바 ······ 6",
            "사 ······ 7",
        ];
        assert_eq!(detect_toc_span(&lines, 3), Some(TocSpan::new(0, 2)));
    }

    #[test]
    fn run_reaching_end_of_document_is_accepted() {
        let lines = ["본문", "가 ······ 1", "", "나 ······ 2"];
        assert_eq!(detect_toc_span(&lines, 3), Some(TocSpan::new(1, 3)));
    }

    #[test]
    fn blank_lines_count_toward_a_run() {
        let lines = ["가나다", "", "", "", "라마바"];
        assert_eq!(detect_toc_span(&lines, 3), Some(TocSpan::new(1, 3)));
    }
}
