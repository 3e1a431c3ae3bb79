//! Compiled line patterns shared by the detector and the classifier.

use lazy_static::lazy_static;
use regex::{Regex, RegexSet};

/// ASCII Roman numerals accepted as section prefixes (compared upper-cased).
pub const VALID_ROMANS: [&str; 20] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX",
];

lazy_static! {
    // -- headers ------------------------------------------------------------

    /// `Ⅰ. 개요`, `Ⅱ 추진계획`
    pub static ref ROMAN_UNICODE: Regex =
        Regex::new(r"^(Ⅰ|Ⅱ|Ⅲ|Ⅳ|Ⅴ|Ⅵ|Ⅶ|Ⅷ|Ⅸ|Ⅹ)\.?\s*(.+)").unwrap();

    /// `II. 추진계획`, `iv 결론`, `IV결론`. The numeral run is checked
    /// against [`VALID_ROMANS`] after matching.
    pub static ref ROMAN_ASCII: Regex = Regex::new(r"(?i)^([IVX]+)\.?\s*(.+)").unwrap();

    /// `1. 현황`, `1.2.3. 세부`
    pub static ref NUMBERED_HIERARCHICAL: Regex =
        Regex::new(r"^(\d+(?:\.\d+)*)\.\s*(.+)").unwrap();

    /// `1 추진목표`
    pub static ref NUMBERED_SIMPLE: Regex = Regex::new(r"^(\d+)\s+(.+)").unwrap();

    /// Parenthesized enumerations: `1) 항목`, `가) 항목`, `a) item`.
    pub static ref EXCLUDED: RegexSet = RegexSet::new([
        r"^\d+\)\s*(.+)",
        r"^[가-힣]\)\s*(.+)",
        r"^[a-zA-Z]\)\s*(.+)",
    ])
    .unwrap();

    // -- table of contents --------------------------------------------------

    pub static ref TOC_ROMAN: Regex =
        Regex::new(r"^(Ⅰ|Ⅱ|Ⅲ|Ⅳ|Ⅴ|Ⅵ|Ⅶ|Ⅷ|Ⅸ|Ⅹ)\.?\s*(.+?)[\s·]{2,}\s*\d+$").unwrap();

    pub static ref TOC_NUMBERED: Regex =
        Regex::new(r"^(\d+(?:\.\d+)*)\.\s*(.+?)[\s·]{2,}\s*\d+$").unwrap();

    /// Any text, a leader of 3+ separators, then a page number.
    pub static ref TOC_GENERAL: Regex = Regex::new(r"^(.+?)[\s·]{3,}\s*\d+$").unwrap();

    pub static ref TOC_DOTTED: Regex = Regex::new(r"^[·\s]{3,}$").unwrap();

    // -- validity -----------------------------------------------------------

    /// Shapes that are never header text even when a prefix matched.
    pub static ref MEANINGLESS: RegexSet = RegexSet::new([
        r"^[·•\-_=]{1,5}$",
        r"^\d+\.?$",
        r"^\[.*\].*···\s*\d+$",
        r"^<.*>$",
        r"^ㅇ\s",
        r"^.*\(\d{4}\.\d{1,2}\.\d{1,2}\.?기준\)",
        r"^.*···\s*\d+$",
        r"^.*[\s·]{3,}\s*\d+$",
    ])
    .unwrap();
}

pub fn is_valid_roman_numeral(numeral: &str) -> bool {
    let upper = numeral.to_ascii_uppercase();
    VALID_ROMANS.contains(&upper.as_str())
}
