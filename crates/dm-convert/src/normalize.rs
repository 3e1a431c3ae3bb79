//! Header Normalizer — strip pre-existing markdown header markers.

/// Strip a leading `#`-run (and the whitespace around the remainder) from a
/// single line. Lines without a marker come back unchanged.
pub fn strip_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.starts_with('#') {
        trimmed.trim_start_matches('#').trim().to_string()
    } else {
        line.to_string()
    }
}

/// Split on `\n` and strip header markers from every line.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split('\n').map(strip_line).collect()
}

/// Text-in, text-out form of [`normalize_lines`].
pub fn strip_header_markers(text: &str) -> String {
    normalize_lines(text).join("\n")
}
