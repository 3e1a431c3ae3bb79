//! Consecutive-header collapser.
//!
//! Noisy extractions produce runs of header-shaped lines (a numbered list
//! read as nested sections, a table column of numerals). Only an isolated
//! header survives; everything else in a run is demoted to plain text.

use dm_core::line::LineRecord;

/// Demote every header that
/// - is the second or later header of an unbroken run of headers,
/// - ends with a colon, or
/// - is immediately followed by another header.
///
/// The run counter tracks the classified levels, so a demoted header still
/// extends the run it belongs to. Input records are left untouched.
pub fn collapse_consecutive(records: &[LineRecord]) -> Vec<LineRecord> {
    let mut run = 0usize;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            if !record.is_header() {
                run = 0;
                return record.clone();
            }

            run += 1;
            let next_is_header = records.get(i + 1).is_some_and(LineRecord::is_header);
            let colon_terminated = record.content.trim_end().ends_with(':');

            if run >= 2 || colon_terminated || next_is_header {
                record.demoted()
            } else {
                record.clone()
            }
        })
        .collect()
}
