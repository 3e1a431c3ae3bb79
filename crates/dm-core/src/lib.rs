//! dm-core: Shared types for Docmark
//!
//! This crate has zero internal crate dependencies and defines the
//! canonical types used across all other dm-* crates.

pub mod line;
pub mod options;
pub mod stats;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::line::{LineCategory, LineRecord, TocSpan};
    pub use crate::options::ConverterOptions;
    pub use crate::stats::ConversionStats;
}
