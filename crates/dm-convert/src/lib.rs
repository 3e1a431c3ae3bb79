//! dm-convert: structural header inference for extracted documents.
//!
//! Pipeline: Normalizer → TocDetector → Classifier → Collapser → Renderer
//!
//! Input is plain text or markdown produced by an upstream extractor
//! (PDF/HWP/OCR); output is markdown with `#`/`##` headers only where a
//! line is a trusted section boundary. The transform never fails.

pub mod classifier;
pub mod collapse;
pub mod converter;
pub mod normalize;
pub mod patterns;
pub mod render;
pub mod toc;

pub use converter::{Conversion, Converter};

/// Convert a document with default options.
pub fn convert(text: &str) -> String {
    Converter::default().convert(text)
}
