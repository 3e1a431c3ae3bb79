//! Byte decoding and null-byte cleanup.
//!
//! Extracted Korean documents arrive as UTF-8, UTF-16 with a BOM, or
//! CP949/EUC-KR when they were produced on Windows.

use encoding_rs::{Encoding, EUC_KR, UTF_8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static str,
    /// True when malformed sequences were replaced.
    pub had_errors: bool,
}

/// Decode raw bytes: BOM first, then strict UTF-8, then EUC-KR, then lossy
/// UTF-8 as the last resort.
pub fn decode_bytes(bytes: &[u8]) -> Decoded {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return Decoded {
            text: text.into_owned(),
            encoding: encoding.name(),
            had_errors,
        };
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Decoded {
            text: text.to_string(),
            encoding: UTF_8.name(),
            had_errors: false,
        };
    }

    let (text, had_errors) = EUC_KR.decode_without_bom_handling(bytes);
    if !had_errors {
        return Decoded {
            text: text.into_owned(),
            encoding: EUC_KR.name(),
            had_errors: false,
        };
    }

    let (text, _) = UTF_8.decode_without_bom_handling(bytes);
    Decoded {
        text: text.into_owned(),
        encoding: UTF_8.name(),
        had_errors: true,
    }
}

/// Remove NUL characters, returning the cleaned text and how many were dropped.
pub fn remove_null_bytes(text: &str) -> (String, usize) {
    let count = text.matches('\0').count();
    if count == 0 {
        return (text.to_string(), 0);
    }
    (text.replace('\0', ""), count)
}
