//! Single-file conversion.

use crate::decode::{decode_bytes, remove_null_bytes};
use crate::PipelineError;
use dm_convert::Converter;
use dm_core::stats::ConversionStats;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub encoding: String,
    pub null_bytes_removed: usize,
    pub stats: ConversionStats,
}

/// `<dir>/<stem>_cleaned.md` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".into());
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(format!("{stem}_cleaned.md"))
}

/// Output location in directory mode: the input's path relative to `root`
/// mirrored under `output_dir`, or the default sibling path.
pub fn output_path_for(input: &Path, root: &Path, output_dir: Option<&Path>) -> PathBuf {
    let Some(dir) = output_dir else {
        return default_output_path(input);
    };

    let relative = input
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| input.file_name().map(PathBuf::from).unwrap_or_default());
    dir.join(relative).with_extension("md")
}

/// Read, clean, convert and write one document.
///
/// Output goes to a temporary sibling first and is renamed into place, so a
/// failed write never leaves a partial file at `output`.
pub fn process_file(
    input: &Path,
    output: &Path,
    converter: &Converter,
) -> Result<FileReport, PipelineError> {
    if !input.is_file() {
        return Err(PipelineError::NotFound(input.display().to_string()));
    }

    let bytes = fs::read(input).map_err(|e| PipelineError::Read {
        path: input.display().to_string(),
        message: e.to_string(),
    })?;

    let decoded = decode_bytes(&bytes);
    if decoded.had_errors {
        tracing::warn!(path = %input.display(), "malformed byte sequences replaced while decoding");
    }

    let (text, null_bytes_removed) = remove_null_bytes(&decoded.text);
    let conversion = converter.convert_with_stats(&text);

    write_atomic(output, &conversion.markdown)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        encoding = decoded.encoding,
        null_bytes_removed,
        headers = conversion.stats.headers(),
        demoted = conversion.stats.demoted,
        roman = conversion.stats.roman_seen,
        "converted"
    );

    Ok(FileReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        encoding: decoded.encoding.to_string(),
        null_bytes_removed,
        stats: conversion.stats,
    })
}

fn write_atomic(output: &Path, contents: &str) -> Result<(), PipelineError> {
    let write_err = |e: std::io::Error| PipelineError::Write {
        path: output.display().to_string(),
        message: e.to_string(),
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut tmp = output.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).map_err(write_err)?;
    fs::rename(&tmp, output).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        write_err(e)
    })
}
