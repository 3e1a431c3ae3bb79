//! Subcommand handlers. Each returns `Ok(false)` when a document failed,
//! which the entry point turns into exit code 1.

use anyhow::Context;
use dm_convert::Converter;
use dm_pipeline::file::default_output_path;
use dm_pipeline::{process_directory, process_file, PipelineConfig};
use std::io::{Read, Write};
use std::path::Path;

pub async fn file(
    input: &Path,
    output: Option<&Path>,
    config: &PipelineConfig,
) -> anyhow::Result<bool> {
    let input = input.to_path_buf();
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(&input));
    let converter = Converter::new(config.converter.clone());

    let result = tokio::task::spawn_blocking(move || process_file(&input, &output, &converter))
        .await
        .context("conversion worker panicked")?;

    match result {
        Ok(_) => Ok(true),
        Err(e) => {
            tracing::error!("{e}");
            Ok(false)
        }
    }
}

pub async fn dir(
    root: &Path,
    output: Option<&Path>,
    report_path: Option<&Path>,
    config: &PipelineConfig,
) -> anyhow::Result<bool> {
    let report = process_directory(root, output, config).await?;

    for failure in &report.failed {
        tracing::error!(path = %failure.input.display(), "{}", failure.error);
    }

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    Ok(report.is_success())
}

pub fn convert_stdin(config: &PipelineConfig) -> anyhow::Result<bool> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("reading stdin")?;

    let decoded = dm_pipeline::decode::decode_bytes(&bytes);
    let (text, _) = dm_pipeline::decode::remove_null_bytes(&decoded.text);
    let markdown = Converter::new(config.converter.clone()).convert(&text);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(markdown.as_bytes())?;
    stdout.flush()?;
    Ok(true)
}
