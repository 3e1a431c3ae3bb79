//! docmark — command-line entry point.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};
use dm_pipeline::PipelineConfig;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;

    let succeeded = match cli.command {
        Command::File { input, output } => commands::file(&input, output.as_deref(), &config).await?,
        Command::Dir {
            root,
            output,
            report,
            ..
        } => commands::dir(&root, output.as_deref(), report.as_deref(), &config).await?,
        Command::Convert => commands::convert_stdin(&config)?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Config file first, then command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };

    if cli.no_remove_consecutive {
        config.converter.collapse_consecutive = false;
    }
    if let Command::Dir { jobs: Some(jobs), .. } = cli.command {
        config.jobs = Some(jobs);
    }

    Ok(config)
}

/// Logs go to stderr so `docmark convert` keeps stdout clean.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_is_on_by_default() {
        let cli = Cli::try_parse_from(["docmark", "file", "plan.md"]).unwrap();
        let config = resolve_config(&cli).unwrap();
        assert!(config.converter.collapse_consecutive);
        assert_eq!(config.jobs, None);
    }

    #[test]
    fn no_remove_consecutive_flag_disables_collapse() {
        // global flag accepted after the subcommand as well
        let cli = Cli::try_parse_from(["docmark", "dir", "docs", "--no-remove-consecutive"])
            .unwrap();
        assert!(!resolve_config(&cli).unwrap().converter.collapse_consecutive);

        let cli = Cli::try_parse_from(["docmark", "--no-remove-consecutive", "convert"]).unwrap();
        assert!(!resolve_config(&cli).unwrap().converter.collapse_consecutive);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docmark.json");
        std::fs::write(&path, r#"{"converter": {"collapse_consecutive": true}, "jobs": 8}"#)
            .unwrap();

        let cli = Cli::try_parse_from([
            "docmark",
            "--config",
            path.to_str().unwrap(),
            "--no-remove-consecutive",
            "dir",
            "docs",
            "-j",
            "2",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();

        assert!(!config.converter.collapse_consecutive);
        assert_eq!(config.jobs, Some(2));
    }

    #[test]
    fn config_jobs_kept_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docmark.json");
        std::fs::write(&path, r#"{"jobs": 3}"#).unwrap();

        let cli = Cli::try_parse_from(["docmark", "--config", path.to_str().unwrap(), "dir", "docs"])
            .unwrap();
        assert_eq!(resolve_config(&cli).unwrap().jobs, Some(3));
    }
}
