//! compdoc CLI.
//!
//! Scans a components tree and a parallel examples tree, extracts
//! documentation metadata, and writes the aggregate to a single data module.
//! With `--watch` the pipeline re-runs whenever either tree changes.
//!
//! # Examples
//!
//! ```bash
//! # One-shot generation with the conventional layout
//! compdoc
//!
//! # Custom layout, regenerating on change
//! compdoc --components sample/components --output build/componentData.js --watch
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use compdoc_core::GeneratorConfig;
use compdoc_generate::{Generator, RunReport};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod watch;

/// compdoc - component documentation data generator.
#[derive(Parser, Debug)]
#[command(name = "compdoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory whose child directories are components
    #[arg(long, default_value = "src/components")]
    components: PathBuf,

    /// Directory holding per-component example directories
    #[arg(long, default_value = "src/docs/examples")]
    examples: PathBuf,

    /// Path of the generated data module
    #[arg(long, default_value = "config/componentData.js")]
    output: PathBuf,

    /// Regenerate whenever components or examples change
    #[arg(short, long)]
    watch: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            components_root: self.components.clone(),
            examples_root: self.examples.clone(),
            output_path: self.output.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let generator = Generator::new(cli.config());
    if cli.watch {
        watch::watch_loop(generator).await
    } else {
        let report = generator.run().context("generation failed")?;
        report_run(&report);
        Ok(())
    }
}

/// Initializes logging infrastructure.
///
/// Status lines go to stdout via `colored`; diagnostics go to stderr through
/// `tracing` so they never end up piped into downstream tooling.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Prints the outcome of one generation run.
pub(crate) fn report_run(report: &RunReport) {
    if report.error_count > 0 {
        println!(
            "{}",
            format!(
                "{} error(s) recorded in {}",
                report.error_count,
                report.output_path.display()
            )
            .red()
        );
    }
    println!(
        "{}",
        format!(
            "component data saved to {} ({} components, {} examples)",
            report.output_path.display(),
            report.record_count,
            report.example_count
        )
        .green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_conventional_layout() {
        let cli = Cli::parse_from(["compdoc"]);
        assert_eq!(cli.components, PathBuf::from("src/components"));
        assert_eq!(cli.examples, PathBuf::from("src/docs/examples"));
        assert_eq!(cli.output, PathBuf::from("config/componentData.js"));
        assert!(!cli.watch);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_watch_flag() {
        let cli = Cli::parse_from(["compdoc", "--watch"]);
        assert!(cli.watch);

        let cli = Cli::parse_from(["compdoc", "-w"]);
        assert!(cli.watch);
    }

    #[test]
    fn test_cli_custom_paths() {
        let cli = Cli::parse_from([
            "compdoc",
            "--components",
            "sample/components",
            "--output",
            "build/componentData.js",
        ]);
        let config = cli.config();
        assert_eq!(config.components_root, PathBuf::from("sample/components"));
        assert_eq!(config.output_path, PathBuf::from("build/componentData.js"));
        // Unchanged default
        assert_eq!(config.examples_root, PathBuf::from("src/docs/examples"));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["compdoc", "--verbose"]);
        assert!(cli.verbose);
    }
}
