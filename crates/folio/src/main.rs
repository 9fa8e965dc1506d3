//! Folio CLI - bilingual portfolio site generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Generate the portfolio site into a fresh Website <n> directory")]
#[command(version)]
struct Cli {
    /// Directory to allocate the output folder under (falls back to the
    /// current directory if it does not exist)
    #[arg(short, long)]
    base_dir: Option<PathBuf>,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Skip CSS minification
    #[arg(long)]
    no_minify: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Assemble the build configuration. Flags win over file values.
fn resolve_build_config(cli: &Cli, file: config::ConfigFile) -> folio_site::BuildConfig {
    folio_site::BuildConfig {
        base_dir: cli
            .base_dir
            .clone()
            .or_else(|| file.output.base_dir.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(".")),
        minify: !cli.no_minify && file.build.minify,
        form_endpoint: file.contact.form_endpoint,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let file_config = config::load_config(&cli.config)?;
    let config = resolve_build_config(&cli, file_config);

    tracing::info!("Generating site...");

    let result = folio_site::SiteBuilder::new(config).build()?;

    tracing::info!(
        "Generated {} pages in {}ms",
        result.pages,
        result.duration_ms
    );
    tracing::info!("Website generated at: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ConfigFile;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("folio").chain(args.iter().copied()))
    }

    fn file_config(toml_src: &str) -> ConfigFile {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn flags_override_file_values() {
        let file = file_config("[output]\nbase_dir = \"/from/file\"\n\n[build]\nminify = true\n");

        let config = resolve_build_config(&cli(&["--base-dir", "/from/flag", "--no-minify"]), file);

        assert_eq!(config.base_dir, PathBuf::from("/from/flag"));
        assert!(!config.minify);
    }

    #[test]
    fn file_values_apply_without_flags() {
        let file = file_config(
            "[output]\nbase_dir = \"/from/file\"\n\n[build]\nminify = false\n\n[contact]\nform_endpoint = \"https://formspree.io/f/abc\"\n",
        );

        let config = resolve_build_config(&cli(&[]), file);

        assert_eq!(config.base_dir, PathBuf::from("/from/file"));
        assert!(!config.minify);
        assert_eq!(config.form_endpoint, "https://formspree.io/f/abc");
    }

    #[test]
    fn defaults_when_neither_flag_nor_file_set() {
        let config = resolve_build_config(&cli(&[]), ConfigFile::default());

        assert_eq!(config.base_dir, PathBuf::from("."));
        assert!(config.minify);
    }
}
