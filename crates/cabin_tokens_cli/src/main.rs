//! cabin-tokens CLI
//!
//! Commands:
//! - `cabin-tokens build` - compile every theme and write palette/components files
//! - `cabin-tokens check` - compile and report references to undeclared tokens
//! - `cabin-tokens init`  - create cabin-tokens.toml and a starter token document

use anyhow::{Context, Result};
use cabin_tokens::{
    compile_document, dangling_references, emit, DanglingReference, FsSink, ThemeDocument,
    ThemeOutput,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod init;

use config::{CabinConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "cabin-tokens")]
#[command(author, version, about = "Compile design-token themes into CSS variables", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile all themes and write the generated files
    Build {
        /// Project directory or config file
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Token document, overriding the config
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output root, overriding the config
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Report references that point at undeclared tokens
    Check {
        /// Project directory or config file
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Token document, overriding the config
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,

        /// Exit with an error when any reference dangles
        #[arg(long)]
        strict: bool,
    },

    /// Create a config file and starter tokens
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Build {
            path,
            input,
            out_dir,
        } => cmd_build(&path, input, out_dir).await,
        Commands::Check {
            path,
            input,
            json,
            strict,
        } => cmd_check(&path, input, json, strict),
        Commands::Init { path, force } => init::init_project(&path, force),
    }
}

/// Config from `path`, or defaults anchored at `path` when it has none
fn load_config(path: &Path, input: Option<PathBuf>) -> Result<CabinConfig> {
    let mut config = if path.is_file() || path.join(CONFIG_FILE).exists() {
        CabinConfig::load_from_dir(path)?
    } else {
        tracing::debug!(path = %path.display(), "no {} found, using defaults", CONFIG_FILE);
        let mut config = CabinConfig::default();
        config.input.path = path.join(&config.input.path);
        config.output.dir = path.join(&config.output.dir);
        config
    };
    if let Some(input) = input {
        config.input.path = input;
    }
    Ok(config)
}

fn compile(config: &CabinConfig) -> Result<Vec<ThemeOutput>> {
    let source = fs::read_to_string(&config.input.path)
        .with_context(|| format!("Failed to read {}", config.input.path.display()))?;
    let document = ThemeDocument::parse_str(&source, &config.input.root_key, &config.tokens)
        .with_context(|| format!("Failed to load themes from {}", config.input.path.display()))?;
    tracing::info!(
        themes = document.themes.len(),
        input = %config.input.path.display(),
        "loaded token document"
    );
    Ok(compile_document(&document, &config.tokens))
}

async fn cmd_build(path: &Path, input: Option<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let mut config = load_config(path, input)?;
    if let Some(out_dir) = out_dir {
        config.output.dir = out_dir;
    }

    let outputs = compile(&config)?;
    let mut artifacts = Vec::new();
    for output in &outputs {
        artifacts.extend(output.artifacts(&config.output.layout)?);
    }

    let sink = Arc::new(FsSink::new(&config.output.dir));
    let reports = emit(sink, artifacts).await;
    let failed: Vec<_> = reports.iter().filter(|r| !r.is_ok()).collect();

    if !failed.is_empty() {
        for report in &failed {
            if let Err(e) = &report.result {
                eprintln!("error: {e}");
            }
        }
        anyhow::bail!("{} of {} artifacts failed to write", failed.len(), reports.len());
    }

    println!(
        "Wrote {} files for {} theme(s) to {}",
        reports.len(),
        outputs.len(),
        config.output.dir.display()
    );
    Ok(())
}

fn cmd_check(path: &Path, input: Option<PathBuf>, json: bool, strict: bool) -> Result<()> {
    let config = load_config(path, input)?;
    let outputs = compile(&config)?;
    let dangling: Vec<DanglingReference> = outputs.iter().flat_map(dangling_references).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&dangling)?);
    } else if dangling.is_empty() {
        println!("No dangling references in {} theme(s)", outputs.len());
    } else {
        for d in &dangling {
            println!("{}: {} -> {} (not declared)", d.theme, d.name, d.target);
        }
    }

    if strict && !dangling.is_empty() {
        anyhow::bail!("{} dangling reference(s)", dangling.len());
    }
    Ok(())
}
