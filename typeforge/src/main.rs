//! `typeforge` command-line interface.
//!
//! ```text
//! typeforge generate --input schema.json --root User --resolve-native-enums --out user.ts
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use typeforge::codegen::{TranslateConfig, generate_from_json};

/// Translate schema descriptions into TypeScript type declarations.
#[derive(Parser, Debug)]
#[command(name = "typeforge", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate TypeScript declarations from a JSON schema description.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Schema description file.
    #[arg(short, long)]
    input: PathBuf,

    /// Root type name; overrides the document name and the config file.
    #[arg(long)]
    root: Option<String>,

    /// Declare native enums instead of emitting `unknown`.
    #[arg(long)]
    resolve_native_enums: bool,

    /// Inline native enum values as a literal union.
    #[arg(long)]
    inline_native_enums: bool,

    /// Omit `export` from generated declarations.
    #[arg(long)]
    no_export: bool,

    /// JSON translation config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (stdout if omitted).
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl GenerateArgs {
    /// Config file settings with command-line flags applied on top.
    fn translate_config(&self) -> Result<TranslateConfig> {
        let mut config = match &self.config {
            Some(path) => TranslateConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => TranslateConfig::default(),
        };
        if let Some(root) = &self.root {
            config = config.with_root_identifier(root.clone());
        }
        if self.resolve_native_enums {
            config.resolve_native_enums = true;
        }
        if self.inline_native_enums {
            config.inline_native_enums = true;
        }
        if self.no_export {
            config.export = false;
        }
        config.validate()?;
        Ok(config)
    }

    fn run(&self) -> Result<()> {
        let config = self.translate_config()?;
        let json = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read {}", self.input.display()))?;
        let source = generate_from_json(&json, &config)
            .with_context(|| format!("failed to translate {}", self.input.display()))?;

        match &self.out {
            Some(path) => {
                std::fs::write(path, &source)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = source.len(), "wrote declarations");
            }
            None => print!("{source}"),
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Generate(args) => args.run(),
    }
}
