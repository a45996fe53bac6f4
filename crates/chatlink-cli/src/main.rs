//! `chatlink`: decode, encode and scan chat link tokens from the shell.
//!
//! Output is one JSON document per line on stdout; logs go to stderr
//! (filter with `RUST_LOG`).

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use chatlink_cli::commands::{self, EncodeArgs};
use chatlink_cli::config::{self, CliConfig};
use chatlink_core::ChatLinks;

#[derive(Debug, Parser)]
#[command(name = "chatlink", version, about = "Decode and encode [&...] chat links")]
struct Cli {
    /// YAML config file.
    #[arg(long, env = "CHATLINK_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode one or more tokens.
    Decode {
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Build a token from field values.
    Encode {
        #[command(subcommand)]
        link: EncodeArgs,
    },
    /// Find every token in text read from stdin.
    Scan,
}

fn print(value: &Value, pretty: bool) -> anyhow::Result<()> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{s}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CliConfig::default(),
    };
    tracing::debug!(?cfg, "config loaded");

    let pretty = cfg.output.pretty;
    let links = ChatLinks::with_options(cfg.decode);

    match cli.command {
        Command::Decode { tokens } => {
            let mut failed = 0usize;
            for token in &tokens {
                let report = commands::decode_report(&links, token);
                if report.get("error").is_some() {
                    failed += 1;
                }
                print(&report, pretty)?;
            }
            if failed > 0 {
                bail!("{failed} of {} tokens failed to decode", tokens.len());
            }
        }
        Command::Encode { link } => {
            print(&commands::encode_report(&links, link)?, pretty)?;
        }
        Command::Scan => {
            let mut message = String::new();
            std::io::stdin()
                .read_to_string(&mut message)
                .context("reading stdin")?;
            let found = commands::scan_report(&links, &message);
            tracing::info!(count = found.len(), "scan complete");
            for v in &found {
                print(v, pretty)?;
            }
        }
    }

    Ok(())
}
