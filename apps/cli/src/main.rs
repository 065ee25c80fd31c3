//! `syntaxgen` — regenerates the transfer-syntax mapping code from the
//! authoritative JSON table.
//!
//! Two subcommands, one per pipeline. Both are idempotent and safe to rerun;
//! any failure exits non-zero and leaves pre-existing output files untouched.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "syntaxgen", version, about = "Transfer-syntax mapping generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the transfer-syntax header from a template, overwriting it.
    Header {
        /// Path to the JSON transfer-syntax table.
        #[arg(long)]
        table: PathBuf,

        /// Path to the header template.
        #[arg(long)]
        template: PathBuf,

        /// Destination path of the rendered header.
        #[arg(long)]
        output: PathBuf,
    },

    /// Rewrite the two mapping switches inside an existing source file.
    Patch {
        /// Path to the JSON transfer-syntax table.
        #[arg(long)]
        table: PathBuf,

        /// Source file containing the two conversion functions.
        #[arg(long)]
        target: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Header {
            table,
            template,
            output,
        } => {
            let rows = syntaxgen_codegen::generate_header_from_table(&table, &template, &output)?;
            tracing::info!(rows, output = %output.display(), "header pipeline finished");
        }
        Command::Patch { table, target } => {
            let cases = syntaxgen_codegen::patch_mappings_from_table(&table, &target)?;
            tracing::info!(cases, target = %target.display(), "patch pipeline finished");
        }
    }

    Ok(())
}
