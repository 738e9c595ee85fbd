// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! genetab CLI
//!
//! Command-line interface for retrieving the NCBI gene reference files and
//! building the normalized output tables.

use clap::{Parser, Subcommand};
use genetab::commands::run_build;
use genetab::config::BuildConfig;
use genetab::prepare::{prepare_sources, print_source_summary, PrepareConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "genetab")]
#[command(author, version, about = "NCBI Entrez gene table builder")]
#[command(
    long_about = "Retrieve the NCBI gene reference files and rebuild them as
normalized tab-delimited tables.

Examples:
  genetab prepare
  genetab build
  genetab build --download-dir /data/ncbi --data-dir /data/tables
  genetab check"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the NCBI source files and record their versions
    Prepare {
        /// Directory to download into
        #[arg(short, long, default_value = "download")]
        output_dir: PathBuf,

        /// Re-download files that already exist
        #[arg(long)]
        force: bool,

        /// Show what would be fetched without fetching
        #[arg(long)]
        dry_run: bool,
    },

    /// Build the output tables from downloaded source files
    Build {
        /// Directory holding the downloaded source files
        #[arg(long, default_value = "download")]
        download_dir: PathBuf,

        /// Directory the output tables are written to
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Show what source data is available
    Check {
        /// Directory holding the downloaded source files
        #[arg(long, default_value = "download")]
        download_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Prepare {
            output_dir,
            force,
            dry_run,
        } => {
            let config = PrepareConfig::new()
                .output_dir(output_dir)
                .skip_existing(!force)
                .dry_run(dry_run);
            prepare_sources(&config).map(|_| ())
        }
        Commands::Build {
            download_dir,
            data_dir,
        } => {
            let config = BuildConfig::new()
                .download_dir(download_dir)
                .data_dir(data_dir);
            run_build(&config).map(|summary| {
                eprintln!(
                    "Done: {} history rows, {} genes, {} xrefs, {} symbol mappings",
                    summary.history, summary.genes, summary.xrefs, summary.symbols
                );
            })
        }
        Commands::Check { download_dir } => print_source_summary(&download_dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
