//! Pipeline command for building the output tables.
//!
//! Stages run sequentially; each builder completes and writes its table
//! before the next one starts, and a failed stage leaves no output file
//! behind for that stage.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::prepare::{GENE_HISTORY_FILE, GENE_INFO_FILE};
use crate::tables::{genes, history, symbols, xrefs};
use crate::Result;

/// Row counts of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Rows in the identifier history mapping.
    pub history: usize,
    /// Rows in the gene catalog.
    pub genes: usize,
    /// Rows in the cross-reference table.
    pub xrefs: usize,
    /// Rows in the chromosome/symbol lookup.
    pub symbols: usize,
}

/// Paths of the four output tables for a build configuration.
pub fn output_paths(config: &BuildConfig) -> [PathBuf; 4] {
    [
        config.data_dir.join(history::UPDATER_FILE),
        config.data_dir.join(genes::GENES_FILE),
        config.data_dir.join(xrefs::XREFS_FILE),
        config.data_dir.join(symbols::SYMBOL_MAP_FILE),
    ]
}

/// Build all output tables from the downloaded source files.
///
/// Re-running on unchanged inputs reproduces the outputs byte for byte.
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary> {
    let gene_history = config.download_dir.join(GENE_HISTORY_FILE);
    let gene_info = config.download_dir.join(GENE_INFO_FILE);

    eprintln!("=== Building identifier history table ===");
    let history_records = history::read_gene_history(&gene_history, config.taxon_id)?;
    history::write_history(&history_records, &config.data_dir.join(history::UPDATER_FILE))?;
    eprintln!("  {} rows", history_records.len());

    eprintln!("=== Building gene catalog ===");
    let gene_records = genes::read_gene_info(&gene_info, config.taxon_id)?;
    genes::write_genes(&gene_records, &config.data_dir.join(genes::GENES_FILE))?;
    eprintln!("  {} rows", gene_records.len());

    eprintln!("=== Building cross-reference table ===");
    let xref_records = xrefs::build_xrefs(&gene_records);
    xrefs::write_xrefs(&xref_records, &config.data_dir.join(xrefs::XREFS_FILE))?;
    eprintln!("  {} rows", xref_records.len());

    eprintln!("=== Building chromosome/symbol lookup ===");
    let symbol_entries = symbols::build_symbol_map(&gene_records);
    symbols::write_symbol_map(
        &symbol_entries,
        &config.data_dir.join(symbols::SYMBOL_MAP_FILE),
    )?;
    eprintln!("  {} rows", symbol_entries.len());

    Ok(BuildSummary {
        history: history_records.len(),
        genes: gene_records.len(),
        xrefs: xref_records.len(),
        symbols: symbol_entries.len(),
    })
}
