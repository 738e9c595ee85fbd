//! Identifier history mapping built from `gene_history.gz`.
//!
//! NCBI retires gene identifiers and records the replacement in the history
//! file. The output maps each retired identifier to its replacement; rows
//! describing an identifier that was discontinued without a successor carry
//! no new identifier and are dropped.

use std::io::BufRead;
use std::path::Path;

use crate::error::GenetabError;
use crate::tsv;
use crate::Result;

/// Output file name of the identifier history mapping.
pub const UPDATER_FILE: &str = "updater.tsv";

/// Output columns of the identifier history mapping.
pub const UPDATER_COLUMNS: [&str; 3] = ["old_entrez_gene_id", "new_entrez_gene_id", "date"];

const TAX_ID: &str = "#tax_id";
const DISCONTINUED_GENE_ID: &str = "Discontinued_GeneID";
const GENE_ID: &str = "GeneID";
const DISCONTINUE_DATE: &str = "Discontinue_Date";

/// One retired-identifier row.
///
/// The source never maps an identifier to itself; this builder does not
/// re-check that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub old_entrez_gene_id: u64,
    pub new_entrez_gene_id: u64,
    pub date: Option<String>,
}

/// Read the raw history table, filtered to `taxon_id` and sorted by the
/// retired identifier ascending.
///
/// Rows without a replacement identifier and rows without a retired
/// identifier are filtered, not errors. Fails if a required source column
/// is absent.
pub fn read_gene_history(path: &Path, taxon_id: u32) -> Result<Vec<HistoryRecord>> {
    let mut reader = tsv::open_table(path)?;
    let header = tsv::Header::read_from(&mut *reader, path)?;

    let tax_col = header.require(TAX_ID, path)?;
    let old_col = header.require(DISCONTINUED_GENE_ID, path)?;
    let new_col = header.require(GENE_ID, path)?;
    let date_col = header.require(DISCONTINUE_DATE, path)?;

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| GenetabError::Io {
            msg: format!("Failed to read {}: {}", path.display(), e),
        })?;
        if line.is_empty() {
            continue;
        }
        let parts = tsv::split_line(&line);

        let taxon = tsv::field(&parts, tax_col).and_then(|v| v.parse::<u32>().ok());
        if taxon != Some(taxon_id) {
            continue;
        }

        // Discontinued without replacement, or no retired id to map from.
        let Some(new_id) = tsv::field(&parts, new_col).and_then(|v| v.parse::<u64>().ok()) else {
            continue;
        };
        let Some(old_id) = tsv::field(&parts, old_col).and_then(|v| v.parse::<u64>().ok()) else {
            continue;
        };

        records.push(HistoryRecord {
            old_entrez_gene_id: old_id,
            new_entrez_gene_id: new_id,
            date: tsv::field(&parts, date_col),
        });
    }

    records.sort_by_key(|r| r.old_entrez_gene_id);
    Ok(records)
}

/// Write the identifier history mapping table.
pub fn write_history(records: &[HistoryRecord], path: &Path) -> Result<()> {
    tsv::write_table(
        path,
        &UPDATER_COLUMNS,
        records.iter().map(|r| {
            vec![
                r.old_entrez_gene_id.to_string(),
                r.new_entrez_gene_id.to_string(),
                tsv::render(&r.date).to_string(),
            ]
        }),
    )
}
