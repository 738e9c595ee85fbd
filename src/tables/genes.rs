//! Gene catalog built from `Homo_sapiens.gene_info.gz`.
//!
//! The catalog is a straight column selection over the raw gene-info table,
//! filtered to one taxon and keyed by Entrez identifier. Multi-value fields
//! (`chromosome`, `synonyms`) are carried through verbatim; the symbol
//! resolution builder expands them.

use std::io::BufRead;
use std::path::Path;

use crate::error::GenetabError;
use crate::tsv;
use crate::Result;

/// Output file name of the gene catalog.
pub const GENES_FILE: &str = "genes.tsv";

/// Output columns of the gene catalog.
pub const GENES_COLUMNS: [&str; 7] = [
    "entrez_gene_id",
    "symbol",
    "description",
    "chromosome",
    "gene_type",
    "synonyms",
    "aliases",
];

// Source column names; these are the contract with NCBI.
const TAX_ID: &str = "#tax_id";
const GENE_ID: &str = "GeneID";
const SYMBOL: &str = "Symbol";
const DB_XREFS: &str = "dbXrefs";
const DESCRIPTION: &str = "description";
const CHROMOSOME: &str = "chromosome";
const TYPE_OF_GENE: &str = "type_of_gene";
const SYNONYMS: &str = "Synonyms";
const OTHER_DESIGNATIONS: &str = "Other_designations";

/// One gene catalog row, keyed by Entrez identifier.
///
/// `chromosome` and `synonyms` may hold `|`-delimited value lists. `xrefs`
/// carries the raw `dbXrefs` value for the cross-reference builder and is
/// not part of the catalog output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneRecord {
    pub entrez_gene_id: u64,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub chromosome: Option<String>,
    pub gene_type: Option<String>,
    pub synonyms: Option<String>,
    pub aliases: Option<String>,
    pub xrefs: Option<String>,
}

/// Read the raw gene-info table, filtered to `taxon_id` and sorted by
/// Entrez identifier ascending.
///
/// Fails if any required source column is absent. The source is assumed to
/// carry at most one row per identifier within the taxon; no deduplication
/// is applied.
pub fn read_gene_info(path: &Path, taxon_id: u32) -> Result<Vec<GeneRecord>> {
    let mut reader = tsv::open_table(path)?;
    let header = tsv::Header::read_from(&mut *reader, path)?;

    let tax_col = header.require(TAX_ID, path)?;
    let id_col = header.require(GENE_ID, path)?;
    let symbol_col = header.require(SYMBOL, path)?;
    let xrefs_col = header.require(DB_XREFS, path)?;
    let description_col = header.require(DESCRIPTION, path)?;
    let chromosome_col = header.require(CHROMOSOME, path)?;
    let gene_type_col = header.require(TYPE_OF_GENE, path)?;
    let synonyms_col = header.require(SYNONYMS, path)?;
    let aliases_col = header.require(OTHER_DESIGNATIONS, path)?;

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

        records.push(GeneRecord {
            entrez_gene_id: parse_gene_id(&parts, id_col, path)?,
            symbol: tsv::field(&parts, symbol_col),
            description: tsv::field(&parts, description_col),
            chromosome: tsv::field(&parts, chromosome_col),
            gene_type: tsv::field(&parts, gene_type_col),
            synonyms: tsv::field(&parts, synonyms_col),
            aliases: tsv::field(&parts, aliases_col),
            xrefs: tsv::field(&parts, xrefs_col),
        });
    }

    records.sort_by_key(|r| r.entrez_gene_id);
    Ok(records)
}

/// Write the gene catalog table.
pub fn write_genes(records: &[GeneRecord], path: &Path) -> Result<()> {
    tsv::write_table(
        path,
        &GENES_COLUMNS,
        records.iter().map(|r| {
            vec![
                r.entrez_gene_id.to_string(),
                tsv::render(&r.symbol).to_string(),
                tsv::render(&r.description).to_string(),
                tsv::render(&r.chromosome).to_string(),
                tsv::render(&r.gene_type).to_string(),
                tsv::render(&r.synonyms).to_string(),
                tsv::render(&r.aliases).to_string(),
            ]
        }),
    )
}

fn parse_gene_id(parts: &[&str], index: usize, path: &Path) -> Result<u64> {
    let raw = parts.get(index).copied().unwrap_or("");
    raw.parse::<u64>().map_err(|_| GenetabError::InvalidInteger {
        column: GENE_ID.to_string(),
        value: raw.to_string(),
        path: path.display().to_string(),
    })
}
