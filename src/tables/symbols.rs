//! Chromosome/symbol lookup table.
//!
//! Resolves a gene to its Entrez identifier when all that is known is a
//! symbol and a chromosome. Every approved symbol maps; a synonym maps only
//! when it is unambiguous within its chromosome, and an approved symbol
//! always beats a synonym colliding with it on the same chromosome.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::expand::expand_rows;
use crate::tables::genes::GeneRecord;
use crate::tables::VALUE_SEPARATOR;
use crate::tsv;
use crate::Result;

/// Output file name of the chromosome/symbol lookup table.
pub const SYMBOL_MAP_FILE: &str = "chromosome-symbol-mapper.tsv";

/// Output columns of the chromosome/symbol lookup table.
pub const SYMBOL_MAP_COLUMNS: [&str; 3] = ["symbol", "chromosome", "entrez_gene_id"];

/// One resolved (symbol, chromosome) → Entrez identifier entry.
///
/// The (symbol, chromosome) pair is unique across the table; a single
/// identifier may appear under several pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolLookupEntry {
    pub symbol: String,
    pub chromosome: String,
    pub entrez_gene_id: u64,
}

/// Candidate row while symbol and chromosome may still hold `|`-delimited
/// value lists.
#[derive(Debug, Clone)]
struct Candidate {
    entrez_gene_id: u64,
    chromosome: Option<String>,
    symbol: Option<String>,
}

/// Build the chromosome/symbol lookup table from the gene catalog.
///
/// Primary candidates carry each gene's approved symbol; synonym candidates
/// carry one row per synonym. Both are expanded per chromosome, with the
/// combined multi-chromosome string kept as a literal key of its own so
/// lookups using the exact source value still resolve. Synonym pairs that
/// occur more than once within a chromosome are dropped entirely, then
/// primary candidates take precedence on any remaining collision.
pub fn build_symbol_map(records: &[GeneRecord]) -> Vec<SymbolLookupEntry> {
    let primary = expand_chromosomes(
        records
            .iter()
            .map(|r| Candidate {
                entrez_gene_id: r.entrez_gene_id,
                chromosome: r.chromosome.clone(),
                symbol: r.symbol.clone(),
            })
            .collect(),
    );

    let synonyms = expand_rows(
        records
            .iter()
            .map(|r| Candidate {
                entrez_gene_id: r.entrez_gene_id,
                chromosome: r.chromosome.clone(),
                symbol: r.synonyms.clone(),
            })
            .collect(),
        |c: &Candidate| c.symbol.as_deref(),
        |c, v| c.symbol = Some(v),
        VALUE_SEPARATOR,
        false,
    );
    let synonyms = drop_ambiguous(expand_chromosomes(synonyms));

    // Primary first: on a (chromosome, symbol) collision the approved
    // symbol wins. First occurrence wins within each group as well, so the
    // traversal order, not set semantics, decides every tie.
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut entries = Vec::new();
    for candidate in primary.into_iter().chain(synonyms) {
        let (Some(chromosome), Some(symbol)) = (candidate.chromosome, candidate.symbol) else {
            continue;
        };
        if seen.insert((chromosome.clone(), symbol.clone())) {
            entries.push(SymbolLookupEntry {
                symbol,
                chromosome,
                entrez_gene_id: candidate.entrez_gene_id,
            });
        }
    }

    entries.sort_by(|a, b| {
        a.symbol
            .cmp(&b.symbol)
            .then_with(|| a.chromosome.cmp(&b.chromosome))
    });
    entries
}

/// Write the chromosome/symbol lookup table.
pub fn write_symbol_map(entries: &[SymbolLookupEntry], path: &Path) -> Result<()> {
    tsv::write_table(
        path,
        &SYMBOL_MAP_COLUMNS,
        entries.iter().map(|e| {
            vec![
                e.symbol.clone(),
                e.chromosome.clone(),
                e.entrez_gene_id.to_string(),
            ]
        }),
    )
}

/// One row per chromosome, keeping the combined multi-chromosome value as
/// an additional literal key.
fn expand_chromosomes(candidates: Vec<Candidate>) -> Vec<Candidate> {
    expand_rows(
        candidates,
        |c: &Candidate| c.chromosome.as_deref(),
        |c, v| c.chromosome = Some(v),
        VALUE_SEPARATOR,
        true,
    )
}

/// Remove every (chromosome, symbol) pair occurring on more than one row.
///
/// All rows sharing the pair go, including duplicates contributed by a
/// single gene; the source does not distinguish those from genuinely
/// ambiguous synonyms.
fn drop_ambiguous(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for candidate in &candidates {
        if let (Some(chromosome), Some(symbol)) = (&candidate.chromosome, &candidate.symbol) {
            *counts
                .entry((chromosome.as_str(), symbol.as_str()))
                .or_insert(0) += 1;
        }
    }

    let unique: HashSet<(String, String)> = counts
        .into_iter()
        .filter(|(_, count)| *count == 1)
        .map(|((chromosome, symbol), _)| (chromosome.to_string(), symbol.to_string()))
        .collect();

    candidates
        .into_iter()
        .filter(|c| match (&c.chromosome, &c.symbol) {
            (Some(chromosome), Some(symbol)) => {
                unique.contains(&(chromosome.clone(), symbol.clone()))
            }
            _ => false,
        })
        .collect()
}
