//! Symbol resolution tests
//!
//! Exercises the chromosome/symbol lookup builder through the public API
//! with scenarios around precedence, ambiguity, and the table-wide
//! uniqueness invariant.

use genetab::{build_symbol_map, GeneRecord, SymbolLookupEntry};
use std::collections::HashSet;

fn gene(
    id: u64,
    chromosome: Option<&str>,
    symbol: Option<&str>,
    synonyms: Option<&str>,
) -> GeneRecord {
    GeneRecord {
        entrez_gene_id: id,
        symbol: symbol.map(str::to_string),
        description: None,
        chromosome: chromosome.map(str::to_string),
        gene_type: None,
        synonyms: synonyms.map(str::to_string),
        aliases: None,
        xrefs: None,
    }
}

fn lookup<'a>(
    entries: &'a [SymbolLookupEntry],
    symbol: &str,
    chromosome: &str,
) -> Option<&'a SymbolLookupEntry> {
    entries
        .iter()
        .find(|e| e.symbol == symbol && e.chromosome == chromosome)
}

#[test]
fn test_primary_precedence_over_colliding_synonym() {
    let records = vec![
        gene(1, Some("1"), Some("TP53"), Some("P53")),
        gene(2, Some("1"), Some("P53"), None),
    ];

    let entries = build_symbol_map(&records);
    assert_eq!(lookup(&entries, "P53", "1").unwrap().entrez_gene_id, 2);
    assert_eq!(lookup(&entries, "TP53", "1").unwrap().entrez_gene_id, 1);
    assert_eq!(
        entries
            .iter()
            .filter(|e| e.symbol == "P53" && e.chromosome == "1")
            .count(),
        1
    );
}

#[test]
fn test_shared_synonym_resolves_to_neither_gene() {
    let records = vec![
        gene(10, Some("2"), Some("GENEA"), Some("X|XA")),
        gene(11, Some("2"), Some("GENEB"), Some("X|XB")),
    ];

    let entries = build_symbol_map(&records);
    assert!(lookup(&entries, "X", "2").is_none());
    assert_eq!(lookup(&entries, "XA", "2").unwrap().entrez_gene_id, 10);
    assert_eq!(lookup(&entries, "XB", "2").unwrap().entrez_gene_id, 11);
}

#[test]
fn test_synonym_ambiguity_is_per_chromosome() {
    // The same synonym on different chromosomes stays resolvable.
    let records = vec![
        gene(20, Some("3"), Some("GENEC"), Some("TWIN")),
        gene(21, Some("4"), Some("GENED"), Some("TWIN")),
    ];

    let entries = build_symbol_map(&records);
    assert_eq!(lookup(&entries, "TWIN", "3").unwrap().entrez_gene_id, 20);
    assert_eq!(lookup(&entries, "TWIN", "4").unwrap().entrez_gene_id, 21);
}

#[test]
fn test_multi_chromosome_gene_keeps_combined_key() {
    let records = vec![gene(30, Some("X|Y"), Some("CSF2RA"), Some("CD116"))];

    let entries = build_symbol_map(&records);
    for chromosome in ["X", "Y", "X|Y"] {
        assert_eq!(
            lookup(&entries, "CSF2RA", chromosome).unwrap().entrez_gene_id,
            30
        );
        assert_eq!(
            lookup(&entries, "CD116", chromosome).unwrap().entrez_gene_id,
            30
        );
    }
}

#[test]
fn test_approved_symbol_duplicated_across_chromosomes() {
    // Same approved symbol on different chromosomes: both keys resolve,
    // each to its own gene.
    let records = vec![
        gene(40, Some("5"), Some("DUPSYM"), None),
        gene(41, Some("6"), Some("DUPSYM"), None),
    ];

    let entries = build_symbol_map(&records);
    assert_eq!(lookup(&entries, "DUPSYM", "5").unwrap().entrez_gene_id, 40);
    assert_eq!(lookup(&entries, "DUPSYM", "6").unwrap().entrez_gene_id, 41);
}

#[test]
fn test_uniqueness_invariant_over_mixed_records() {
    // A patterned fixture with overlapping symbols, synonyms, and
    // multi-chromosome annotations.
    let mut records = Vec::new();
    for i in 0..50u64 {
        let chromosome = match i % 4 {
            0 => "1".to_string(),
            1 => "2".to_string(),
            2 => "1|2".to_string(),
            _ => "X".to_string(),
        };
        let symbol = format!("GENE{}", i);
        // Every third gene shares a synonym with its neighbor.
        let synonyms = if i % 3 == 0 {
            format!("ALT{}|COMMON{}", i, i / 2)
        } else {
            format!("ALT{}", i)
        };
        records.push(gene(
            1000 + i,
            Some(&chromosome),
            Some(&symbol),
            Some(&synonyms),
        ));
    }

    let entries = build_symbol_map(&records);

    let mut seen = HashSet::new();
    for entry in &entries {
        assert!(
            seen.insert((entry.symbol.clone(), entry.chromosome.clone())),
            "duplicate key ({}, {})",
            entry.symbol,
            entry.chromosome
        );
    }

    // Every approved symbol still resolves on each of its chromosomes.
    for (i, record) in records.iter().enumerate() {
        let symbol = record.symbol.as_deref().unwrap();
        for chromosome in record.chromosome.as_deref().unwrap().split('|') {
            assert!(
                lookup(&entries, symbol, chromosome).is_some(),
                "approved symbol {} missing on chromosome {} (record {})",
                symbol,
                chromosome,
                i
            );
        }
    }
}

#[test]
fn test_output_sorted_by_symbol_then_chromosome() {
    let records = vec![
        gene(1, Some("2|1"), Some("ZZZ"), Some("MMM")),
        gene(2, Some("7"), Some("AAA"), None),
    ];

    let entries = build_symbol_map(&records);
    let keys: Vec<(String, String)> = entries
        .iter()
        .map(|e| (e.symbol.clone(), e.chromosome.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}
