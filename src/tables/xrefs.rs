//! Long-format cross-reference table from the `dbXrefs` column.
//!
//! Each gene's `dbXrefs` value is a `|`-delimited list of
//! `resource:identifier` entries, where the identifier may itself contain
//! `:` (`HGNC:HGNC:5`, `Ensembl:ENSG00000121410`). The output holds one row
//! per external identifier.

use std::path::Path;

use crate::expand::expand_rows;
use crate::tables::genes::GeneRecord;
use crate::tables::VALUE_SEPARATOR;
use crate::tsv;
use crate::Result;

/// Output file name of the cross-reference table.
pub const XREFS_FILE: &str = "genes-xrefs.tsv";

/// Output columns of the cross-reference table.
pub const XREFS_COLUMNS: [&str; 3] = ["entrez_gene_id", "resource", "identifier"];

/// One external identifier attached to a gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrefRecord {
    pub entrez_gene_id: u64,
    pub resource: String,
    pub identifier: String,
}

#[derive(Debug, Clone)]
struct Candidate {
    entrez_gene_id: u64,
    xref: Option<String>,
}

/// Build one row per external identifier from the catalog records.
///
/// Genes without cross-references contribute nothing. Only the first `:`
/// splits resource from identifier; a value with no `:` is dropped.
pub fn build_xrefs(records: &[GeneRecord]) -> Vec<XrefRecord> {
    let candidates: Vec<Candidate> = records
        .iter()
        .map(|r| Candidate {
            entrez_gene_id: r.entrez_gene_id,
            xref: r.xrefs.clone(),
        })
        .collect();

    let expanded = expand_rows(
        candidates,
        |c: &Candidate| c.xref.as_deref(),
        |c, v| c.xref = Some(v),
        VALUE_SEPARATOR,
        false,
    );

    expanded
        .into_iter()
        .filter_map(|c| {
            let xref = c.xref?;
            let (resource, identifier) = xref.split_once(':')?;
            Some(XrefRecord {
                entrez_gene_id: c.entrez_gene_id,
                resource: resource.to_string(),
                identifier: identifier.to_string(),
            })
        })
        .collect()
}

/// Write the cross-reference table.
pub fn write_xrefs(records: &[XrefRecord], path: &Path) -> Result<()> {
    tsv::write_table(
        path,
        &XREFS_COLUMNS,
        records.iter().map(|r| {
            vec![
                r.entrez_gene_id.to_string(),
                r.resource.clone(),
                r.identifier.clone(),
            ]
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene(id: u64, xrefs: Option<&str>) -> GeneRecord {
        GeneRecord {
            entrez_gene_id: id,
            symbol: None,
            description: None,
            chromosome: None,
            gene_type: None,
            synonyms: None,
            aliases: None,
            xrefs: xrefs.map(str::to_string),
        }
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let records = vec![gene(1, Some("MIM:138670|HGNC:HGNC:5"))];

        let xrefs = build_xrefs(&records);
        assert_eq!(
            xrefs,
            vec![
                XrefRecord {
                    entrez_gene_id: 1,
                    resource: "MIM".to_string(),
                    identifier: "138670".to_string(),
                },
                XrefRecord {
                    entrez_gene_id: 1,
                    resource: "HGNC".to_string(),
                    identifier: "HGNC:5".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_genes_without_xrefs_contribute_nothing() {
        let records = vec![gene(1, None), gene(2, Some("Ensembl:ENSG00000121410"))];

        let xrefs = build_xrefs(&records);
        assert_eq!(xrefs.len(), 1);
        assert_eq!(xrefs[0].entrez_gene_id, 2);
        assert_eq!(xrefs[0].resource, "Ensembl");
    }

    #[test]
    fn test_value_without_colon_dropped() {
        let records = vec![gene(1, Some("bare|MIM:1"))];

        let xrefs = build_xrefs(&records);
        assert_eq!(xrefs.len(), 1);
        assert_eq!(xrefs[0].resource, "MIM");
    }

    #[test]
    fn test_source_order_preserved_within_gene() {
        let records = vec![gene(3, Some("A:1|B:2|C:3"))];

        let xrefs = build_xrefs(&records);
        let resources: Vec<&str> = xrefs.iter().map(|x| x.resource.as_str()).collect();
        assert_eq!(resources, vec!["A", "B", "C"]);
    }
}
