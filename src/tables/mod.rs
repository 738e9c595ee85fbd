//! Builders for the output gene tables.
//!
//! Each submodule owns one output table: the gene catalog, the long-format
//! cross-reference table, the identifier history mapping, and the
//! chromosome/symbol lookup. Builders are pure single-pass transforms; every
//! run recomputes its table from scratch from the source files.

pub mod genes;
pub mod history;
pub mod symbols;
pub mod xrefs;

/// Separator used by NCBI for multi-value fields (`chromosome`, `Synonyms`,
/// `dbXrefs`).
pub const VALUE_SEPARATOR: &str = "|";
