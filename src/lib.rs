// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! genetab: normalized gene tables from NCBI Entrez
//!
//! Retrieves the NCBI `gene_info` and `gene_history` reference files and
//! rebuilds them as normalized tab-delimited tables: a gene catalog, an
//! old-to-new identifier mapping, a cross-reference table, and a
//! chromosome/symbol lookup usable to resolve genes referenced only by
//! symbol when the chromosome is also known.
//!
//! # Example
//!
//! ```
//! use genetab::expand_rows;
//!
//! #[derive(Clone)]
//! struct Row {
//!     chromosome: Option<String>,
//! }
//!
//! // A gene annotated on two chromosomes contributes one row per
//! // chromosome plus the combined value as a literal key.
//! let rows = vec![Row { chromosome: Some("X|Y".to_string()) }];
//! let expanded = expand_rows(
//!     rows,
//!     |r: &Row| r.chromosome.as_deref(),
//!     |r, v| r.chromosome = Some(v),
//!     "|",
//!     true,
//! );
//! assert_eq!(expanded.len(), 3);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod expand;
pub mod prepare;
pub mod tables;
pub mod tsv;

// Re-export commonly used types
pub use config::{BuildConfig, TAXON_HUMAN};
pub use error::GenetabError;
pub use expand::expand_rows;
pub use tables::genes::GeneRecord;
pub use tables::history::HistoryRecord;
pub use tables::symbols::{build_symbol_map, SymbolLookupEntry};
pub use tables::xrefs::XrefRecord;

/// Result type alias for genetab operations
pub type Result<T> = std::result::Result<T, GenetabError>;
