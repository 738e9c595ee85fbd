//! Tab-delimited input and output.
//!
//! The NCBI source files are tab-delimited with a single header row and use
//! the literal `-` as a missing-value marker. Files ending in `.gz` are
//! decompressed transparently on read. Column names are the contract: every
//! required column is resolved by name against the header and a missing
//! column is a fatal error.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::GenetabError;
use crate::Result;

/// Open a possibly gzip-compressed file for buffered line reading.
pub fn open_table(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| GenetabError::Io {
        msg: format!("Failed to open {}: {}", path.display(), e),
    })?;

    let reader: Box<dyn BufRead> = if path.extension().is_some_and(|e| e == "gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

/// Header row of a tab-delimited source file.
#[derive(Debug, Clone)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    /// Parse a header line into its column names.
    pub fn parse(line: &str) -> Self {
        Header {
            columns: split_line(line).iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Read and parse the header row of a table.
    pub fn read_from(reader: &mut dyn BufRead, path: &Path) -> Result<Self> {
        let mut line = String::new();
        reader.read_line(&mut line).map_err(|e| GenetabError::Io {
            msg: format!("Failed to read header of {}: {}", path.display(), e),
        })?;
        Ok(Header::parse(&line))
    }

    /// Resolve a required column name to its index.
    pub fn require(&self, column: &str, path: &Path) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| GenetabError::MissingColumn {
                column: column.to_string(),
                path: path.display().to_string(),
            })
    }
}

/// Split a data line into its tab-delimited fields.
pub fn split_line(line: &str) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n']).split('\t').collect()
}

/// Extract a field by index, mapping the missing-value markers to `None`.
///
/// NCBI writes `-` for absent values; a short row or empty field reads the
/// same way.
pub fn field(parts: &[&str], index: usize) -> Option<String> {
    match parts.get(index) {
        None | Some(&"") | Some(&"-") => None,
        Some(value) => Some(value.to_string()),
    }
}

/// Render an optional field for output, with `None` as the empty string.
pub fn render(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Write a table to `path` as tab-delimited text with a header row.
///
/// Content is staged in a temporary sibling file and renamed into place
/// once fully written, so a failed stage never leaves a partial output.
pub fn write_table<I>(path: &Path, columns: &[&str], rows: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GenetabError::Io {
                msg: format!("Failed to create directory {}: {}", parent.display(), e),
            })?;
        }
    }

    let tmp = path.with_extension("tmp");
    let file = File::create(&tmp).map_err(|e| GenetabError::Io {
        msg: format!("Failed to create {}: {}", tmp.display(), e),
    })?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", columns.join("\t")).map_err(|e| GenetabError::Io {
        msg: format!("Failed to write {}: {}", tmp.display(), e),
    })?;
    for row in rows {
        writeln!(writer, "{}", row.join("\t")).map_err(|e| GenetabError::Io {
            msg: format!("Failed to write {}: {}", tmp.display(), e),
        })?;
    }
    writer.flush().map_err(|e| GenetabError::Io {
        msg: format!("Failed to flush {}: {}", tmp.display(), e),
    })?;

    std::fs::rename(&tmp, path).map_err(|e| GenetabError::Io {
        msg: format!("Failed to rename {} to {}: {}", tmp.display(), path.display(), e),
    })?;
    Ok(())
}
