//! Source file retrieval from NCBI.
//!
//! Downloads the two gene reference files and records retrieval metadata
//! in a `versions.json` manifest next to them. The table builders only
//! require that the files exist locally; retrieval can be re-run or skipped
//! independently.

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::GenetabError;
use crate::tsv;
use crate::Result;

/// URLs for the NCBI source files.
pub mod urls {
    /// Identifier retirement history, all taxa.
    pub const GENE_HISTORY: &str = "https://ftp.ncbi.nlm.nih.gov/gene/DATA/gene_history.gz";

    /// Per-gene information for Homo sapiens.
    pub const GENE_INFO: &str =
        "https://ftp.ncbi.nlm.nih.gov/gene/DATA/GENE_INFO/Mammalia/Homo_sapiens.gene_info.gz";
}

/// Local file name of the downloaded history table.
pub const GENE_HISTORY_FILE: &str = "gene_history.gz";

/// Local file name of the downloaded gene-info table.
pub const GENE_INFO_FILE: &str = "Homo_sapiens.gene_info.gz";

/// File name of the retrieval manifest.
pub const VERSIONS_FILE: &str = "versions.json";

/// Configuration for source retrieval.
#[derive(Debug, Clone)]
pub struct PrepareConfig {
    /// Directory the source files are downloaded into.
    pub output_dir: PathBuf,
    /// Skip downloads for files already on disk.
    pub skip_existing: bool,
    /// Show what would be fetched without fetching.
    pub dry_run: bool,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("download"),
            skip_existing: true,
            dry_run: false,
        }
    }
}

impl PrepareConfig {
    /// Create a new retrieval configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the download directory.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Configure whether existing files are kept.
    pub fn skip_existing(mut self, skip: bool) -> Self {
        self.skip_existing = skip;
        self
    }

    /// Configure dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Retrieval metadata for the downloaded source files.
///
/// `modified` holds the per-file `Last-Modified` value reported by the
/// server, normalized to RFC 3339 and keyed by local file name; files whose
/// server reported nothing are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionManifest {
    /// When the files were retrieved (UTC).
    pub retrieved: String,
    /// Per-file upstream modification timestamps.
    #[serde(default)]
    pub modified: BTreeMap<String, String>,
}

/// Download the NCBI source files and write the version manifest.
pub fn prepare_sources(config: &PrepareConfig) -> Result<VersionManifest> {
    eprintln!(
        "Preparing NCBI gene source files in {}",
        config.output_dir.display()
    );

    fs::create_dir_all(&config.output_dir).map_err(|e| GenetabError::Io {
        msg: format!(
            "Failed to create directory {}: {}",
            config.output_dir.display(),
            e
        ),
    })?;

    let files = [
        (urls::GENE_HISTORY, GENE_HISTORY_FILE),
        (urls::GENE_INFO, GENE_INFO_FILE),
    ];

    let mut manifest = VersionManifest {
        retrieved: Utc::now().to_rfc3339(),
        modified: BTreeMap::new(),
    };

    for (url, name) in files {
        let path = config.output_dir.join(name);

        if config.dry_run {
            eprintln!("  [dry run] Would fetch {}", url);
            continue;
        }

        if config.skip_existing && path.exists() {
            eprintln!("  Skipping {} (exists)", name);
        } else {
            download_file(url, &path)?;
            eprintln!("  Downloaded {}", name);
        }

        if let Some(modified) = fetch_last_modified(url) {
            manifest.modified.insert(name.to_string(), modified);
        }
    }

    if !config.dry_run {
        let manifest_path = config.output_dir.join(VERSIONS_FILE);
        let file = File::create(&manifest_path).map_err(|e| GenetabError::Io {
            msg: format!("Failed to create {}: {}", manifest_path.display(), e),
        })?;
        serde_json::to_writer_pretty(file, &manifest)?;
        eprintln!("  Wrote {}", manifest_path.display());
    }

    Ok(manifest)
}

/// Load the version manifest from a download directory.
pub fn load_manifest(dir: &Path) -> Result<VersionManifest> {
    let path = dir.join(VERSIONS_FILE);
    let file = File::open(&path).map_err(|e| GenetabError::Io {
        msg: format!("Failed to open {}: {}", path.display(), e),
    })?;
    Ok(serde_json::from_reader(file)?)
}

/// Print a summary of the downloaded source data (for `genetab check`).
pub fn print_source_summary(dir: &Path) -> Result<()> {
    eprintln!("=== Source Data Summary ===");
    eprintln!("  Directory: {}", dir.display());

    match load_manifest(dir) {
        Ok(manifest) => {
            eprintln!("  Retrieved at: {}", manifest.retrieved);
            for (name, modified) in &manifest.modified {
                eprintln!("  {} modified upstream: {}", name, modified);
            }
        }
        Err(_) => eprintln!("  No versions.json manifest (run 'genetab prepare')"),
    }

    for name in [GENE_HISTORY_FILE, GENE_INFO_FILE] {
        let path = dir.join(name);
        if path.exists() {
            let rows = count_rows(&path)?;
            eprintln!("  {}: {} rows", name, rows);
        } else {
            eprintln!("  {}: MISSING", name);
        }
    }

    Ok(())
}

/// Count data rows (excluding the header) of a source table.
fn count_rows(path: &Path) -> Result<usize> {
    let reader = tsv::open_table(path)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(format!("counting {}", path.display()));

    let mut count = 0usize;
    for line in reader.lines() {
        line.map_err(|e| GenetabError::Io {
            msg: format!("Failed to read {}: {}", path.display(), e),
        })?;
        count += 1;
        if count % 100_000 == 0 {
            pb.tick();
        }
    }
    pb.finish_and_clear();

    Ok(count.saturating_sub(1))
}

/// Download a file from a URL.
///
/// Uses curl or wget when available (more reliable for large files),
/// falling back to reqwest.
fn download_file(url: &str, output: &Path) -> Result<()> {
    let output_str = output.to_str().ok_or_else(|| GenetabError::Io {
        msg: format!("Path contains invalid UTF-8: {:?}", output),
    })?;

    let curl_result = Command::new("curl")
        .args(["-fSL", "-o", output_str, url])
        .output();

    match curl_result {
        Ok(result) if result.status.success() => Ok(()),
        _ => {
            let wget_result = Command::new("wget")
                .args(["-q", "-O", output_str, url])
                .output();

            match wget_result {
                Ok(result) if result.status.success() => Ok(()),
                _ => download_with_reqwest(url, output),
            }
        }
    }
}

/// Download using reqwest (for when curl/wget aren't available).
fn download_with_reqwest(url: &str, output: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(3600))
        .build()
        .map_err(|e| GenetabError::Download {
            url: url.to_string(),
            msg: format!("Failed to create HTTP client: {}", e),
        })?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| GenetabError::Download {
            url: url.to_string(),
            msg: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(GenetabError::Download {
            url: url.to_string(),
            msg: format!("HTTP {}", response.status()),
        });
    }

    let mut file = File::create(output).map_err(|e| GenetabError::Io {
        msg: format!("Failed to create {}: {}", output.display(), e),
    })?;

    let content = response.bytes().map_err(|e| GenetabError::Download {
        url: url.to_string(),
        msg: format!("Failed to read response: {}", e),
    })?;

    file.write_all(&content).map_err(|e| GenetabError::Io {
        msg: format!("Failed to write {}: {}", output.display(), e),
    })?;

    Ok(())
}

/// Query the upstream modification time of a source file.
///
/// The FTP-era per-file MDTM timestamp is the `Last-Modified` header over
/// HTTPS. Absence is not an error; the manifest field is simply omitted.
fn fetch_last_modified(url: &str) -> Option<String> {
    let head = Command::new("curl").args(["-sI", url]).output();
    if let Ok(result) = head {
        if result.status.success() {
            if let Some(value) = parse_last_modified(&String::from_utf8_lossy(&result.stdout)) {
                return Some(value);
            }
        }
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()
        .ok()?;
    let response = client.head(url).send().ok()?;
    let header = response.headers().get(reqwest::header::LAST_MODIFIED)?;
    Some(normalize_http_date(header.to_str().ok()?))
}

/// Extract and normalize the `Last-Modified` value from raw response
/// headers.
fn parse_last_modified(headers: &str) -> Option<String> {
    headers.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("last-modified") {
            Some(normalize_http_date(value.trim()))
        } else {
            None
        }
    })
}

/// Normalize an HTTP date to RFC 3339, keeping the raw value when it does
/// not parse.
fn normalize_http_date(value: &str) -> String {
    DateTime::parse_from_rfc2822(value)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|_| value.to_string())
}
