//! Configuration resolution: manifest lookup and report options.
//!
//! Options come from three layers, highest precedence first: command-line
//! flags, `[package.metadata.bench-report]` (or the workspace equivalent) in
//! the resolved manifest, then built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bench_table::{PairingStrategy, ReportOptions};
use serde::Deserialize;

use crate::cli::Cli;
use crate::verbose::vprintln;

/// File name that marks a cargo project directory.
const MANIFEST_NAME: &str = "Cargo.toml";

/// `bench-report` metadata table from Cargo.toml.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ReportMetadata {
    /// Default candidate variant.
    pub candidate: Option<String>,
    /// Default pairing strategy.
    pub pairing: Option<PairingStrategy>,
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    package: Option<MetadataHolder>,
    workspace: Option<MetadataHolder>,
}

#[derive(Debug, Deserialize)]
struct MetadataHolder {
    metadata: Option<MetadataSection>,
}

#[derive(Debug, Deserialize)]
struct MetadataSection {
    #[serde(rename = "bench-report")]
    bench_report: Option<ReportMetadata>,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Manifest passed to `cargo bench`. `None` only when reading captured
    /// output without an explicit manifest.
    pub manifest: Option<PathBuf>,
    /// Options handed to the report pipeline.
    pub options: ReportOptions,
}

/// Resolve the configuration from CLI flags and the working directory.
pub fn resolve(cli: &Cli) -> Result<ReportConfig> {
    let manifest = if cli.input.is_some() && cli.manifest_path.is_none() {
        None
    } else {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Some(resolve_manifest(cli.manifest_path.as_deref(), &cwd)?)
    };

    let metadata = match &manifest {
        Some(path) => {
            vprintln!("Using manifest {}", path.display());
            load_metadata(path)?
        }
        None => ReportMetadata::default(),
    };

    Ok(ReportConfig {
        manifest,
        options: merge_options(cli.candidate.clone(), cli.pairing, metadata),
    })
}

/// Locate the manifest of the benchmarked crate.
///
/// An explicit path must exist. Otherwise `<cwd>/Cargo.toml` is used, with
/// `<cwd>/../Cargo.toml` as the single fallback.
pub fn resolve_manifest(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("manifest not found: {}", path.display());
        }
        return Ok(path.to_path_buf());
    }

    let local = cwd.join(MANIFEST_NAME);
    if local.is_file() {
        return Ok(local);
    }

    let parent = cwd.join("..").join(MANIFEST_NAME);
    if parent.is_file() {
        return Ok(parent);
    }

    bail!(
        "could not find {MANIFEST_NAME} in {} or its parent directory (use --manifest-path)",
        cwd.display()
    );
}

/// Read the `bench-report` metadata table from a manifest.
///
/// Package metadata wins over workspace metadata. A manifest without either
/// table yields defaults.
pub fn load_metadata(manifest: &Path) -> Result<ReportMetadata> {
    let content = std::fs::read_to_string(manifest)
        .with_context(|| format!("failed to read {}", manifest.display()))?;
    parse_metadata(&content).with_context(|| format!("failed to parse {}", manifest.display()))
}

fn parse_metadata(content: &str) -> Result<ReportMetadata> {
    let file: ManifestFile = toml::from_str(content)?;
    let from = |holder: Option<MetadataHolder>| {
        holder
            .and_then(|h| h.metadata)
            .and_then(|m| m.bench_report)
    };
    Ok(from(file.package)
        .or_else(|| from(file.workspace))
        .unwrap_or_default())
}

/// Layer CLI values over manifest metadata.
pub fn merge_options(
    candidate: Option<String>,
    pairing: Option<PairingStrategy>,
    metadata: ReportMetadata,
) -> ReportOptions {
    ReportOptions {
        candidate: candidate.or(metadata.candidate),
        pairing: pairing.or(metadata.pairing).unwrap_or_default(),
    }
}
