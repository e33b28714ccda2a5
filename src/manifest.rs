//! Manifest data model for a generated icon set.
//!
//! A `manifest.json` is written next to the icons so downstream tooling
//! (web app manifests, service-worker precache lists) can discover what was
//! produced without globbing the output directory.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a manifest.json file.
#[derive(Serialize, Debug, Clone)]
pub struct ManifestFile {
    /// One entry per emitted icon file.
    pub icons: Vec<IconEntry>,

    /// Versioning and authorship information.
    pub info: Info,
}

/// A single generated icon file.
#[derive(Serialize, Debug, Clone)]
pub struct IconEntry {
    /// The filename of the PNG, relative to the output directory.
    pub filename: String,

    /// Edge length in pixels (icons are square).
    pub size: u32,

    /// Render variant the icon was produced with.
    pub variant: String,
}

/// Versioning and authorship information.
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    pub author: String,
    pub version: u32,
}

impl ManifestFile {
    pub fn new(author: String) -> Self {
        Self {
            icons: Vec::new(),
            info: Info { author, version: 1 },
        }
    }

    pub fn add_icon(&mut self, icon: IconEntry) {
        self.icons.push(icon);
    }
}

impl IconEntry {
    pub fn new(filename: String, size: u32, variant: String) -> Self {
        Self {
            filename,
            size,
            variant,
        }
    }
}

/// Write manifest.json into the output directory.
pub fn write_manifest(out_dir: &Path, icons: Vec<IconEntry>) -> Result<()> {
    let mut contents = ManifestFile::new("clockface-gen".to_string());

    for icon in icons {
        contents.add_icon(icon);
    }

    let manifest_path = out_dir.join("manifest.json");
    let manifest_json =
        serde_json::to_string_pretty(&contents).context("Failed to serialize manifest.json")?;

    std::fs::write(&manifest_path, manifest_json).context("Failed to write manifest.json file")?;

    println!("  ✓ Generated manifest.json");
    Ok(())
}
