//! The index writer: extract every locale, persist one JSON document each.
//!
//! No merging, no incremental update — a build fully replaces its output.
//! Output is deterministic: re-running over unchanged input produces
//! byte-for-byte identical files, which is what lets build caching and
//! diffing work. The manifest carries a crc32 per emitted file for exactly
//! that purpose.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::extract::{extract_index, ExtractorConfig, FsContentSource};
use crate::types::SearchIndex;

pub const MANIFEST_VERSION: u32 = 1;

/// Per-locale entry in the build manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleSummary {
    pub locale: String,
    pub file: String,
    pub crc32: u32,
    pub products: usize,
    pub articles: usize,
    pub pages: usize,
    pub images: usize,
}

/// `manifest.json`: what the build produced, with checksums.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildManifest {
    pub version: u32,
    pub generated: Vec<LocaleSummary>,
}

/// Totals for the final status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildSummary {
    pub locales_built: usize,
    pub locales_failed: usize,
    pub records: usize,
}

/// Serialize an index exactly the way the writer persists it.
pub fn index_bytes(index: &SearchIndex) -> Result<Vec<u8>, String> {
    let mut bytes = serde_json::to_vec_pretty(index)
        .map_err(|e| format!("failed to serialize index for '{}': {}", index.locale, e))?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn run_build(
    input_dir: &str,
    output_dir: &str,
    locales: &[String],
    config: &ExtractorConfig,
) -> Result<BuildSummary, String> {
    let output_path = Path::new(output_dir);

    // 1. Output directory
    fs::create_dir_all(output_path)
        .map_err(|e| format!("failed to create output dir {}: {}", output_dir, e))?;

    // 2. Extract and write each locale; one bad locale never stops the rest
    let source = FsContentSource::new(input_dir);
    let mut summary = BuildSummary::default();
    let mut generated: Vec<LocaleSummary> = Vec::new();

    for locale in locales {
        let index = extract_index(&source, config, locale);
        let filename = format!("{locale}.json");

        let bytes = match index_bytes(&index) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("⚠️  {err}");
                summary.locales_failed += 1;
                continue;
            }
        };
        let path = output_path.join(&filename);
        if let Err(err) = fs::write(&path, &bytes) {
            eprintln!("⚠️  failed to write {}: {}", path.display(), err);
            summary.locales_failed += 1;
            continue;
        }

        eprintln!(
            "  ✓ {} ({} products, {} articles, {} pages, {} images)",
            filename,
            index.products.len(),
            index.articles.len(),
            index.pages.len(),
            index.images.len()
        );

        summary.locales_built += 1;
        summary.records += index.record_count();
        generated.push(LocaleSummary {
            locale: locale.clone(),
            file: filename,
            crc32: crc32fast::hash(&bytes),
            products: index.products.len(),
            articles: index.articles.len(),
            pages: index.pages.len(),
            images: index.images.len(),
        });
    }

    // 3. Manifest with per-file checksums
    let manifest = BuildManifest {
        version: MANIFEST_VERSION,
        generated,
    };
    let manifest_json = serde_json::to_string_pretty(&manifest)
        .map_err(|e| format!("failed to serialize manifest: {}", e))?;
    let manifest_path = output_path.join("manifest.json");
    fs::write(&manifest_path, format!("{manifest_json}\n"))
        .map_err(|e| format!("failed to write {}: {}", manifest_path.display(), e))?;

    // 4. Final summary
    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} locales │ {} records │ {} failed",
        summary.locales_built, summary.records, summary.locales_failed
    );

    Ok(summary)
}
