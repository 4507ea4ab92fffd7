// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where locale-scoped content dictionaries come from.
//!
//! The schema of these dictionaries belongs to the content/i18n layer; the
//! extractor only asks for "the parsed JSON for `<locale>/<file>`, if it
//! exists". Anything missing or malformed reads as `None` — a single bad
//! dictionary must never abort a multi-locale build.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

pub trait ContentSource {
    fn load(&self, locale: &str, file: &str) -> Option<Value>;
}

/// Reads `<root>/<locale>/<file>` from the translations tree.
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsContentSource { root: root.into() }
    }
}

impl ContentSource for FsContentSource {
    fn load(&self, locale: &str, file: &str) -> Option<Value> {
        let path = self.root.join(locale).join(file);
        let raw = fs::read_to_string(&path).ok()?;
        // Some translation files carry a UTF-8 BOM; serde_json rejects it
        let raw = raw.strip_prefix('\u{FEFF}').unwrap_or(&raw);
        match serde_json::from_str(raw) {
            Ok(value) => Some(value),
            Err(err) => {
                eprintln!("⚠️  skipping {}: {}", path.display(), err);
                None
            }
        }
    }
}
