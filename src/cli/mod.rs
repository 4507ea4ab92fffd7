// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitesearch command-line interface.
//!
//! Three subcommands: `build` to generate the per-locale index files,
//! `inspect` to examine one, and `query` to run a search against a built
//! index directory — the same loader and engine the site ships, so what
//! you see here is what the search surface gets.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sitesearch",
    about = "Multilingual site-search index builder and query tool",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build per-locale search index JSON from translation dictionaries
    Build {
        /// Input directory containing per-locale content dictionaries
        #[arg(short, long)]
        input: String,

        /// Output directory for <locale>.json files and manifest.json
        #[arg(short, long)]
        output: String,

        /// Locales to build (repeatable); defaults to the configured set
        #[arg(short, long = "locale")]
        locales: Vec<String>,

        /// Path to a JSON extractor-config override
        #[arg(long)]
        config: Option<String>,
    },

    /// Inspect a built <locale>.json index file
    Inspect {
        /// Path to the index file
        file: String,
    },

    /// Query a built index directory
    Query {
        /// Search query text
        query: String,

        /// Directory holding <locale>.json index files
        #[arg(short, long)]
        index: String,

        /// Locale to query
        #[arg(short, long, default_value = "en")]
        locale: String,

        /// Restrict to content types (product, article, image, page)
        #[arg(short, long = "type")]
        types: Vec<String>,

        /// Restrict articles to categories (human, veterinary)
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Sort order: relevance (default) or title
        #[arg(short, long)]
        sort: Option<String>,

        /// Maximum number of results to display
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}
