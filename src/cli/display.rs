// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for query and inspect output.
//!
//! Respects `NO_COLOR` and non-TTY detection for pipelines; otherwise a
//! light touch of ANSI so ranked output reads at a glance.

use sitesearch::{ContentType, SearchIndex, SearchResponse};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(code: &str, text: &str) -> String {
    if color_enabled() {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

fn type_label(t: ContentType) -> &'static str {
    match t {
        ContentType::Product => "product",
        ContentType::Article => "article",
        ContentType::Image => "image",
        ContentType::Page => "page",
    }
}

/// Ranked result listing for the `query` subcommand.
pub fn print_results(response: &SearchResponse, limit: usize) {
    println!(
        "{} result(s) for {} in '{}'",
        response.total,
        paint(BOLD, &format!("\"{}\"", response.query)),
        response.locale
    );

    for (i, result) in response.results.iter().take(limit).enumerate() {
        let relevance = paint(relevance_color(result.relevance), &format!("{:.2}", result.relevance));
        println!(
            "{:>3}. {} {} [{}] {}",
            i + 1,
            relevance,
            paint(BOLD, &result.title),
            type_label(result.result_type),
            paint(DIM, &result.url)
        );
        if let Some(description) = &result.description {
            if !description.is_empty() {
                println!("     {}", paint(DIM, description));
            }
        }
    }

    if response.total > limit {
        println!("{}", paint(DIM, &format!("… {} more", response.total - limit)));
    }
}

fn relevance_color(relevance: f64) -> &'static str {
    if relevance >= 0.8 {
        GREEN
    } else if relevance >= 0.5 {
        CYAN
    } else {
        YELLOW
    }
}

/// Structure summary for the `inspect` subcommand.
pub fn print_inspect(path: &str, index: &SearchIndex, crc32: u32) {
    println!("{}", paint(BOLD, path));
    println!("  locale    {}", index.locale);
    println!("  checksum  {:08x}", crc32);
    println!("  products  {}", index.products.len());
    println!("  articles  {}", index.articles.len());
    println!("  pages     {}", index.pages.len());
    println!("  images    {}", index.images.len());

    for product in &index.products {
        println!(
            "    {} {}",
            paint(CYAN, "•"),
            format_args!("{} ({} images)", product.name, product.images.len())
        );
    }
}
