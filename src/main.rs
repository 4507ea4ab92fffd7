use std::fs;
use std::sync::Arc;

use clap::Parser;

use sitesearch::{
    run_build, Category, ContentType, ExtractorConfig, FsIndexSource, IndexLoader,
    SearchEngine, SearchFilters, SearchIndex, SortMode,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            input,
            output,
            locales,
            config,
        } => run_build_command(&input, &output, &locales, config.as_deref()),
        Commands::Inspect { file } => inspect_index_file(&file),
        Commands::Query {
            query,
            index,
            locale,
            types,
            categories,
            sort,
            limit,
        } => run_query(&query, &index, &locale, &types, &categories, sort.as_deref(), limit),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_build_command(
    input: &str,
    output: &str,
    locales: &[String],
    config_path: Option<&str>,
) -> Result<(), String> {
    let config = match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("failed to read config {}: {}", path, e))?;
            ExtractorConfig::from_json(&raw)?
        }
        None => ExtractorConfig::default(),
    };

    let locales = if locales.is_empty() {
        config.locales.clone()
    } else {
        locales.to_vec()
    };

    run_build(input, output, &locales, &config).map(|_| ())
}

fn inspect_index_file(file: &str) -> Result<(), String> {
    let bytes = fs::read(file).map_err(|e| format!("failed to read {}: {}", file, e))?;
    let index: SearchIndex = serde_json::from_slice(&bytes)
        .map_err(|e| format!("not a valid index file {}: {}", file, e))?;
    display::print_inspect(file, &index, crc32fast::hash(&bytes));
    Ok(())
}

fn run_query(
    query: &str,
    index_dir: &str,
    locale: &str,
    types: &[String],
    categories: &[String],
    sort: Option<&str>,
    limit: usize,
) -> Result<(), String> {
    let filters = parse_filters(types, categories, sort)?;

    let loader = Arc::new(IndexLoader::new(Box::new(FsIndexSource::new(index_dir))));
    let engine = SearchEngine::new(loader);
    let response = engine.search(query, locale, filters.as_ref());

    display::print_results(&response, limit);
    Ok(())
}

fn parse_filters(
    types: &[String],
    categories: &[String],
    sort: Option<&str>,
) -> Result<Option<SearchFilters>, String> {
    if types.is_empty() && categories.is_empty() && sort.is_none() {
        return Ok(None);
    }

    let parsed_types = if types.is_empty() {
        None
    } else {
        Some(
            types
                .iter()
                .map(|t| match t.as_str() {
                    "product" => Ok(ContentType::Product),
                    "article" => Ok(ContentType::Article),
                    "image" => Ok(ContentType::Image),
                    "page" => Ok(ContentType::Page),
                    other => Err(format!("unknown content type '{}'", other)),
                })
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    let parsed_categories = if categories.is_empty() {
        None
    } else {
        Some(
            categories
                .iter()
                .map(|c| match c.as_str() {
                    "human" => Ok(Category::Human),
                    "veterinary" => Ok(Category::Veterinary),
                    other => Err(format!("unknown category '{}'", other)),
                })
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    let sort_by = match sort {
        None => None,
        Some("relevance") => Some(SortMode::Relevance),
        Some("title") => Some(SortMode::Title),
        Some(other) => return Err(format!("unknown sort mode '{}'", other)),
    };

    Ok(Some(SearchFilters {
        types: parsed_types,
        categories: parsed_categories,
        sort_by,
    }))
}
