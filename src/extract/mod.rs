// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build-time content extraction.
//!
//! Flattens the locale-scoped content dictionaries (products, FAQ
//! articles, page metadata, image manifests) into the four record
//! collections of a [`SearchIndex`]. Runs offline, once per build per
//! locale.
//!
//! Failure policy: this module never aborts. A missing dictionary yields
//! an empty collection, a missing field an empty string; one bad article
//! cannot take down the rest of its locale.

mod config;
mod flatten;
mod source;

pub use config::{ExtractorConfig, PageSpec};
pub use flatten::flatten_text;
pub use source::{ContentSource, FsContentSource};

use serde_json::Value;

use crate::types::{
    ArticleRecord, AssociatedContent, Category, ContentType, ImageKind, ImageRecord,
    PageRecord, ProductRecord, SearchIndex,
};
use crate::utils::{file_name, truncate_chars};

/// Article excerpts are capped at this many characters.
pub const CONTENT_EXCERPT_CHARS: usize = 500;

/// Build the complete index for one locale.
pub fn extract_index(
    source: &dyn ContentSource,
    config: &ExtractorConfig,
    locale: &str,
) -> SearchIndex {
    SearchIndex {
        products: extract_products(source, config, locale),
        articles: extract_articles(source, config, locale),
        pages: extract_pages(source, config, locale),
        images: extract_images(source, config, locale),
        locale: locale.to_string(),
    }
}

/// Products: whatever keys the catalog dictionary actually has. The
/// catalog is three products today; nothing here assumes that.
pub fn extract_products(
    source: &dyn ContentSource,
    config: &ExtractorConfig,
    locale: &str,
) -> Vec<ProductRecord> {
    let Some(data) = source.load(locale, "products.json") else {
        return Vec::new();
    };
    let Some(catalog) = data.get("products").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut products = Vec::new();
    for (key, entry) in catalog {
        let slug = config
            .product_slugs
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.clone());

        let description = first_text(entry, &[&["description"], &["detail", "description"]]);
        let subtitle = first_text(entry, &[&["subtitle"], &["heroSubtitle"]]);

        let mut features: Vec<String> = Vec::new();
        if let Some(items) = entry
            .pointer("/detail/keyFeatures/items")
            .and_then(Value::as_array)
        {
            features.extend(items.iter().filter_map(Value::as_str).map(String::from));
        }
        for feature_key in ["feature1", "feature2", "feature3"] {
            let feature = text(entry, feature_key);
            if !feature.is_empty() {
                features.push(feature);
            }
        }

        products.push(ProductRecord {
            id: slug.clone(),
            slug: slug.clone(),
            name: text(entry, "name"),
            description,
            subtitle: (!subtitle.is_empty()).then_some(subtitle),
            images: config.product_images.get(&slug).cloned().unwrap_or_default(),
            features,
            locale: locale.to_string(),
        });
    }
    products
}

/// Articles: title/subtitle direct, body flattened to a capped excerpt,
/// category by configured membership.
pub fn extract_articles(
    source: &dyn ContentSource,
    config: &ExtractorConfig,
    locale: &str,
) -> Vec<ArticleRecord> {
    let Some(data) = source.load(locale, "faq.json") else {
        return Vec::new();
    };
    let Some(catalog) = data.get("articles").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut articles = Vec::new();
    for slug in &config.article_slugs {
        let Some(article) = catalog.get(slug) else {
            continue;
        };

        let mut parts: Vec<String> = Vec::new();
        let intro = text(article, "intro");
        if !intro.is_empty() {
            parts.push(intro);
        }
        if let Some(chapters) = article.get("chapters").filter(|c| c.is_array()) {
            let body = flatten_text(chapters);
            if !body.is_empty() {
                parts.push(body);
            }
        }
        let conclusion = text(article, "conclusion");
        if !conclusion.is_empty() {
            parts.push(conclusion);
        }

        let category = if config.category_is_human(slug) {
            Category::Human
        } else {
            Category::Veterinary
        };

        articles.push(ArticleRecord {
            id: slug.clone(),
            slug: slug.clone(),
            title: text(article, "title"),
            subtitle: text(article, "subtitle"),
            content: truncate_chars(&parts.join(" "), CONTENT_EXCERPT_CHARS),
            image: text(article, "image"),
            alt: text(article, "alt"),
            category,
            locale: locale.to_string(),
        });
    }
    articles
}

/// Pages: one record per configured route whose dictionary has `meta`.
pub fn extract_pages(
    source: &dyn ContentSource,
    config: &ExtractorConfig,
    locale: &str,
) -> Vec<PageRecord> {
    let mut pages = Vec::new();
    for spec in &config.pages {
        let Some(data) = source.load(locale, &spec.file) else {
            continue;
        };
        let Some(meta) = data.get("meta").filter(|m| m.is_object()) else {
            continue;
        };
        pages.push(PageRecord {
            id: spec.id.clone(),
            path: spec.path.clone(),
            title: text(meta, "title"),
            description: text(meta, "description"),
            locale: locale.to_string(),
        });
    }
    pages
}

/// Images: product galleries, article hero images, about showcase, site
/// banners — each tagged with a back-reference to its owning content.
pub fn extract_images(
    source: &dyn ContentSource,
    config: &ExtractorConfig,
    locale: &str,
) -> Vec<ImageRecord> {
    let mut images = Vec::new();
    let products_data = source.load(locale, "products.json");
    let faq_data = source.load(locale, "faq.json");
    let about_data = source.load(locale, "about.json");
    let index_data = source.load(locale, "index.json");

    // Product galleries
    if let Some(catalog) = products_data
        .as_ref()
        .and_then(|d| d.get("products"))
        .and_then(Value::as_object)
    {
        for (key, entry) in catalog {
            let slug = config
                .product_slugs
                .get(key)
                .cloned()
                .unwrap_or_else(|| key.clone());
            let name = text(entry, "name");
            let display = if name.is_empty() { slug.clone() } else { name.clone() };
            let gallery = config.product_images.get(&slug).cloned().unwrap_or_default();

            for (i, src) in gallery.into_iter().enumerate() {
                images.push(ImageRecord {
                    id: format!("{}-{}", slug, i),
                    alt: format!("{} - Product image {}", display, i + 1),
                    filename: file_name(&src),
                    src,
                    kind: ImageKind::Product,
                    associated_content: AssociatedContent {
                        kind: ContentType::Product,
                        id: slug.clone(),
                        title: name.clone(),
                        url: format!("/products/{slug}"),
                    },
                    locale: locale.to_string(),
                });
            }
        }
    }

    // Article hero images
    if let Some(catalog) = faq_data
        .as_ref()
        .and_then(|d| d.get("articles"))
        .and_then(Value::as_object)
    {
        for slug in &config.article_slugs {
            let Some(article) = catalog.get(slug) else {
                continue;
            };
            let src = text(article, "image");
            if src.is_empty() {
                continue;
            }
            let title = text(article, "title");
            let alt = {
                let alt = text(article, "alt");
                if alt.is_empty() { title.clone() } else { alt }
            };
            images.push(ImageRecord {
                id: format!("article-{slug}"),
                alt,
                filename: file_name(&src),
                src,
                kind: ImageKind::Article,
                associated_content: AssociatedContent {
                    kind: ContentType::Article,
                    id: slug.clone(),
                    title,
                    url: format!("/faq/{slug}"),
                },
                locale: locale.to_string(),
            });
        }
    }

    // About-page showcase
    if let Some(about) = about_data.as_ref().filter(|d| d.get("showcase").is_some()) {
        let about_title = {
            let title = text_at(about, &["meta", "title"]);
            if title.is_empty() { "About Us".to_string() } else { title }
        };
        for (i, src) in config.showcase_images.iter().enumerate() {
            let alt = text_at(about, &["showcase", "images", &format!("image{}", i + 1), "alt"]);
            images.push(ImageRecord {
                id: format!("about-{i}"),
                src: src.clone(),
                alt,
                filename: file_name(src),
                kind: ImageKind::About,
                associated_content: AssociatedContent {
                    kind: ContentType::Page,
                    id: "about".to_string(),
                    title: about_title.clone(),
                    url: "/about".to_string(),
                },
                locale: locale.to_string(),
            });
        }
    }

    // Site banners: always present, data-independent
    let home_title = {
        let title = index_data
            .as_ref()
            .map(|d| text_at(d, &["meta", "title"]))
            .unwrap_or_default();
        if title.is_empty() { config.site_name.clone() } else { title }
    };
    for (i, src) in config.banner_images.iter().enumerate() {
        images.push(ImageRecord {
            id: format!("banner-{i}"),
            src: src.clone(),
            alt: format!("{} - Banner image {}", config.site_name, i + 1),
            filename: file_name(src),
            kind: ImageKind::Banner,
            associated_content: AssociatedContent {
                kind: ContentType::Page,
                id: "home".to_string(),
                title: home_title.clone(),
                url: "/".to_string(),
            },
            locale: locale.to_string(),
        });
    }

    images
}

/// `value[key]` as text, or "".
fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Nested lookup as text, or "".
fn text_at(value: &Value, path: &[&str]) -> String {
    let mut current = value;
    for key in path {
        match current.get(key) {
            Some(next) => current = next,
            None => return String::new(),
        }
    }
    current.as_str().unwrap_or_default().to_string()
}

/// First non-empty text among several paths, or "". Missing optional
/// fields fall back silently; the extractor never raises on them.
fn first_text(value: &Value, paths: &[&[&str]]) -> String {
    for path in paths {
        let found = text_at(value, path);
        if !found.is_empty() {
            return found;
        }
    }
    String::new()
}
