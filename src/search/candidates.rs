// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate flattening: four record collections in, one scoreable list out.
//!
//! Type and category filters are inclusion filters applied HERE, before any
//! scoring happens. A record that never becomes a candidate can never leak
//! into results no matter how well its text matches.

use crate::scoring::FieldSet;
use crate::types::{ContentType, ResolvedFilters, SearchIndex, SearchResult};

/// One scoreable record, flattened out of whichever collection it came from.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub result_type: ContentType,
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub alt: Option<String>,
    pub url: String,
    pub image: Option<String>,
}

impl Candidate {
    /// The field view the scorer consumes.
    pub fn fields(&self) -> FieldSet<'_> {
        FieldSet {
            title: &self.title,
            description: self.description.as_deref(),
            content: self.content.as_deref(),
            alt: self.alt.as_deref(),
        }
    }

    /// All searchable text joined, for the substring fallback path.
    pub fn haystack(&self) -> String {
        let mut text = self.title.clone();
        for part in [&self.description, &self.content, &self.alt] {
            if let Some(part) = part {
                text.push(' ');
                text.push_str(part);
            }
        }
        text
    }

    pub fn into_result(self, relevance: f64) -> SearchResult {
        SearchResult {
            result_type: self.result_type,
            id: self.id,
            title: self.title,
            description: self.description,
            url: self.url,
            image: self.image,
            alt: self.alt,
            relevance,
        }
    }
}

/// Flatten an index into candidates, honoring the resolved filters.
/// Emission order (products, articles, images, pages) is part of the
/// stable-tie behavior and matches what the index file promises.
pub fn collect(index: &SearchIndex, filters: &ResolvedFilters) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(index.record_count());

    if filters.allows_type(ContentType::Product) {
        for product in &index.products {
            candidates.push(Candidate {
                result_type: ContentType::Product,
                id: product.id.clone(),
                title: product.name.clone(),
                description: Some(product.description.clone()),
                content: product.subtitle.clone(),
                alt: None,
                url: format!("/products/{}", product.slug),
                image: product.images.first().cloned(),
            });
        }
    }

    if filters.allows_type(ContentType::Article) {
        for article in &index.articles {
            if !filters.allows_category(article.category) {
                continue;
            }
            candidates.push(Candidate {
                result_type: ContentType::Article,
                id: article.id.clone(),
                title: article.title.clone(),
                description: Some(article.subtitle.clone()),
                content: Some(article.content.clone()),
                alt: None,
                url: format!("/faq/{}", article.slug),
                image: Some(article.image.clone()),
            });
        }
    }

    if filters.allows_type(ContentType::Image) {
        for image in &index.images {
            candidates.push(Candidate {
                result_type: ContentType::Image,
                id: image.id.clone(),
                title: image.associated_content.title.clone(),
                description: Some(image.alt.clone()),
                content: None,
                alt: Some(image.alt.clone()),
                url: image.associated_content.url.clone(),
                image: Some(image.src.clone()),
            });
        }
    }

    if filters.allows_type(ContentType::Page) {
        for page in &index.pages {
            candidates.push(Candidate {
                result_type: ContentType::Page,
                id: page.id.clone(),
                title: page.title.clone(),
                description: Some(page.description.clone()),
                content: None,
                alt: None,
                url: page.path.clone(),
                image: None,
            });
        }
    }

    candidates
}
