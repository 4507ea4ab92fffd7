//! Shared fixtures for integration and property tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sitesearch::{
    ArticleRecord, AssociatedContent, Category, ContentType, ImageKind, ImageRecord,
    IndexLoader, IndexSource, PageRecord, ProductRecord, SearchEngine, SearchIndex,
};

pub fn product(slug: &str, name: &str, description: &str) -> ProductRecord {
    ProductRecord {
        id: slug.to_string(),
        slug: slug.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        subtitle: None,
        images: vec![format!("/{slug}-cover.webp")],
        features: Vec::new(),
        locale: "en".to_string(),
    }
}

pub fn article(slug: &str, title: &str, content: &str, category: Category) -> ArticleRecord {
    ArticleRecord {
        id: slug.to_string(),
        slug: slug.to_string(),
        title: title.to_string(),
        subtitle: format!("{title} subtitle"),
        content: content.to_string(),
        image: format!("/faq/{slug}.webp"),
        alt: title.to_string(),
        category,
        locale: "en".to_string(),
    }
}

pub fn page(id: &str, path: &str, title: &str, description: &str) -> PageRecord {
    PageRecord {
        id: id.to_string(),
        path: path.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        locale: "en".to_string(),
    }
}

pub fn image(id: &str, alt: &str, owner: &AssociatedContent) -> ImageRecord {
    ImageRecord {
        id: id.to_string(),
        src: format!("/{id}.webp"),
        alt: alt.to_string(),
        filename: format!("{id}.webp"),
        kind: ImageKind::Product,
        associated_content: owner.clone(),
        locale: "en".to_string(),
    }
}

/// A small but representative English index: three products, a mixed set
/// of articles, the standard pages, and a product image.
pub fn sample_index() -> SearchIndex {
    let nexus_owner = AssociatedContent {
        kind: ContentType::Product,
        id: "nexus-dx1".to_string(),
        title: "Nexus Dx1".to_string(),
        url: "/products/nexus-dx1".to_string(),
    };
    SearchIndex {
        products: vec![
            product("nexus-dx1", "Nexus Dx1", "Fully automated CASA system"),
            product("msqa-100", "MSQA-100", "Compact semen quality analyzer"),
            product("sqa-6100vet", "SQA-6100Vet", "Veterinary semen analyzer"),
        ],
        articles: vec![
            article(
                "faq-human-semen-standards",
                "Human semen standards",
                "WHO reference limits for volume, motility and morphology",
                Category::Human,
            ),
            article(
                "faq-canine-semen-analysis",
                "Canine semen analysis",
                "Motility, concentration and morphology for dogs",
                Category::Veterinary,
            ),
            article(
                "faq-bull-breeding-soundness",
                "Bull breeding soundness",
                "Evaluation protocols for beef and dairy herds",
                Category::Veterinary,
            ),
        ],
        pages: vec![
            page("home", "/", "iSperm Medical", "CASA systems for labs"),
            page("about", "/about", "About Us", "Company history and mission"),
        ],
        images: vec![image("nexus-dx1-0", "Nexus Dx1 - Product image 1", &nexus_owner)],
        locale: "en".to_string(),
    }
}

/// Source serving a fixed index and counting fetches.
pub struct CountingSource {
    index: SearchIndex,
    fetches: Arc<AtomicUsize>,
}

impl IndexSource for CountingSource {
    fn fetch(&self, _locale: &str) -> Result<SearchIndex, String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.index.clone())
    }
}

/// Source that always fails, like a 500 from the static host.
pub struct FailingSource;

impl IndexSource for FailingSource {
    fn fetch(&self, locale: &str) -> Result<SearchIndex, String> {
        Err(format!("HTTP 500 fetching {locale}.json"))
    }
}

pub fn loader_with(index: SearchIndex) -> Arc<IndexLoader> {
    Arc::new(IndexLoader::new(Box::new(CountingSource {
        index,
        fetches: Arc::new(AtomicUsize::new(0)),
    })))
}

pub fn engine_with(index: SearchIndex) -> SearchEngine {
    SearchEngine::new(loader_with(index))
}

/// Engine plus a handle on how many times the source was fetched.
pub fn engine_and_fetch_count(index: SearchIndex) -> (SearchEngine, Arc<AtomicUsize>) {
    let fetches = Arc::new(AtomicUsize::new(0));
    let loader = Arc::new(IndexLoader::new(Box::new(CountingSource {
        index,
        fetches: Arc::clone(&fetches),
    })));
    (SearchEngine::new(loader), fetches)
}

pub fn failing_engine() -> SearchEngine {
    SearchEngine::new(Arc::new(IndexLoader::new(Box::new(FailingSource))))
}
