// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The extraction catalog: which slugs, routes, galleries and
//! classifications exist.
//!
//! Everything that used to be a hard-coded constant in the old build
//! script lives here as injectable data, so classification changes (a new
//! product, an article moving between the human and veterinary sets) are
//! config edits, not extraction-logic edits. The `Default` impl carries
//! the current site catalog; a JSON file with the same shape can override
//! it wholesale via [`ExtractorConfig::from_json`].

use std::collections::{BTreeMap, HashSet};

use serde::Deserialize;

/// One well-known top-level route and the dictionary its metadata lives in.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSpec {
    pub id: String,
    pub path: String,
    pub file: String,
}

impl PageSpec {
    fn new(id: &str, path: &str, file: &str) -> Self {
        PageSpec {
            id: id.to_string(),
            path: path.to_string(),
            file: file.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractorConfig {
    /// Locales to build when the caller does not narrow the set.
    pub locales: Vec<String>,
    /// products.json key → URL slug. Products not listed here keep their
    /// key as slug, so an added product still gets indexed.
    pub product_slugs: BTreeMap<String, String>,
    /// URL slug → gallery image paths.
    pub product_images: BTreeMap<String, Vec<String>>,
    /// Known FAQ article slugs, in site display order.
    pub article_slugs: Vec<String>,
    /// Article slugs classified `human`; everything else is `veterinary`.
    pub human_articles: HashSet<String>,
    /// Well-known top-level routes.
    pub pages: Vec<PageSpec>,
    /// About-page showcase image paths.
    pub showcase_images: Vec<String>,
    /// Site banner image paths.
    pub banner_images: Vec<String>,
    /// Display name used for synthesized banner alt text.
    pub site_name: String,
}

impl ExtractorConfig {
    /// Parse a config override from JSON (same field names, camelCase).
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("invalid extractor config: {e}"))
    }

    pub fn category_is_human(&self, slug: &str) -> bool {
        self.human_articles.contains(slug)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| -> Vec<String> {
            items.iter().map(ToString::to_string).collect()
        };

        let mut product_slugs = BTreeMap::new();
        product_slugs.insert("nexus".to_string(), "nexus-dx1".to_string());
        product_slugs.insert("msqa".to_string(), "msqa-100".to_string());
        product_slugs.insert("sqavet".to_string(), "sqa-6100vet".to_string());

        let mut product_images = BTreeMap::new();
        product_images.insert(
            "nexus-dx1".to_string(),
            owned(&[
                "/nexus-dx1-cover.webp",
                "/nexus-dx1.webp",
                "/nexus-dx1-2.webp",
                "/nexus-dx1-3.webp",
                "/nexus-dx1-4.webp",
            ]),
        );
        product_images.insert(
            "msqa-100".to_string(),
            owned(&[
                "/MSQA-100/msqa-100-cover.webp",
                "/MSQA-100/msqa-100-1.webp",
                "/MSQA-100/msqa-100-2.webp",
            ]),
        );
        product_images.insert(
            "sqa-6100vet".to_string(),
            owned(&[
                "/sqa-6100vet-cover.webp",
                "/sqa-6100vet-1.webp",
                "/sqa-6100vet-2.webp",
            ]),
        );

        let article_slugs = owned(&[
            "faq-human-semen-standards",
            "who-6th-edition-semen-analysis-standards",
            "iso-23162-2021-laboratory-competence-guide",
            "eshre-guidelines-clinical-semen-examination",
            "asrm-male-infertility-evaluation-protocols",
            "faq-bull-breeding-soundness",
            "faq-canine-semen-analysis",
            "faq-poultry-semen-analysis",
            "faq-stallion-semen-analysis",
            "faq-camelid-andrology",
            "faq-fish-semen-analysis",
            "faq-ram-breeding-soundness",
            "faq-boar-semen-evaluation",
        ]);

        let human_articles: HashSet<String> = owned(&[
            "faq-human-semen-standards",
            "who-6th-edition-semen-analysis-standards",
            "iso-23162-2021-laboratory-competence-guide",
            "eshre-guidelines-clinical-semen-examination",
            "asrm-male-infertility-evaluation-protocols",
        ])
        .into_iter()
        .collect();

        ExtractorConfig {
            locales: owned(&[
                "en", "es", "ar", "de", "it", "pt", "ru", "tr", "fr", "pl", "nl", "ko",
                "ja", "vi", "id", "uk", "bg", "ro",
            ]),
            product_slugs,
            product_images,
            article_slugs,
            human_articles,
            pages: vec![
                PageSpec::new("home", "/", "index.json"),
                PageSpec::new("about", "/about", "about.json"),
                PageSpec::new("contact", "/contact", "contact.json"),
                PageSpec::new("products", "/products", "products.json"),
                PageSpec::new("faq", "/faq", "faq.json"),
            ],
            showcase_images: owned(&[
                "/About%20us%20(1).webp",
                "/About%20us%20(2).webp",
                "/About%20Us%202.webp",
                "/About%20Us%204.webp",
                "/About%20Us%205.webp",
            ]),
            banner_images: owned(&[
                "/banner%20(1).webp",
                "/banner%20(2).webp",
                "/banner%20(3).webp",
            ]),
            site_name: "iSperm Medical".to_string(),
        }
    }
}
