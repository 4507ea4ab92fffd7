//! Build-pipeline tests: real directories in, real index files out.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use sitesearch::{
    run_build, BuildManifest, ExtractorConfig, FsIndexSource, IndexLoader,
    SearchEngine, SearchIndex, MANIFEST_VERSION,
};
use tempfile::TempDir;

fn write_content_fixture(root: &Path) {
    let en = root.join("en");
    fs::create_dir_all(&en).unwrap();
    fs::write(
        en.join("products.json"),
        r#"{
            "meta": {"title": "Products", "description": "Catalog"},
            "products": {
                "nexus": {
                    "name": "Nexus Dx1",
                    "description": "Fully automated CASA system",
                    "subtitle": "WHO 6th compliant"
                },
                "msqa": {
                    "name": "MSQA-100",
                    "description": "Compact semen quality analyzer"
                }
            }
        }"#,
    )
    .unwrap();
    fs::write(
        en.join("faq.json"),
        r#"{
            "meta": {"title": "FAQ", "description": "Guides"},
            "articles": {
                "faq-human-semen-standards": {
                    "title": "Human semen standards",
                    "subtitle": "WHO reference values",
                    "intro": "Reference limits for semen parameters.",
                    "image": "/faq/human.webp",
                    "alt": "lab bench"
                }
            }
        }"#,
    )
    .unwrap();
    fs::write(
        en.join("index.json"),
        r#"{"meta": {"title": "iSperm Medical", "description": "CASA systems for labs"}}"#,
    )
    .unwrap();
}

fn locales(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn build_writes_locale_files_and_manifest() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_content_fixture(input.path());

    let summary = run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        &locales(&["en", "de"]),
        &ExtractorConfig::default(),
    )
    .unwrap();

    // A locale with no dictionaries still builds; extraction degrades,
    // it does not fail.
    assert_eq!(summary.locales_built, 2);
    assert_eq!(summary.locales_failed, 0);

    let en_bytes = fs::read(output.path().join("en.json")).unwrap();
    let en: SearchIndex = serde_json::from_slice(&en_bytes).unwrap();
    assert_eq!(en.locale, "en");
    assert_eq!(en.products.len(), 2);
    assert_eq!(en.articles.len(), 1);
    assert!(!en.images.is_empty());

    let de: SearchIndex =
        serde_json::from_slice(&fs::read(output.path().join("de.json")).unwrap()).unwrap();
    assert!(de.products.is_empty());
    // site banners are catalog-driven, not content-driven
    assert_eq!(de.images.len(), 3);

    let manifest: BuildManifest =
        serde_json::from_slice(&fs::read(output.path().join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest.version, MANIFEST_VERSION);
    assert_eq!(manifest.generated.len(), 2);
    let en_entry = manifest.generated.iter().find(|e| e.locale == "en").unwrap();
    assert_eq!(en_entry.file, "en.json");
    assert_eq!(en_entry.crc32, crc32fast::hash(&en_bytes));
    assert_eq!(en_entry.products, 2);
}

#[test]
fn rebuild_is_byte_identical() {
    let input = TempDir::new().unwrap();
    write_content_fixture(input.path());
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for output in [&first, &second] {
        run_build(
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
            &locales(&["en"]),
            &ExtractorConfig::default(),
        )
        .unwrap();
    }

    for file in ["en.json", "manifest.json"] {
        let a = fs::read(first.path().join(file)).unwrap();
        let b = fs::read(second.path().join(file)).unwrap();
        assert_eq!(a, b, "{file} differs between identical builds");
    }
}

#[test]
fn built_index_serves_queries() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_content_fixture(input.path());

    run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        &locales(&["en"]),
        &ExtractorConfig::default(),
    )
    .unwrap();

    let loader = Arc::new(IndexLoader::new(Box::new(FsIndexSource::new(
        output.path().to_str().unwrap(),
    ))));
    let engine = SearchEngine::new(loader);

    let response = engine.search("nexus", "en", None);
    assert!(response.total >= 1);
    assert_eq!(response.results[0].title, "Nexus Dx1");
    assert_eq!(response.results[0].url, "/products/nexus-dx1");
}

#[test]
fn malformed_dictionary_is_skipped_not_fatal() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let en = input.path().join("en");
    fs::create_dir_all(&en).unwrap();
    fs::write(en.join("products.json"), "{not valid json").unwrap();

    let summary = run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        &locales(&["en"]),
        &ExtractorConfig::default(),
    )
    .unwrap();

    assert_eq!(summary.locales_built, 1);
    let en: SearchIndex =
        serde_json::from_slice(&fs::read(output.path().join("en.json")).unwrap()).unwrap();
    assert!(en.products.is_empty());
    assert_eq!(en.images.len(), 3);
}

#[test]
fn bom_prefixed_dictionaries_parse() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let en = input.path().join("en");
    fs::create_dir_all(&en).unwrap();
    fs::write(
        en.join("products.json"),
        "\u{feff}{\"products\": {\"nexus\": {\"name\": \"Nexus Dx1\"}}}",
    )
    .unwrap();

    run_build(
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        &locales(&["en"]),
        &ExtractorConfig::default(),
    )
    .unwrap();

    let en: SearchIndex =
        serde_json::from_slice(&fs::read(output.path().join("en.json")).unwrap()).unwrap();
    assert_eq!(en.products.len(), 1);
    assert_eq!(en.products[0].name, "Nexus Dx1");
}
