// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale resolution against the built-in catalog and hand-built ones.

use site_content::i18n::{
    text_paths, Fallback, LocaleCatalog, Resolver, TranslationTree, TranslationValue,
};
use site_content::ContentError;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

fn tree(value: serde_json::Value) -> TranslationTree {
    serde_json::from_value(value).expect("translation tree")
}

fn two_locale_catalog() -> LocaleCatalog {
    let mut trees = BTreeMap::new();
    trees.insert(
        "en".to_string(),
        tree(serde_json::json!({
            "nav": { "home": "Home", "blog": "Blog" },
            "footer": { "rights": "All rights reserved." }
        })),
    );
    trees.insert(
        "es".to_string(),
        tree(serde_json::json!({
            "nav": { "blog": "Blog" }
        })),
    );
    LocaleCatalog::new("en", trees).expect("catalog")
}

#[test]
fn test_requested_locale_wins() {
    let catalog = LocaleCatalog::builtin().unwrap();
    let resolver = Resolver::new(&catalog);
    assert_eq!(resolver.resolve("es", "nav.home"), "Inicio");
    assert_eq!(resolver.resolve("en", "nav.home"), "Home");
}

#[test]
fn test_missing_key_falls_back_to_default_locale() {
    let catalog = two_locale_catalog();
    let resolver = Resolver::new(&catalog);
    let resolution = resolver.resolve_traced("es", "nav.home");
    assert_eq!(resolution.text, "Home");
    assert_eq!(resolution.source, Fallback::DefaultLocale);
}

#[test]
fn test_unknown_locale_behaves_like_default() {
    let catalog = LocaleCatalog::builtin().unwrap();
    let resolver = Resolver::new(&catalog);
    for key in text_paths(catalog.default_tree()) {
        assert_eq!(
            resolver.resolve("fr", &key),
            resolver.resolve("en", &key),
            "key {} differs for unknown locale",
            key
        );
    }
}

#[test]
fn test_key_absent_everywhere_returns_key() {
    let catalog = two_locale_catalog();
    let resolver = Resolver::new(&catalog);
    let resolution = resolver.resolve_traced("es", "nav.contact");
    assert_eq!(resolution.text, "nav.contact");
    assert_eq!(resolution.source, Fallback::LiteralKey);
    assert_eq!(resolver.resolve("en", "nav"), "nav");
    assert_eq!(resolver.resolve("en", "nav.home.deeper"), "nav.home.deeper");
}

#[test]
fn test_resolve_object_returns_subtree() {
    let catalog = LocaleCatalog::builtin().unwrap();
    let resolver = Resolver::new(&catalog);
    let nav = resolver.resolve_object("es", "nav").expect("nav object");
    assert_eq!(nav.get("home"), Some(&TranslationValue::from("Inicio")));

    let unknown = resolver.resolve_object("fr", "nav").expect("default nav");
    assert_eq!(unknown.get("home"), Some(&TranslationValue::from("Home")));
}

#[test]
fn test_resolve_object_is_none_for_text_leaf_or_absence() {
    let catalog = two_locale_catalog();
    let resolver = Resolver::new(&catalog);
    assert!(resolver.resolve_object("en", "nav.home").is_none());
    assert!(resolver.resolve_object("en", "cv").is_none());
    // Known locale without the object: no fallback for sub-trees.
    assert!(resolver.resolve_object("es", "footer").is_none());
}

#[test]
fn test_builtin_locales_have_identical_text_keys() {
    let catalog = LocaleCatalog::builtin().unwrap();
    assert_eq!(catalog.missing_keys("es"), Some(Vec::new()));
    assert_eq!(
        text_paths(catalog.tree("en").unwrap()),
        text_paths(catalog.tree("es").unwrap())
    );
}

#[test]
fn test_default_locale_must_exist() {
    let mut trees = BTreeMap::new();
    trees.insert("es".to_string(), TranslationTree::new());
    let err = LocaleCatalog::new("en", trees).unwrap_err();
    assert!(matches!(err, ContentError::InvalidCatalog(_)));
}

#[test]
fn test_catalog_from_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("en.json"),
        r#"{"nav": {"home": "Home"}}"#,
    )
    .unwrap();
    fs::write(dir.path().join("pt-BR.yaml"), "nav:\n  home: Início\n").unwrap();
    fs::write(dir.path().join("README.md"), "not a locale").unwrap();

    let catalog = LocaleCatalog::load_dir(dir.path(), "en").unwrap();
    assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["en", "pt-BR"]);
    let resolver = Resolver::new(&catalog);
    assert_eq!(resolver.resolve("pt-BR", "nav.home"), "Início");
}
