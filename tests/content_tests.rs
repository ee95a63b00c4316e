// SPDX-License-Identifier: PMPL-1.0-or-later

//! CV assembly, category overlays and content directory scans.

use site_content::categories::{CategoryOverlay, CategoryTable};
use site_content::content::{
    load_record, scan_content_dir, ContentKind, Outcome, ValidatedRecord, ValidatorOptions,
};
use site_content::cv::{assemble_cv, assemble_cv_with, CvDefaults};
use site_content::i18n::{LocaleCatalog, Resolver};
use site_content::ContentError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_builtin_cv_assembles_in_both_locales() {
    let catalog = LocaleCatalog::builtin().unwrap();
    let resolver = Resolver::new(&catalog);

    let en = assemble_cv(&resolver, "en").unwrap();
    let es = assemble_cv(&resolver, "es").unwrap();
    assert_eq!(en.name, "Jonathan Rodriguez");
    assert_eq!(en.name, es.name);
    assert_ne!(en.summary, es.summary);
    assert_eq!(en.work.len(), es.work.len());
    assert_eq!(en.work[0].end, None);
    assert_eq!(en.contact.social.len(), 2);
    assert!(!en.skills.is_empty());
}

#[test]
fn test_unknown_locale_cv_is_default_cv() {
    let catalog = LocaleCatalog::builtin().unwrap();
    let resolver = Resolver::new(&catalog);
    assert_eq!(
        assemble_cv(&resolver, "de").unwrap(),
        assemble_cv(&resolver, "en").unwrap()
    );
}

#[test]
fn test_cv_missing_for_locale_names_locale() {
    let mut trees = BTreeMap::new();
    trees.insert(
        "en".to_string(),
        serde_json::from_str(r#"{"cv": {"name": "Ada"}}"#).unwrap(),
    );
    trees.insert(
        "es".to_string(),
        serde_json::from_str(r#"{"nav": {"home": "Inicio"}}"#).unwrap(),
    );
    let catalog = LocaleCatalog::new("en", trees).unwrap();
    let err = assemble_cv(&Resolver::new(&catalog), "es").unwrap_err();
    assert!(matches!(
        err,
        ContentError::MissingLocaleData { ref locale, .. } if locale == "es"
    ));
    assert!(err.to_string().contains("`es`"));
}

#[test]
fn test_custom_defaults_fill_gaps() {
    let mut trees = BTreeMap::new();
    trees.insert(
        "en".to_string(),
        serde_json::from_str(r#"{"cv": {"title": "Engineer"}}"#).unwrap(),
    );
    let catalog = LocaleCatalog::new("en", trees).unwrap();
    let defaults = CvDefaults {
        name: "Grace".to_string(),
        social: Vec::new(),
        ..CvDefaults::default()
    };
    let cv = assemble_cv_with(&Resolver::new(&catalog), "en", &defaults).unwrap();
    assert_eq!(cv.name, "Grace");
    assert_eq!(cv.title, "Engineer");
    assert!(cv.contact.social.is_empty());
}

#[test]
fn test_category_order_is_locale_independent() {
    let table = CategoryTable::builtin();
    let en = table.localized("en");
    let es = table.localized("es");
    let fr = table.localized("fr");
    let ids = |list: &[site_content::categories::CategoryDescriptor]| {
        list.iter().map(|c| c.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&en), ids(&es));
    assert_eq!(ids(&en), ids(&fr));
    assert_eq!(en, fr);

    assert_eq!(es[1].name, "Ciberseguridad");
    assert_eq!(es[1].icon, en[1].icon);
    assert_eq!(es[1].keywords, en[1].keywords);
    let offensive = table
        .subcategory_by_id("es", "cybersecurity", "offensive")
        .unwrap();
    assert_eq!(offensive.name, "Seguridad Ofensiva");
}

#[test]
fn test_meta_description_falls_back_to_description() {
    let mut base = CategoryTable::builtin().base().to_vec();
    base[0].seo_description = None;
    let table = CategoryTable::new(base).with_overlay(
        "es",
        "cloud",
        CategoryOverlay {
            description: Some("Nube".to_string()),
            ..Default::default()
        },
    );
    let cloud = table.category_by_id("es", "cloud").unwrap();
    assert_eq!(cloud.meta_description(), "Nube");
}

#[test]
fn test_scan_reports_each_file() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "blog/en/azure.md",
        "---\ntitle: Azure\ndescription: Intro\npubDate: 2024-02-01\ncategory: cloud\nvideo: https://youtu.be/abc\n---\nSome words here.\n",
    );
    write(
        dir.path(),
        "blog/es/roto.md",
        "---\ntitle: Roto\ndescription: Sin fecha\ncategory: cloud\nlocale: es\n---\n",
    );
    write(
        dir.path(),
        "cv/work.yaml",
        "type: work\ncompany: Acme\nlink: https://acme.test\ntitle: Engineer\nstart: '2020'\nend: null\ndescription: Things\n",
    );
    write(dir.path(), "cv/skills.json", r#"{"type": "skills", "skills": ["Rust"]}"#);
    write(dir.path(), "cv/broken.json", "{ not json");
    write(dir.path(), "blog/notes.txt", "ignored");

    let report = scan_content_dir(dir.path(), &ValidatorOptions::default()).unwrap();
    assert_eq!(report.entries.len(), 5);
    assert_eq!(report.valid().count(), 3);
    assert!(!report.is_clean());

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 2);
    assert!(failures[0].path.ends_with("blog/es/roto.md"));
    match &failures[0].outcome {
        Outcome::Invalid(err) => assert_eq!(err.violated_fields(), vec!["pubDate"]),
        other => panic!("expected invalid, got {:?}", other),
    }
    assert!(failures[1].path.ends_with("cv/broken.json"));
    assert!(matches!(failures[1].outcome, Outcome::Unreadable(_)));
    assert_eq!(failures[1].kind, ContentKind::Cv);
}

#[test]
fn test_loaded_post_keeps_body_and_video() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "blog/post.md",
        "---\ntitle: Video\ndescription: D\npubDate: 2024-02-01\ncategory: dev\nvideo: https://youtu.be/abc\n---\none two three\n",
    );
    let loaded = load_record(&dir.path().join("blog/post.md")).unwrap();
    assert_eq!(loaded.body, "one two three\n");
    let record = site_content::content::validate(&loaded.record, ContentKind::Blog).unwrap();
    let ValidatedRecord::Blog(post) = record else {
        panic!("expected a blog post");
    };
    assert_eq!(
        post.video_embed_url().as_deref(),
        Some("https://www.youtube-nocookie.com/embed/abc")
    );
}
