// SPDX-License-Identifier: PMPL-1.0-or-later

//! `site-content check`: catalog coverage and content validation in one
//! pass, printed as a checklist.

use crate::categories::CategoryTable;
use crate::config::SiteConfig;
use crate::content::{scan_content_dir, Outcome, ScanReport, ValidatedRecord};
use crate::cv::assemble_cv;
use crate::i18n::{language_name, LocaleCatalog, Resolver};
use anyhow::{anyhow, Result};
use colored::*;

/// Missing keys listed per locale before the list is cut short.
const MISSING_KEY_PREVIEW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: String,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

/// Run every check and print the results; fails if any check errored.
pub fn run_check(
    config: &SiteConfig,
    catalog: &LocaleCatalog,
    categories: &CategoryTable,
) -> Result<()> {
    println!("{}", "site-content check".bold());

    let scan = if config.content_dir.is_dir() {
        Some(scan_content_dir(
            &config.content_dir,
            &config.validator_options(),
        )?)
    } else {
        None
    };

    let mut checks = vec![Diagnostic::ok(
        "config",
        format!(
            "default locale `{}`, strict fields {}",
            config.default_locale, config.strict_fields
        ),
    )];
    checks.extend(catalog_checks(catalog, categories));
    match &scan {
        Some(scan) => checks.extend(content_checks(scan, catalog, categories)),
        None => checks.push(Diagnostic::warning(
            "content directory",
            format!("{} missing, content not checked", config.content_dir.display()),
        )),
    }

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("check reported issues"))
    } else {
        Ok(())
    }
}

/// Coverage of every locale against the default one, plus CV presence.
pub fn catalog_checks(catalog: &LocaleCatalog, categories: &CategoryTable) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    let locales: Vec<&str> = catalog.locales().collect();
    checks.push(Diagnostic::ok(
        "locale catalog",
        format!("{} locale(s): {}", locales.len(), locales.join(", ")),
    ));

    let resolver = Resolver::new(catalog);
    for locale in &locales {
        let label = format!(
            "locale {} ({})",
            locale,
            language_name(locale).unwrap_or("unknown language")
        );

        if *locale != catalog.default_locale() {
            let missing = catalog.missing_keys(locale).unwrap_or_default();
            if missing.is_empty() {
                checks.push(Diagnostic::ok(label.clone(), "all keys translated".to_string()));
            } else {
                let preview: Vec<&str> = missing
                    .iter()
                    .take(MISSING_KEY_PREVIEW)
                    .map(String::as_str)
                    .collect();
                let more = missing.len().saturating_sub(MISSING_KEY_PREVIEW);
                let suffix = if more > 0 {
                    format!(" (+{} more)", more)
                } else {
                    String::new()
                };
                checks.push(Diagnostic::warning(
                    label.clone(),
                    format!(
                        "{} key(s) fall back to `{}`: {}{}",
                        missing.len(),
                        catalog.default_locale(),
                        preview.join(", "),
                        suffix
                    ),
                ));
            }
        }

        if let Err(err) = assemble_cv(&resolver, locale) {
            checks.push(Diagnostic::error(label, err.to_string()));
        }
    }

    for locale in categories.overlay_locales() {
        if !catalog.contains(locale) {
            checks.push(Diagnostic::warning(
                "category overlays",
                format!("overlay locale `{}` is not in the catalog", locale),
            ));
        }
    }
    checks
}

/// One entry per rejected file, cross-references for valid blog posts,
/// and a summary line.
pub fn content_checks(
    scan: &ScanReport,
    catalog: &LocaleCatalog,
    categories: &CategoryTable,
) -> Vec<Diagnostic> {
    let mut checks = Vec::new();

    for entry in &scan.entries {
        let label = entry.path.display().to_string();
        match &entry.outcome {
            Outcome::Valid(record) => {
                if !catalog.contains(record.locale()) {
                    checks.push(Diagnostic::warning(
                        label.clone(),
                        format!("locale `{}` is not in the catalog", record.locale()),
                    ));
                }
                if let ValidatedRecord::Blog(post) = record {
                    match categories.category_by_id(catalog.default_locale(), &post.category) {
                        None => checks.push(Diagnostic::error(
                            label,
                            format!("unknown category `{}`", post.category),
                        )),
                        Some(category) => {
                            if let Some(sub) = &post.subcategory {
                                if category.subcategory(sub).is_none() {
                                    checks.push(Diagnostic::error(
                                        label,
                                        format!(
                                            "unknown subcategory `{}` in `{}`",
                                            sub, post.category
                                        ),
                                    ));
                                }
                            }
                        }
                    }
                }
            }
            Outcome::Invalid(err) => checks.push(Diagnostic::error(label, err.to_string())),
            Outcome::Unreadable(err) => checks.push(Diagnostic::error(label, err.clone())),
        }
    }

    let valid = scan.valid().count();
    checks.push(Diagnostic::ok(
        "content records",
        format!("{} of {} valid", valid, scan.entries.len()),
    ));
    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{validate, ContentKind, RawValue, ScanEntry};
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn blog_entry(category: &str, subcategory: Option<&str>) -> ScanEntry {
        let mut record = serde_json::json!({
            "title": "T",
            "description": "D",
            "category": category,
        });
        if let Some(sub) = subcategory {
            record["subcategory"] = serde_json::json!(sub);
        }
        let mut raw = RawValue::from_json(record);
        if let RawValue::Map(map) = &mut raw {
            map.insert(
                "pubDate".to_string(),
                RawValue::Date(chrono::DateTime::default()),
            );
        }
        ScanEntry {
            path: PathBuf::from(format!("blog/{}.md", category)),
            kind: ContentKind::Blog,
            outcome: Outcome::Valid(validate(&raw, ContentKind::Blog).unwrap()),
        }
    }

    #[test]
    fn builtin_catalog_is_clean() {
        let catalog = LocaleCatalog::builtin().unwrap();
        let checks = catalog_checks(&catalog, &CategoryTable::builtin());
        assert!(checks.iter().all(|check| check.level == Level::Ok), "{:?}", checks);
    }

    #[test]
    fn locale_without_cv_is_an_error() {
        let mut trees = BTreeMap::new();
        trees.insert(
            "en".to_string(),
            serde_json::from_str(r#"{"cv": {"name": "Ada"}, "nav": {"home": "Home"}}"#).unwrap(),
        );
        trees.insert("es".to_string(), BTreeMap::new());
        let catalog = LocaleCatalog::new("en", trees).unwrap();
        let checks = catalog_checks(&catalog, &CategoryTable::builtin());
        let es: Vec<_> = checks
            .iter()
            .filter(|check| check.label.starts_with("locale es"))
            .collect();
        assert_eq!(es.len(), 2);
        assert_eq!(es[0].level, Level::Warn);
        assert!(es[0].detail.contains("cv.name"));
        assert_eq!(es[1].level, Level::Error);
    }

    #[test]
    fn unknown_categories_are_reported() {
        let catalog = LocaleCatalog::builtin().unwrap();
        let scan = ScanReport {
            entries: vec![
                blog_entry("cloud", Some("azure")),
                blog_entry("gaming", None),
                blog_entry("dev", Some("rust")),
            ],
        };
        let checks = content_checks(&scan, &catalog, &CategoryTable::builtin());
        let errors: Vec<_> = checks
            .iter()
            .filter(|check| check.level == Level::Error)
            .map(|check| check.detail.as_str())
            .collect();
        assert_eq!(
            errors,
            vec!["unknown category `gaming`", "unknown subcategory `rust` in `dev`"]
        );
        assert_eq!(checks.last().unwrap().detail, "3 of 3 valid");
    }
}
