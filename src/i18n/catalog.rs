// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale catalog: one translation tree per locale plus the default locale.
//!
//! The built-in catalog embeds `locales/en.json` and `locales/es.json` at
//! compile time. Sites with their own locale documents load a directory of
//! `<locale>.json` / `<locale>.yaml` files instead. Either way the catalog
//! is built once and only read afterwards.
//!
//! ## Adding a locale
//!
//! 1. Drop `xx.json` into `locales/` (keys mirror `en.json`)
//! 2. For the built-in catalog, add an `include_str!` entry to `BUILTIN`
//!
//! Missing keys fall back to the default locale, so a new locale can start
//! with a partial document.

use super::locale_id::is_valid_locale_id;
use super::tree::{list_paths, text_paths, walk_path, TranslationTree, TranslationValue};
use crate::error::ContentError;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_LOCALE: &str = "en";

const BUILTIN: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("es", include_str!("../../locales/es.json")),
];

#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCatalog {
    default_locale: String,
    trees: BTreeMap<String, TranslationTree>,
}

impl LocaleCatalog {
    /// Build a catalog, checking that the default locale has a tree.
    pub fn new(
        default_locale: impl Into<String>,
        trees: BTreeMap<String, TranslationTree>,
    ) -> Result<Self, ContentError> {
        let default_locale = default_locale.into();
        if !trees.contains_key(&default_locale) {
            return Err(ContentError::InvalidCatalog(format!(
                "default locale `{}` has no translation tree (available: {})",
                default_locale,
                trees.keys().cloned().collect::<Vec<_>>().join(", ")
            )));
        }
        Ok(Self {
            default_locale,
            trees,
        })
    }

    /// The catalog compiled into the crate (`en` default, `es`).
    pub fn builtin() -> Result<Self, ContentError> {
        Self::builtin_with_default(DEFAULT_LOCALE)
    }

    /// The built-in locale documents with a different default locale.
    pub fn builtin_with_default(default_locale: &str) -> Result<Self, ContentError> {
        let mut trees = BTreeMap::new();
        for (locale, source) in BUILTIN {
            let tree: TranslationTree = serde_json::from_str(source).map_err(|err| {
                ContentError::InvalidCatalog(format!("built-in `{}` document: {}", locale, err))
            })?;
            trees.insert(locale.to_string(), tree);
        }
        Self::new(default_locale, trees)
    }

    /// Load every `<locale>.json|yaml|yml` file in `dir`.
    ///
    /// Files whose stem is not a locale id are skipped with a warning so a
    /// README or schema file can live next to the documents.
    pub fn load_dir(dir: &Path, default_locale: &str) -> Result<Self> {
        let mut trees = BTreeMap::new();
        let entries =
            fs::read_dir(dir).with_context(|| format!("reading locales dir {}", dir.display()))?;

        for entry in entries {
            let entry =
                entry.with_context(|| format!("reading locales dir {}", dir.display()))?;
            let path = entry.path();
            let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
                continue;
            };
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if !matches!(ext, "json" | "yaml" | "yml") {
                continue;
            }
            if !is_valid_locale_id(stem) {
                tracing::warn!(file = %path.display(), "skipping file with non-locale name");
                continue;
            }

            let source = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let tree: TranslationTree = if ext == "json" {
                serde_json::from_str(&source)
                    .with_context(|| format!("parsing {}", path.display()))?
            } else {
                serde_yaml::from_str(&source)
                    .with_context(|| format!("parsing {}", path.display()))?
            };
            if trees.insert(stem.to_string(), tree).is_some() {
                anyhow::bail!("locale `{}` is defined by more than one file in {}", stem, dir.display());
            }
        }

        tracing::info!(
            dir = %dir.display(),
            locales = trees.len(),
            "loaded locale catalog"
        );
        Ok(Self::new(default_locale, trees)?)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn default_tree(&self) -> &TranslationTree {
        // Presence is checked in `new`.
        &self.trees[&self.default_locale]
    }

    pub fn tree(&self, locale: &str) -> Option<&TranslationTree> {
        self.trees.get(locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.trees.contains_key(locale)
    }

    /// Configured locales, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }

    /// Text and list keys the default locale defines that `locale` does not.
    ///
    /// Those keys still render (through fallback) but show default-locale
    /// content; a missing list is a whole CV section in the wrong language.
    /// Returns `None` for a locale outside the catalog.
    pub fn missing_keys(&self, locale: &str) -> Option<Vec<String>> {
        let tree = self.tree(locale)?;
        let default_tree = self.default_tree();
        let missing_text = text_paths(default_tree)
            .into_iter()
            .filter(|path| walk_path(tree, path).and_then(TranslationValue::as_text).is_none());
        let missing_lists = list_paths(default_tree)
            .into_iter()
            .filter(|path| walk_path(tree, path).and_then(TranslationValue::as_list).is_none());
        let mut missing: Vec<String> = missing_text.chain(missing_lists).collect();
        missing.sort();
        Some(missing)
    }
}
