// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key-path lookup with locale fallback.
//!
//! A string lookup tries an ordered list of strategies and takes the first
//! hit:
//!
//! 1. [`Fallback::RequestedLocale`]: the requested locale's tree, or the
//!    default locale's tree when the locale is not configured
//! 2. [`Fallback::DefaultLocale`]: the default locale's tree, skipped when
//!    step 1 already walked it
//! 3. [`Fallback::LiteralKey`]: the key path itself
//!
//! The last step always succeeds, so [`Resolver::resolve`] never fails and
//! never returns empty for a non-empty key. Sub-tree lookups
//! ([`Resolver::resolve_object`]) do not fall back: callers that need a
//! composite object decide what absence means.

use super::catalog::LocaleCatalog;
use super::tree::{walk_path, TranslationTree, TranslationValue};

/// One step of the string fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    RequestedLocale,
    DefaultLocale,
    LiteralKey,
}

impl Fallback {
    pub const CHAIN: [Fallback; 3] = [
        Fallback::RequestedLocale,
        Fallback::DefaultLocale,
        Fallback::LiteralKey,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Fallback::RequestedLocale => "requested locale",
            Fallback::DefaultLocale => "default locale",
            Fallback::LiteralKey => "literal key",
        }
    }
}

/// Where a resolved string came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub text: &'a str,
    pub source: Fallback,
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
    catalog: &'c LocaleCatalog,
}

impl<'c> Resolver<'c> {
    pub fn new(catalog: &'c LocaleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c LocaleCatalog {
        self.catalog
    }

    /// The tree a locale reads from: its own, or the default locale's.
    pub fn translations(&self, locale: &str) -> &'c TranslationTree {
        self.catalog
            .tree(locale)
            .unwrap_or_else(|| self.catalog.default_tree())
    }

    /// Display string for `key_path` in `locale`.
    ///
    /// ```
    /// use site_content::i18n::{LocaleCatalog, Resolver};
    /// let catalog = LocaleCatalog::builtin().unwrap();
    /// let resolver = Resolver::new(&catalog);
    /// assert_eq!(resolver.resolve("en", "nav.home"), "Home");
    /// assert_eq!(resolver.resolve("es", "nav.home"), "Inicio");
    /// assert_eq!(resolver.resolve("fr", "nav.home"), "Home");
    /// assert_eq!(resolver.resolve("es", "no.such.key"), "no.such.key");
    /// ```
    pub fn resolve<'k>(&self, locale: &str, key_path: &'k str) -> &'k str
    where
        'c: 'k,
    {
        self.resolve_traced(locale, key_path).text
    }

    /// Like [`resolve`](Self::resolve), also reporting which step answered.
    pub fn resolve_traced<'k>(&self, locale: &str, key_path: &'k str) -> Resolution<'k>
    where
        'c: 'k,
    {
        for step in Fallback::CHAIN {
            if let Some(text) = self.attempt(step, locale, key_path) {
                if step != Fallback::RequestedLocale {
                    tracing::debug!(locale, key = key_path, ?step, "translation fell back");
                }
                return Resolution { text, source: step };
            }
        }
        // `LiteralKey` always answers.
        Resolution {
            text: key_path,
            source: Fallback::LiteralKey,
        }
    }

    /// Run a single fallback step in isolation.
    pub fn attempt<'k>(&self, step: Fallback, locale: &str, key_path: &'k str) -> Option<&'k str>
    where
        'c: 'k,
    {
        match step {
            Fallback::RequestedLocale => text_at(self.translations(locale), key_path),
            Fallback::DefaultLocale => {
                if self.reads_default_tree(locale) {
                    None
                } else {
                    text_at(self.catalog.default_tree(), key_path)
                }
            }
            Fallback::LiteralKey => Some(key_path),
        }
    }

    /// Sub-tree at `key_path`, without falling back to the default locale.
    ///
    /// Unknown locales read the default tree, as for string lookups. Paths
    /// ending on text or a list, or not resolving at all, give `None`.
    pub fn resolve_object(&self, locale: &str, key_path: &str) -> Option<&'c TranslationTree> {
        walk_path(self.translations(locale), key_path).and_then(TranslationValue::as_tree)
    }

    /// Raw node at `key_path` in the locale's own tree, of any shape.
    pub fn resolve_value(&self, locale: &str, key_path: &str) -> Option<&'c TranslationValue> {
        walk_path(self.translations(locale), key_path)
    }

    fn reads_default_tree(&self, locale: &str) -> bool {
        locale == self.catalog.default_locale() || !self.catalog.contains(locale)
    }
}

fn text_at<'t>(tree: &'t TranslationTree, key_path: &str) -> Option<&'t str> {
    walk_path(tree, key_path).and_then(TranslationValue::as_text)
}
