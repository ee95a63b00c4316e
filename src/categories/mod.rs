// SPDX-License-Identifier: PMPL-1.0-or-later

//! Blog categories with per-locale display text.
//!
//! Category ids, icons, keywords and order are defined once with English
//! text. Translations are overlays keyed by `(locale, category id)` that
//! may replace `name`, `description` and `seo_description`, and per
//! subcategory id its `name` and `description`. Each field resolves
//! requested overlay -> English overlay -> base text, so a partial overlay
//! is fine. Locales never reorder anything.

mod data;

use serde::Serialize;
use std::collections::BTreeMap;

/// Overlay locale consulted when the requested one has no entry.
pub const OVERLAY_FALLBACK_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    pub keywords: Vec<String>,
    pub subcategories: Vec<SubcategoryDescriptor>,
}

impl CategoryDescriptor {
    pub fn subcategory(&self, id: &str) -> Option<&SubcategoryDescriptor> {
        self.subcategories.iter().find(|sub| sub.id == id)
    }

    /// SEO description, or the plain description when there is none.
    pub fn meta_description(&self) -> &str {
        self.seo_description.as_deref().unwrap_or(&self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubcategoryOverlay {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryOverlay {
    pub name: Option<String>,
    pub description: Option<String>,
    pub seo_description: Option<String>,
    pub subcategories: BTreeMap<String, SubcategoryOverlay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    base: Vec<CategoryDescriptor>,
    overlays: BTreeMap<(String, String), CategoryOverlay>,
}

impl CategoryTable {
    pub fn new(base: Vec<CategoryDescriptor>) -> Self {
        Self {
            base,
            overlays: BTreeMap::new(),
        }
    }

    /// The site's four categories with their Spanish overlays.
    pub fn builtin() -> Self {
        let base = data::CATEGORIES
            .iter()
            .map(|def| CategoryDescriptor {
                id: def.id.to_string(),
                name: def.name.to_string(),
                description: def.description.to_string(),
                icon: def.icon.to_string(),
                seo_description: def.seo_description.map(str::to_string),
                keywords: def.keywords.iter().map(|kw| kw.to_string()).collect(),
                subcategories: def
                    .subcategories
                    .iter()
                    .map(|sub| SubcategoryDescriptor {
                        id: sub.id.to_string(),
                        name: sub.name.to_string(),
                        description: sub.description.to_string(),
                    })
                    .collect(),
            })
            .collect();

        let mut table = Self::new(base);
        for def in data::OVERLAYS {
            let overlay = CategoryOverlay {
                name: def.name.map(str::to_string),
                description: def.description.map(str::to_string),
                seo_description: def.seo_description.map(str::to_string),
                subcategories: def
                    .subcategories
                    .iter()
                    .map(|(id, name, description)| {
                        (
                            id.to_string(),
                            SubcategoryOverlay {
                                name: name.map(str::to_string),
                                description: description.map(str::to_string),
                            },
                        )
                    })
                    .collect(),
            };
            table.insert_overlay(def.locale, def.category, overlay);
        }
        table
    }

    pub fn insert_overlay(&mut self, locale: &str, category_id: &str, overlay: CategoryOverlay) {
        self.overlays
            .insert((locale.to_string(), category_id.to_string()), overlay);
    }

    pub fn with_overlay(mut self, locale: &str, category_id: &str, overlay: CategoryOverlay) -> Self {
        self.insert_overlay(locale, category_id, overlay);
        self
    }

    /// Untranslated descriptors, in display order.
    pub fn base(&self) -> &[CategoryDescriptor] {
        &self.base
    }

    /// Locales with at least one overlay entry.
    pub fn overlay_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self
            .overlays
            .keys()
            .map(|(locale, _)| locale.as_str())
            .collect();
        locales.dedup();
        locales
    }

    /// All categories with `locale` text merged in.
    pub fn localized(&self, locale: &str) -> Vec<CategoryDescriptor> {
        self.base
            .iter()
            .map(|category| self.localize(category, locale))
            .collect()
    }

    pub fn category_by_id(&self, locale: &str, id: &str) -> Option<CategoryDescriptor> {
        self.base
            .iter()
            .find(|category| category.id == id)
            .map(|category| self.localize(category, locale))
    }

    pub fn subcategory_by_id(
        &self,
        locale: &str,
        category_id: &str,
        subcategory_id: &str,
    ) -> Option<SubcategoryDescriptor> {
        self.category_by_id(locale, category_id)?
            .subcategories
            .into_iter()
            .find(|sub| sub.id == subcategory_id)
    }

    fn overlay_chain(&self, locale: &str, category_id: &str) -> Vec<&CategoryOverlay> {
        let mut chain: Vec<&CategoryOverlay> = Vec::with_capacity(2);
        for candidate in [locale, OVERLAY_FALLBACK_LOCALE] {
            if let Some(overlay) = self
                .overlays
                .get(&(candidate.to_string(), category_id.to_string()))
            {
                if !chain.iter().any(|seen| std::ptr::eq(*seen, overlay)) {
                    chain.push(overlay);
                }
            }
        }
        chain
    }

    fn localize(&self, base: &CategoryDescriptor, locale: &str) -> CategoryDescriptor {
        let chain = self.overlay_chain(locale, &base.id);
        let subcategories = base
            .subcategories
            .iter()
            .map(|sub| {
                let sub_overlays: Vec<&SubcategoryOverlay> = chain
                    .iter()
                    .filter_map(|overlay| overlay.subcategories.get(&sub.id))
                    .collect();
                SubcategoryDescriptor {
                    id: sub.id.clone(),
                    name: sub_overlays
                        .iter()
                        .find_map(|overlay| overlay.name.clone())
                        .unwrap_or_else(|| sub.name.clone()),
                    description: sub_overlays
                        .iter()
                        .find_map(|overlay| overlay.description.clone())
                        .unwrap_or_else(|| sub.description.clone()),
                }
            })
            .collect();

        CategoryDescriptor {
            id: base.id.clone(),
            name: chain
                .iter()
                .find_map(|overlay| overlay.name.clone())
                .unwrap_or_else(|| base.name.clone()),
            description: chain
                .iter()
                .find_map(|overlay| overlay.description.clone())
                .unwrap_or_else(|| base.description.clone()),
            icon: base.icon.clone(),
            seo_description: chain
                .iter()
                .find_map(|overlay| overlay.seo_description.clone())
                .or_else(|| base.seo_description.clone()),
            keywords: base.keywords.clone(),
            subcategories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_fixed() {
        let table = CategoryTable::builtin();
        let ids: Vec<_> = table.localized("en").into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["cloud", "cybersecurity", "networking", "dev"]);
        let es_ids: Vec<_> = table.localized("es").into_iter().map(|c| c.id).collect();
        assert_eq!(ids, es_ids);
    }

    #[test]
    fn partial_overlay_keeps_base_fields() {
        let table = CategoryTable::builtin();
        let networking = table.category_by_id("es", "networking").unwrap();
        assert_eq!(networking.name, "Redes");
        assert_eq!(
            networking.seo_description.as_deref(),
            Some("Master networking fundamentals, protocols, network architecture, and cloud networking solutions.")
        );
        let azure = table.subcategory_by_id("es", "cloud", "azure").unwrap();
        assert_eq!(azure.name, "Microsoft Azure");
        assert_eq!(azure.description, "Servicios e infraestructura de Azure");
    }

    #[test]
    fn english_overlay_backs_missing_locale() {
        let base = CategoryTable::builtin().base().to_vec();
        let table = CategoryTable::new(base)
            .with_overlay(
                "en",
                "dev",
                CategoryOverlay {
                    name: Some("Software Development".to_string()),
                    ..Default::default()
                },
            )
            .with_overlay(
                "es",
                "dev",
                CategoryOverlay {
                    description: Some("Desarrollo".to_string()),
                    ..Default::default()
                },
            );
        let fr = table.category_by_id("fr", "dev").unwrap();
        assert_eq!(fr.name, "Software Development");
        let es = table.category_by_id("es", "dev").unwrap();
        assert_eq!(es.name, "Software Development");
        assert_eq!(es.description, "Desarrollo");
        assert_eq!(table.overlay_locales(), vec!["en", "es"]);
    }

    #[test]
    fn unknown_ids_are_none() {
        let table = CategoryTable::builtin();
        assert!(table.category_by_id("en", "gaming").is_none());
        assert!(table.subcategory_by_id("en", "cloud", "gcp").is_none());
    }
}
