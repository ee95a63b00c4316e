// SPDX-License-Identifier: PMPL-1.0-or-later

//! Curriculum vitae assembly from the locale catalog.
//!
//! The CV lives in each locale document under the `cv` key. A locale with
//! no `cv` object at all is an error: the CV page cannot render without
//! it. Individual fields are forgiving and resolve through three layers:
//!
//! 1. the requested locale's `cv` object
//! 2. the default locale's `cv` object
//! 3. the literal defaults in [`CvDefaults`]
//!
//! Empty strings count as missing. Lists that fail to decode are logged
//! and skipped to the next layer.

use crate::content::{CertificationEntry, EducationEntry, ProjectEntry, WorkEntry};
use crate::error::ContentError;
use crate::i18n::{walk_path, Resolver, TranslationTree, TranslationValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const CV_KEY: &str = "cv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cv {
    pub name: String,
    pub title: String,
    pub location: String,
    pub location_link: String,
    pub about: String,
    pub summary: String,
    pub personal_website_url: String,
    pub contact: Contact,
    pub work: Vec<WorkEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub tel: String,
    pub social: Vec<Social>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub url: String,
}

impl Social {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Last-resort values for fields no locale provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvDefaults {
    pub name: String,
    pub title: String,
    pub location: String,
    pub location_link: String,
    pub personal_website_url: String,
    pub email: String,
    pub tel: String,
    pub social: Vec<Social>,
}

impl Default for CvDefaults {
    fn default() -> Self {
        Self {
            name: "Jonathan Rodriguez".to_string(),
            title: "Software Engineer".to_string(),
            location: "La Libertad, El Salvador".to_string(),
            location_link: "https://maps.app.goo.gl/BUR3nRxeE9BoF56W9".to_string(),
            personal_website_url: "https://jrdz.dev/about/".to_string(),
            email: "jonathanrdzdev@gmail.com".to_string(),
            tel: "+503 7056-5645".to_string(),
            social: vec![
                Social::new("GitHub", "https://github.com/cjrdz"),
                Social::new("LinkedIn", "https://www.linkedin.com/in/jrdzt/"),
            ],
        }
    }
}

/// Assemble the CV for `locale` with the built-in literal defaults.
pub fn assemble_cv(resolver: &Resolver<'_>, locale: &str) -> Result<Cv, ContentError> {
    assemble_cv_with(resolver, locale, &CvDefaults::default())
}

pub fn assemble_cv_with(
    resolver: &Resolver<'_>,
    locale: &str,
    defaults: &CvDefaults,
) -> Result<Cv, ContentError> {
    let requested =
        resolver
            .resolve_object(locale, CV_KEY)
            .ok_or_else(|| ContentError::MissingLocaleData {
                locale: locale.to_string(),
                key: CV_KEY.to_string(),
            })?;

    let mut layers = vec![requested];
    let catalog = resolver.catalog();
    if let Some(default_cv) =
        walk_path(catalog.default_tree(), CV_KEY).and_then(TranslationValue::as_tree)
    {
        if !std::ptr::eq(default_cv, requested) {
            layers.push(default_cv);
        }
    }
    let layers = Layers { layers, locale };

    Ok(Cv {
        name: layers.text("name", &defaults.name),
        title: layers.text("title", &defaults.title),
        location: layers.text("location", &defaults.location),
        location_link: layers.text("locationLink", &defaults.location_link),
        about: layers.text("about", ""),
        summary: layers.text("summary", ""),
        personal_website_url: layers.text("personalWebsiteUrl", &defaults.personal_website_url),
        contact: Contact {
            email: layers.text("contact.email", &defaults.email),
            tel: layers.text("contact.tel", &defaults.tel),
            social: layers
                .list("contact.social")
                .unwrap_or_else(|| defaults.social.clone()),
        },
        work: layers.list("work").unwrap_or_default(),
        projects: layers.list("projects").unwrap_or_default(),
        education: layers.list("education").unwrap_or_default(),
        certifications: layers.list("certifications").unwrap_or_default(),
        skills: layers.list("skills").unwrap_or_default(),
    })
}

/// `cv` objects in lookup order.
struct Layers<'t, 'l> {
    layers: Vec<&'t TranslationTree>,
    locale: &'l str,
}

impl Layers<'_, '_> {
    fn text(&self, key: &str, default: &str) -> String {
        self.layers
            .iter()
            .find_map(|tree| {
                walk_path(tree, key)
                    .and_then(TranslationValue::as_text)
                    .filter(|text| !text.is_empty())
            })
            .unwrap_or(default)
            .to_string()
    }

    fn list<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        self.layers.iter().find_map(|tree| {
            let value = walk_path(tree, key)?;
            if value.as_list().is_none() {
                tracing::warn!(locale = self.locale, key, "CV section is not a list, skipping");
                return None;
            }
            match serde_json::to_value(value).and_then(serde_json::from_value) {
                Ok(items) => Some(items),
                Err(err) => {
                    tracing::warn!(locale = self.locale, key, error = %err, "malformed CV section, skipping");
                    None
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCatalog;
    use std::collections::BTreeMap;

    fn catalog(en: serde_json::Value, es: serde_json::Value) -> LocaleCatalog {
        let mut trees = BTreeMap::new();
        trees.insert("en".to_string(), serde_json::from_value(en).unwrap());
        trees.insert("es".to_string(), serde_json::from_value(es).unwrap());
        LocaleCatalog::new("en", trees).unwrap()
    }

    #[test]
    fn missing_cv_object_is_an_error() {
        let catalog = catalog(
            serde_json::json!({ "cv": { "name": "Ada" } }),
            serde_json::json!({ "nav": { "home": "Inicio" } }),
        );
        let resolver = Resolver::new(&catalog);
        let err = assemble_cv(&resolver, "es").unwrap_err();
        assert_eq!(
            err,
            ContentError::MissingLocaleData {
                locale: "es".to_string(),
                key: "cv".to_string()
            }
        );
    }

    #[test]
    fn fields_fall_back_through_default_locale_then_literals() {
        let catalog = catalog(
            serde_json::json!({ "cv": { "name": "Ada", "summary": "EN summary" } }),
            serde_json::json!({ "cv": { "title": "Ingeniera", "name": "" } }),
        );
        let resolver = Resolver::new(&catalog);
        let cv = assemble_cv(&resolver, "es").unwrap();
        assert_eq!(cv.title, "Ingeniera");
        assert_eq!(cv.name, "Ada");
        assert_eq!(cv.summary, "EN summary");
        assert_eq!(cv.location, "La Libertad, El Salvador");
        assert_eq!(cv.about, "");
        assert_eq!(cv.contact.social.len(), 2);
        assert!(cv.work.is_empty());
    }

    #[test]
    fn malformed_sections_are_skipped() {
        let catalog = catalog(
            serde_json::json!({ "cv": { "skills": ["Rust"], "work": [{ "company": "x" }] } }),
            serde_json::json!({ "cv": { "skills": "Rust", "work": [] } }),
        );
        let resolver = Resolver::new(&catalog);
        let cv = assemble_cv(&resolver, "es").unwrap();
        assert_eq!(cv.skills, vec!["Rust"]);
        // An empty list is a real value, not a miss.
        assert!(cv.work.is_empty());
    }
}
