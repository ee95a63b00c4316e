// SPDX-License-Identifier: PMPL-1.0-or-later

//! Schema validation for untyped content records.
//!
//! `validate` is the only boundary that imposes a schema on content. It
//! never coerces: a string where a date, number, boolean or list is
//! expected is a violation, not something to parse leniently. Every
//! offending field is reported at once.

use super::blog::BlogPost;
use super::cv_entry::CvRecord;
use super::raw::{RawMap, RawValue};
use crate::error::{ContentError, FieldIssue};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Blog,
    Cv,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Blog => "blog",
            ContentKind::Cv => "cv",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blog" => Some(ContentKind::Blog),
            "cv" => Some(ContentKind::Cv),
            _ => None,
        }
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ContentKind::parse(value)
            .ok_or_else(|| format!("unknown content kind `{}` (expected blog or cv)", value))
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Reject keys the shape does not declare.
    pub strict: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// A record that passed validation, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ValidatedRecord {
    Blog(BlogPost),
    Cv(CvRecord),
}

impl ValidatedRecord {
    pub fn kind(&self) -> ContentKind {
        match self {
            ValidatedRecord::Blog(_) => ContentKind::Blog,
            ValidatedRecord::Cv(_) => ContentKind::Cv,
        }
    }

    pub fn locale(&self) -> &str {
        match self {
            ValidatedRecord::Blog(post) => &post.locale,
            ValidatedRecord::Cv(record) => &record.locale,
        }
    }

    /// Back to the untyped form, defaults included.
    ///
    /// Validating the result yields this record again.
    pub fn to_raw(&self) -> RawValue {
        match self {
            ValidatedRecord::Blog(post) => post.to_raw(),
            ValidatedRecord::Cv(record) => record.to_raw(),
        }
    }
}

/// Validate with default options (strict keys).
pub fn validate(record: &RawValue, kind: ContentKind) -> Result<ValidatedRecord, ContentError> {
    validate_with(record, kind, &ValidatorOptions::default())
}

pub fn validate_with(
    record: &RawValue,
    kind: ContentKind,
    options: &ValidatorOptions,
) -> Result<ValidatedRecord, ContentError> {
    let Some(map) = record.as_map() else {
        return Err(ContentError::SchemaViolation {
            kind: kind.to_string(),
            shape: kind.to_string(),
            issues: vec![FieldIssue::wrong_type("<record>", "map", record.type_name())],
        });
    };

    match kind {
        ContentKind::Blog => BlogPost::from_raw(map, options).map(ValidatedRecord::Blog),
        ContentKind::Cv => CvRecord::from_raw(map, options).map(ValidatedRecord::Cv),
    }
}

/// Typed reads from a record map, collecting issues instead of stopping at
/// the first one. Accessors return a placeholder when the field is
/// invalid; `finish` turns any collected issue into a violation.
pub(crate) struct Fields<'a> {
    map: &'a RawMap,
    seen: BTreeSet<&'static str>,
    issues: Vec<FieldIssue>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(map: &'a RawMap) -> Self {
        Self {
            map,
            seen: BTreeSet::new(),
            issues: Vec::new(),
        }
    }

    fn get(&mut self, name: &'static str) -> Option<&'a RawValue> {
        self.seen.insert(name);
        self.map.get(name)
    }

    fn mismatch(&mut self, name: &'static str, expected: &'static str, found: &RawValue) {
        self.issues
            .push(FieldIssue::wrong_type(name, expected, found.type_name()));
    }

    pub(crate) fn push_issue(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }

    pub(crate) fn string(&mut self, name: &'static str) -> String {
        match self.get(name) {
            Some(RawValue::String(text)) => text.clone(),
            Some(other) => {
                self.mismatch(name, "string", other);
                String::new()
            }
            None => {
                self.issues.push(FieldIssue::missing(name, "string"));
                String::new()
            }
        }
    }

    pub(crate) fn optional_string(&mut self, name: &'static str) -> Option<String> {
        match self.get(name) {
            Some(RawValue::String(text)) => Some(text.clone()),
            Some(other) => {
                self.mismatch(name, "string", other);
                None
            }
            None => None,
        }
    }

    /// Key must be present; value is a string or null.
    pub(crate) fn nullable_string(&mut self, name: &'static str) -> Option<String> {
        match self.get(name) {
            Some(RawValue::String(text)) => Some(text.clone()),
            Some(RawValue::Null) => None,
            Some(other) => {
                self.mismatch(name, "string or null", other);
                None
            }
            None => {
                self.issues.push(FieldIssue::missing(name, "string or null"));
                None
            }
        }
    }

    pub(crate) fn string_or(&mut self, name: &'static str, default: &str) -> String {
        self.optional_string(name)
            .unwrap_or_else(|| default.to_string())
    }

    pub(crate) fn date(&mut self, name: &'static str) -> DateTime<Utc> {
        match self.get(name) {
            Some(RawValue::Date(date)) => *date,
            Some(other) => {
                self.mismatch(name, "date", other);
                DateTime::<Utc>::default()
            }
            None => {
                self.issues.push(FieldIssue::missing(name, "date"));
                DateTime::<Utc>::default()
            }
        }
    }

    pub(crate) fn optional_date(&mut self, name: &'static str) -> Option<DateTime<Utc>> {
        match self.get(name) {
            Some(RawValue::Date(date)) => Some(*date),
            Some(other) => {
                self.mismatch(name, "date", other);
                None
            }
            None => None,
        }
    }

    pub(crate) fn bool_or(&mut self, name: &'static str, default: bool) -> bool {
        match self.get(name) {
            Some(RawValue::Bool(flag)) => *flag,
            Some(other) => {
                self.mismatch(name, "boolean", other);
                default
            }
            None => default,
        }
    }

    pub(crate) fn integer_or(&mut self, name: &'static str, default: i64) -> i64 {
        match self.get(name) {
            Some(RawValue::Number(number))
                if number.is_finite()
                    && number.fract() == 0.0
                    && number.abs() <= i64::MAX as f64 =>
            {
                *number as i64
            }
            Some(RawValue::Number(number)) => {
                self.issues.push(FieldIssue::invalid(
                    name,
                    format!("must be a whole number, got {}", number),
                ));
                default
            }
            Some(other) => {
                self.mismatch(name, "integer", other);
                default
            }
            None => default,
        }
    }

    pub(crate) fn optional_string_list(&mut self, name: &'static str) -> Option<Vec<String>> {
        let value = self.get(name)?;
        self.read_string_list(name, value)
    }

    pub(crate) fn string_list(&mut self, name: &'static str) -> Vec<String> {
        match self.get(name) {
            Some(value) => self.read_string_list(name, value).unwrap_or_default(),
            None => {
                self.issues.push(FieldIssue::missing(name, "list of strings"));
                Vec::new()
            }
        }
    }

    fn read_string_list(&mut self, name: &'static str, value: &RawValue) -> Option<Vec<String>> {
        let RawValue::List(items) = value else {
            self.mismatch(name, "list of strings", value);
            return None;
        };
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                RawValue::String(text) => out.push(text.clone()),
                other => self.issues.push(FieldIssue::wrong_type(
                    format!("{}[{}]", name, index),
                    "string",
                    other.type_name(),
                )),
            }
        }
        Some(out)
    }

    /// Mark a key as belonging to the shape without reading it.
    pub(crate) fn accept(&mut self, name: &'static str) {
        self.seen.insert(name);
    }

    pub(crate) fn finish(
        mut self,
        kind: ContentKind,
        shape: &str,
        options: &ValidatorOptions,
    ) -> Result<(), ContentError> {
        if options.strict {
            for key in self.map.keys() {
                if !self.seen.contains(key.as_str()) {
                    self.issues.push(FieldIssue::unknown(key.clone()));
                }
            }
        }
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ContentError::SchemaViolation {
                kind: kind.to_string(),
                shape: shape.to_string(),
                issues: self.issues,
            })
        }
    }
}

/// Insert helpers for building records back into the untyped form.
pub(crate) fn put_opt_string(map: &mut RawMap, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        map.insert(key.to_string(), RawValue::string(value.clone()));
    }
}

pub(crate) fn put_opt_list(map: &mut RawMap, key: &str, value: &Option<Vec<String>>) {
    if let Some(items) = value {
        map.insert(key.to_string(), RawValue::string_list(items.iter().cloned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(json: serde_json::Value) -> RawMap {
        RawValue::from_json(json).as_map().cloned().unwrap()
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(ContentKind::parse(" Blog "), Some(ContentKind::Blog));
        assert_eq!("cv".parse::<ContentKind>(), Ok(ContentKind::Cv));
        assert!("post".parse::<ContentKind>().is_err());
    }

    #[test]
    fn non_map_record_is_rejected() {
        let err = validate(&RawValue::string("hello"), ContentKind::Blog).unwrap_err();
        assert_eq!(err.violated_fields(), vec!["<record>"]);
    }

    #[test]
    fn fields_collect_all_issues() {
        let record = map(serde_json::json!({
            "title": 3,
            "order": 1.5,
            "tags": ["ok", false],
            "extra": true
        }));
        let mut fields = Fields::new(&record);
        fields.string("title");
        fields.string("description");
        fields.integer_or("order", 0);
        fields.optional_string_list("tags");
        let err = fields
            .finish(ContentKind::Blog, "blog", &ValidatorOptions::default())
            .unwrap_err();
        assert_eq!(
            err.violated_fields(),
            vec!["title", "description", "order", "tags[1]", "extra"]
        );
    }

    #[test]
    fn lenient_mode_ignores_unknown_keys() {
        let record = map(serde_json::json!({ "title": "x", "extra": 1 }));
        let mut fields = Fields::new(&record);
        fields.string("title");
        assert!(fields
            .finish(ContentKind::Blog, "blog", &ValidatorOptions { strict: false })
            .is_ok());
    }

    #[test]
    fn integers_accept_whole_numbers_only() {
        let record = map(serde_json::json!({ "a": 3.0, "b": "3" }));
        let mut fields = Fields::new(&record);
        assert_eq!(fields.integer_or("a", 0), 3);
        assert_eq!(fields.integer_or("b", 0), 0);
        assert_eq!(fields.integer_or("c", 7), 7);
        assert!(fields
            .finish(ContentKind::Cv, "work", &ValidatorOptions::default())
            .is_err());
    }
}
