// SPDX-License-Identifier: PMPL-1.0-or-later

//! Untyped content records.
//!
//! Whatever loads content (front matter, YAML, JSON, a database row) hands
//! the validator a [`RawValue`]. Dates are their own variant: unquoted YAML
//! scalars in timestamp form become [`RawValue::Date`] (see
//! [`parse_yaml`](super::parse_yaml)), the way front-matter parsers turn
//! `pubDate: 2024-01-15` into a date. Quoted YAML and JSON strings always
//! stay strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub type RawMap = BTreeMap<String, RawValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    List(Vec<RawValue>),
    Map(RawMap),
}

impl RawValue {
    /// Short type name used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "boolean",
            RawValue::Number(_) => "number",
            RawValue::String(_) => "string",
            RawValue::Date(_) => "date",
            RawValue::List(_) => "list",
            RawValue::Map(_) => "map",
        }
    }

    pub fn as_map(&self) -> Option<&RawMap> {
        match self {
            RawValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        RawValue::String(value.into())
    }

    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RawValue::List(items.into_iter().map(RawValue::string).collect())
    }

    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(flag) => RawValue::Bool(flag),
            serde_json::Value::Number(number) => {
                RawValue::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => RawValue::String(text),
            serde_json::Value::Array(items) => {
                RawValue::List(items.into_iter().map(RawValue::from_json).collect())
            }
            serde_json::Value::Object(map) => RawValue::Map(
                map.into_iter()
                    .map(|(key, value)| (key, RawValue::from_json(value)))
                    .collect(),
            ),
        }
    }

    /// JSON view of the value; dates become RFC 3339 strings.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            RawValue::Null => serde_json::Value::Null,
            RawValue::Bool(flag) => serde_json::Value::Bool(*flag),
            RawValue::Number(number) => serde_json::Number::from_f64(*number)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            RawValue::String(text) => serde_json::Value::String(text.clone()),
            RawValue::Date(date) => {
                serde_json::Value::String(date.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            RawValue::List(items) => {
                serde_json::Value::Array(items.iter().map(RawValue::to_json).collect())
            }
            RawValue::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

fn timestamp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^\d{4}-\d{2}-\d{2}(?:[Tt ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|z|[+-]\d{2}:\d{2})?)?$",
        )
        .unwrap()
    })
}

/// Parse a YAML timestamp scalar. Date-only values are midnight UTC; times
/// without an offset are taken as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if !timestamp_pattern().is_match(text) {
        return None;
    }
    if text.len() == 10 {
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    let normalized = text.replacen([' ', 't'], "T", 1);
    if let Ok(date) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(date.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
