// SPDX-License-Identifier: PMPL-1.0-or-later

//! YAML to [`RawValue`] with scalar styles preserved.
//!
//! Only plain (unquoted) scalars are resolved: `null`/`~`, booleans,
//! numbers and timestamps. Anything quoted, literal or folded stays a
//! string, so `date: '2023-05-10'` is text and `pubDate: 2024-01-15` is a
//! date. Resolution follows the YAML 1.2 core schema plus timestamps.

use super::raw::{parse_timestamp, RawMap, RawValue};
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use yaml_rust2::parser::{Event, EventReceiver, Parser};
use yaml_rust2::scanner::TScalarStyle;

/// Parse the first YAML document in `text`. An empty document is `Null`.
pub fn parse_yaml(text: &str) -> Result<RawValue> {
    let mut builder = Builder::default();
    Parser::new(text.chars())
        .load(&mut builder, false)
        .context("invalid YAML")?;
    if let Some(err) = builder.error {
        bail!(err);
    }
    Ok(builder.root.unwrap_or(RawValue::Null))
}

enum Frame {
    List {
        items: Vec<RawValue>,
        anchor: usize,
    },
    Map {
        map: RawMap,
        key: Option<String>,
        anchor: usize,
    },
}

#[derive(Default)]
struct Builder {
    stack: Vec<Frame>,
    root: Option<RawValue>,
    anchors: HashMap<usize, RawValue>,
    error: Option<String>,
}

impl Builder {
    fn remember(&mut self, anchor: usize, value: &RawValue) {
        if anchor > 0 {
            self.anchors.insert(anchor, value.clone());
        }
    }

    fn scalar(&mut self, text: String, style: TScalarStyle, anchor: usize) {
        // Mapping keys keep their source text.
        if let Some(Frame::Map { key, .. }) = self.stack.last_mut() {
            if key.is_none() {
                *key = Some(text.clone());
                self.remember(anchor, &RawValue::String(text));
                return;
            }
        }
        let value = if matches!(style, TScalarStyle::Plain) {
            resolve_plain(text)
        } else {
            RawValue::String(text)
        };
        self.remember(anchor, &value);
        self.push(value);
    }

    fn push(&mut self, value: RawValue) {
        match self.stack.last_mut() {
            None => {
                self.root.get_or_insert(value);
            }
            Some(Frame::List { items, .. }) => items.push(value),
            Some(Frame::Map { map, key, .. }) => match key.take() {
                Some(key) => {
                    if map.contains_key(&key) {
                        self.error
                            .get_or_insert(format!("duplicate mapping key `{}`", key));
                    } else {
                        map.insert(key, value);
                    }
                }
                None => {
                    self.error
                        .get_or_insert(format!("unsupported mapping key: {}", value.type_name()));
                }
            },
        }
    }
}

impl EventReceiver for Builder {
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Scalar(text, style, anchor, ..) => self.scalar(text, style, anchor),
            Event::SequenceStart(anchor, ..) => self.stack.push(Frame::List {
                items: Vec::new(),
                anchor,
            }),
            Event::MappingStart(anchor, ..) => self.stack.push(Frame::Map {
                map: RawMap::new(),
                key: None,
                anchor,
            }),
            Event::SequenceEnd | Event::MappingEnd => {
                let (value, anchor) = match self.stack.pop() {
                    Some(Frame::List { items, anchor }) => (RawValue::List(items), anchor),
                    Some(Frame::Map { map, anchor, .. }) => (RawValue::Map(map), anchor),
                    None => return,
                };
                self.remember(anchor, &value);
                self.push(value);
            }
            Event::Alias(anchor) => match self.anchors.get(&anchor).cloned() {
                Some(RawValue::String(text)) => {
                    self.scalar(text, TScalarStyle::SingleQuoted, 0)
                }
                Some(value) => self.push(value),
                None => {
                    self.error.get_or_insert(format!("unknown alias {}", anchor));
                }
            },
            _ => {}
        }
    }
}

fn int_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[-+]?[0-9]+$").unwrap())
}

fn float_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[-+]?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?)(?:[eE][-+]?[0-9]+)?$").unwrap()
    })
}

fn resolve_plain(text: String) -> RawValue {
    match text.as_str() {
        "" | "~" | "null" | "Null" | "NULL" => return RawValue::Null,
        "true" | "True" | "TRUE" => return RawValue::Bool(true),
        "false" | "False" | "FALSE" => return RawValue::Bool(false),
        ".inf" | ".Inf" | ".INF" | "+.inf" | "+.Inf" | "+.INF" => {
            return RawValue::Number(f64::INFINITY)
        }
        "-.inf" | "-.Inf" | "-.INF" => return RawValue::Number(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => return RawValue::Number(f64::NAN),
        _ => {}
    }
    if let Some(number) = parse_number(&text) {
        return RawValue::Number(number);
    }
    match parse_timestamp(&text) {
        Some(date) => RawValue::Date(date),
        None => RawValue::String(text),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    if let Some(hex) = text.strip_prefix("0x") {
        return i64::from_str_radix(hex, 16).ok().map(|n| n as f64);
    }
    if let Some(octal) = text.strip_prefix("0o") {
        return i64::from_str_radix(octal, 8).ok().map(|n| n as f64);
    }
    if int_pattern().is_match(text) || float_pattern().is_match(text) {
        return text.parse::<f64>().ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn field(text: &str, key: &str) -> RawValue {
        let raw = parse_yaml(text).expect("yaml");
        raw.as_map().expect("map").get(key).cloned().expect("field")
    }

    #[test]
    fn plain_dates_resolve_quoted_dates_do_not() {
        let RawValue::Date(date) = field("pubDate: 2024-01-15\n", "pubDate") else {
            panic!("expected a date");
        };
        assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 15));

        assert_eq!(
            field("pubDate: '2024-01-15'\n", "pubDate"),
            RawValue::string("2024-01-15")
        );
        assert_eq!(
            field("pubDate: \"2024-01-15\"\n", "pubDate"),
            RawValue::string("2024-01-15")
        );
    }

    #[test]
    fn plain_scalars_follow_core_schema() {
        let raw = parse_yaml("a: ~\nb: true\nc: 2\nd: 1.5\ne: yes\nf: '2'\ng:\n").unwrap();
        let map = raw.as_map().unwrap();
        assert_eq!(map["a"], RawValue::Null);
        assert_eq!(map["b"], RawValue::Bool(true));
        assert_eq!(map["c"], RawValue::Number(2.0));
        assert_eq!(map["d"], RawValue::Number(1.5));
        assert_eq!(map["e"], RawValue::string("yes"));
        assert_eq!(map["f"], RawValue::string("2"));
        assert_eq!(map["g"], RawValue::Null);
    }

    #[test]
    fn block_scalars_stay_strings() {
        let raw = parse_yaml("body: |\n  2024-01-15\n").unwrap();
        assert_eq!(raw.as_map().unwrap()["body"], RawValue::string("2024-01-15\n"));
    }

    #[test]
    fn keys_keep_source_text() {
        let raw = parse_yaml("2024: x\ntrue: y\n").unwrap();
        let map = raw.as_map().unwrap();
        assert!(map.contains_key("2024"));
        assert!(map.contains_key("true"));
    }

    #[test]
    fn nested_lists_and_aliases() {
        let raw = parse_yaml("base: &tags [a, b]\ncopy: *tags\n").unwrap();
        let map = raw.as_map().unwrap();
        assert_eq!(map["copy"], RawValue::string_list(["a", "b"]));
        assert_eq!(map["base"], map["copy"]);
    }

    #[test]
    fn duplicate_keys_and_bad_yaml_are_errors() {
        assert!(parse_yaml("a: 1\na: 2\n").is_err());
        assert!(parse_yaml("a: [1, 2\n").is_err());
        assert!(parse_yaml("? [a]\n: b\n").is_err());
    }

    #[test]
    fn empty_document_is_null() {
        assert_eq!(parse_yaml("").unwrap(), RawValue::Null);
        assert_eq!(parse_yaml("# only a comment\n").unwrap(), RawValue::Null);
    }
}
