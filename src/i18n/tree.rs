// SPDX-License-Identifier: PMPL-1.0-or-later

//! Nested translation trees.
//!
//! A locale document is a map of keys to either display text, another map,
//! or an ordered list (the CV sections live in locale documents as lists of
//! objects). Scalars other than text (an entry's `order`, `"end": null`)
//! are kept as-is for those sections. Key paths only ever descend through
//! maps, and only text is ever displayed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type TranslationTree = BTreeMap<String, TranslationValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Text(String),
    Bool(bool),
    Number(serde_json::Number),
    List(Vec<TranslationValue>),
    Tree(TranslationTree),
    Null,
}

impl TranslationValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&TranslationTree> {
        match self {
            TranslationValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[TranslationValue]> {
        match self {
            TranslationValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        TranslationValue::Text(text.to_string())
    }
}

impl From<TranslationTree> for TranslationValue {
    fn from(tree: TranslationTree) -> Self {
        TranslationValue::Tree(tree)
    }
}

/// Walk `segments` from `root`, descending only through trees.
///
/// Returns `None` as soon as a segment is missing or the current node is
/// not a tree.
pub fn walk<'a, I, S>(root: &'a TranslationTree, segments: I) -> Option<&'a TranslationValue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segments = segments.into_iter();
    let first = segments.next()?;
    let mut node = root.get(first.as_ref())?;
    for segment in segments {
        node = node.as_tree()?.get(segment.as_ref())?;
    }
    Some(node)
}

/// Walk a dot-delimited key path.
pub fn walk_path<'a>(root: &'a TranslationTree, key_path: &str) -> Option<&'a TranslationValue> {
    if key_path.is_empty() {
        return None;
    }
    walk(root, key_path.split('.'))
}

/// Every dotted path in `tree` that ends on text, sorted.
pub fn text_paths(tree: &TranslationTree) -> Vec<String> {
    let mut out = Vec::new();
    collect_paths(tree, "", |value| matches!(value, TranslationValue::Text(_)), &mut out);
    out
}

/// Every dotted path in `tree` that ends on a list, sorted.
pub fn list_paths(tree: &TranslationTree) -> Vec<String> {
    let mut out = Vec::new();
    collect_paths(tree, "", |value| matches!(value, TranslationValue::List(_)), &mut out);
    out
}

fn collect_paths(
    tree: &TranslationTree,
    prefix: &str,
    keep: fn(&TranslationValue) -> bool,
    out: &mut Vec<String>,
) {
    for (key, value) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        if let TranslationValue::Tree(child) = value {
            collect_paths(child, &path, keep, out);
        } else if keep(value) {
            out.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationTree {
        serde_json::from_str(
            r#"{
                "nav": { "home": "Home", "blog": "Blog" },
                "title": "Portfolio",
                "cv": { "skills": ["Rust", "Azure"] }
            }"#,
        )
        .expect("sample tree")
    }

    #[test]
    fn walks_nested_maps() {
        let tree = sample();
        assert_eq!(
            walk_path(&tree, "nav.home").and_then(TranslationValue::as_text),
            Some("Home")
        );
        assert!(walk_path(&tree, "nav").and_then(TranslationValue::as_tree).is_some());
    }

    #[test]
    fn does_not_descend_through_text_or_lists() {
        let tree = sample();
        assert!(walk_path(&tree, "title.more").is_none());
        assert!(walk_path(&tree, "cv.skills.0").is_none());
        assert!(walk_path(&tree, "").is_none());
    }

    #[test]
    fn lists_deserialize_as_lists() {
        let tree = sample();
        let skills = walk_path(&tree, "cv.skills")
            .and_then(TranslationValue::as_list)
            .expect("skills list");
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn non_text_scalars_are_kept() {
        let tree: TranslationTree =
            serde_json::from_str(r#"{"work": [{"order": 2, "end": null, "current": true}]}"#)
                .expect("tree with scalars");
        let entry = walk_path(&tree, "work")
            .and_then(TranslationValue::as_list)
            .and_then(|items| items[0].as_tree())
            .expect("work entry");
        assert_eq!(entry.get("order"), Some(&TranslationValue::Number(2u64.into())));
        assert_eq!(entry.get("end"), Some(&TranslationValue::Null));
        assert_eq!(entry.get("current"), Some(&TranslationValue::Bool(true)));
        assert!(text_paths(&tree).is_empty());
    }

    #[test]
    fn text_paths_skip_lists() {
        let tree = sample();
        assert_eq!(text_paths(&tree), vec!["nav.blog", "nav.home", "title"]);
        assert_eq!(list_paths(&tree), vec!["cv.skills"]);
    }
}
