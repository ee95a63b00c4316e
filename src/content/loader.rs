// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content files on disk.
//!
//! A content directory holds one sub-directory per collection:
//!
//! ```text
//! content/
//!   blog/  cloud/azure-intro.md, ...
//!   cv/    work-acme.md, skills.yaml, ...
//! ```
//!
//! Markdown files carry their record as YAML front matter; `.yaml`/`.yml`
//! and `.json` files are the record itself. The collection is taken from
//! the first directory under the content root.

use super::raw::RawValue;
use super::validate::{validate_with, ContentKind, ValidatedRecord, ValidatorOptions};
use super::yaml::parse_yaml;
use crate::error::ContentError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Markdown,
    Yaml,
    Json,
}

impl RecordFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "mdx" | "markdown" => Some(RecordFormat::Markdown),
            "yaml" | "yml" => Some(RecordFormat::Yaml),
            "json" => Some(RecordFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecord {
    pub path: PathBuf,
    pub record: RawValue,
    /// Markdown body after the front matter; empty for data files.
    pub body: String,
}

/// Split `---` delimited YAML front matter from a Markdown document.
///
/// Returns `(None, text)` when the document does not open with a front
/// matter block or the block is never closed.
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some(rest) = text.strip_prefix("---") else {
        return (None, text);
    };
    let Some(rest) = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
    else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, text)
}

/// Parse the text of a content file into an untyped record and its body.
pub fn parse_record(text: &str, format: RecordFormat) -> Result<(RawValue, String)> {
    match format {
        RecordFormat::Markdown => {
            let (front, body) = split_front_matter(text);
            let record = match front {
                Some(front) => parse_yaml(front).context("parsing front matter")?,
                None => RawValue::Null,
            };
            Ok((record, body.to_string()))
        }
        RecordFormat::Yaml => {
            let record = parse_yaml(text).context("parsing YAML")?;
            Ok((record, String::new()))
        }
        RecordFormat::Json => {
            let json: serde_json::Value = serde_json::from_str(text).context("parsing JSON")?;
            Ok((RawValue::from_json(json), String::new()))
        }
    }
}

pub fn load_record(path: &Path) -> Result<LoadedRecord> {
    let format = RecordFormat::from_path(path)
        .with_context(|| format!("unsupported content file type: {}", path.display()))?;
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let (record, body) =
        parse_record(&text, format).with_context(|| format!("loading {}", path.display()))?;
    Ok(LoadedRecord {
        path: path.to_path_buf(),
        record,
        body,
    })
}

/// Collection a file belongs to, from the directory names above it.
///
/// With a `root`, only the first component below the root counts;
/// otherwise the nearest `blog`/`cv` ancestor is used.
pub fn kind_for_path(path: &Path, root: Option<&Path>) -> Option<ContentKind> {
    match root {
        Some(root) => {
            let relative = path.strip_prefix(root).ok()?;
            let first = relative.components().next()?;
            ContentKind::parse(first.as_os_str().to_str()?)
        }
        None => path
            .ancestors()
            .skip(1)
            .filter_map(|dir| dir.file_name()?.to_str())
            .find_map(ContentKind::parse),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Valid(ValidatedRecord),
    Invalid(ContentError),
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub kind: ContentKind,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    pub entries: Vec<ScanEntry>,
}

impl ScanReport {
    pub fn valid(&self) -> impl Iterator<Item = &ValidatedRecord> {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            Outcome::Valid(record) => Some(record),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScanEntry> {
        self.entries
            .iter()
            .filter(|entry| !matches!(entry.outcome, Outcome::Valid(_)))
    }

    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Load and validate every record under the `blog/` and `cv/` collections.
pub fn scan_content_dir(dir: &Path, options: &ValidatorOptions) -> Result<ScanReport> {
    if !dir.is_dir() {
        anyhow::bail!("content directory not found: {}", dir.display());
    }

    let mut report = ScanReport::default();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || RecordFormat::from_path(path).is_none() {
            continue;
        }
        let Some(kind) = kind_for_path(path, Some(dir)) else {
            continue;
        };

        let outcome = match load_record(path) {
            Ok(loaded) => match validate_with(&loaded.record, kind, options) {
                Ok(record) => Outcome::Valid(record),
                Err(err) => {
                    tracing::debug!(file = %path.display(), error = %err, "record rejected");
                    Outcome::Invalid(err)
                }
            },
            Err(err) => Outcome::Unreadable(format!("{:#}", err)),
        };
        report.entries.push(ScanEntry {
            path: path.to_path_buf(),
            kind,
            outcome,
        });
    }

    tracing::info!(
        dir = %dir.display(),
        files = report.entries.len(),
        failures = report.failures().count(),
        "scanned content directory"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_matter_is_split_from_body() {
        let (front, body) = split_front_matter("---\ntitle: Hi\n---\n# Heading\n");
        assert_eq!(front, Some("title: Hi\n"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn crlf_front_matter() {
        let (front, body) = split_front_matter("---\r\ntitle: Hi\r\n---\r\nbody");
        assert_eq!(front, Some("title: Hi\r\n"));
        assert_eq!(body, "body");
    }

    #[test]
    fn unterminated_or_absent_front_matter() {
        assert_eq!(split_front_matter("# Just text"), (None, "# Just text"));
        assert_eq!(split_front_matter("---\ntitle: x\n"), (None, "---\ntitle: x\n"));
        assert_eq!(split_front_matter("----\n"), (None, "----\n"));
    }

    #[test]
    fn markdown_without_front_matter_is_null_record() {
        let (record, body) = parse_record("hello", RecordFormat::Markdown).unwrap();
        assert_eq!(record, RawValue::Null);
        assert_eq!(body, "hello");
    }

    #[test]
    fn collection_from_path() {
        let root = Path::new("/site/content");
        assert_eq!(
            kind_for_path(Path::new("/site/content/blog/cloud/a.md"), Some(root)),
            Some(ContentKind::Blog)
        );
        assert_eq!(
            kind_for_path(Path::new("/site/content/pages/a.md"), Some(root)),
            None
        );
        assert_eq!(
            kind_for_path(Path::new("drafts/cv/work.yaml"), None),
            Some(ContentKind::Cv)
        );
        assert_eq!(kind_for_path(Path::new("notes/a.md"), None), None);
    }
}
