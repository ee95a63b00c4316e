// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for the content core.
//!
//! Only two situations are surfaced as failures: a required object (the
//! CV tree) is absent for a locale, and a content record does not match
//! its schema. Plain string lookups degrade to fallback text instead.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    /// A whole object needed to render a page is missing for a locale.
    #[error("no `{key}` data found for locale `{locale}`")]
    MissingLocaleData { locale: String, key: String },

    /// A content record failed shape or type validation.
    #[error("{kind} record does not match the `{shape}` shape: {}", format_issues(.issues))]
    SchemaViolation {
        kind: String,
        shape: String,
        issues: Vec<FieldIssue>,
    },

    /// The locale catalog cannot be built as configured.
    #[error("invalid locale catalog: {0}")]
    InvalidCatalog(String),
}

impl ContentError {
    /// Field names reported by a schema violation, empty for other errors.
    pub fn violated_fields(&self) -> Vec<&str> {
        match self {
            ContentError::SchemaViolation { issues, .. } => {
                issues.iter().map(|issue| issue.field.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// One offending field in a rejected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub problem: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Missing { expected: &'static str },
    WrongType { expected: &'static str, found: &'static str },
    Invalid { reason: String },
    Unknown,
}

impl FieldIssue {
    pub fn missing(field: impl Into<String>, expected: &'static str) -> Self {
        Self {
            field: field.into(),
            problem: IssueKind::Missing { expected },
        }
    }

    pub fn wrong_type(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self {
            field: field.into(),
            problem: IssueKind::WrongType { expected, found },
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: IssueKind::Invalid {
                reason: reason.into(),
            },
        }
    }

    pub fn unknown(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: IssueKind::Unknown,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            IssueKind::Missing { expected } => {
                write!(f, "`{}` is required ({})", self.field, expected)
            }
            IssueKind::WrongType { expected, found } => {
                write!(f, "`{}` expected {}, found {}", self.field, expected, found)
            }
            IssueKind::Invalid { reason } => write!(f, "`{}` {}", self.field, reason),
            IssueKind::Unknown => write!(f, "`{}` is not a known field", self.field),
        }
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
