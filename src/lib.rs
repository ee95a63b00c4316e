// SPDX-License-Identifier: PMPL-1.0-or-later

//! site-content: the content core of a bilingual blog and portfolio.
//!
//! Everything a page template needs before it renders:
//!
//! 1. **i18n**: locale catalog and fail-open string resolution with a
//!    requested -> default -> literal key fallback chain.
//! 2. **content**: blog post and CV entry schemas, validated from untyped
//!    front matter with defaults applied.
//! 3. **cv**: the curriculum vitae assembled from the locale catalog.
//! 4. **categories**: the blog category table with per-locale overlays.
//!
//! Data is loaded once and queried by reference; lookups do no I/O.

pub mod categories;
pub mod config;
pub mod content;
pub mod cv;
pub mod diagnostics;
pub mod error;
pub mod i18n;

pub use error::{ContentError, FieldIssue, IssueKind};
