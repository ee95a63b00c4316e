// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content collections: blog posts and CV entries.
//!
//! Raw records come in untyped ([`RawValue`]) from whatever loaded them and
//! leave [`validate`] typed, with defaults applied (`draft = false`,
//! `locale = "en"`, `order = 0`), or rejected with a
//! [`ContentError::SchemaViolation`](crate::error::ContentError) naming
//! every offending field.

mod blog;
mod cv_entry;
mod loader;
mod raw;
mod validate;
mod yaml;

pub use blog::{
    format_date_long, format_date_short, reading_time_minutes, video_embed_url, BlogPost,
};
pub use cv_entry::{
    CertificationEntry, CvEntry, CvRecord, CvShape, EducationEntry, PersonalInfo, ProjectEntry,
    SkillsEntry, WorkEntry,
};
pub use loader::{
    kind_for_path, load_record, parse_record, scan_content_dir, split_front_matter, LoadedRecord,
    Outcome, RecordFormat, ScanEntry, ScanReport,
};
pub use raw::{parse_timestamp, RawMap, RawValue};
pub use validate::{validate, validate_with, ContentKind, ValidatedRecord, ValidatorOptions};
pub use yaml::parse_yaml;
