// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the site.
//!
//! Translation keys are dotted paths into nested locale documents:
//! `"nav.home"`, `"home.hero.title"`, `"cv.contact.email"`. String lookups
//! fall back to the default locale when the requested locale lacks a key,
//! and to the key itself when no locale has it (fail-open, never panics).
//!
//! ## Locales
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | es   | Spanish  | Español     |
//!
//! The set is open: any catalog loaded from disk may add locales, and the
//! default locale is configurable.
//!
//! The catalog is built once (embedded documents or a locales directory)
//! and handed to a [`Resolver`] by reference. No global state, no I/O
//! during lookups.

mod catalog;
mod locale_id;
mod resolver;
mod tree;

pub use catalog::{LocaleCatalog, DEFAULT_LOCALE};
pub use locale_id::{is_iso639_1, is_valid_locale_id, language_name, native_name, primary_subtag};
pub use resolver::{Fallback, Resolution, Resolver};
pub use tree::{list_paths, text_paths, walk_path, TranslationTree, TranslationValue};
