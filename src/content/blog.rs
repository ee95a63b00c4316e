// SPDX-License-Identifier: PMPL-1.0-or-later

//! Blog post schema and the small text helpers listing pages use.

use super::raw::{RawMap, RawValue};
use super::validate::{put_opt_list, put_opt_string, ContentKind, Fields, ValidatorOptions};
use crate::error::ContentError;
use crate::i18n::DEFAULT_LOCALE;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub pub_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default)]
    pub draft: bool,
    pub locale: String,
}

impl BlogPost {
    pub(crate) fn from_raw(map: &RawMap, options: &ValidatorOptions) -> Result<Self, ContentError> {
        let mut fields = Fields::new(map);
        let post = BlogPost {
            title: fields.string("title"),
            description: fields.string("description"),
            pub_date: fields.date("pubDate"),
            updated_date: fields.optional_date("updatedDate"),
            category: fields.string("category"),
            subcategory: fields.optional_string("subcategory"),
            tags: fields.optional_string_list("tags"),
            image: fields.optional_string("image"),
            video: fields.optional_string("video"),
            draft: fields.bool_or("draft", false),
            locale: fields.string_or("locale", DEFAULT_LOCALE),
        };
        fields.finish(ContentKind::Blog, "blog", options)?;
        Ok(post)
    }

    pub fn to_raw(&self) -> RawValue {
        let mut map = RawMap::new();
        map.insert("title".into(), RawValue::string(&self.title));
        map.insert("description".into(), RawValue::string(&self.description));
        map.insert("pubDate".into(), RawValue::Date(self.pub_date));
        if let Some(updated) = self.updated_date {
            map.insert("updatedDate".into(), RawValue::Date(updated));
        }
        map.insert("category".into(), RawValue::string(&self.category));
        put_opt_string(&mut map, "subcategory", &self.subcategory);
        put_opt_list(&mut map, "tags", &self.tags);
        put_opt_string(&mut map, "image", &self.image);
        put_opt_string(&mut map, "video", &self.video);
        map.insert("draft".into(), RawValue::Bool(self.draft));
        map.insert("locale".into(), RawValue::string(&self.locale));
        RawValue::Map(map)
    }

    /// Date shown on the post: the update date when there is one.
    pub fn display_date(&self) -> DateTime<Utc> {
        self.updated_date.unwrap_or(self.pub_date)
    }

    /// Privacy-enhanced embed URL for the post's video, if any.
    pub fn video_embed_url(&self) -> Option<String> {
        self.video.as_deref().map(video_embed_url)
    }
}

/// `January 5, 2024`
pub fn format_date_long(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Jan 5, 2024`
pub fn format_date_short(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Minutes to read `body` at 200 words per minute, rounded up.
pub fn reading_time_minutes(body: &str) -> usize {
    let words = body.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE)
}

fn youtube_watch_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/shorts/)([^&\s?#/]+)")
            .unwrap()
    })
}

/// Rewrite a YouTube link to the `youtube-nocookie.com` embed form.
///
/// Embed links switch host, watch/short links are rebuilt from the video
/// id, anything else is returned unchanged.
///
/// ```
/// use site_content::content::video_embed_url;
/// assert_eq!(
///     video_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
///     "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"
/// );
/// ```
pub fn video_embed_url(url: &str) -> String {
    if url.contains("/embed/") {
        return url.replacen("youtube.com", "youtube-nocookie.com", 1);
    }
    match youtube_watch_pattern().captures(url) {
        Some(captures) => format!("https://www.youtube-nocookie.com/embed/{}", &captures[1]),
        None => url.to_string(),
    }
}
