// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale identifier checks.
//!
//! Locale ids are BCP 47 style `language[-REGION]` tags whose primary
//! subtag is an ISO 639-1 code (`en`, `es`, `pt-BR`, `es-419`). Catalog
//! loading uses this to reject stray files in the locales directory.

/// ISO 639-1 two-letter codes, sorted for binary search.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Whether `code` is an ISO 639-1 code. Case-sensitive, codes are lowercase.
pub fn is_iso639_1(code: &str) -> bool {
    ISO_639_1.binary_search(&code).is_ok()
}

/// The language part of a locale id (`"pt-BR"` -> `"pt"`).
pub fn primary_subtag(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

/// Whether `locale` is a usable locale id.
///
/// Accepts a bare ISO 639-1 code, optionally followed by a region: two
/// uppercase letters or a three-digit UN M.49 area.
///
/// ```
/// use site_content::i18n::is_valid_locale_id;
/// assert!(is_valid_locale_id("es"));
/// assert!(is_valid_locale_id("es-419"));
/// assert!(!is_valid_locale_id("english"));
/// ```
pub fn is_valid_locale_id(locale: &str) -> bool {
    let mut parts = locale.split('-');
    let language = parts.next().unwrap_or_default();
    if !is_iso639_1(language) {
        return false;
    }
    match (parts.next(), parts.next()) {
        (None, _) => true,
        (Some(region), None) => is_region(region),
        (Some(_), Some(_)) => false,
    }
}

fn is_region(region: &str) -> bool {
    (region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase()))
        || (region.len() == 3 && region.chars().all(|c| c.is_ascii_digit()))
}

/// English name for the language of a locale id.
pub fn language_name(locale: &str) -> Option<&'static str> {
    match primary_subtag(locale) {
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "pt" => Some("Portuguese"),
        "it" => Some("Italian"),
        "ja" => Some("Japanese"),
        "zh" => Some("Chinese"),
        "ko" => Some("Korean"),
        "nl" => Some("Dutch"),
        "ru" => Some("Russian"),
        _ => None,
    }
}

/// Name of the language written in that language, for locale pickers.
pub fn native_name(locale: &str) -> Option<&'static str> {
    match primary_subtag(locale) {
        "en" => Some("English"),
        "es" => Some("Español"),
        "fr" => Some("Français"),
        "de" => Some("Deutsch"),
        "pt" => Some("Português"),
        "it" => Some("Italiano"),
        "ja" => Some("日本語"),
        "zh" => Some("中文"),
        "ko" => Some("한국어"),
        "nl" => Some("Nederlands"),
        "ru" => Some("Русский"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_table_is_sorted() {
        assert!(ISO_639_1.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn accepts_language_and_region_forms() {
        assert!(is_valid_locale_id("en"));
        assert!(is_valid_locale_id("pt-BR"));
        assert!(is_valid_locale_id("es-419"));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(!is_valid_locale_id(""));
        assert!(!is_valid_locale_id("EN"));
        assert!(!is_valid_locale_id("xx"));
        assert!(!is_valid_locale_id("en-us"));
        assert!(!is_valid_locale_id("en-US-x"));
        assert!(!is_valid_locale_id("eng"));
    }

    #[test]
    fn names_use_primary_subtag() {
        assert_eq!(language_name("es-419"), Some("Spanish"));
        assert_eq!(native_name("es"), Some("Español"));
        assert_eq!(language_name("tlh"), None);
    }
}
