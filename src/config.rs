// SPDX-License-Identifier: PMPL-1.0-or-later

//! Site configuration.
//!
//! Read from a YAML file (`site-content.yaml` in the working directory when
//! no path is given), then overridden by `SITE_CONTENT_*` environment
//! variables. A `.env` file is honoured. Every field has a default, so an
//! empty or absent file is valid.

use crate::content::ValidatorOptions;
use crate::i18n::{is_valid_locale_id, LocaleCatalog, DEFAULT_LOCALE};
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "site-content.yaml";
const ENV_PREFIX: &str = "SITE_CONTENT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Locale used when a requested one is missing or lacks a key.
    pub default_locale: String,
    /// Directory of `<locale>.json|yaml` documents; built-in catalog if unset.
    pub locales_dir: Option<PathBuf>,
    /// Root holding the `blog/` and `cv/` collections.
    pub content_dir: PathBuf,
    /// Reject record keys a shape does not declare.
    pub strict_fields: bool,
    /// trace, debug, info, warn, error (or any `EnvFilter` directive)
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            locales_dir: None,
            content_dir: PathBuf::from("src/content"),
            strict_fields: true,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// File (explicit, or the default file if present) plus environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Apply `SITE_CONTENT_*` overrides from `lookup` (the process
    /// environment in [`load`](Self::load)).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{}{}", ENV_PREFIX, suffix));

        if let Some(locale) = var("DEFAULT_LOCALE") {
            self.default_locale = locale;
        }
        if let Some(dir) = var("LOCALES_DIR") {
            self.locales_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = var("CONTENT_DIR") {
            self.content_dir = PathBuf::from(dir);
        }
        if let Some(flag) = var("STRICT") {
            self.strict_fields = parse_flag(&flag)
                .ok_or_else(|| anyhow!("{}STRICT must be true or false, got `{}`", ENV_PREFIX, flag))?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn check(&self) -> Result<()> {
        if !is_valid_locale_id(&self.default_locale) {
            bail!("default_locale `{}` is not a locale id", self.default_locale);
        }
        Ok(())
    }

    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            strict: self.strict_fields,
        }
    }

    /// The configured catalog: the locales directory, or the built-in
    /// documents with this config's default locale.
    pub fn catalog(&self) -> Result<LocaleCatalog> {
        match &self.locales_dir {
            Some(dir) => LocaleCatalog::load_dir(dir, &self.default_locale),
            None => Ok(LocaleCatalog::builtin_with_default(&self.default_locale)?),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
