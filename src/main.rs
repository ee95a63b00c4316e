// SPDX-License-Identifier: PMPL-1.0-or-later

//! site-content: inspect and check the content of a bilingual blog
//!
//! Resolves translation keys, validates blog and CV records, assembles the
//! CV and prints the localized category table.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use site_content::categories::CategoryTable;
use site_content::config::SiteConfig;
use site_content::content::{
    format_date_long, kind_for_path, load_record, reading_time_minutes, validate_with,
    ContentKind, ValidatedRecord,
};
use site_content::cv::assemble_cv;
use site_content::diagnostics;
use site_content::i18n::{language_name, native_name, LocaleCatalog, Resolver};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "site-content")]
#[command(version)]
#[command(about = "Locale resolution and content validation for a bilingual blog")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (default: ./site-content.yaml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory of locale documents (default: built-in catalog)
    #[arg(long, global = true, value_name = "DIR")]
    locales: Option<PathBuf>,

    /// Accept record keys a shape does not declare
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a translation key to display text
    Resolve {
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// Dotted key path, e.g. nav.home
        #[arg(value_name = "KEY")]
        key: String,

        /// Show which fallback step produced the text
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the translation sub-tree under a key as JSON
    Object {
        #[arg(value_name = "LOCALE")]
        locale: String,

        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Validate a single content file
    Validate {
        /// Markdown (front matter), YAML or JSON record
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Collection (default: inferred from the parent directory)
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,

        /// Print the validated record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check catalog coverage and every record in the content directory
    Check {
        /// Content root holding blog/ and cv/
        #[arg(long, value_name = "DIR")]
        content: Option<PathBuf>,
    },

    /// Print the assembled CV for a locale as JSON
    Cv {
        #[arg(value_name = "LOCALE")]
        locale: String,
    },

    /// List blog categories in a locale
    Categories {
        #[arg(value_name = "LOCALE")]
        locale: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the locales in the catalog
    Locales,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum KindArg {
    Blog,
    Cv,
}

impl From<KindArg> for ContentKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Blog => ContentKind::Blog,
            KindArg::Cv => ContentKind::Cv,
        }
    }
}

fn init_logging(config: &SiteConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SiteConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.locales {
        config.locales_dir = Some(dir);
    }
    if cli.lenient {
        config.strict_fields = false;
    }
    init_logging(&config);

    match cli.command {
        Commands::Resolve {
            locale,
            key,
            verbose,
        } => {
            let catalog = config.catalog()?;
            let resolver = Resolver::new(&catalog);
            let resolution = resolver.resolve_traced(&locale, &key);
            if verbose {
                println!(
                    "{} {}",
                    resolution.text,
                    format!("({})", resolution.source.label()).dimmed()
                );
            } else {
                println!("{}", resolution.text);
            }
        }

        Commands::Object { locale, key } => {
            let catalog = config.catalog()?;
            let resolver = Resolver::new(&catalog);
            match resolver.resolve_object(&locale, &key) {
                Some(tree) => println!("{}", serde_json::to_string_pretty(tree)?),
                None => bail!("no object at `{}` for locale `{}`", key, locale),
            }
        }

        Commands::Validate { path, kind, json } => {
            let kind = match kind {
                Some(kind) => kind.into(),
                None => kind_for_path(&path, None).with_context(|| {
                    format!(
                        "cannot tell the collection of {}; pass --kind",
                        path.display()
                    )
                })?,
            };
            let loaded = load_record(&path)?;

            match validate_with(&loaded.record, kind, &config.validator_options()) {
                Ok(record) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&record)?);
                    } else {
                        print_record_summary(&record, &loaded.body);
                    }
                }
                Err(err) => {
                    println!("{} {}", "invalid".red().bold(), path.display());
                    println!("  {}", err);
                    bail!("{} failed validation", path.display());
                }
            }
        }

        Commands::Check { content } => {
            if let Some(dir) = content {
                config.content_dir = dir;
            }
            let catalog = config.catalog()?;
            diagnostics::run_check(&config, &catalog, &CategoryTable::builtin())?;
        }

        Commands::Cv { locale } => {
            let catalog = config.catalog()?;
            let cv = assemble_cv(&Resolver::new(&catalog), &locale)?;
            println!("{}", serde_json::to_string_pretty(&cv)?);
        }

        Commands::Categories { locale, json } => {
            let categories = CategoryTable::builtin().localized(&locale);
            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                for category in &categories {
                    println!(
                        "{} {} {}",
                        category.icon,
                        category.name.bold(),
                        format!("[{}]", category.id).dimmed()
                    );
                    println!("    {}", category.description);
                    for sub in &category.subcategories {
                        println!("    - {} ({}): {}", sub.name, sub.id, sub.description);
                    }
                }
            }
        }

        Commands::Locales => {
            let catalog = config.catalog()?;
            print_locales(&catalog);
        }
    }

    Ok(())
}

fn print_record_summary(record: &ValidatedRecord, body: &str) {
    println!("{} {} record", "valid".green().bold(), record.kind());
    for line in record_summary(record, body) {
        println!("  {}", line);
    }
}

fn record_summary(record: &ValidatedRecord, body: &str) -> Vec<String> {
    let mut lines = vec![format!("Locale: {}", record.locale())];
    match record {
        ValidatedRecord::Blog(post) => {
            lines.push(format!("Title: {}", post.title));
            lines.push(format!("Category: {}", post.category));
            lines.push(format!("Published: {}", format_date_long(&post.pub_date)));
            if let Some(updated) = &post.updated_date {
                lines.push(format!("Updated: {}", format_date_long(updated)));
            }
            lines.push(format!("Reading time: {} min", reading_time_minutes(body)));
            if post.draft {
                lines.push("draft".yellow().to_string());
            }
            if let Some(embed) = post.video_embed_url() {
                lines.push(format!("Video: {}", embed));
            }
        }
        ValidatedRecord::Cv(entry) => {
            lines.push(format!("Type: {}", entry.entry.shape().as_str()));
            if let Some(order) = entry.entry.order() {
                lines.push(format!("Order: {}", order));
            }
        }
    }
    lines
}

fn print_locales(catalog: &LocaleCatalog) {
    for locale in catalog.locales() {
        let marker = if locale == catalog.default_locale() {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        let missing = catalog
            .missing_keys(locale)
            .map(|keys| keys.len())
            .unwrap_or(0);
        println!(
            "{:8} {:12} {:12} {} missing key(s){}",
            locale.bold(),
            language_name(locale).unwrap_or("-"),
            native_name(locale).unwrap_or("-"),
            missing,
            marker
        );
    }
}
