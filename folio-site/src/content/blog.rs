//! Blog posts
//!
//! Posts come from the embedded JSON document, or from `blog/*.md` files in a
//! configured content directory. Markdown posts open with a TOML front matter
//! block fenced by `+++` lines:
//!
//! ```text
//! +++
//! title = { en = "Hello", pt = "Olá" }
//! tags = ["personal"]
//! date = 2024-03-10
//! +++
//! Post body...
//! ```

use chrono::NaiveDate;
use folio_common::dates::{iso_date, parse_iso_date};
use folio_common::{Error, Locale, Localized, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Blog posts compiled into the binary
const EMBEDDED_BLOG_ARTICLES: &str = include_str!("../../content/blog_articles.json");

/// Front matter fence
const FENCE: &str = "+++";

/// A blog post title: one string for both locales, or one per locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleTitle {
    Localized(Localized<String>),
    Single(String),
}

impl ArticleTitle {
    pub fn for_locale(&self, locale: Locale) -> &str {
        match self {
            ArticleTitle::Localized(title) => title.get(locale),
            ArticleTitle::Single(title) => title,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        match self {
            ArticleTitle::Localized(title) => {
                title.en.trim().is_empty() || title.pt.trim().is_empty()
            }
            ArticleTitle::Single(title) => title.trim().is_empty(),
        }
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Article {
    pub id: String,
    pub title: ArticleTitle,
    /// Tags are shared by both locales
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
}

/// Front matter of a markdown post
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontMatter {
    id: Option<String>,
    title: ArticleTitle,
    tags: Option<Vec<String>>,
    /// Quoted string or bare TOML date
    date: toml::Value,
    summary: Option<String>,
}

/// Parse a JSON array of blog posts
pub fn parse_blog_articles(json: &str) -> Result<Vec<Article>> {
    let articles = serde_json::from_str::<Vec<Article>>(json)?;
    Ok(articles)
}

/// Blog posts shipped with the binary
pub fn embedded_blog_articles() -> Result<Vec<Article>> {
    parse_blog_articles(EMBEDDED_BLOG_ARTICLES)
}

/// Parse one markdown post. `fallback_id` is used when the front matter has no `id`.
pub fn parse_markdown_post(fallback_id: &str, text: &str) -> Result<Article> {
    let text = text.trim_start_matches('\u{feff}');
    let mut lines = text.lines();

    if lines.next().map(str::trim) != Some(FENCE) {
        return Err(Error::Content(format!(
            "post '{}' does not start with a {} front matter fence",
            fallback_id, FENCE
        )));
    }

    let mut header = Vec::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim() == FENCE {
            closed = true;
            break;
        }
        header.push(line);
    }
    if !closed {
        return Err(Error::Content(format!(
            "post '{}' has an unterminated front matter block",
            fallback_id
        )));
    }

    let front: FrontMatter = toml::from_str(&header.join("\n"))
        .map_err(|e| Error::Content(format!("post '{}': {}", fallback_id, e)))?;

    let date = match &front.date {
        toml::Value::String(raw) => parse_iso_date(raw)?,
        toml::Value::Datetime(dt) => parse_iso_date(&dt.to_string())?,
        other => {
            return Err(Error::Content(format!(
                "post '{}' has a non-date 'date' value: {}",
                fallback_id, other
            )))
        }
    };

    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    Ok(Article {
        id: front.id.unwrap_or_else(|| fallback_id.to_string()),
        title: front.title,
        tags: front.tags,
        date,
        summary: front.summary,
        body,
    })
}

/// Load every `*.md` post under `dir`, ordered by file name
pub fn load_blog_dir(dir: &Path) -> Result<Vec<Article>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| Error::Content(format!("reading {}: {}", dir.display(), e)))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md") {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();

    let mut articles = Vec::with_capacity(paths.len());
    for path in paths {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::Content(format!("unusable file name: {}", path.display())))?;
        let text = std::fs::read_to_string(&path)?;
        let article = parse_markdown_post(stem, &text)?;
        debug!("Loaded blog post '{}' from {}", article.id, path.display());
        articles.push(article);
    }
    Ok(articles)
}
