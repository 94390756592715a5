//! Message bundles
//!
//! One JSON document per locale, embedded at compile time. Each bundle is
//! kept both as a typed struct for rendering and as the raw document for
//! key-path lookup (`articlesPage.publishedPapers.title`).

use folio_common::{Error, Locale, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

const EN_MESSAGES: &str = include_str!("../../messages/en.json");
const PT_MESSAGES: &str = include_str!("../../messages/pt.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMessages {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageMessages {
    pub label: String,
    /// Label of the toggle button, naming the other language
    pub switch_to: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogArticlesMessages {
    pub title: String,
    pub badge: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedPapersMessages {
    pub title: String,
    pub authors: String,
    pub view_paper: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesPageMessages {
    pub title: String,
    pub blog_articles: BlogArticlesMessages,
    pub published_papers: PublishedPapersMessages,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMessages {
    pub back: String,
    pub not_found: String,
}

/// Typed view of a bundle document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleDocument {
    site: SiteMessages,
    language: LanguageMessages,
    articles_page: ArticlesPageMessages,
    article: ArticleMessages,
}

/// All UI strings for one locale
#[derive(Debug, Clone)]
pub struct MessageBundle {
    pub locale: Locale,
    pub site: SiteMessages,
    pub language: LanguageMessages,
    pub articles_page: ArticlesPageMessages,
    pub article: ArticleMessages,
    raw: Value,
}

impl MessageBundle {
    /// Parse a bundle document for `locale`
    pub fn from_json(locale: Locale, json: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(json)?;
        let doc: BundleDocument = serde_json::from_value(raw.clone())
            .map_err(|e| Error::Content(format!("{} message bundle: {}", locale, e)))?;
        Ok(Self {
            locale,
            site: doc.site,
            language: doc.language,
            articles_page: doc.articles_page,
            article: doc.article,
            raw,
        })
    }

    /// Look up a dotted key path, e.g. `articlesPage.title`
    pub fn get(&self, key_path: &str) -> Option<&str> {
        let pointer = format!("/{}", key_path.replace('.', "/"));
        self.raw.pointer(&pointer).and_then(Value::as_str)
    }

    /// Every dotted key path that resolves to a string
    pub fn key_paths(&self) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        collect_paths(&self.raw, String::new(), &mut paths);
        paths
    }
}

fn collect_paths(value: &Value, prefix: String, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_paths(child, path, out);
            }
        }
        Value::String(_) => {
            out.insert(prefix);
        }
        _ => {}
    }
}

/// Both bundles, checked for matching key sets
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    en: MessageBundle,
    pt: MessageBundle,
}

impl MessageCatalog {
    /// Build a catalog, failing if either bundle lacks a key the other has
    pub fn new(en: MessageBundle, pt: MessageBundle) -> Result<Self> {
        let en_keys = en.key_paths();
        let pt_keys = pt.key_paths();

        let missing_pt: Vec<_> = en_keys.difference(&pt_keys).cloned().collect();
        let missing_en: Vec<_> = pt_keys.difference(&en_keys).cloned().collect();
        if !missing_pt.is_empty() || !missing_en.is_empty() {
            return Err(Error::Content(format!(
                "message bundles differ: missing in pt {:?}, missing in en {:?}",
                missing_pt, missing_en
            )));
        }

        Ok(Self { en, pt })
    }

    /// Bundles compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::new(
            MessageBundle::from_json(Locale::En, EN_MESSAGES)?,
            MessageBundle::from_json(Locale::Pt, PT_MESSAGES)?,
        )
    }

    pub fn bundle(&self, locale: Locale) -> &MessageBundle {
        match locale {
            Locale::Pt => &self.pt,
            Locale::En => &self.en,
        }
    }
}
