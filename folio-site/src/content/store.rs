//! In-memory article store
//!
//! Holds the authored collections and answers read-only queries. Every query
//! returns a fresh sequence so the backing collections keep authored order.

use folio_common::{Error, Locale, Result};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use super::blog::{embedded_blog_articles, load_blog_dir, Article};
use super::journal::{embedded_journal_articles, parse_journal_articles, JournalArticle};

/// Both collections as queried for display, shared read-only
#[derive(Debug, Clone)]
pub struct ContentSnapshot {
    /// Blog posts in authored order
    pub blog: Arc<[Article]>,
    /// Journal articles, most recent first
    pub journal: Arc<[JournalArticle]>,
}

/// Authored blog posts and journal articles
#[derive(Debug, Clone)]
pub struct ArticleStore {
    blog: Vec<Article>,
    journal: Vec<JournalArticle>,
}

impl ArticleStore {
    /// Build a store, rejecting content that would fail at render time
    pub fn new(blog: Vec<Article>, journal: Vec<JournalArticle>) -> Result<Self> {
        validate_blog(&blog)?;
        validate_journal(&journal)?;
        Ok(Self { blog, journal })
    }

    /// Store backed only by the content compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::new(embedded_blog_articles()?, embedded_journal_articles()?)
    }

    /// Load content, preferring files under `content_dir` when configured.
    ///
    /// `content_dir/blog/*.md` replaces the embedded posts and
    /// `content_dir/journal_articles.json` replaces the embedded journal list.
    pub fn load(content_dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = content_dir else {
            return Self::embedded();
        };

        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "content directory does not exist: {}",
                dir.display()
            )));
        }

        let blog_dir = dir.join("blog");
        let blog = if blog_dir.is_dir() {
            info!("Loading blog posts from {}", blog_dir.display());
            load_blog_dir(&blog_dir)?
        } else {
            embedded_blog_articles()?
        };

        let journal_path = dir.join("journal_articles.json");
        let journal = if journal_path.is_file() {
            info!("Loading journal articles from {}", journal_path.display());
            parse_journal_articles(&std::fs::read_to_string(&journal_path)?)?
        } else {
            embedded_journal_articles()?
        };

        Self::new(blog, journal)
    }

    /// All blog posts in authored order
    pub fn list_blog_articles(&self) -> Vec<Article> {
        self.blog.clone()
    }

    /// All journal articles, most recent first.
    ///
    /// The sort is stable: articles sharing a date keep their authored order.
    pub fn list_journal_articles(&self) -> Vec<JournalArticle> {
        let mut sorted = self.journal.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Journal articles carrying `tag` in `locale`, compared case-insensitively
    pub fn filter_journal_articles_by_tag(&self, tag: &str, locale: Locale) -> Vec<JournalArticle> {
        self.journal
            .iter()
            .filter(|article| article.has_tag(tag, locale))
            .cloned()
            .collect()
    }

    /// Distinct tags across all journal articles in `locale`
    pub fn list_all_journal_tags(&self, locale: Locale) -> BTreeSet<String> {
        self.journal
            .iter()
            .filter_map(|article| article.tags_for(locale))
            .flatten()
            .cloned()
            .collect()
    }

    pub fn find_blog_article(&self, id: &str) -> Option<&Article> {
        self.blog.iter().find(|article| article.id == id)
    }

    /// Query both collections once for display
    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            blog: self.list_blog_articles().into(),
            journal: self.list_journal_articles().into(),
        }
    }
}

fn validate_blog(articles: &[Article]) -> Result<()> {
    let mut seen = HashSet::new();
    for article in articles {
        if article.id.trim().is_empty() {
            return Err(Error::Content("blog post with an empty id".to_string()));
        }
        if !seen.insert(article.id.as_str()) {
            return Err(Error::Content(format!("duplicate blog post id '{}'", article.id)));
        }
        if article.title.is_blank() {
            return Err(Error::Content(format!("blog post '{}' has an empty title", article.id)));
        }
        if let Some(tags) = &article.tags {
            check_tags(&article.id, tags)?;
        }
    }
    Ok(())
}

fn validate_journal(articles: &[JournalArticle]) -> Result<()> {
    let mut seen = HashSet::new();
    for article in articles {
        if article.id.trim().is_empty() {
            return Err(Error::Content("journal article with an empty id".to_string()));
        }
        if !seen.insert(article.id.as_str()) {
            return Err(Error::Content(format!("duplicate journal article id '{}'", article.id)));
        }
        if article.title.en.trim().is_empty() || article.title.pt.trim().is_empty() {
            return Err(Error::Content(format!(
                "journal article '{}' is missing a title translation",
                article.id
            )));
        }
        if article.journal.trim().is_empty() {
            return Err(Error::Content(format!("journal article '{}' has no journal name", article.id)));
        }
        if article.authors.is_empty() || article.authors.iter().any(|a| a.trim().is_empty()) {
            return Err(Error::Content(format!("journal article '{}' has an empty author", article.id)));
        }
        if let Some(tags) = &article.tags {
            check_tags(&article.id, &tags.en)?;
            check_tags(&article.id, &tags.pt)?;
        }
    }
    Ok(())
}

fn check_tags(id: &str, tags: &[String]) -> Result<()> {
    if tags.iter().any(|t| t.trim().is_empty()) {
        return Err(Error::Content(format!("article '{}' has an empty tag", id)));
    }
    Ok(())
}
