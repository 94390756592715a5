//! Tabbed article listing
//!
//! The view holds the already-queried collections and one piece of local
//! state, the active tab. Rendering reads the locale at call time, so a
//! locale change only needs a re-render.

use folio_common::dates::format_display_date;
use folio_common::Locale;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::sync::Arc;

use super::html::{escape, render_tags};
use crate::content::{Article, ContentSnapshot, JournalArticle};
use crate::i18n::MessageBundle;

/// Listing tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Blog,
    Journal,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Blog => "blog",
            Tab::Journal => "journal",
        }
    }

    /// Tab from a query value; unknown or missing values select the blog tab
    pub fn from_query(value: Option<&str>) -> Tab {
        match value {
            Some("journal") => Tab::Journal,
            _ => Tab::Blog,
        }
    }
}

/// Listing over a content snapshot
#[derive(Debug, Clone)]
pub struct ArticleListView {
    content: ContentSnapshot,
    active_tab: Tab,
}

impl ArticleListView {
    pub fn new(content: ContentSnapshot) -> Self {
        Self {
            content,
            active_tab: Tab::default(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switch tabs. Collections are left untouched.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn blog_articles(&self) -> &Arc<[Article]> {
        &self.content.blog
    }

    pub fn journal_articles(&self) -> &Arc<[JournalArticle]> {
        &self.content.journal
    }

    /// Page body for `locale`
    pub fn render(&self, locale: Locale, messages: &MessageBundle) -> String {
        let page = &messages.articles_page;
        let mut out = String::new();

        let _ = writeln!(out, r#"<h1 class="page-title">{}</h1>"#, escape(&page.title));

        out.push_str(r#"<nav class="tabs" role="tablist">"#);
        self.render_tab_button(&mut out, Tab::Blog, &page.blog_articles.title, self.content.blog.len());
        self.render_tab_button(
            &mut out,
            Tab::Journal,
            &page.published_papers.title,
            self.content.journal.len(),
        );
        out.push_str("</nav>\n");

        match self.active_tab {
            Tab::Blog => self.render_blog_section(&mut out, locale, messages),
            Tab::Journal => self.render_journal_section(&mut out, locale, messages),
        }

        out
    }

    fn render_tab_button(&self, out: &mut String, tab: Tab, label: &str, count: usize) {
        let selected = self.active_tab == tab;
        let _ = write!(
            out,
            r#"<a class="tab{}" role="tab" aria-selected="{}" href="/articles?tab={}">{} ({})</a>"#,
            if selected { " active" } else { "" },
            selected,
            tab.as_str(),
            escape(label),
            count
        );
    }

    fn render_blog_section(&self, out: &mut String, locale: Locale, messages: &MessageBundle) {
        let section = &messages.articles_page.blog_articles;
        let _ = writeln!(
            out,
            r#"<section class="blog-articles"><h2>{}</h2><div class="grid">"#,
            escape(&section.title)
        );
        for article in self.content.blog.iter() {
            render_blog_card(out, article, locale, messages);
        }
        out.push_str("</div></section>\n");
    }

    fn render_journal_section(&self, out: &mut String, locale: Locale, messages: &MessageBundle) {
        let section = &messages.articles_page.published_papers;
        let _ = writeln!(
            out,
            r#"<section class="journal-articles"><h2>{}</h2><div class="list">"#,
            escape(&section.title)
        );
        for article in self.content.journal.iter() {
            render_journal_card(out, article, locale, messages);
        }
        out.push_str("</div></section>\n");
    }
}

/// One blog post card. Tags are shared by both locales.
pub fn render_blog_card(out: &mut String, article: &Article, locale: Locale, messages: &MessageBundle) {
    let _ = write!(
        out,
        r#"<a class="card blog-card" href="/articles/{id}"><h3>{title}</h3>"#,
        id = escape(&article.id),
        title = escape(article.title.for_locale(locale)),
    );
    render_tags(out, article.tags.as_deref(), "blog");
    let _ = writeln!(
        out,
        r#"<div class="card-footer"><time datetime="{iso}">{date}</time><span class="badge">{badge}</span><span class="arrow">→</span></div></a>"#,
        iso = article.date,
        date = format_display_date(article.date),
        badge = escape(&messages.articles_page.blog_articles.badge),
    );
}

/// One journal article card in `locale`
pub fn render_journal_card(
    out: &mut String,
    article: &JournalArticle,
    locale: Locale,
    messages: &MessageBundle,
) {
    let papers = &messages.articles_page.published_papers;

    let _ = write!(
        out,
        r#"<article class="card journal-card" id="{id}"><h3>{title}</h3><p class="journal">{journal}</p>"#,
        id = escape(&article.id),
        title = escape(article.title.get(locale)),
        journal = escape(&article.journal),
    );
    let _ = write!(
        out,
        r#"<p class="authors"><span class="label">{}:</span> {}</p>"#,
        escape(&papers.authors),
        escape(&article.authors.join(", ")),
    );

    if let Some(text) = article.abstract_for(locale) {
        let _ = write!(out, r#"<p class="abstract">{}</p>"#, escape(text));
    }

    render_tags(out, article.tags_for(locale), "journal");

    let _ = write!(
        out,
        r#"<div class="card-footer"><time datetime="{iso}">{date}</time><span class="badge">{badge}</span>"#,
        iso = article.date,
        date = format_display_date(article.date),
        badge = escape(&papers.title),
    );
    if let Some(link) = article.doi_link() {
        let _ = write!(
            out,
            r#"<a class="doi" href="{}" target="_blank" rel="noopener noreferrer">DOI</a>"#,
            escape(&link)
        );
    }
    if let Some(url) = &article.url {
        let _ = write!(
            out,
            r#"<a class="external" href="{}" target="_blank" rel="noopener noreferrer">{} →</a>"#,
            escape(url),
            escape(&papers.view_paper)
        );
    }
    out.push_str("</div></article>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ArticleTitle;
    use crate::i18n::MessageCatalog;
    use chrono::NaiveDate;
    use folio_common::Localized;

    fn journal_article() -> JournalArticle {
        JournalArticle {
            id: "ct-2024".to_string(),
            title: Localized::new("Games & Thinking".to_string(), "Jogos e Pensamento".to_string()),
            journal: "RENOTE".to_string(),
            authors: vec!["Ana Silva".to_string(), "Bruno Lima".to_string()],
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            doi: Some("10.22456/1679-1916.144997".to_string()),
            url: Some("http://dx.doi.org/10.22456/1679-1916.144997".to_string()),
            tags: Some(Localized::new(
                vec!["Construct 3".to_string(), "Game Development".to_string()],
                vec!["Construct 3".to_string(), "Desenvolvimento de jogos".to_string()],
            )),
            abstract_text: Some(Localized::new("English abstract".to_string(), "Resumo".to_string())),
        }
    }

    fn blog_article() -> Article {
        Article {
            id: "hello".to_string(),
            title: ArticleTitle::Single("Hello".to_string()),
            tags: Some(vec!["rust".to_string()]),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            summary: None,
            body: String::new(),
        }
    }

    fn snapshot(blog: Vec<Article>, journal: Vec<JournalArticle>) -> ContentSnapshot {
        ContentSnapshot {
            blog: blog.into(),
            journal: journal.into(),
        }
    }

    fn catalog() -> MessageCatalog {
        MessageCatalog::embedded().unwrap()
    }

    #[test]
    fn test_initial_tab_is_blog() {
        let view = ArticleListView::new(snapshot(vec![blog_article()], vec![journal_article()]));
        assert_eq!(view.active_tab(), Tab::Blog);

        let catalog = catalog();
        let html = view.render(Locale::En, catalog.bundle(Locale::En));
        assert!(html.contains("blog-articles"));
        assert!(!html.contains("journal-articles"));
        assert!(html.contains("Blog Articles (1)"));
        assert!(html.contains("Published Papers (1)"));
    }

    #[test]
    fn test_blog_card_contents() {
        let view = ArticleListView::new(snapshot(vec![blog_article()], vec![]));
        let catalog = catalog();
        let html = view.render(Locale::Pt, catalog.bundle(Locale::Pt));
        assert!(html.contains(r#"href="/articles/hello""#));
        assert!(html.contains("#rust"));
        assert!(html.contains("May 01, 2024"));
    }

    #[test]
    fn test_tab_switch_keeps_collections() {
        let mut view = ArticleListView::new(snapshot(vec![blog_article()], vec![journal_article()]));
        let blog_before = Arc::clone(view.blog_articles());
        let journal_before = Arc::clone(view.journal_articles());

        view.select_tab(Tab::Journal);
        assert_eq!(view.active_tab(), Tab::Journal);
        view.select_tab(Tab::Blog);

        assert!(Arc::ptr_eq(&blog_before, view.blog_articles()));
        assert!(Arc::ptr_eq(&journal_before, view.journal_articles()));
    }

    #[test]
    fn test_journal_card_follows_locale() {
        let mut view = ArticleListView::new(snapshot(vec![], vec![journal_article()]));
        view.select_tab(Tab::Journal);
        let catalog = catalog();

        let en = view.render(Locale::En, catalog.bundle(Locale::En));
        assert!(en.contains("Games &amp; Thinking"));
        assert!(en.contains("English abstract"));
        assert!(en.contains("#Game Development"));
        assert!(en.contains("Authors:</span> Ana Silva, Bruno Lima"));
        assert!(en.contains("View paper →"));

        let pt = view.render(Locale::Pt, catalog.bundle(Locale::Pt));
        assert!(pt.contains("Jogos e Pensamento"));
        assert!(pt.contains("Resumo"));
        assert!(pt.contains("#Desenvolvimento de jogos"));
        assert!(pt.contains("Autores:"));
        assert!(!pt.contains("English abstract"));
    }

    #[test]
    fn test_journal_links() {
        let catalog = catalog();
        let mut out = String::new();
        render_journal_card(&mut out, &journal_article(), Locale::En, catalog.bundle(Locale::En));

        assert!(out.contains(
            r#"href="https://doi.org/10.22456/1679-1916.144997" target="_blank" rel="noopener noreferrer">DOI</a>"#
        ));
        assert!(out.contains(r#"href="http://dx.doi.org/10.22456/1679-1916.144997" target="_blank""#));
    }

    #[test]
    fn test_date_not_localized() {
        let catalog = catalog();
        for locale in Locale::ALL {
            let mut out = String::new();
            render_journal_card(&mut out, &journal_article(), locale, catalog.bundle(locale));
            assert!(out.contains("Jan 06, 2025"));
        }
    }

    #[test]
    fn test_missing_optional_fields_omitted() {
        let mut article = journal_article();
        article.abstract_text = None;
        article.tags = None;
        article.doi = None;
        article.url = None;

        let catalog = catalog();
        let mut out = String::new();
        render_journal_card(&mut out, &article, Locale::En, catalog.bundle(Locale::En));

        assert!(!out.contains("abstract"));
        assert!(!out.contains("class=\"tags\""));
        assert!(!out.contains("DOI"));
        assert!(!out.contains("View paper"));
        assert!(out.contains("RENOTE"));
    }

    #[test]
    fn test_empty_collections_render_empty_sections() {
        let mut view = ArticleListView::new(snapshot(vec![], vec![]));
        let catalog = catalog();
        let bundle = catalog.bundle(Locale::En);

        let blog = view.render(Locale::En, bundle);
        assert!(blog.contains(r#"<div class="grid">"#));
        assert!(blog.contains("Blog Articles (0)"));

        view.select_tab(Tab::Journal);
        let journal = view.render(Locale::En, bundle);
        assert!(journal.contains(r#"<div class="list">"#));
        assert!(!journal.contains("journal-card"));
    }

    #[test]
    fn test_tab_from_query() {
        assert_eq!(Tab::from_query(Some("journal")), Tab::Journal);
        assert_eq!(Tab::from_query(Some("blog")), Tab::Blog);
        assert_eq!(Tab::from_query(Some("bogus")), Tab::Blog);
        assert_eq!(Tab::from_query(None), Tab::Blog);
    }
}
