//! Single blog post page

use folio_common::dates::format_display_date;
use folio_common::Locale;
use std::fmt::Write;

use super::html::{escape, render_tags};
use super::markdown::render_markdown;
use crate::content::Article;
use crate::i18n::MessageBundle;

/// Page body for one post; the body is markdown
pub fn render_article(article: &Article, locale: Locale, messages: &MessageBundle) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<article class="post"><a class="back" href="/articles">← {back}</a><h1>{title}</h1><time datetime="{iso}">{date}</time>"#,
        back = escape(&messages.article.back),
        title = escape(article.title.for_locale(locale)),
        iso = article.date,
        date = format_display_date(article.date),
    );
    render_tags(&mut out, article.tags.as_deref(), "blog");

    if let Some(summary) = &article.summary {
        let _ = write!(out, r#"<p class="summary">{}</p>"#, escape(summary));
    }

    out.push_str(r#"<div class="post-body">"#);
    out.push_str(&render_markdown(&article.body));
    out.push_str("</div>");
    out.push_str("</article>\n");
    out
}

/// Body for an unknown post id
pub fn render_not_found(messages: &MessageBundle) -> String {
    format!(
        r#"<section class="not-found"><h1>{}</h1><a href="/articles">← {}</a></section>"#,
        escape(&messages.article.not_found),
        escape(&messages.article.back)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ArticleTitle;
    use crate::i18n::MessageCatalog;
    use chrono::NaiveDate;
    use folio_common::Localized;

    #[test]
    fn test_render_article_markdown_body() {
        let article = Article {
            id: "hello".to_string(),
            title: ArticleTitle::Localized(Localized::new("Hello".to_string(), "Olá".to_string())),
            tags: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            summary: Some("Short".to_string()),
            body: "## Heading\n\nSee [site](https://x.org) and <b>raw</b>.".to_string(),
        };
        let catalog = MessageCatalog::embedded().unwrap();
        let html = render_article(&article, Locale::Pt, catalog.bundle(Locale::Pt));

        assert!(html.contains("<h1>Olá</h1>"));
        assert!(html.contains("Mar 10, 2024"));
        assert!(html.contains("<h2>Heading</h2>"));
        assert!(html.contains(r#"<a href="https://x.org">site</a>"#));
        assert!(html.contains("&lt;b&gt;raw&lt;/b&gt;"));
        assert!(html.contains("Voltar para artigos"));
        assert!(!html.contains("class=\"tags\""));
    }

    #[test]
    fn test_render_not_found() {
        let catalog = MessageCatalog::embedded().unwrap();
        let html = render_not_found(catalog.bundle(Locale::En));
        assert!(html.contains("Article not found"));
    }
}
