//! HTML helpers shared by the page renderers

use folio_common::Locale;
use std::fmt::Write;

use crate::i18n::MessageBundle;

/// Escape text for element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `#tag` chips, or nothing when there are no tags
pub fn render_tags(out: &mut String, tags: Option<&[String]>, class: &str) {
    let Some(tags) = tags.filter(|t| !t.is_empty()) else {
        return;
    };
    out.push_str(r#"<div class="tags">"#);
    for tag in tags {
        let _ = write!(out, r#"<span class="tag {}">#{}</span>"#, class, escape(tag));
    }
    out.push_str("</div>");
}

/// Full document around `body`, with the site header and language toggle
pub fn render_page(locale: Locale, messages: &MessageBundle, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{description}">
    <title>{title} | {site}</title>
    <link rel="stylesheet" href="/static/site.css">
</head>
<body>
    <header class="site-header">
        <a class="site-title" href="/articles">{site}</a>
        <form class="language-toggle" method="post" action="/language/toggle">
            <button type="submit" aria-label="{language_label}">{switch_to}</button>
        </form>
    </header>
    <main class="container">
{body}
    </main>
</body>
</html>
"#,
        lang = locale.html_lang(),
        description = escape(&messages.site.description),
        title = escape(title),
        site = escape(&messages.site.title),
        language_label = escape(&messages.language.label),
        switch_to = escape(&messages.language.switch_to),
        body = body,
    )
}
