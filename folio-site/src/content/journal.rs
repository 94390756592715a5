//! Journal publication records

use chrono::NaiveDate;
use folio_common::dates::iso_date;
use folio_common::{Locale, Localized, Result};
use serde::{Deserialize, Serialize};

/// Resolver prefix for DOI links
pub const DOI_RESOLVER: &str = "https://doi.org/";

/// Journal articles compiled into the binary
const EMBEDDED_JOURNAL_ARTICLES: &str = include_str!("../../content/journal_articles.json");

/// A peer-reviewed publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JournalArticle {
    pub id: String,
    pub title: Localized<String>,
    pub journal: String,
    /// Authors in publication order
    pub authors: Vec<String>,
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Localized<Vec<String>>>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<Localized<String>>,
}

impl JournalArticle {
    /// Tags for `locale`, or `None` when the article carries no tags
    pub fn tags_for(&self, locale: Locale) -> Option<&[String]> {
        self.tags.as_ref().map(|tags| tags.get(locale).as_slice())
    }

    /// Abstract for `locale`
    pub fn abstract_for(&self, locale: Locale) -> Option<&str> {
        self.abstract_text.as_ref().map(|a| a.get(locale).as_str())
    }

    /// Resolver link for the DOI, if one is recorded
    pub fn doi_link(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("{}{}", DOI_RESOLVER, doi.trim()))
    }

    /// Case-insensitive exact tag match in `locale`
    pub fn has_tag(&self, tag: &str, locale: Locale) -> bool {
        let wanted = tag.to_lowercase();
        self.tags_for(locale)
            .is_some_and(|tags| tags.iter().any(|t| t.to_lowercase() == wanted))
    }
}

/// Parse a JSON array of journal articles
pub fn parse_journal_articles(json: &str) -> Result<Vec<JournalArticle>> {
    let articles = serde_json::from_str::<Vec<JournalArticle>>(json)?;
    Ok(articles)
}

/// Journal articles shipped with the binary
pub fn embedded_journal_articles() -> Result<Vec<JournalArticle>> {
    parse_journal_articles(EMBEDDED_JOURNAL_ARTICLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[{
        "id": "a",
        "title": {"en": "Title", "pt": "Titulo"},
        "journal": "RENOTE",
        "authors": ["Ana", "Bruno"],
        "date": "2025-01-06 ",
        "doi": "10.1/abc",
        "tags": {"en": ["Construct 3", "Games"], "pt": ["Construct 3", "Jogos"]}
    }]"#;

    #[test]
    fn test_parse_sample() {
        let articles = parse_journal_articles(SAMPLE).unwrap();
        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(article.doi_link().as_deref(), Some("https://doi.org/10.1/abc"));
        assert!(article.abstract_text.is_none());
        assert!(article.url.is_none());
    }

    #[test]
    fn test_has_tag_is_case_insensitive_and_exact() {
        let article = &parse_journal_articles(SAMPLE).unwrap()[0];
        assert!(article.has_tag("construct 3", Locale::En));
        assert!(article.has_tag("JOGOS", Locale::Pt));
        assert!(!article.has_tag("jogos", Locale::En));
        assert!(!article.has_tag("construct", Locale::En));
    }

    #[test]
    fn test_partial_locale_tags_rejected() {
        let json = r#"[{
            "id": "a",
            "title": {"en": "Title", "pt": "Titulo"},
            "journal": "J",
            "authors": ["Ana"],
            "date": "2025-01-06",
            "tags": {"en": ["Games"]}
        }]"#;
        assert!(parse_journal_articles(json).is_err());
    }

    #[test]
    fn test_partial_locale_title_rejected() {
        let json = r#"[{
            "id": "a",
            "title": {"pt": "Titulo"},
            "journal": "J",
            "authors": ["Ana"],
            "date": "2025-01-06"
        }]"#;
        assert!(parse_journal_articles(json).is_err());
    }

    #[test]
    fn test_embedded_articles_load() {
        let articles = embedded_journal_articles().unwrap();
        assert!(!articles.is_empty());
        for article in &articles {
            assert_eq!(article.tags.is_some(), article.tags_for(Locale::En).is_some());
        }
    }
}
