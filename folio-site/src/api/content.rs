//! JSON endpoints over the article store

use axum::{
    extract::{Query, State},
    Json,
};
use folio_common::Locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ApiError;
use crate::content::{Article, JournalArticle};
use crate::AppState;

/// Query parameters for journal endpoints. Locale defaults to English.
#[derive(Debug, Deserialize)]
pub struct JournalQuery {
    pub tag: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TagsQuery {
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub locale: Locale,
    pub tags: BTreeSet<String>,
}

fn parse_locale(raw: Option<&str>) -> Result<Locale, ApiError> {
    match raw {
        Some(code) => Ok(code.parse::<Locale>()?),
        None => Ok(Locale::En),
    }
}

/// GET /api/articles/blog
pub async fn list_blog(State(state): State<AppState>) -> Json<Vec<Article>> {
    Json(state.store.list_blog_articles())
}

/// GET /api/articles/journal
///
/// Without `tag`, lists every article most recent first.
pub async fn list_journal(
    State(state): State<AppState>,
    Query(query): Query<JournalQuery>,
) -> Result<Json<Vec<JournalArticle>>, ApiError> {
    let locale = parse_locale(query.locale.as_deref())?;
    let articles = match query.tag.as_deref() {
        Some(tag) => state.store.filter_journal_articles_by_tag(tag, locale),
        None => state.store.list_journal_articles(),
    };
    Ok(Json(articles))
}

/// GET /api/tags
pub async fn list_tags(
    State(state): State<AppState>,
    Query(query): Query<TagsQuery>,
) -> Result<Json<TagsResponse>, ApiError> {
    let locale = parse_locale(query.locale.as_deref())?;
    Ok(Json(TagsResponse {
        locale,
        tags: state.store.list_all_journal_tags(locale),
    }))
}
