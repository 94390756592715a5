//! HTML page handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::i18n::UseLanguage;
use crate::view::{render_article, render_not_found, render_page, ArticleListView, Tab};
use crate::AppState;

/// Query parameters for the listing page
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub tab: Option<String>,
}

/// GET /
pub async fn root_redirect() -> Redirect {
    Redirect::to("/articles")
}

/// GET /articles
///
/// Renders the shared snapshot; nothing is re-queried per request.
pub async fn articles_page(
    State(state): State<AppState>,
    language: UseLanguage,
    Query(query): Query<ListingQuery>,
) -> Html<String> {
    let mut view = ArticleListView::new(state.content.clone());
    view.select_tab(Tab::from_query(query.tab.as_deref()));

    let context = language.lock().await;
    let locale = context.get_language();
    let messages = context.messages();
    debug!("Rendering articles page: tab={} locale={}", view.active_tab().as_str(), locale);

    let body = view.render(locale, messages);
    Html(render_page(locale, messages, &messages.articles_page.title, &body))
}

/// GET /articles/:id
pub async fn article_page(
    State(state): State<AppState>,
    language: UseLanguage,
    Path(id): Path<String>,
) -> Response {
    let context = language.lock().await;
    let locale = context.get_language();
    let messages = context.messages();

    match state.store.find_blog_article(&id) {
        Some(article) => {
            let body = render_article(article, locale, messages);
            Html(render_page(locale, messages, article.title.for_locale(locale), &body)).into_response()
        }
        None => {
            debug!("Unknown blog post '{}'", id);
            let body = render_not_found(messages);
            (
                StatusCode::NOT_FOUND,
                Html(render_page(locale, messages, &messages.article.not_found, &body)),
            )
                .into_response()
        }
    }
}
