//! folio-site library - bilingual article listing site
//!
//! Content is loaded and validated once at startup, queried into a shared
//! snapshot, and rendered per request in the visitor's language.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod content;
pub mod i18n;
pub mod view;

use content::{ArticleStore, ContentSnapshot};
use i18n::MessageCatalog;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Backing store for JSON queries and post lookup
    pub store: Arc<ArticleStore>,
    /// Collections as queried once for the listing page
    pub content: ContentSnapshot,
    /// Message bundles for both locales
    pub catalog: Arc<MessageCatalog>,
}

impl AppState {
    /// Create new application state, querying the store once
    pub fn new(store: ArticleStore, catalog: MessageCatalog) -> Self {
        let content = store.snapshot();
        Self {
            store: Arc::new(store),
            content,
            catalog: Arc::new(catalog),
        }
    }
}

/// Build application router
///
/// Pages and language endpoints run inside the language provider layer;
/// health, build info, store queries and static assets do not need it.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{get, post};

    let localized = Router::new()
        .route("/articles", get(api::articles_page))
        .route("/articles/:id", get(api::article_page))
        .route("/language", post(api::set_language))
        .route("/language/toggle", post(api::toggle_language))
        .route("/api/language", get(api::get_language))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            i18n::language_provider,
        ));

    let public = Router::new()
        .route("/", get(api::root_redirect))
        .route("/api/articles/blog", get(api::list_blog))
        .route("/api/articles/journal", get(api::list_journal))
        .route("/api/tags", get(api::list_tags))
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/static/site.css", get(api::serve_site_css))
        .merge(api::health_routes());

    Router::new()
        .merge(localized)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
