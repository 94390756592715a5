//! Request-scoped language provider
//!
//! The middleware builds one [`LanguageContext`] per request over the
//! request's cookies, resolves it from `Accept-Language`, and exposes it to
//! handlers through the [`UseLanguage`] extractor. Any queued preference
//! write is returned to the browser as `Set-Cookie`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, warn};

use super::context::{HostEnvironment, LanguageContext};
use super::storage::CookieStore;
use crate::api::ApiError;
use crate::AppState;

/// Context type handlers see
pub type RequestLanguage = LanguageContext<CookieStore>;

/// Shared handle to the request's language context
#[derive(Clone)]
pub struct UseLanguage(Arc<Mutex<RequestLanguage>>);

impl UseLanguage {
    pub fn new(context: RequestLanguage) -> Self {
        Self(Arc::new(Mutex::new(context)))
    }

    pub async fn lock(&self) -> MutexGuard<'_, RequestLanguage> {
        self.0.lock().await
    }
}

/// Middleware providing the language context to downstream handlers
pub async fn language_provider(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let headers = request.headers();
    let store = CookieStore::from_headers(headers);
    let host = HostEnvironment::from_accept_language(
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    );

    let mut context = LanguageContext::new(state.catalog.clone(), store);
    context.initialize(&host);

    let handle = UseLanguage::new(context);
    request.extensions_mut().insert(handle.clone());

    let mut response = next.run(request).await;

    let context = handle.lock().await;
    for cookie in context.store().set_cookie_headers() {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Dropping unencodable cookie '{}': {}", cookie, e),
        }
    }

    response
}

#[async_trait]
impl<S> FromRequestParts<S> for UseLanguage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<UseLanguage>().cloned().ok_or_else(|| {
            error!("Handler for {} used the language context without a provider", parts.uri.path());
            ApiError::MissingLanguageProvider
        })
    }
}
