//! Language preference endpoints
//!
//! Changes go through the request's [`UseLanguage`] context; the provider
//! layer turns the resulting store write into a `Set-Cookie` header.

use axum::{
    extract::Form,
    http::{header, HeaderMap},
    response::{Json, Redirect},
};
use folio_common::Locale;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ApiError;
use crate::i18n::UseLanguage;

/// Fallback redirect target after a change
const DEFAULT_RETURN_PATH: &str = "/articles";

#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub language: Locale,
}

/// GET /api/language
pub async fn get_language(language: UseLanguage) -> Json<LanguageResponse> {
    let context = language.lock().await;
    Json(LanguageResponse {
        language: context.get_language(),
    })
}

/// POST /language
pub async fn set_language(
    language: UseLanguage,
    headers: HeaderMap,
    Form(form): Form<LanguageForm>,
) -> Result<Redirect, ApiError> {
    let locale: Locale = form.language.parse()?;
    let mut context = language.lock().await;
    context.set_language(locale);
    info!("Language set to {}", locale);
    Ok(Redirect::to(&return_path(&headers)))
}

/// POST /language/toggle
pub async fn toggle_language(language: UseLanguage, headers: HeaderMap) -> Redirect {
    let mut context = language.lock().await;
    context.toggle_language();
    info!("Language toggled to {}", context.get_language());
    Redirect::to(&return_path(&headers))
}

/// Path of the referring page on this site, else the listing
///
/// Only the path and query of the `Referer` are kept, so the redirect always
/// stays on this host.
pub fn return_path(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(referer_path)
        .unwrap_or_else(|| DEFAULT_RETURN_PATH.to_string())
}

fn referer_path(referer: &str) -> Option<String> {
    let path = match referer.split_once("://") {
        Some((_, rest)) => match rest.find('/') {
            Some(idx) => &rest[idx..],
            None => "/",
        },
        None => referer,
    };
    let path = path.split('#').next().unwrap_or(path);

    // Browsers read `/\host` as `//host`
    if path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.starts_with("/language")
    {
        Some(path.to_string())
    } else {
        None
    }
}
