//! Language context
//!
//! Owns the active locale for one session scope and derives the message
//! bundle from it. The locale starts at the fixed default (`pt`) and is
//! resolved once the host environment is available:
//!
//! 1. stored preference, when it is a supported code
//! 2. host locale hint, Portuguese when it starts with "pt"
//! 3. English
//!
//! Persistence writes are suppressed until that resolution has run, so a
//! stored preference is never overwritten before it has been read.

use folio_common::Locale;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use super::messages::{MessageBundle, MessageCatalog};
use super::storage::{PreferenceStore, LANGUAGE_KEY};

/// What the host reports about the user's language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnvironment {
    pub locale_hint: Option<String>,
}

impl HostEnvironment {
    pub fn with_hint(hint: &str) -> Self {
        Self {
            locale_hint: Some(hint.to_string()),
        }
    }

    /// Use the first language tag of an `Accept-Language` header value
    pub fn from_accept_language(header: Option<&str>) -> Self {
        let locale_hint = header
            .and_then(|value| value.split(',').next())
            .map(|tag| tag.split(';').next().unwrap_or(tag).trim().to_string())
            .filter(|tag| !tag.is_empty() && tag != "*");
        Self { locale_hint }
    }
}

/// Pick the startup locale from storage, then the host hint, then English
pub fn resolve_initial_language<S: PreferenceStore>(store: &S, host: &HostEnvironment) -> Locale {
    if let Some(stored) = store.load(LANGUAGE_KEY) {
        match Locale::from_code(&stored) {
            Some(locale) => return locale,
            None => debug!("Ignoring unrecognized stored language '{}'", stored),
        }
    }

    match host.locale_hint.as_deref() {
        Some(hint) => Locale::from_hint(hint),
        None => Locale::En,
    }
}

/// Active locale plus its persistence
pub struct LanguageContext<S: PreferenceStore> {
    catalog: Arc<MessageCatalog>,
    store: S,
    language: watch::Sender<Locale>,
    initialized: bool,
}

impl<S: PreferenceStore> LanguageContext<S> {
    /// New context holding the default locale, not yet resolved
    pub fn new(catalog: Arc<MessageCatalog>, store: S) -> Self {
        let (language, _) = watch::channel(Locale::default());
        Self {
            catalog,
            store,
            language,
            initialized: false,
        }
    }

    /// Run startup resolution. Only the first call has any effect.
    pub fn initialize(&mut self, host: &HostEnvironment) -> Locale {
        if self.initialized {
            return self.get_language();
        }

        let resolved = resolve_initial_language(&self.store, host);
        self.update(resolved);
        self.initialized = true;
        self.persist();
        resolved
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn get_language(&self) -> Locale {
        *self.language.borrow()
    }

    pub fn is_portuguese(&self) -> bool {
        self.get_language() == Locale::Pt
    }

    pub fn set_language(&mut self, locale: Locale) {
        self.update(locale);
        self.persist();
    }

    pub fn toggle_language(&mut self) {
        let next = self.get_language().toggled();
        self.set_language(next);
    }

    /// Bundle for the active locale
    pub fn messages(&self) -> &MessageBundle {
        self.catalog.bundle(self.get_language())
    }

    /// Receiver notified on every locale change
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.language.subscribe()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn update(&self, locale: Locale) {
        self.language.send_if_modified(|current| {
            if *current == locale {
                false
            } else {
                *current = locale;
                true
            }
        });
    }

    fn persist(&mut self) {
        if !self.initialized {
            return;
        }
        let code = self.get_language().code();
        self.store.save(LANGUAGE_KEY, code);
    }
}
