//! Locale selection, message bundles and preference persistence

pub mod context;
pub mod messages;
pub mod provider;
pub mod storage;

pub use context::{resolve_initial_language, HostEnvironment, LanguageContext};
pub use messages::{MessageBundle, MessageCatalog};
pub use provider::{language_provider, RequestLanguage, UseLanguage};
pub use storage::{CookieStore, MemoryStore, PreferenceStore, LANGUAGE_KEY};
