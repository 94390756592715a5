//! Durable storage for the language preference
//!
//! The browser keeps the preference in a cookie. Tests and pre-render paths
//! use the in-memory store.

use axum::http::{header, HeaderMap};
use std::collections::{BTreeMap, HashMap};

/// Storage key for the language preference
pub const LANGUAGE_KEY: &str = "language";

/// Cookie lifetime in seconds (one year)
pub const COOKIE_MAX_AGE: u64 = 365 * 24 * 60 * 60;

/// Single-key string storage. Writes are assumed to succeed.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Process-local store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values, writes: 0 }
    }

    /// Number of `save` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Request-scoped store over the browser's cookies.
///
/// Reads come from the `Cookie` request header. Saves that change a value are
/// queued and emitted as `Set-Cookie` response headers.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    cookies: HashMap<String, String>,
    pending: BTreeMap<String, String>,
}

impl CookieStore {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = HashMap::new();
        for value in headers.get_all(header::COOKIE) {
            let Ok(value) = value.to_str() else {
                continue;
            };
            for pair in value.split(';') {
                if let Some((name, val)) = pair.trim().split_once('=') {
                    cookies
                        .entry(name.trim().to_string())
                        .or_insert_with(|| val.trim().trim_matches('"').to_string());
                }
            }
        }
        Self {
            cookies,
            pending: BTreeMap::new(),
        }
    }

    /// `Set-Cookie` header values for every queued write
    pub fn set_cookie_headers(&self) -> Vec<String> {
        self.pending
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}; Path=/; Max-Age={}; SameSite=Lax",
                    name, value, COOKIE_MAX_AGE
                )
            })
            .collect()
    }
}

impl PreferenceStore for CookieStore {
    fn load(&self, key: &str) -> Option<String> {
        self.cookies.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        if self.cookies.get(key).map(String::as_str) == Some(value) {
            // Browser already holds this value; drop any queued change back to it
            self.pending.remove(key);
            return;
        }
        self.pending.insert(key.to_string(), value.to_string());
    }
}
