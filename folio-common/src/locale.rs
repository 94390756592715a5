//! Supported display locales
//!
//! The site speaks exactly two languages. Every locale-keyed value in the
//! content carries both entries; deserialization rejects partial coverage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Display language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Portuguese (the site default)
    #[default]
    Pt,
    /// English
    En,
}

impl Locale {
    /// Both locales, in display order
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    /// Two-letter code as stored and sent over the wire
    pub fn code(self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// Value for the HTML `lang` attribute
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Pt => "pt-BR",
            Locale::En => "en",
        }
    }

    /// The other locale
    pub fn toggled(self) -> Locale {
        match self {
            Locale::Pt => Locale::En,
            Locale::En => Locale::Pt,
        }
    }

    /// Parse an exact stored code. Anything other than `pt`/`en` is `None`.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "pt" => Some(Locale::Pt),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Map a host locale hint (`pt-BR`, `en-US`, `fr`) onto a supported locale.
    ///
    /// Hints starting with "pt" in any case select Portuguese, everything else
    /// falls back to English.
    pub fn from_hint(hint: &str) -> Locale {
        let prefix = hint.trim().get(..2);
        if prefix.is_some_and(|p| p.eq_ignore_ascii_case("pt")) {
            Locale::Pt
        } else {
            Locale::En
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| Error::InvalidInput(format!("Unsupported locale: {}", s)))
    }
}

/// A value supplied in both locales
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Localized<T> {
    pub en: T,
    pub pt: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, pt: T) -> Self {
        Self { en, pt }
    }

    /// Entry for `locale`
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Pt => &self.pt,
            Locale::En => &self.en,
        }
    }
}
