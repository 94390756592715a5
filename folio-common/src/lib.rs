//! # Folio Common Library
//!
//! Shared code for the Folio site crates:
//! - Error and result types
//! - Locale enumeration and localized values
//! - Configuration loading
//! - Display date formatting

pub mod config;
pub mod dates;
pub mod error;
pub mod locale;

pub use error::{Error, Result};
pub use locale::{Locale, Localized};
