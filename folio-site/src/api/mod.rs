//! HTTP handlers for folio-site

pub mod buildinfo;
pub mod content;
pub mod error;
pub mod health;
pub mod language;
pub mod pages;
pub mod ui;

pub use buildinfo::get_build_info;
pub use content::{list_blog, list_journal, list_tags};
pub use error::ApiError;
pub use health::health_routes;
pub use language::{get_language, set_language, toggle_language};
pub use pages::{article_page, articles_page, root_redirect};
pub use ui::serve_site_css;
