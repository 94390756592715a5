//! Authored content: blog posts, journal articles and the store over them

pub mod blog;
pub mod journal;
pub mod store;

pub use blog::{Article, ArticleTitle};
pub use journal::{JournalArticle, DOI_RESOLVER};
pub use store::{ArticleStore, ContentSnapshot};
