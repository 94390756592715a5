//! Server-side HTML rendering

pub mod article_detail;
pub mod article_list;
pub mod html;
pub mod markdown;

pub use article_detail::{render_article, render_not_found};
pub use article_list::{ArticleListView, Tab};
pub use html::{escape, render_page};
