//! folio-site - bilingual portfolio article listing
//!
//! Serves the article listing, blog post pages and the language toggle.
//! Configuration: command line > FOLIO_* environment > config.toml > defaults.

use anyhow::{Context, Result};
use clap::Parser;
use folio_common::config::{ConfigOverrides, ConfigResolver};
use folio_common::Locale;
use folio_site::content::ArticleStore;
use folio_site::i18n::MessageCatalog;
use folio_site::{build_router, AppState};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter};

/// Filter used until the configured log level is known
const BOOTSTRAP_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "folio-site", version, about = "Bilingual article listing site")]
struct Args {
    /// Config file (default: <config dir>/folio/config.toml)
    #[arg(long, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(long)]
    port: Option<u16>,

    /// Directory with blog/*.md posts and journal_articles.json
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing before config resolution.
    // The resolved log level replaces the bootstrap filter unless RUST_LOG is set.
    let rust_log = EnvFilter::try_from_default_env().ok();
    let from_env = rust_log.is_some();
    let bootstrap = rust_log.unwrap_or_else(|| {
        EnvFilter::new(args.log_level.as_deref().unwrap_or(BOOTSTRAP_LOG_LEVEL))
    });
    let (filter, filter_handle) = reload::Layer::new(bootstrap);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before content loading
    info!(
        "Starting folio-site v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let resolver = ConfigResolver::new(args.config.clone());
    if let Some(path) = resolver.config_file_path() {
        info!("Config file: {}", path.display());
    }
    let config = resolver.resolve(ConfigOverrides {
        host: args.host,
        port: args.port,
        content_dir: args.content_dir,
        log_level: args.log_level,
    })?;
    if !from_env {
        filter_handle
            .modify(|filter| *filter = EnvFilter::new(&config.log_level))
            .context("applying log level")?;
    }

    let store = match ArticleStore::load(config.content_dir.as_deref()) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load content: {}", e);
            return Err(e).context("content validation failed");
        }
    };
    let catalog = MessageCatalog::embedded().context("message bundles failed validation")?;

    info!(
        "✓ Loaded {} blog posts, {} journal articles, {} tags (en) / {} tags (pt)",
        store.list_blog_articles().len(),
        store.list_journal_articles().len(),
        store.list_all_journal_tags(Locale::En).len(),
        store.list_all_journal_tags(Locale::Pt).len()
    );

    let state = AppState::new(store, catalog);
    let app = build_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;
    info!("folio-site listening on http://{}", address);
    info!("Health check: http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
