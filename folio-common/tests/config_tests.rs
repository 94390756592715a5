//! Unit tests for configuration resolution and graceful degradation
//!
//! Tests cover:
//! - Missing or malformed TOML files fall back to defaults
//! - Priority order: command line > environment > file > defaults
//! - Invalid port values in the environment are rejected
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate FOLIO_* variables are marked with #[serial].

use folio_common::config::{
    load_toml_config, CompiledDefaults, ConfigOverrides, ConfigResolver, SiteConfig, ENV_CONTENT_DIR,
    ENV_HOST, ENV_LOG_LEVEL, ENV_PORT,
};
use serial_test::serial;
use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Log sink shared with a scoped fmt subscriber
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn clear_env() {
    env::remove_var(ENV_HOST);
    env::remove_var(ENV_PORT);
    env::remove_var(ENV_CONTENT_DIR);
    env::remove_var(ENV_LOG_LEVEL);
}

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).expect("Should write config file");
    path
}

#[test]
fn test_compiled_defaults() {
    let defaults = CompiledDefaults::default();
    assert_eq!(defaults.host, "127.0.0.1");
    assert_eq!(defaults.port, 5780);
    assert_eq!(defaults.log_level, "info");

    let config = SiteConfig::default();
    assert_eq!(config.bind_address(), "127.0.0.1:5780");
    assert!(config.content_dir.is_none());
}

#[test]
fn test_load_toml_config_all_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
host = "0.0.0.0"
port = 8080
content_dir = "/srv/folio"
log_level = "debug"
"#,
    );

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config.host.as_deref(), Some("0.0.0.0"));
    assert_eq!(config.port, Some(8080));
    assert_eq!(config.content_dir, Some(PathBuf::from("/srv/folio")));
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_load_toml_config_partial_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "port = 9000\n");

    let config = load_toml_config(&path).unwrap();
    assert_eq!(config.port, Some(9000));
    assert!(config.host.is_none());
    assert!(config.content_dir.is_none());
}

#[test]
#[serial]
fn test_missing_config_file_does_not_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let resolver = ConfigResolver::new(Some(dir.path().join("absent.toml")));

    let config = resolver.resolve(ConfigOverrides::default()).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
#[serial]
fn test_malformed_config_file_falls_back_to_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "port = \"not a number\"\n[[[");
    let resolver = ConfigResolver::new(Some(path));

    let config = resolver.resolve(ConfigOverrides::default()).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
#[serial]
fn test_malformed_config_file_logs_warning() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[[[");
    let resolver = ConfigResolver::new(Some(path.clone()));

    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let config = tracing::subscriber::with_default(subscriber, || {
        resolver.resolve(ConfigOverrides::default())
    })
    .unwrap();

    assert_eq!(config, SiteConfig::default());
    let output = logs.contents();
    assert!(output.contains("WARN"), "missing warning in: {}", output);
    assert!(output.contains("Ignoring config file"));
    assert!(output.contains(&path.display().to_string()));
}

#[test]
#[serial]
fn test_file_values_used_without_overrides() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "host = \"0.0.0.0\"\nport = 8081\n");
    let resolver = ConfigResolver::new(Some(path));

    let config = resolver.resolve(ConfigOverrides::default()).unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8081);
    assert_eq!(config.log_level, "info");
}

#[test]
#[serial]
fn test_env_takes_precedence_over_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "host = \"0.0.0.0\"\nport = 8081\n");
    env::set_var(ENV_PORT, "9090");
    env::set_var(ENV_CONTENT_DIR, "/tmp/folio-env-content");

    let resolver = ConfigResolver::new(Some(path));
    let config = resolver.resolve(ConfigOverrides::default()).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 9090);
    assert_eq!(config.content_dir, Some(PathBuf::from("/tmp/folio-env-content")));

    clear_env();
}

#[test]
#[serial]
fn test_cli_takes_precedence_over_env() {
    clear_env();
    env::set_var(ENV_HOST, "10.0.0.1");
    env::set_var(ENV_LOG_LEVEL, "warn");

    let dir = TempDir::new().unwrap();
    let resolver = ConfigResolver::new(Some(dir.path().join("absent.toml")));
    let overrides = ConfigOverrides {
        host: Some("192.168.1.2".to_string()),
        port: Some(7000),
        ..Default::default()
    };

    let config = resolver.resolve(overrides).unwrap();
    assert_eq!(config.host, "192.168.1.2");
    assert_eq!(config.port, 7000);
    assert_eq!(config.log_level, "warn");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_port_is_config_error() {
    clear_env();
    env::set_var(ENV_PORT, "eighty");

    let dir = TempDir::new().unwrap();
    let resolver = ConfigResolver::new(Some(dir.path().join("absent.toml")));
    let result = resolver.resolve(ConfigOverrides::default());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains(ENV_PORT));

    clear_env();
}

#[test]
#[serial]
fn test_empty_env_value_is_ignored() {
    clear_env();
    env::set_var(ENV_HOST, "  ");

    let dir = TempDir::new().unwrap();
    let resolver = ConfigResolver::new(Some(dir.path().join("absent.toml")));
    let config = resolver.resolve(ConfigOverrides::default()).unwrap();
    assert_eq!(config.host, "127.0.0.1");

    clear_env();
}
