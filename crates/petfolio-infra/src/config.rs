//! Configuration loader for Petfolio.
//!
//! Resolves the data directory and reads `config.toml` from it,
//! deserializing into [`AppConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::{Path, PathBuf};

use petfolio_types::config::AppConfig;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `PETFOLIO_DATA_DIR` environment variable
/// 2. Platform-specific data directory (e.g., `~/.petfolio` on macOS/Linux)
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PETFOLIO_DATA_DIR") {
        return PathBuf::from(dir);
    }

    // Use home directory fallback: ~/.petfolio
    if let Some(home) = dirs::home_dir() {
        return home.join(".petfolio");
    }

    // Last resort: current directory
    PathBuf::from(".petfolio")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.gateway.model, "llama3");
        assert_eq!(config.chat.context_window_messages, 30);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
[gateway]
base_url = "http://10.0.0.5:11434"
model = "llama3.1"

[chat]
context_window_messages = 12
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.gateway.base_url, "http://10.0.0.5:11434");
        assert_eq!(config.gateway.model, "llama3.1");
        assert_eq!(config.chat.context_window_messages, 12);
        assert_eq!(config.chat.recent_feed_limit, 20);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.gateway.model, "llama3");
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("PETFOLIO_DATA_DIR", "/tmp/test-petfolio");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-petfolio"));
        unsafe {
            std::env::remove_var("PETFOLIO_DATA_DIR");
        }
    }

    #[test]
    fn test_resolve_data_dir_default_under_home() {
        if std::env::var("PETFOLIO_DATA_DIR").is_ok() {
            return;
        }
        let dir = resolve_data_dir();
        assert!(dir.ends_with(".petfolio"));
    }
}
