use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{HelpdeskError, Result};

/// Top-level configuration for the helpdesk service.
///
/// Loaded from `helpdesk.toml` by default. Every section falls back to its
/// defaults when absent, so a partial file is always valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HelpdeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
}

impl HelpdeskConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: HelpdeskConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| HelpdeskError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Path prefix every route is mounted under (e.g. "/api"). Empty mounts at the root.
    pub api_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_prefix: String::new(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The prefix normalized to `/segment` form, or `None` when routes
    /// should be mounted at the root.
    pub fn normalized_prefix(&self) -> Option<String> {
        let trimmed = self.api_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{}", trimmed))
        }
    }
}

/// Canned texts used by the chat engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Greeting returned when a session is initialized.
    pub welcome_message: String,
    /// Wait estimate reported when a case is escalated.
    pub estimated_wait_time: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            welcome_message:
                "Welcome! I'm your AI support assistant. How can I help you today?".to_string(),
            estimated_wait_time: "5-10 minutes".to_string(),
        }
    }
}

/// FAQ corpus source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to a TOML corpus file. Empty uses the built-in corpus.
    pub path: String,
}

impl CorpusConfig {
    /// The configured corpus file, if any.
    pub fn file(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = HelpdeskConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.api_prefix.is_empty());
        assert_eq!(config.chat.estimated_wait_time, "5-10 minutes");
        assert!(config.chat.welcome_message.starts_with("Welcome!"));
        assert!(config.corpus.file().is_none());
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[server]
host = "0.0.0.0"
port = 8080
api_prefix = "/api"

[chat]
welcome_message = "Hi there"
estimated_wait_time = "2 minutes"

[corpus]
path = "/etc/helpdesk/faqs.toml"
"#;
        let file = create_temp_config(content);
        let config = HelpdeskConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.api_prefix, "/api");
        assert_eq!(config.chat.welcome_message, "Hi there");
        assert_eq!(config.chat.estimated_wait_time, "2 minutes");
        assert_eq!(
            config.corpus.file(),
            Some(PathBuf::from("/etc/helpdesk/faqs.toml"))
        );
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[server]
port = 9000
"#;
        let file = create_temp_config(content);
        let config = HelpdeskConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.estimated_wait_time, "5-10 minutes");
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let file = create_temp_config("[server\nport = ");
        let err = HelpdeskConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, HelpdeskError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = HelpdeskConfig::load(Path::new("/nonexistent/helpdesk.toml")).unwrap_err();
        assert!(matches!(err, HelpdeskError::Io(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = HelpdeskConfig::load_or_default(Path::new("/nonexistent/helpdesk.toml"));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("helpdesk.toml");

        let mut config = HelpdeskConfig::default();
        config.server.port = 4321;
        config.server.api_prefix = "/api".to_string();
        config.save(&path).unwrap();

        let reloaded = HelpdeskConfig::load(&path).unwrap();
        assert_eq!(reloaded.server.port, 4321);
        assert_eq!(reloaded.server.api_prefix, "/api");
        assert_eq!(reloaded.chat.welcome_message, config.chat.welcome_message);
    }

    #[test]
    fn test_bind_addr() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 80,
            api_prefix: String::new(),
        };
        assert_eq!(server.bind_addr(), "0.0.0.0:80");
    }

    #[test]
    fn test_normalized_prefix() {
        let mut server = ServerConfig::default();
        assert_eq!(server.normalized_prefix(), None);

        server.api_prefix = "/".to_string();
        assert_eq!(server.normalized_prefix(), None);

        server.api_prefix = "api".to_string();
        assert_eq!(server.normalized_prefix(), Some("/api".to_string()));

        server.api_prefix = "/api/".to_string();
        assert_eq!(server.normalized_prefix(), Some("/api".to_string()));

        server.api_prefix = "/v1/support".to_string();
        assert_eq!(server.normalized_prefix(), Some("/v1/support".to_string()));
    }

    #[test]
    fn test_corpus_file_blank_is_none() {
        let corpus = CorpusConfig {
            path: "   ".to_string(),
        };
        assert!(corpus.file().is_none());
    }
}
