use crate::sources::default_feeds;
use crate::types::{AgentError, FeedDescriptor, FetchConfig, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "NEWS_AGENT_CONFIG";

/// Top-level configuration (deserialized from TOML).
///
/// ```toml
/// [fetch]
/// timeout_seconds = 5
///
/// [[feeds]]
/// url = "https://hnrss.org/frontpage"
/// label = "Hacker News Front Page"
/// tags = ["technology"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub fetch: FetchConfig,
    pub feeds: Vec<FeedDescriptor>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            feeds: default_feeds(),
        }
    }
}

impl AgentConfig {
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let mut cfg: AgentConfig = toml::from_str(data)
            .map_err(|e| AgentError::Config(format!("Failed to parse TOML configuration: {}", e)))?;
        if cfg.feeds.is_empty() {
            debug!("No feeds configured, using the default catalogue");
            cfg.feeds = default_feeds();
        }
        Ok(cfg)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read_to_string(path).await.map_err(|e| {
            AgentError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        let cfg = Self::from_toml_str(&data)?;
        info!("Loaded configuration from {} ({} feeds)", path.display(), cfg.feeds.len());
        Ok(cfg)
    }

    /// Explicit path first, then the environment variable, then built-in defaults.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(path).await,
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = AgentConfig::from_toml_str(
            r#"
            [fetch]
            timeout_seconds = 3

            [[feeds]]
            url = "https://example.com/rss"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.fetch.timeout_seconds, 3);
        assert_eq!(cfg.fetch.max_retries, 0);
        assert_eq!(cfg.fetch.user_agent, FetchConfig::default().user_agent);
        assert_eq!(cfg.feeds.len(), 1);
        assert_eq!(cfg.feeds[0].label, "");
        assert!(cfg.feeds[0].tags.is_empty());
    }

    #[test]
    fn empty_feed_list_uses_catalogue() {
        let cfg = AgentConfig::from_toml_str("feeds = []").unwrap();
        assert_eq!(cfg.feeds, default_feeds());
        assert_eq!(AgentConfig::from_toml_str("").unwrap(), AgentConfig::default());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = AgentConfig::from_toml_str("[fetch\n").unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
    }
}
