use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::catalog::Track;

pub const DEFAULT_HOST: &str = "https://launcher.cdn.ankama.com";
pub const DEFAULT_GAME: &str = "wakfu";
pub const DEFAULT_PLATFORM: &str = "darwin";

/// Where the catalog, manifests and hashed files live.
///
/// Patterns use `{{name}}` placeholders which are replaced textually.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Configuration {
    pub host: String,
    pub game: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none", rename = "timeoutSecs")]
    pub timeout_secs: Option<u64>,
    #[serde(rename = "catalogUrlPattern")]
    pub catalog_url_pattern: String,
    #[serde(rename = "manifestUrlPattern")]
    pub manifest_url_pattern: String,
    #[serde(rename = "hashUrlPattern")]
    pub hash_url_pattern: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            host: DEFAULT_HOST.to_string(),
            game: DEFAULT_GAME.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            timeout_secs: None,
            catalog_url_pattern: "{{host}}/cytrus.json".to_string(),
            manifest_url_pattern: "{{host}}/{{game}}/releases/{{track}}/{{platform}}/{{version}}.json"
                .to_string(),
            hash_url_pattern: "{{host}}/{{game}}/hashes/{{prefix}}/{{hash}}".to_string(),
        }
    }
}

impl Configuration {
    /// Reads a YAML configuration, `~` is expanded. Missing keys keep their defaults.
    pub async fn from_yaml_file(path: &str) -> Result<Configuration> {
        let expanded = shellexpand::tilde(path);
        let content = tokio::fs::read_to_string(expanded.as_ref())
            .await
            .map_err(|source| Error::ConfigurationIo {
                path: expanded.to_string(),
                source,
            })?;
        serde_yaml::from_str(&content).map_err(|source| Error::ConfigurationFormat {
            path: expanded.to_string(),
            source,
        })
    }

    pub fn with_host(mut self, host: &str) -> Configuration {
        self.host = host.trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn catalog_url(&self) -> String {
        self.catalog_url_pattern.replace("{{host}}", &self.host)
    }

    pub fn manifest_url(&self, track: Track, version: &str) -> String {
        self.manifest_url_pattern
            .replace("{{host}}", &self.host)
            .replace("{{game}}", &self.game)
            .replace("{{track}}", track.as_str())
            .replace("{{platform}}", &self.platform)
            .replace("{{version}}", version)
    }

    /// Returns `None` when the hash is too short to carry a two character prefix.
    pub fn hash_url(&self, hash: &str) -> Option<String> {
        let prefix = hash_prefix(hash)?;
        Some(
            self.hash_url_pattern
                .replace("{{host}}", &self.host)
                .replace("{{game}}", &self.game)
                .replace("{{prefix}}", prefix)
                .replace("{{hash}}", hash),
        )
    }
}

/// First two characters of `hash`, `None` when it has fewer.
pub fn hash_prefix(hash: &str) -> Option<&str> {
    let mut chars = hash.char_indices();
    chars.next()?;
    chars.next()?;
    let end = chars.next().map_or(hash.len(), |(index, _)| index);
    Some(&hash[..end])
}
