use std::collections::HashMap;
use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::error::{Error, Result};
use crate::models::configuration::{Configuration, hash_prefix};
use crate::models::release::ReleaseSelection;
use crate::providers::downloader::Downloader;

// Only path and hash are needed, so entries are matched in the raw body
// instead of decoding the whole manifest schema. Matching is byte-wise so
// entries that are not valid utf-8 are reported rather than skipped.
static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?-u)"([^"]+)":\{"hash":"([^"]+)","size":\d+\}"#).expect("entry pattern compiles")
});

/// Second stage: file path to content hash for one release, read-only once built.
#[derive(Debug, Clone)]
pub struct ManifestIndex {
    files: HashMap<String, String>,
    configuration: Configuration,
}

impl ManifestIndex {
    pub async fn build<D: Downloader>(
        downloader: &D,
        configuration: &Configuration,
        selection: &ReleaseSelection,
    ) -> Result<ManifestIndex> {
        let url = configuration.manifest_url(selection.track, &selection.version);
        let body = downloader.download(&url).await?;
        let index = ManifestIndex::from_manifest(configuration, &body)?;
        tracing::info!(url = %url, files = index.len(), "manifest indexed");
        Ok(index)
    }

    pub fn from_manifest(configuration: &Configuration, body: &[u8]) -> Result<ManifestIndex> {
        Ok(ManifestIndex {
            files: extract_entries(body)?,
            configuration: configuration.clone(),
        })
    }

    /// Download URL of `path`, or [`Error::NotFound`] when the release has no such file.
    pub fn lookup(&self, path: &str) -> Result<String> {
        let hash = self.files.get(path).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?;
        self.configuration
            .hash_url(hash)
            .ok_or_else(|| Error::MalformedEntry {
                path: path.to_string(),
                reason: format!("hash {:?} is shorter than two characters", hash),
            })
    }

    pub fn hash(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Collects every `"<path>":{"hash":"<hash>","size":<n>}` in `body`.
/// A later entry for the same path replaces the earlier one.
pub fn extract_entries(body: &[u8]) -> Result<HashMap<String, String>> {
    let mut files = HashMap::new();
    for captures in ENTRY_PATTERN.captures_iter(body) {
        let raw_path = &captures[1];
        let path = String::from_utf8(raw_path.to_vec()).map_err(|_| Error::MalformedEntry {
            path: String::from_utf8_lossy(raw_path).into_owned(),
            reason: "path is not valid utf-8".to_string(),
        })?;
        let hash = String::from_utf8(captures[2].to_vec()).map_err(|_| Error::MalformedEntry {
            path: path.clone(),
            reason: "hash is not valid utf-8".to_string(),
        })?;
        if hash_prefix(&hash).is_none() {
            return Err(Error::MalformedEntry {
                path,
                reason: format!("hash {:?} is shorter than two characters", hash),
            });
        }
        if let Some(previous) = files.insert(path, hash) {
            tracing::debug!(previous = %previous, "duplicate manifest entry replaced");
        }
    }
    Ok(files)
}
