use crate::error::Result;
use crate::models::catalog::Track;
use crate::models::configuration::Configuration;
use crate::models::release::ReleaseSelection;
use crate::providers::catalog_resolver::CatalogResolver;
use crate::providers::downloader::Downloader;
use crate::providers::http_downloader::HttpDownloader;
use crate::providers::manifest_index::ManifestIndex;

/// Resolves the current release once, then answers download URL lookups for it.
///
/// Nothing is refreshed after construction; build a new `Helper` to pick up a
/// newer release.
#[derive(Debug, Clone)]
pub struct Helper {
    selection: ReleaseSelection,
    index: ManifestIndex,
}

impl Helper {
    pub async fn new(beta: bool) -> Result<Helper> {
        Helper::with_configuration(&Configuration::default(), beta).await
    }

    pub async fn with_configuration(configuration: &Configuration, beta: bool) -> Result<Helper> {
        let downloader = HttpDownloader::new(configuration)?;
        Helper::with_downloader(&downloader, configuration, beta).await
    }

    pub async fn with_downloader<D: Downloader>(
        downloader: &D,
        configuration: &Configuration,
        beta: bool,
    ) -> Result<Helper> {
        let selection = CatalogResolver::new(downloader, configuration)
            .resolve(beta)
            .await?;
        let index = ManifestIndex::build(downloader, configuration, &selection).await?;
        Ok(Helper { selection, index })
    }

    pub fn version(&self) -> &str {
        &self.selection.version
    }

    pub fn track(&self) -> Track {
        self.selection.track
    }

    pub fn index(&self) -> &ManifestIndex {
        &self.index
    }

    pub fn lookup(&self, path: &str) -> Result<String> {
        self.index.lookup(path)
    }
}
