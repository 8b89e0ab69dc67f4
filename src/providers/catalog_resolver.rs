use crate::error::{Error, Result};
use crate::models::catalog::{Catalog, Track};
use crate::models::configuration::Configuration;
use crate::models::release::ReleaseSelection;
use crate::providers::downloader::Downloader;

/// First stage: reads the catalog and picks the version of the configured
/// game and platform for one track.
pub struct CatalogResolver<'a, D: Downloader> {
    downloader: &'a D,
    configuration: &'a Configuration,
}

impl<'a, D: Downloader> CatalogResolver<'a, D> {
    pub fn new(downloader: &'a D, configuration: &'a Configuration) -> Self {
        CatalogResolver {
            downloader,
            configuration,
        }
    }

    pub async fn fetch_catalog(&self) -> Result<Catalog> {
        let url = self.configuration.catalog_url();
        let body = self.downloader.download(&url).await?;
        serde_json::from_slice(&body).map_err(|source| Error::Decode { url, source })
    }

    pub async fn resolve(&self, beta: bool) -> Result<ReleaseSelection> {
        let catalog = self.fetch_catalog().await?;
        let selection = select_release(&catalog, self.configuration, Track::from_beta(beta))?;
        tracing::info!(
            game = %self.configuration.game,
            platform = %self.configuration.platform,
            track = %selection.track,
            version = %selection.version,
            "resolved release"
        );
        Ok(selection)
    }
}

/// A missing or `null` track field yields an empty version; a missing game or
/// platform is an error. Only the configured game is decoded.
pub fn select_release(
    catalog: &Catalog,
    configuration: &Configuration,
    track: Track,
) -> Result<ReleaseSelection> {
    let release = catalog
        .release(&configuration.game, &configuration.platform)
        .map_err(|source| Error::Decode {
            url: configuration.catalog_url(),
            source,
        })?
        .ok_or_else(|| Error::CatalogEntryMissing {
            game: configuration.game.clone(),
            platform: configuration.platform.clone(),
        })?;
    Ok(ReleaseSelection {
        track,
        version: release.version(track).to_string(),
    })
}
