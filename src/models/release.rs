use crate::models::catalog::Track;

/// The track and version picked from the catalog for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSelection {
    pub track: Track,
    pub version: String,
}
