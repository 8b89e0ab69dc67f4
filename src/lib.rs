//! Resolves download URLs of game files published on the Ankama launcher CDN.
//!
//! The catalog (`cytrus.json`) gives the current version of a release track,
//! the release manifest maps every file path to a content hash, and the hash
//! gives the download URL.

pub mod error;
pub mod helper;
pub mod models;
pub mod providers;

pub use error::{Error, ErrorKind, Result};
pub use helper::Helper;
pub use models::catalog::Track;
pub use models::configuration::Configuration;
