use thiserror::Error;

/// Coarse classification of an [`Error`], for callers that only care about
/// the category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Read,
    Decode,
    NotFound,
    Configuration,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {url}: server answered {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog has no entry for game {game} on platform {platform}")]
    CatalogEntryMissing { game: String, platform: String },

    #[error("Malformed manifest entry {path}: {reason}")]
    MalformedEntry { path: String, reason: String },

    #[error("The file {path} does not exist")]
    NotFound { path: String },

    #[error("Failed to read configuration {path}: {source}")]
    ConfigurationIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration {path}: {source}")]
    ConfigurationFormat {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Client(_) | Error::Network { .. } | Error::Status { .. } => ErrorKind::Network,
            Error::Read { .. } => ErrorKind::Read,
            Error::Decode { .. }
            | Error::CatalogEntryMissing { .. }
            | Error::MalformedEntry { .. } => ErrorKind::Decode,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::ConfigurationIo { .. } | Error::ConfigurationFormat { .. } => {
                ErrorKind::Configuration
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, Error>;
