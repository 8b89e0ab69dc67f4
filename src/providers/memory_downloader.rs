use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::providers::downloader::Downloader;

/// Serves fixed documents by URL and records every request. Unknown URLs answer 404.
#[derive(Default)]
pub struct MemoryDownloader {
    documents: HashMap<String, Bytes>,
    requests: Mutex<Vec<String>>,
}

impl MemoryDownloader {
    pub fn with(mut self, url: &str, body: &str) -> MemoryDownloader {
        self.documents
            .insert(url.to_string(), Bytes::from(body.to_string()));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Downloader for MemoryDownloader {
    async fn download(&self, url: &str) -> Result<Bytes> {
        self.requests.lock().unwrap().push(url.to_string());
        self.documents.get(url).cloned().ok_or(Error::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}
