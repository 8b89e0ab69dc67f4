use bytes::Bytes;

use crate::error::Result;

/// Fetches one document and returns its whole body.
///
/// Implementations must fail on a non-success status instead of handing back
/// the error page as a body.
pub trait Downloader {
    fn download(&self, url: &str) -> impl std::future::Future<Output = Result<Bytes>> + Send;
}
