pub mod downloader;
pub mod http_downloader;
#[cfg(test)]
pub(crate) mod memory_downloader;

pub mod catalog_resolver;
pub mod manifest_index;
