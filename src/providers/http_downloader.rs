use bytes::Bytes;

use crate::error::{Error, Result};
use crate::models::configuration::Configuration;
use crate::providers::downloader::Downloader;

/// Plain GET over reqwest, no authentication, no retries.
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new(configuration: &Configuration) -> Result<HttpDownloader> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = configuration.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::Client)?;
        Ok(HttpDownloader { client })
    }
}

impl Downloader for HttpDownloader {
    async fn download(&self, url: &str) -> Result<Bytes> {
        tracing::debug!(url, "fetching");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "unexpected response status");
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.bytes().await.map_err(|source| Error::Read {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use iron::status::Status;
    use iron::{status, Iron, IronResult, Listening, Request, Response};

    use std::net::TcpListener;

    fn mock_server(code: Status, content: &'static str) -> (Listening, u16) {
        for port in 8000..9000 {
            let code = code.clone();
            let handler = move |_req: &mut Request| -> IronResult<Response> {
                Ok(Response::with((code.clone(), content)))
            };
            if let Ok(listener) = Iron::new(handler).http(("127.0.0.1", port)) {
                return (listener, port);
            }
        }
        panic!("No available port found");
    }

    fn unused_port() -> u16 {
        let listener = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn test_download_success() {
        // Arrange
        let (mut server, port) = mock_server(status::Ok, "{\"games\":{}}");
        let url = format!("http://127.0.0.1:{}/cytrus.json", port);
        let downloader = HttpDownloader::new(&Configuration::default()).unwrap();

        // Act
        let result = downloader.download(&url).await;

        // Assert
        assert_eq!(result.unwrap(), Bytes::from_static(b"{\"games\":{}}"));

        // Clean up
        server.close().unwrap();
    }

    #[tokio::test]
    async fn test_download_non_success_status() {
        // Arrange
        let (mut server, port) = mock_server(status::NotFound, "missing");
        let url = format!("http://127.0.0.1:{}/wakfu/releases/main/darwin/0.json", port);
        let downloader = HttpDownloader::new(&Configuration::default()).unwrap();

        // Act
        let result = downloader.download(&url).await;

        // Assert
        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Network);
        assert!(matches!(error, Error::Status { status: 404, .. }));

        // Clean up
        server.close().unwrap();
    }

    #[tokio::test]
    async fn test_download_connection_refused() {
        // Arrange
        let url = format!("http://127.0.0.1:{}/cytrus.json", unused_port());
        let mut configuration = Configuration::default();
        configuration.timeout_secs = Some(5);
        let downloader = HttpDownloader::new(&configuration).unwrap();

        // Act
        let result = downloader.download(&url).await;

        // Assert
        assert!(matches!(result.unwrap_err(), Error::Network { .. }));
    }
}
