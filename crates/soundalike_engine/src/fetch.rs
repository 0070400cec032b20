use std::time::Duration;

use crate::decode::decode_artists;
use crate::{ArtistRecord, FailureKind, FetchError, RequestDescriptor};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Seam for the outbound metadata request, mockable in tests.
#[async_trait::async_trait]
pub trait ArtistFetcher: Send + Sync {
    async fn fetch(&self, descriptor: &RequestDescriptor)
        -> Result<Vec<ArtistRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ArtistFetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<Vec<ArtistRecord>, FetchError> {
        let url = descriptor.to_url()?;
        let client = self.build_client()?;

        let response = client
            .get(url.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        decode_artists(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
