use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_ENDPOINT: &str = "https://ws.audioscrobbler.com/2.0/";

/// Fully-formed request descriptor for the metadata service. Built once by
/// the platform layer; the state machine never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub endpoint: String,
    /// Lookup method, e.g. `artist.getsimilar`.
    pub method: String,
    /// Subject artist the lookup is relative to.
    pub artist: String,
    pub api_key: String,
    /// Response-format indicator; only `json` is understood.
    pub format: String,
}

impl RequestDescriptor {
    pub fn similar_artists(
        endpoint: impl Into<String>,
        artist: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: "artist.getsimilar".to_string(),
            artist: artist.into(),
            api_key: api_key.into(),
            format: "json".to_string(),
        }
    }

    /// Resolves the descriptor into the concrete request URL.
    pub fn to_url(&self) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("method", &self.method)
            .append_pair("artist", &self.artist)
            .append_pair("api_key", &self.api_key)
            .append_pair("format", &self.format);
        Ok(url)
    }
}
