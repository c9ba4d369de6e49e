use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::{CollectorError, Result};

/// Header the Riot API reads the API key from.
pub const API_KEY_HEADER: &str = "x-riot-token";

/// Status and raw body of an API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Issues GET requests against the API.
///
/// Only transport failures are errors here. Every HTTP status, including
/// 429 and 5xx, comes back as an [`ApiResponse`] for the caller to judge.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<ApiResponse>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport that authenticates every request with `api_key`.
    pub fn new(api_key: &str) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key).map_err(|_| CollectorError::InvalidApiKey)?;
        key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(CollectorError::ClientBuild)?;
        Ok(Self { http })
    }

    /// Use the provided [`reqwest::Client`] as is.
    ///
    /// The client is expected to carry the API key header already.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<ApiResponse> {
        debug!(%url, "sending request");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CollectorError::Http {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CollectorError::ResponseBody {
                url: url.to_string(),
                source: e,
            })?;

        Ok(ApiResponse { status, body })
    }
}
