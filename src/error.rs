use std::path::PathBuf;

use reqwest::StatusCode;

/// All errors that can occur while collecting match history.
#[derive(thiserror::Error, Debug)]
pub enum CollectorError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A request URL could not be built from the configured base URL.
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The API key cannot be sent as a header value.
    #[error("api key contains characters that are not valid in an http header")]
    InvalidApiKey,

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The Riot ID lookup did not yield a PUUID.
    #[error("could not resolve {game_name}#{tag_line} (status {status}): {body}")]
    Resolution {
        game_name: String,
        tag_line: String,
        status: StatusCode,
        body: String,
    },

    /// A match id page request did not succeed.
    #[error("listing match ids failed with status {status}: {body}")]
    MatchIds { status: StatusCode, body: String },

    /// A match detail request failed with a non-retryable status.
    #[error("fetching match {match_id} failed with status {status}: {body}")]
    MatchFetch {
        match_id: String,
        status: StatusCode,
        body: String,
    },

    /// The configured rate-limit retry ceiling was reached for one match.
    #[error("gave up on match {match_id} after {attempts} rate-limited responses")]
    RateLimitExhausted { match_id: String, attempts: u32 },

    /// A successful response did not contain the expected JSON.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// Writing the dataset to disk failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The collected records could not be serialized.
    #[error("failed to serialize match records: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CollectorError>;
