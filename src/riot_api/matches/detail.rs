use reqwest::{StatusCode, Url};
use tracing::{debug, instrument, warn};

use super::MATCH_V5;
use crate::backoff::Backoff;
use crate::error::{CollectorError, Result};
use crate::model::MatchRecord;
use crate::riot_api;
use crate::transport::Transport;

/// Fetch the detail document of one match.
///
/// A 429 makes `backoff` wait and the same match is requested again, up to
/// `max_rate_limit_retries` times (unbounded for `None`). A 200 shrinks the
/// backoff. Any other status fails immediately.
#[instrument(skip(transport, base, backoff))]
pub(crate) async fn fetch_match<T, B>(
    transport: &T,
    base: &Url,
    match_id: &str,
    backoff: &mut B,
    max_rate_limit_retries: Option<u32>,
) -> Result<MatchRecord>
where
    T: Transport + ?Sized,
    B: Backoff + ?Sized,
{
    let mut segments = MATCH_V5.to_vec();
    segments.extend(["matches", match_id]);
    let url = riot_api::endpoint(base, &segments)?;

    let mut rate_limited = 0u32;
    loop {
        let response = transport.get(&url).await?;
        let status = response.status;

        if status == StatusCode::OK {
            let record: MatchRecord =
                serde_json::from_str(&response.body).map_err(|e| CollectorError::Decode {
                    url: url.to_string(),
                    source: e,
                })?;
            backoff.decrease();
            debug!(rate_limited, "fetched match");
            return Ok(record);
        }

        if status != StatusCode::TOO_MANY_REQUESTS {
            debug!(%status, body = %response.body, "match request failed");
            return Err(CollectorError::MatchFetch {
                match_id: match_id.to_owned(),
                status,
                body: response.body,
            });
        }

        rate_limited += 1;
        if max_rate_limit_retries.is_some_and(|max| rate_limited > max) {
            return Err(CollectorError::RateLimitExhausted {
                match_id: match_id.to_owned(),
                attempts: rate_limited,
            });
        }
        warn!(attempt = rate_limited, body = %response.body, "hit the request limit");
        backoff.wait().await;
    }
}
