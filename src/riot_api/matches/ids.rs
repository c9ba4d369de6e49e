use reqwest::{StatusCode, Url};
use tracing::{debug, instrument, warn};

use super::MATCH_V5;
use crate::error::{CollectorError, Result};
use crate::progress::Progress;
use crate::riot_api;
use crate::transport::Transport;

/// Largest `count` the match id endpoint accepts per call.
pub const MAX_PAGE_SIZE: usize = 100;

/// List the ids of the `amount` most recent matches of `puuid`, newest first.
///
/// Pages are requested one after another with `start` advancing by the page
/// size. Any non-200 page aborts the whole listing; nothing is retried.
#[instrument(skip(transport, base, progress))]
pub(crate) async fn list_match_ids<T, P>(
    transport: &T,
    base: &Url,
    puuid: &str,
    amount: usize,
    progress: &mut P,
) -> Result<Vec<String>>
where
    T: Transport + ?Sized,
    P: Progress + ?Sized,
{
    let mut ids = Vec::with_capacity(amount.min(MAX_PAGE_SIZE));
    let mut start = 0;
    while start < amount {
        let count = MAX_PAGE_SIZE.min(amount - start);
        let page = get_page(transport, base, puuid, start, count).await?;
        let received = page.len();
        ids.extend(page);
        start += count;
        progress.ids_listed(ids.len(), amount);
        debug!(start, count, received, "fetched match id page");

        if received < count {
            warn!(
                requested = amount,
                available = ids.len(),
                "match history is shorter than requested"
            );
            break;
        }
    }
    Ok(ids)
}

async fn get_page<T: Transport + ?Sized>(
    transport: &T,
    base: &Url,
    puuid: &str,
    start: usize,
    count: usize,
) -> Result<Vec<String>> {
    let mut segments = MATCH_V5.to_vec();
    segments.extend(["matches", "by-puuid", puuid, "ids"]);
    let mut url = riot_api::endpoint(base, &segments)?;
    url.query_pairs_mut()
        .append_pair("start", &start.to_string())
        .append_pair("count", &count.to_string());

    let response = transport.get(&url).await?;
    if response.status != StatusCode::OK {
        return Err(CollectorError::MatchIds {
            status: response.status,
            body: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| CollectorError::Decode {
        url: url.to_string(),
        source: e,
    })
}
