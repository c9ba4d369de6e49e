use std::path::Path;
use std::time::Duration;

use tracing::{debug, error, info, instrument};

use crate::backoff::{Backoff, FibonacciBackoff};
use crate::client::RiotClient;
use crate::config::CollectorConfig;
use crate::error::Result;
use crate::model::{CollectionRequest, CollectionResult, MatchFailure};
use crate::output;
use crate::progress::Progress;
use crate::transport::{HttpTransport, Transport};

/// Drives a collection run: resolve the player, list their match ids, then
/// fetch every match in order.
pub struct Collector<T = HttpTransport> {
    client: RiotClient<T>,
    backoff_unit: Duration,
    max_rate_limit_retries: Option<u32>,
}

impl Collector<HttpTransport> {
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        Ok(Self::with_client(RiotClient::new(config)?, config))
    }
}

impl<T: Transport> Collector<T> {
    /// Use an existing client; only the backoff settings are taken from `config`.
    pub fn with_client(client: RiotClient<T>, config: &CollectorConfig) -> Self {
        Self {
            client,
            backoff_unit: config.backoff_unit,
            max_rate_limit_retries: config.max_rate_limit_retries,
        }
    }

    pub fn client(&self) -> &RiotClient<T> {
        &self.client
    }

    /// Collect matches with a fresh [`FibonacciBackoff`] shared by the whole run.
    pub async fn collect<P: Progress + ?Sized>(
        &self,
        request: &CollectionRequest,
        progress: &mut P,
    ) -> Result<CollectionResult> {
        let mut backoff = FibonacciBackoff::with_unit(self.backoff_unit);
        self.collect_with(request, &mut backoff, progress).await
    }

    /// Collect matches using the caller's backoff for every fetch.
    ///
    /// Failing to resolve the player or to list match ids is an error. A match
    /// that cannot be fetched ends the run early instead: the records gathered
    /// so far are returned and [`CollectionResult::failure`] names the match.
    #[instrument(
        skip_all,
        fields(game_name = %request.game_name, tag_line = %request.tag_line, amount = request.amount)
    )]
    pub async fn collect_with<B, P>(
        &self,
        request: &CollectionRequest,
        backoff: &mut B,
        progress: &mut P,
    ) -> Result<CollectionResult>
    where
        B: Backoff + ?Sized,
        P: Progress + ?Sized,
    {
        let identity = self
            .client
            .resolve_identity(&request.game_name, &request.tag_line)
            .await?;
        info!(puuid = %identity.puuid, "got puuid for {}", identity.riot_id());

        let match_ids = self
            .client
            .list_match_ids(&identity.puuid, request.amount, progress)
            .await?;
        info!(count = match_ids.len(), "listed match ids");

        let mut result = CollectionResult::new(identity);
        let total = match_ids.len();
        for (idx, match_id) in match_ids.iter().enumerate() {
            debug!(idx, match_id, "fetching match");
            match self
                .client
                .fetch_match(match_id, backoff, self.max_rate_limit_retries)
                .await
            {
                Ok(record) => {
                    result.records.push(record);
                    progress.match_fetched(result.records.len(), total);
                }
                Err(e) => {
                    error!(
                        match_id,
                        error = %e,
                        collected = result.records.len(),
                        "failed to fetch match, abandoning remaining ids"
                    );
                    result.failure = Some(MatchFailure {
                        match_id: match_id.clone(),
                        error: e.to_string(),
                    });
                    break;
                }
            }
        }

        info!(
            records = result.records.len(),
            complete = result.is_complete(),
            "collection finished"
        );
        Ok(result)
    }

    /// Collect matches and write them to `path`.
    ///
    /// The file is written exactly once, also when a match failed part way.
    /// Nothing is written if the run fails before any match was fetched.
    pub async fn collect_to_file<P: Progress + ?Sized>(
        &self,
        request: &CollectionRequest,
        path: &Path,
        progress: &mut P,
    ) -> Result<CollectionResult> {
        let result = self.collect(request, progress).await?;
        output::save(&result, path)?;
        Ok(result)
    }
}
