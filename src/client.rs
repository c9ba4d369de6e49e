use reqwest::Url;
use tracing::instrument;

use crate::backoff::Backoff;
use crate::config::CollectorConfig;
use crate::error::Result;
use crate::model::{MatchRecord, PlayerIdentity};
use crate::progress::Progress;
use crate::riot_api;
use crate::transport::{HttpTransport, Transport};

/// The main entry point for talking to the Riot API.
///
/// `RiotClient` pairs a [`Transport`] with the regional base URL and exposes
/// the three calls a collection run is made of.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> riot_match_collector::Result<()> {
/// use riot_match_collector::{CollectorConfig, FibonacciBackoff, Region, RiotClient};
///
/// let config = CollectorConfig::new("RGAPI-...", Region::Europe)?;
/// let client = RiotClient::new(&config)?;
/// let player = client.resolve_identity("Faker", "KR1").await?;
/// let ids = client.list_match_ids(&player.puuid, 5, &mut ()).await?;
/// let mut backoff = FibonacciBackoff::new();
/// let first = client.fetch_match(&ids[0], &mut backoff, None).await?;
/// println!("{}", first["info"]["gameMode"]);
/// # Ok(())
/// # }
/// ```
pub struct RiotClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
}

impl RiotClient<HttpTransport> {
    /// Create a client authenticating with the configured API key.
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.api_key)?;
        Ok(Self::with_transport(transport, config.base_url.clone()))
    }
}

impl<T: Transport> RiotClient<T> {
    /// Create a client using the provided [`Transport`].
    pub fn with_transport(transport: T, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a Riot ID (`game_name#tag_line`) to the player's PUUID.
    #[instrument(skip(self))]
    pub async fn resolve_identity(&self, game_name: &str, tag_line: &str) -> Result<PlayerIdentity> {
        riot_api::account::resolve_identity(&self.transport, &self.base_url, game_name, tag_line)
            .await
    }

    /// List up to `amount` match ids of a player, most recent first.
    #[instrument(skip(self, progress))]
    pub async fn list_match_ids<P: Progress + ?Sized>(
        &self,
        puuid: &str,
        amount: usize,
        progress: &mut P,
    ) -> Result<Vec<String>> {
        riot_api::matches::ids::list_match_ids(
            &self.transport,
            &self.base_url,
            puuid,
            amount,
            progress,
        )
        .await
    }

    /// Fetch the full detail document of one match, waiting out rate limits.
    #[instrument(skip(self, backoff))]
    pub async fn fetch_match<B: Backoff + ?Sized>(
        &self,
        match_id: &str,
        backoff: &mut B,
        max_rate_limit_retries: Option<u32>,
    ) -> Result<MatchRecord> {
        riot_api::matches::detail::fetch_match(
            &self.transport,
            &self.base_url,
            match_id,
            backoff,
            max_rate_limit_retries,
        )
        .await
    }
}
