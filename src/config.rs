use std::fmt;
use std::time::Duration;

use reqwest::Url;

use crate::enums::Region;
use crate::error::{CollectorError, Result};

/// Settings for one collection run.
#[derive(Clone)]
pub struct CollectorConfig {
    pub api_key: String,
    pub base_url: Url,
    /// Length of one backoff time unit. A Fibonacci value of `n` sleeps `n` units.
    pub backoff_unit: Duration,
    /// Upper bound on backoff waits per match. `None` retries rate-limited
    /// responses indefinitely.
    pub max_rate_limit_retries: Option<u32>,
}

impl CollectorConfig {
    pub fn new(api_key: impl Into<String>, region: Region) -> Result<Self> {
        let base_url = region.base_url();
        let base_url = Url::parse(&base_url).map_err(|e| CollectorError::InvalidUrl {
            url: base_url,
            reason: e.to_string(),
        })?;
        Ok(Self {
            api_key: api_key.into(),
            base_url,
            backoff_unit: Duration::from_secs(1),
            max_rate_limit_retries: None,
        })
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_backoff_unit(mut self, unit: Duration) -> Self {
        self.backoff_unit = unit;
        self
    }

    pub fn with_max_rate_limit_retries(mut self, max: Option<u32>) -> Self {
        self.max_rate_limit_retries = max;
        self
    }
}

impl fmt::Debug for CollectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectorConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("backoff_unit", &self.backoff_unit)
            .field("max_rate_limit_retries", &self.max_rate_limit_retries)
            .finish()
    }
}
