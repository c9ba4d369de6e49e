pub use backoff::{Backoff, FibonacciBackoff, FibonacciState};
pub use client::RiotClient;
pub use collector::Collector;
pub use config::CollectorConfig;
pub use enums::Region;
pub use error::{CollectorError, Result};
pub use model::*;
pub use progress::Progress;
pub use transport::{ApiResponse, HttpTransport, Transport};

pub mod backoff;
pub mod client;
pub mod collector;
pub mod config;
pub mod enums;
pub mod error;
pub mod model;
pub mod output;
pub mod progress;
pub(crate) mod riot_api;
pub mod transport;

pub use riot_api::matches::ids::MAX_PAGE_SIZE;

#[cfg(test)]
pub(crate) mod testing;
