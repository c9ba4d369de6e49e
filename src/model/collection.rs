use super::PlayerIdentity;

/// A match detail document exactly as the API returned it.
pub type MatchRecord = serde_json::Value;

/// Records collected for one player, in match id order.
#[derive(Debug, Clone)]
pub struct CollectionResult {
    pub identity: PlayerIdentity,
    pub records: Vec<MatchRecord>,
    /// Set when a match could not be fetched and the remaining ids were abandoned.
    pub failure: Option<MatchFailure>,
}

impl CollectionResult {
    pub fn new(identity: PlayerIdentity) -> Self {
        Self {
            identity,
            records: Vec::new(),
            failure: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// The match that stopped a run early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFailure {
    pub match_id: String,
    pub error: String,
}
