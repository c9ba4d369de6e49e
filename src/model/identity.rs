/// A player resolved from their Riot ID to a PUUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub game_name: String,
    pub tag_line: String,
    pub puuid: String,
}

impl PlayerIdentity {
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.game_name, self.tag_line)
    }
}

/// What to collect: whose matches and how many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRequest {
    pub game_name: String,
    pub tag_line: String,
    /// Total number of matches to fetch. Zero yields an empty result.
    pub amount: usize,
}

impl CollectionRequest {
    pub fn new(game_name: impl Into<String>, tag_line: impl Into<String>, amount: usize) -> Self {
        Self {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
            amount,
        }
    }
}
