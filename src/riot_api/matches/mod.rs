pub(crate) mod detail;
pub(crate) mod ids;

/// Path of the match-v5 API below the regional host.
const MATCH_V5: [&str; 3] = ["lol", "match", "v5"];
