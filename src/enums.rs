/// Regional routing value of the Riot API.
///
/// Account and match-v5 endpoints are served from the regional hosts, so the
/// region picks the base URL for every call of a run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Region {
    Americas,
    Asia,
    #[default]
    Europe,
    Sea,
}

impl Region {
    /// Base URL of the regional API host, e.g. `https://europe.api.riotgames.com`.
    pub fn base_url(&self) -> String {
        format!("https://{self}.api.riotgames.com")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_base_url() {
        assert_eq!(
            Region::Europe.base_url(),
            "https://europe.api.riotgames.com"
        );
        assert_eq!(Region::Sea.base_url(), "https://sea.api.riotgames.com");
    }

    #[test]
    fn test_region_parse() {
        assert_eq!("americas".parse::<Region>().unwrap(), Region::Americas);
        assert_eq!("ASIA".parse::<Region>().unwrap(), Region::Asia);
        assert!("mars".parse::<Region>().is_err());
    }
}
