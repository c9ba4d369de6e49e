pub(crate) mod account;
pub(crate) mod matches;

use reqwest::Url;

use crate::error::{CollectorError, Result};

/// Append `segments` to the base URL's path, percent-encoding each one.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| CollectorError::InvalidUrl {
                url: base.to_string(),
                reason: "base url cannot have path segments".to_string(),
            })?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::base_url;

    #[test]
    fn test_endpoint_encodes_segments() {
        let url = endpoint(&base_url(), &["riot", "account", "Hide on bush", "KR1"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://europe.api.riotgames.com/riot/account/Hide%20on%20bush/KR1"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("http://localhost:8080/proxy/").unwrap();
        let url = endpoint(&base, &["lol", "match"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/lol/match");
    }

    #[test]
    fn test_endpoint_rejects_opaque_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        assert!(matches!(
            endpoint(&base, &["x"]),
            Err(CollectorError::InvalidUrl { .. })
        ));
    }
}
