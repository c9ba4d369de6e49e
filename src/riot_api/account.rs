use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{CollectorError, Result};
use crate::model::PlayerIdentity;
use crate::riot_api;
use crate::transport::Transport;

#[derive(Deserialize)]
struct AccountDto {
    puuid: String,
}

/// Look up the PUUID behind a Riot ID. Never retried.
#[instrument(skip(transport, base))]
pub(crate) async fn resolve_identity<T: Transport + ?Sized>(
    transport: &T,
    base: &Url,
    game_name: &str,
    tag_line: &str,
) -> Result<PlayerIdentity> {
    let url = riot_api::endpoint(
        base,
        &["riot", "account", "v1", "accounts", "by-riot-id", game_name, tag_line],
    )?;
    let response = transport.get(&url).await?;

    let account = if response.status == StatusCode::OK {
        serde_json::from_str::<AccountDto>(&response.body).ok()
    } else {
        None
    };
    let Some(AccountDto { puuid }) = account else {
        return Err(CollectorError::Resolution {
            game_name: game_name.to_owned(),
            tag_line: tag_line.to_owned(),
            status: response.status,
            body: response.body,
        });
    };

    debug!(puuid, "resolved riot id");
    Ok(PlayerIdentity {
        game_name: game_name.to_owned(),
        tag_line: tag_line.to_owned(),
        puuid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{base_url, ok, respond, ScriptedTransport};

    #[tokio::test]
    async fn test_resolve_identity() {
        let transport = ScriptedTransport::new(|_| {
            ok(r#"{"puuid":"abc-123","gameName":"Faker","tagLine":"KR1"}"#)
        });

        let identity = resolve_identity(&transport, &base_url(), "Faker", "KR1")
            .await
            .unwrap();

        assert_eq!(identity.puuid, "abc-123");
        assert_eq!(identity.riot_id(), "Faker#KR1");
        assert_eq!(
            transport.paths(),
            vec!["/riot/account/v1/accounts/by-riot-id/Faker/KR1"]
        );
    }

    #[tokio::test]
    async fn test_resolve_identity_encodes_riot_id() {
        let transport = ScriptedTransport::new(|_| ok(r#"{"puuid":"p"}"#));

        resolve_identity(&transport, &base_url(), "Hide on bush", "KR 1")
            .await
            .unwrap();

        assert_eq!(
            transport.paths(),
            vec!["/riot/account/v1/accounts/by-riot-id/Hide%20on%20bush/KR%201"]
        );
        assert_eq!(transport.requests()[0].query(), None);
    }

    #[tokio::test]
    async fn test_resolve_identity_not_found() {
        let transport = ScriptedTransport::new(|_| {
            respond(StatusCode::NOT_FOUND, r#"{"status":{"status_code":404}}"#)
        });

        let err = resolve_identity(&transport, &base_url(), "Nobody", "0000")
            .await
            .unwrap_err();

        match err {
            CollectorError::Resolution { status, body, .. } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(body.contains("404"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_identity_missing_puuid() {
        let transport = ScriptedTransport::new(|_| ok(r#"{"gameName":"Faker"}"#));

        let err = resolve_identity(&transport, &base_url(), "Faker", "KR1")
            .await
            .unwrap_err();

        match err {
            CollectorError::Resolution { status, body, .. } => {
                assert_eq!(status, StatusCode::OK);
                assert!(body.contains("gameName"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_identity_rate_limited_is_not_retried() {
        let transport =
            ScriptedTransport::new(|_| respond(StatusCode::TOO_MANY_REQUESTS, "slow down"));

        let err = resolve_identity(&transport, &base_url(), "Faker", "KR1")
            .await
            .unwrap_err();

        assert!(matches!(err, CollectorError::Resolution { .. }));
        assert_eq!(transport.requests().len(), 1);
    }
}
