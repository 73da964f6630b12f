use reqwest::blocking::Client;
use serde_json::Value;

use crate::{
    config::Credentials,
    error::{Error, Result},
    spotify::read_body,
    types::AccessToken,
};

/// Exchanges the client credentials for a bearer token.
///
/// Sends a form-encoded `client_credentials` grant to `token_url` and reads
/// `access_token` from the JSON answer. The token is valid for about an hour
/// and is not refreshed; callers keep the returned value for the whole run.
///
/// # Errors
///
/// - [`Error::Transport`] if the token endpoint cannot be reached
/// - [`Error::Status`] if it answers with a non-2xx status
/// - [`Error::Decode`] if the body is not JSON
/// - [`Error::MissingAccessToken`] if the JSON has no usable `access_token`
pub fn get_access_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    tracing::debug!(token_url, "requesting client-credentials token");

    let response = client
        .post(token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ])
        .send()
        .map_err(|source| Error::Transport {
            url: token_url.to_string(),
            source,
        })?;

    let body = read_body(response, token_url)?;
    parse_token_response(&body)
}

/// Extracts the access token from a token endpoint response body.
pub fn parse_token_response(body: &str) -> Result<AccessToken> {
    let json: Value = serde_json::from_str(body).map_err(|source| Error::Decode {
        endpoint: "token",
        source,
    })?;

    match json["access_token"].as_str() {
        Some(token) if !token.is_empty() => Ok(AccessToken {
            access_token: token.to_string(),
        }),
        _ => Err(Error::MissingAccessToken),
    }
}
