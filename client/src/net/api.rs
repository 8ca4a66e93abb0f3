//! REST API helpers for the activities endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Mutations that reach the
//! server resolve to `Ok(MutationResponse)` whatever the status, because the
//! UI derives its message from the success flag and body together; only
//! transport failures are `Err`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

#[cfg(feature = "hydrate")]
use super::types::ActionBody;
use super::types::{ActivityCollection, MutationResponse, RemovalTarget};

#[cfg(any(test, feature = "hydrate"))]
const ACTIVITIES_ENDPOINT: &str = "/activities";

/// Bytes left unescaped by the browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Percent-encode a path segment or query value the way `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_ENDPOINT}/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn participants_endpoint(target: &RemovalTarget) -> String {
    format!(
        "{ACTIVITIES_ENDPOINT}/{}/participants?email={}",
        encode_component(&target.activity),
        encode_component(&target.participant)
    )
}

/// Fetch the full activity collection from `GET /activities`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or a body that is
/// not an activity collection.
pub async fn fetch_activities() -> Result<ActivityCollection, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ACTIVITIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<ActivityCollection>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign `email` up for `activity` via `POST /activities/{activity}/signup`.
///
/// # Errors
///
/// Returns an error only when the request never produced a response.
pub async fn signup(activity: &str, email: &str) -> Result<MutationResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = signup_endpoint(activity, email);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(read_mutation(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Unavailable)
    }
}

/// Remove a participant via `DELETE /activities/{activity}/participants`.
///
/// # Errors
///
/// Returns an error only when the request never produced a response.
pub async fn unregister(target: &RemovalTarget) -> Result<MutationResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = participants_endpoint(target);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(read_mutation(resp).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn read_mutation(resp: gloo_net::http::Response) -> MutationResponse {
    let ok = resp.ok();
    let body = resp.json::<ActionBody>().await.ok();
    MutationResponse { ok, body }
}
