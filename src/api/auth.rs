//! Session and account endpoints.

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::app::Liveness;
use crate::config::{API_SIGN_IN, API_SIGN_OUT, API_SIGN_UP, API_USER_INFO, MOCK_API, MOCK_LATENCY_MS, api_url};
use crate::models::User;

use super::error::ApiError;
use super::http;

/// Body for sign-in and sign-up requests.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Ask the server who the cookie session belongs to.
///
/// A 401 means there is no live session; network failures and 5xx also
/// flip the liveness handle via the fetch layer.
pub async fn check_session(live: Liveness) -> Result<User, ApiError> {
    if MOCK_API {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        return Ok(User {
            username: "mocked_user".to_string(),
        });
    }

    http::get_json(live, &api_url(API_USER_INFO)).await
}

pub async fn sign_in(live: Liveness, credentials: &Credentials) -> Result<User, ApiError> {
    if MOCK_API {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        return Ok(User {
            username: credentials.username.clone(),
        });
    }

    http::post_json(live, &api_url(API_SIGN_IN), credentials).await
}

/// Register a new account; the server creates a session on success (201).
pub async fn sign_up(live: Liveness, credentials: &Credentials) -> Result<User, ApiError> {
    if MOCK_API {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        return Ok(User {
            username: credentials.username.clone(),
        });
    }

    http::post_json(live, &api_url(API_SIGN_UP), credentials).await
}

/// Invalidate the server session (204 on success).
pub async fn sign_out(live: Liveness) -> Result<(), ApiError> {
    if MOCK_API {
        TimeoutFuture::new(MOCK_LATENCY_MS).await;
        return Ok(());
    }

    http::post_empty(live, &api_url(API_SIGN_OUT)).await
}
