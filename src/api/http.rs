//! Credentialed HTTP plumbing over the Fetch API.
//!
//! Every call goes through [`dispatch`], which consults the liveness handle
//! before touching the network and folds network failures and 5xx responses
//! back into it. The health probe is the exception: it bypasses the gate
//! (it is how the gate gets decided) and enforces its timeout with an
//! `AbortController` cancellation signal.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::{AbortController, RequestCredentials};

use crate::app::Liveness;
use crate::core::health::ProbeOutcome;

use super::error::ApiError;

/// Error payload shape shared by the backend's error responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

// =============================================================================
// Health probe
// =============================================================================

/// Probe `url` once, aborting after `timeout_ms`.
pub async fn probe(url: &str, timeout_ms: u32) -> ProbeOutcome {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    // Dropping the Timeout disarms the abort once the request settles.
    let abort_guard = controller
        .clone()
        .map(|c| Timeout::new(timeout_ms, move || c.abort()));

    let result = Request::get(url)
        .credentials(RequestCredentials::Include)
        .abort_signal(signal.as_ref())
        .send()
        .await;
    drop(abort_guard);

    match result {
        Ok(resp) if resp.ok() => ProbeOutcome::Up,
        Ok(resp) => ProbeOutcome::HttpError(resp.status()),
        Err(gloo_net::Error::JsError(err)) if err.name == "AbortError" => ProbeOutcome::TimedOut,
        Err(err) => ProbeOutcome::NetworkError(err.to_string()),
    }
}

// =============================================================================
// JSON helpers
// =============================================================================

/// GET `url` (credentialed) and parse a JSON body.
pub async fn get_json<T: DeserializeOwned>(live: Liveness, url: &str) -> Result<T, ApiError> {
    let resp = dispatch(live, build(Request::get(url))?).await?;
    parse_json(resp).await
}

/// GET with query parameters.
pub async fn get_json_with_query<T: DeserializeOwned>(
    live: Liveness,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, ApiError> {
    let resp = dispatch(live, build(Request::get(url).query(query.iter().copied()))?).await?;
    parse_json(resp).await
}

/// POST a JSON body and parse a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    live: Liveness,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = Request::post(url)
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    let resp = dispatch(live, request).await?;
    parse_json(resp).await
}

/// POST with no body, ignoring the response body (204-friendly).
pub async fn post_empty(live: Liveness, url: &str) -> Result<(), ApiError> {
    dispatch(live, build(Request::post(url))?).await.map(|_| ())
}

/// POST multipart form data, ignoring the response body.
pub async fn post_form(
    live: Liveness,
    url: &str,
    query: &[(&str, &str)],
    form: &web_sys::FormData,
) -> Result<(), ApiError> {
    let request = Request::post(url)
        .query(query.iter().copied())
        .credentials(RequestCredentials::Include)
        .body(form.clone())
        .map_err(|e| ApiError::Request(e.to_string()))?;
    dispatch(live, request).await.map(|_| ())
}

/// DELETE with query parameters, ignoring the response body.
pub async fn delete(live: Liveness, url: &str, query: &[(&str, &str)]) -> Result<(), ApiError> {
    dispatch(live, build(Request::delete(url).query(query.iter().copied()))?)
        .await
        .map(|_| ())
}

// =============================================================================
// Dispatch
// =============================================================================

fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder
        .credentials(RequestCredentials::Include)
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))
}

/// Send a request, gated on last-known liveness. A network-level failure or
/// a 5xx marks the backend dead; any response below 500 marks it alive.
async fn dispatch(live: Liveness, request: Request) -> Result<Response, ApiError> {
    if !live.current().allows_requests() {
        return Err(ApiError::Unreachable(
            "backend marked unavailable".to_string(),
        ));
    }

    match request.send().await {
        Ok(resp) => {
            if resp.status() >= 500 {
                live.mark_dead();
            } else {
                live.mark_alive();
            }
            if resp.ok() {
                Ok(resp)
            } else {
                Err(error_from(resp).await)
            }
        }
        Err(err) => {
            live.mark_dead();
            Err(ApiError::Unreachable(err.to_string()))
        }
    }
}

async fn error_from(resp: Response) -> ApiError {
    let status = resp.status();
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_default();
    ApiError::from_status(status, detail)
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::InvalidBody(e.to_string()))
}
