use contracts::usecases::u001_generate_table::{GenerateRequest, GENERATE_PATH};
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use std::future::Future;

use super::error::GenerateError;
use crate::shared::api_utils::api_url;

/// Default client-side deadline for one generate call
pub const DEFAULT_TIMEOUT_MS: u32 = 60_000;

/// `0` means "no explicit deadline" and falls back to the default
pub fn effective_timeout(timeout_ms: u32) -> u32 {
    if timeout_ms == 0 {
        DEFAULT_TIMEOUT_MS
    } else {
        timeout_ms
    }
}

pub const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";

/// JSON body for POST /api/generate
pub fn request_body(model: &str, rows: f64) -> Result<String, GenerateError> {
    let request = GenerateRequest::new(model, rows).ok_or(GenerateError::InvalidInput)?;
    serde_json::to_string(&request).map_err(|_| GenerateError::InvalidInput)
}

/// Classify a completed HTTP exchange.
///
/// Only the status and the JSON syntax are checked here, the payload shape is
/// the caller's business.
pub fn interpret_response(status: u16, body: Option<&str>) -> Result<Value, GenerateError> {
    if !(200..300).contains(&status) {
        return Err(GenerateError::Http {
            status,
            body: body.map(str::to_string),
        });
    }

    let text = body.ok_or(GenerateError::MalformedJson)?;
    serde_json::from_str(text).map_err(|_| GenerateError::MalformedJson)
}

/// Race `request` against `delay`. Exactly one outcome is produced: the losing
/// future is dropped without being polled again.
pub async fn with_timeout<T, F, D>(request: F, delay: D, timeout_ms: u32) -> Result<T, GenerateError>
where
    F: Future<Output = Result<T, GenerateError>>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(request);
    futures::pin_mut!(delay);

    match select(request, delay).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(GenerateError::Timeout { ms: timeout_ms }),
    }
}

/// POST the request and wait for the table payload.
///
/// On timeout the underlying fetch is aborted. No retries. A `timeout_ms`
/// of `0` uses `DEFAULT_TIMEOUT_MS`.
pub async fn generate(model: &str, rows: f64, timeout_ms: u32) -> Result<Value, GenerateError> {
    let timeout_ms = effective_timeout(timeout_ms);
    let body = request_body(model, rows)?;

    let abort = web_sys::AbortController::new().ok();
    let signal = abort.as_ref().map(|c| c.signal());

    let send = async {
        let response = Request::post(&api_url(GENERATE_PATH))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .abort_signal(signal.as_ref())
            .body(body)
            .map_err(|e| GenerateError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.ok();
        interpret_response(status, text.as_deref())
    };

    let outcome = with_timeout(send, TimeoutFuture::new(timeout_ms), timeout_ms).await;

    if let Err(GenerateError::Timeout { .. }) = &outcome {
        if let Some(controller) = &abort {
            controller.abort();
        }
    }

    outcome
}
