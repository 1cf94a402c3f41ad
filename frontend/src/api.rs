use std::time::Duration;

use gloo_net::http::{Request, Response};
use leptos::leptos_dom::helpers::set_timeout_with_handle;
use serde::{Serialize, de::DeserializeOwned};
use wotd_api::{PageResult, StatusResponse};
use wotd_core::{Cursor, PageError};

use crate::error::AppError;

/// Fetches the page of words older than `cursor`. The request is aborted and
/// reported as [`PageError::Timeout`] once `timeout` elapses.
pub async fn query_previous(
    url: &str,
    cursor: &Cursor,
    timeout: Duration,
) -> Result<PageResult, PageError> {
    let controller = web_sys::AbortController::new()
        .map_err(|e| PageError::Transport(AppError::from(e).to_string()))?;
    let signal = controller.signal();
    let timer = set_timeout_with_handle(move || controller.abort(), timeout)
        .map_err(|e| PageError::Transport(AppError::from(e).to_string()))?;

    let outcome = async {
        let resp = Request::get(url)
            .query([("date", cursor.as_str())])
            .header("accept", "application/json")
            .abort_signal(Some(&signal))
            .send()
            .await
            .map_err(|e| PageError::Transport(e.to_string()))?;

        if !resp.ok() {
            let message = resp
                .json::<StatusResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| resp.status_text());
            return Err(PageError::Status {
                status: resp.status(),
                message,
            });
        }

        resp.json::<PageResult>()
            .await
            .map_err(|e| PageError::Decode(e.to_string()))
    }
    .await;
    timer.clear();

    if outcome.is_err() && signal.aborted() {
        return Err(PageError::Timeout);
    }
    outcome
}

pub async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, AppError> {
    let resp = Request::get(&url)
        .header("accept", "application/json")
        .send()
        .await?;
    if !resp.ok() {
        return Err(AppError::Status(resp.status()));
    }
    Ok(resp.json().await?)
}

pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, AppError> {
    Ok(Request::post(url)
        .header("accept", "application/json")
        .json(body)?
        .send()
        .await?)
}

/// Posts a form and accepts only a 2xx answer whose body says
/// `"status": "success"`.
pub async fn post_for_status<B: Serialize>(url: &str, body: &B) -> Result<(), AppError> {
    let resp = post_json(url, body).await?;
    let status = resp.json::<StatusResponse>().await.unwrap_or_default();
    if resp.ok() && status.is_success() {
        Ok(())
    } else {
        leptos::logging::warn!("{} answered {}: {:?}", url, resp.status(), status.error);
        Err(AppError::Rejected(status.error_message().to_owned()))
    }
}
