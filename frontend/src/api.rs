//! Thin request layer over the dashboard HTTP API.
//!
//! Every function issues one request and maps the response into the shared
//! classification types; retry policy and user feedback stay with the
//! callers.

use common::flow::poll::{self, PollStep};
use common::flow::submit::{self, SubmitOutcome};
use common::model::entry::Entry;
use common::model::process::ProcessRequest;
use gloo_net::http::Request;
use gloo_net::Error;

pub async fn fetch_entries() -> Result<Vec<Entry>, Error> {
    let response = Request::get("/api/entries").send().await?;
    if !response.ok() {
        return Err(Error::GlooError(format!(
            "entries request failed with status {}",
            response.status()
        )));
    }
    response.json().await
}

/// Submits the job payload. The body is read as text first because the
/// endpoint may answer with an HTML document instead of JSON.
pub async fn submit_process(payload: &ProcessRequest) -> Result<SubmitOutcome, Error> {
    let response = Request::post("/process").json(payload)?.send().await?;
    let ok = response.ok();
    let body = response.text().await?;
    Ok(submit::classify_response(ok, &body))
}

/// One attempt of the bounded result poll.
pub async fn fetch_process_data(entry_id: &str) -> Result<PollStep, Error> {
    let response = Request::get(&format!("/api/process-data/{entry_id}"))
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(poll::classify_attempt(status, &body))
}

/// Fires a row action (`/resume/:id`, `/stop/:id`, `/delete/:id`). The
/// response body is not consumed.
pub async fn post_entry_action(url: &str) -> Result<(), Error> {
    Request::post(url).send().await?;
    Ok(())
}

pub async fn delete_all_entries() -> Result<(), Error> {
    let response = Request::post("/api/delete-all").send().await?;
    if !response.ok() {
        return Err(Error::GlooError(format!(
            "delete-all failed with status {}",
            response.status()
        )));
    }
    Ok(())
}
