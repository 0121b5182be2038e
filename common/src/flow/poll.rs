//! Per-attempt classification for the bounded result poller.
//!
//! `GET /api/process-data/:id` answers 404 while the job is still running,
//! then `{"success": false}` until the data is complete, then
//! `{"success": true, "data": {...}}`. Only the last shape stops the loop;
//! everything else is retried until the attempt budget runs out.

use crate::model::process::{ProcessDataResponse, ProcessedResult};

/// Maximum number of attempts before the poller gives up.
pub const MAX_ATTEMPTS: u32 = 30;
/// Delay between attempts, in milliseconds.
pub const RETRY_DELAY_MS: u32 = 4_000;

/// What one polling attempt resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum PollStep {
    /// 404: the data does not exist yet. Retried silently.
    NotReady,
    /// Non-success HTTP status other than 404. Logged and retried.
    Failed(u16),
    /// The envelope arrived with `success: false` or without data. Logged
    /// and retried.
    Incomplete,
    /// The body was not a valid envelope. Logged and retried.
    Malformed,
    /// Processing finished; stop and render.
    Ready(ProcessedResult),
}

pub fn classify_attempt(status: u16, body: &str) -> PollStep {
    if status == 404 {
        return PollStep::NotReady;
    }
    if !(200..300).contains(&status) {
        return PollStep::Failed(status);
    }

    match serde_json::from_str::<ProcessDataResponse>(body) {
        Ok(ProcessDataResponse {
            success: true,
            data: Some(result),
        }) => PollStep::Ready(result),
        Ok(_) => PollStep::Incomplete,
        Err(_) => PollStep::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_means_not_ready() {
        assert_eq!(classify_attempt(404, ""), PollStep::NotReady);
    }

    #[test]
    fn other_failure_statuses_are_reported() {
        assert_eq!(classify_attempt(500, ""), PollStep::Failed(500));
        assert_eq!(classify_attempt(401, r#"{"error":"Unauthorized"}"#), PollStep::Failed(401));
    }

    #[test]
    fn unsuccessful_envelope_keeps_polling() {
        assert_eq!(
            classify_attempt(200, r#"{"success":false}"#),
            PollStep::Incomplete
        );
        assert_eq!(
            classify_attempt(200, r#"{"success":true}"#),
            PollStep::Incomplete
        );
    }

    #[test]
    fn garbage_body_keeps_polling() {
        assert_eq!(classify_attempt(200, "<!DOCTYPE html>"), PollStep::Malformed);
    }

    #[test]
    fn only_the_final_response_is_ready() {
        let sequence = [
            (404, "".to_string()),
            (404, "".to_string()),
            (200, r#"{"success":false}"#.to_string()),
            (
                200,
                r#"{"success":true,"data":{"entry_name":"Leads Q3","job_levels":["VP"],
                    "job_functions":["Finance"],"keywords":["fraud"],
                    "geo_locations":["US"],"processed_at":"2024-05-01T10:00:00Z"}}"#
                    .to_string(),
            ),
        ];

        let mut ready_at = None;
        for (attempt, (status, body)) in sequence.iter().enumerate() {
            match classify_attempt(*status, body) {
                PollStep::Ready(result) => {
                    assert_eq!(result.entry_name, "Leads Q3");
                    ready_at = Some(attempt);
                }
                step => assert!(!matches!(step, PollStep::Ready(_))),
            }
        }
        assert_eq!(ready_at, Some(sequence.len() - 1));
    }
}
