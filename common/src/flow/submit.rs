//! Classification of `POST /process` responses.
//!
//! The endpoint answers in two registers: an HTML document when the server
//! decides to redirect (expired session, plain form fallback), or JSON with
//! either an acknowledgement or an error code. The body is therefore read
//! as text first and classified here, away from any browser API.

use crate::model::process::ProcessAck;

/// Error code meaning the submitted sheet is not editable by the service
/// account; the dashboard is reloaded with a matching banner.
pub const EDIT_DENIED: &str = "no_edit";

/// Outcome of one submission attempt, derived from the HTTP ok flag and
/// the raw response body.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server answered with an HTML document; navigate to the dashboard.
    Redirect,
    /// Accepted, with an entry id to poll results for.
    Accepted { entry_id: String },
    /// Accepted, but the acknowledgement carried no entry id.
    AcceptedWithoutId,
    /// JSON error reply on a non-success status.
    Denied { error: Option<String> },
    /// The body was neither HTML nor parseable JSON.
    Malformed,
}

pub fn classify_response(ok: bool, body: &str) -> SubmitOutcome {
    if body.starts_with("<!DOCTYPE") || body.starts_with("<html") {
        return SubmitOutcome::Redirect;
    }

    match serde_json::from_str::<ProcessAck>(body) {
        Ok(ack) if !ok => SubmitOutcome::Denied { error: ack.error },
        Ok(ack) => match ack.entry_id {
            Some(entry_id) => SubmitOutcome::Accepted { entry_id },
            None => SubmitOutcome::AcceptedWithoutId,
        },
        Err(_) => SubmitOutcome::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_document_means_redirect() {
        let body = "<!DOCTYPE html><html><body>login</body></html>";
        assert_eq!(classify_response(true, body), SubmitOutcome::Redirect);
        assert_eq!(
            classify_response(false, "<html><head></head></html>"),
            SubmitOutcome::Redirect
        );
    }

    #[test]
    fn accepted_with_entry_id_starts_polling() {
        let body = r#"{"success":true,"entry_id":"ab12","message":"Processing started"}"#;
        assert_eq!(
            classify_response(true, body),
            SubmitOutcome::Accepted {
                entry_id: "ab12".to_string()
            }
        );
    }

    #[test]
    fn accepted_without_entry_id_is_distinguished() {
        let body = r#"{"success":true}"#;
        assert_eq!(classify_response(true, body), SubmitOutcome::AcceptedWithoutId);
    }

    #[test]
    fn json_error_on_failure_status_is_denied() {
        let body = r#"{"error":"no_edit"}"#;
        assert_eq!(
            classify_response(false, body),
            SubmitOutcome::Denied {
                error: Some(EDIT_DENIED.to_string())
            }
        );
    }

    #[test]
    fn unparseable_body_is_malformed() {
        assert_eq!(classify_response(true, "oops"), SubmitOutcome::Malformed);
        assert_eq!(classify_response(false, ""), SubmitOutcome::Malformed);
    }
}
