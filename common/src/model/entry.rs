//! A processing entry as returned by `GET /api/entries`.
//!
//! One entry describes one submitted sheet-processing job. The table view
//! derives both the status badge class and the available row action from
//! the entry status, so those mappings live here next to the model.

use serde::{Deserialize, Serialize};

/// One row of the entries table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub url: String,
    pub status: EntryStatus,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Lifecycle status of an entry. The backend sends free-form strings;
/// the four canonical values get their own variants and anything else is
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryStatus {
    InProgress,
    Done,
    Failed,
    Stopped,
    Other(String),
}

/// The context-sensitive control shown next to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    Resume,
    Stop,
    None,
}

/// Placeholder text of the empty entries table.
pub const EMPTY_TABLE_TEXT: &str = "No sheets processed yet.";

/// Row model of the entries table: an empty list renders exactly one
/// placeholder row, anything else renders one row per entry.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRows<'a> {
    Placeholder,
    Entries(&'a [Entry]),
}

pub fn table_rows(entries: &[Entry]) -> TableRows<'_> {
    if entries.is_empty() {
        TableRows::Placeholder
    } else {
        TableRows::Entries(entries)
    }
}

impl From<String> for EntryStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "In Progress" => EntryStatus::InProgress,
            "Done" => EntryStatus::Done,
            "Failed" => EntryStatus::Failed,
            "Stopped" => EntryStatus::Stopped,
            _ => EntryStatus::Other(value),
        }
    }
}

impl From<EntryStatus> for String {
    fn from(status: EntryStatus) -> Self {
        status.label().to_string()
    }
}

impl EntryStatus {
    pub fn label(&self) -> &str {
        match self {
            EntryStatus::InProgress => "In Progress",
            EntryStatus::Done => "Done",
            EntryStatus::Failed => "Failed",
            EntryStatus::Stopped => "Stopped",
            EntryStatus::Other(raw) => raw,
        }
    }

    /// CSS class of the status badge. Unknown statuses fall back to the
    /// in-progress style, same as the original dashboard.
    pub fn badge_class(&self) -> &'static str {
        match self {
            EntryStatus::Done => "status-done",
            EntryStatus::Failed => "status-failed",
            EntryStatus::Stopped => "status-stopped",
            _ => "status-progress",
        }
    }

    /// Which row control applies: stopped and failed entries can be resumed,
    /// in-progress entries can be stopped, everything else gets no control.
    pub fn action(&self) -> EntryAction {
        match self {
            EntryStatus::Stopped | EntryStatus::Failed => EntryAction::Resume,
            EntryStatus::InProgress => EntryAction::Stop,
            _ => EntryAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_statuses_round_trip() {
        for raw in ["In Progress", "Done", "Failed", "Stopped"] {
            let status = EntryStatus::from(raw.to_string());
            assert_eq!(status.label(), raw);
            assert!(!matches!(status, EntryStatus::Other(_)));
        }
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let status = EntryStatus::from("Queued".to_string());
        assert_eq!(status, EntryStatus::Other("Queued".to_string()));
        assert_eq!(status.label(), "Queued");
        assert_eq!(status.action(), EntryAction::None);
        assert_eq!(status.badge_class(), "status-progress");
    }

    #[test]
    fn action_mapping_follows_status() {
        assert_eq!(EntryStatus::InProgress.action(), EntryAction::Stop);
        assert_eq!(EntryStatus::Stopped.action(), EntryAction::Resume);
        assert_eq!(EntryStatus::Failed.action(), EntryAction::Resume);
        assert_eq!(EntryStatus::Done.action(), EntryAction::None);
    }

    #[test]
    fn badge_classes() {
        assert_eq!(EntryStatus::Done.badge_class(), "status-done");
        assert_eq!(EntryStatus::Failed.badge_class(), "status-failed");
        assert_eq!(EntryStatus::Stopped.badge_class(), "status-stopped");
        assert_eq!(EntryStatus::InProgress.badge_class(), "status-progress");
    }

    #[test]
    fn empty_list_renders_a_single_placeholder_row() {
        assert_eq!(table_rows(&[]), TableRows::Placeholder);
    }

    #[test]
    fn non_empty_list_renders_one_row_per_entry() {
        let entries = vec![
            Entry {
                id: "a1".into(),
                name: "Leads Q3".into(),
                url: "https://docs.example.com/sheet/a1".into(),
                status: EntryStatus::Done,
                error_message: None,
            },
            Entry {
                id: "b2".into(),
                name: "Leads Q4".into(),
                url: "https://docs.example.com/sheet/b2".into(),
                status: EntryStatus::InProgress,
                error_message: None,
            },
        ];
        match table_rows(&entries) {
            TableRows::Entries(rows) => assert_eq!(rows.len(), 2),
            TableRows::Placeholder => panic!("expected entry rows"),
        }
    }

    #[test]
    fn entry_deserializes_from_api_shape() {
        let entry: Entry = serde_json::from_str(
            r#"{
                "id": "ab12",
                "name": "Leads Q3",
                "url": "https://docs.example.com/sheet/ab12",
                "status": "In Progress",
                "error_message": null
            }"#,
        )
        .unwrap();
        assert_eq!(entry.status, EntryStatus::InProgress);
        assert_eq!(entry.error_message, None);
    }
}
