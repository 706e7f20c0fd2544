//! Rendering Helpers
//!
//! Pure functions shared by the task components: title validation,
//! timestamp display and the "modified" annotation check.

use chrono::DateTime;

use crate::models::Task;

/// Trim a title typed by the user; `None` when nothing useful remains.
///
/// Tasks with a blank title are rejected locally and never sent to the
/// server.
pub fn validate_title(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Format a server timestamp as `dd/mm/YYYY HH:MM`.
///
/// Unparsable input is shown verbatim rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Label for the task counter under the list.
pub fn task_count_label(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}

/// Whether the task has been edited since creation.
///
/// Compared as parsed instants when both timestamps parse, raw strings
/// otherwise.
pub fn was_modified(task: &Task) -> bool {
    match (
        DateTime::parse_from_rfc3339(&task.created_at),
        DateTime::parse_from_rfc3339(&task.updated_at),
    ) {
        (Ok(created), Ok(updated)) => updated != created,
        _ => task.updated_at != task.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(created_at: &str, updated_at: &str) -> Task {
        Task {
            id: 1,
            title: "T".to_string(),
            description: String::new(),
            completed: false,
            created_at: created_at.to_string(),
            updated_at: updated_at.to_string(),
        }
    }

    #[test]
    fn blank_titles_are_rejected() {
        assert_eq!(validate_title(""), None);
        assert_eq!(validate_title("   "), None);
        assert_eq!(validate_title("\t\n"), None);
    }

    #[test]
    fn titles_are_trimmed() {
        assert_eq!(validate_title("  Buy milk  "), Some("Buy milk"));
    }

    #[test]
    fn count_label_is_pluralized() {
        assert_eq!(task_count_label(0), "0 tasks");
        assert_eq!(task_count_label(1), "1 task");
        assert_eq!(task_count_label(2), "2 tasks");
    }

    #[test]
    fn timestamps_use_fixed_pattern() {
        assert_eq!(format_timestamp("2024-05-01T09:05:00Z"), "01/05/2024 09:05");
        assert_eq!(
            format_timestamp("2024-12-31T23:59:59.123456+00:00"),
            "31/12/2024 23:59"
        );
    }

    #[test]
    fn unparsable_timestamp_is_shown_verbatim() {
        assert_eq!(format_timestamp("not a date"), "not a date");
    }

    #[test]
    fn modified_only_when_timestamps_differ() {
        assert!(!was_modified(&task(
            "2024-05-01T10:00:00Z",
            "2024-05-01T10:00:00Z"
        )));
        assert!(was_modified(&task(
            "2024-05-01T10:00:00Z",
            "2024-05-02T08:30:00Z"
        )));
    }

    #[test]
    fn equal_instants_in_different_offsets_are_unmodified() {
        assert!(!was_modified(&task(
            "2024-05-01T10:00:00+00:00",
            "2024-05-01T12:00:00+02:00"
        )));
    }
}
