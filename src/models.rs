//! Frontend Models
//!
//! Data structures matching the REST API's task representation.

use serde::{Deserialize, Serialize};

/// Task data structure (matches the server's serializer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    /// The server may send `null` for tasks created without a description.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub description: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

fn null_to_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// POST body for creating a task
#[derive(Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

/// PUT body for a partial update; absent fields are omitted entirely
#[derive(Debug, Default, Serialize)]
pub struct TaskPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl<'a> TaskPatch<'a> {
    pub fn title(title: &'a str) -> Self {
        Self {
            title: Some(title),
            ..Self::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_serializes_full_body() {
        let body = NewTask {
            title: "Buy milk",
            description: "",
            completed: false,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"title":"Buy milk","description":"","completed":false}"#);
    }

    #[test]
    fn patch_omits_absent_fields() {
        let json = serde_json::to_string(&TaskPatch::completed(true)).unwrap();
        assert_eq!(json, r#"{"completed":true}"#);

        let json = serde_json::to_string(&TaskPatch::title("New title")).unwrap();
        assert_eq!(json, r#"{"title":"New title"}"#);
    }

    #[test]
    fn task_deserializes_null_description() {
        let task: Task = serde_json::from_str(
            r#"{"id":3,"title":"T","description":null,"completed":false,
                "created_at":"2024-05-01T10:00:00Z","updated_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(task.description, "");
    }

    #[test]
    fn task_deserializes_missing_description() {
        let task: Task = serde_json::from_str(
            r#"{"id":3,"title":"T","completed":true,
                "created_at":"2024-05-01T10:00:00Z","updated_at":"2024-05-02T08:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(task.description, "");
        assert!(task.completed);
    }
}
