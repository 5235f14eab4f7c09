//! Stories, the activity feed entries attached to tasks.

use backlog_sift::{AsValue, Fields, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{time_value, ApiResource, ResourceRef};

/// One activity entry on a task, such as a comment or a system event.
///
/// The wire key `type` distinguishes comments from system entries and
/// decodes into [`kind`](Story::kind).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub gid: String,
    pub created_at: DateTime<Utc>,
    pub created_by: ResourceRef,
    pub resource_type: String,
    pub resource_subtype: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl ApiResource for Story {
    const NAME: &'static str = "story";
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "id",
        "gid",
        "created_at",
        "created_by",
        "resource_type",
        "resource_subtype",
        "type",
        "text",
    ];
}

impl Fields for Story {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "id" => Some(self.id.as_value()),
            "gid" => Some(self.gid.as_value()),
            "created_at" => Some(time_value(&self.created_at)),
            "created_by" => Some(Value::Record(&self.created_by)),
            "resource_type" => Some(self.resource_type.as_value()),
            "resource_subtype" => Some(self.resource_subtype.as_value()),
            "type" => Some(self.kind.as_value()),
            "text" => Some(self.text.as_value()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_comment() {
        let story = Story::from_json(json!({
            "id": 777,
            "gid": "777",
            "created_at": "2025-08-03T14:20:00.000Z",
            "created_by": {"id": 22, "gid": "22", "name": "Dev", "resource_type": "user"},
            "resource_type": "story",
            "resource_subtype": "comment_added",
            "type": "comment",
            "text": "ISSUE: importer drops rows with empty notes",
        }))
        .unwrap();

        assert_eq!(story.kind, "comment");
        assert_eq!(story.field("type"), Some(Value::Str("comment")));
        assert!(story.text.starts_with("ISSUE"));
    }

    #[test]
    fn wire_key_type_is_required() {
        let err = Story::from_json(json!({
            "id": 777,
            "gid": "777",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("type"));
    }
}
