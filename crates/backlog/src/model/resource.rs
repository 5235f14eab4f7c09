//! Compact resource references and the resource-kind vocabulary.

use std::fmt;

use backlog_sift::{AsValue, Fields, Value};
use serde::{Deserialize, Serialize};

use super::ApiResource;

/// Compact reference to another record, as embedded in API payloads.
///
/// The service nests these wherever a full record would be too heavy:
/// task assignees, followers, project owners, and so on. The `gid` is
/// the stable handle for fetching the full record later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: i64,
    pub gid: String,
    pub name: String,
    pub resource_type: String,
}

impl ResourceRef {
    /// Classifies this reference by its `resource_type` tag.
    pub fn kind(&self) -> ResourceKind {
        ResourceKind::from_name(&self.resource_type)
    }
}

impl ApiResource for ResourceRef {
    const NAME: &'static str = "resource reference";
    const REQUIRED_KEYS: &'static [&'static str] = &["id", "gid", "name", "resource_type"];
}

impl Fields for ResourceRef {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "id" => Some(self.id.as_value()),
            "gid" => Some(self.gid.as_value()),
            "name" => Some(self.name.as_value()),
            "resource_type" => Some(self.resource_type.as_value()),
            _ => None,
        }
    }
}

/// The kinds of record a `resource_type` tag can name.
///
/// Payloads tag followers as `"follower"` even though the records are
/// plain users, so that spelling folds into [`ResourceKind::User`].
/// Unrecognized tags are preserved verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    User,
    Workspace,
    Task,
    Project,
    Section,
    Tag,
    Story,
    Other(String),
}

impl ResourceKind {
    /// Parses a `resource_type` tag, folding known aliases.
    pub fn from_name(name: &str) -> Self {
        match name {
            "user" | "follower" => Self::User,
            "workspace" => Self::Workspace,
            "task" => Self::Task,
            "project" => Self::Project,
            "section" => Self::Section,
            "tag" => Self::Tag,
            "story" => Self::Story,
            other => Self::Other(other.to_string()),
        }
    }

    /// Canonical tag for this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Workspace => "workspace",
            Self::Task => "task",
            Self::Project => "project",
            Self::Section => "section",
            Self::Tag => "tag",
            Self::Story => "story",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for ResourceKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_from_payload() {
        let payload = json!({
            "id": 1337,
            "gid": "1337",
            "name": "Engineering",
            "resource_type": "project",
        });
        let re = ResourceRef::from_json(payload).unwrap();
        assert_eq!(re.gid, "1337");
        assert_eq!(re.kind(), ResourceKind::Project);
    }

    #[test]
    fn reports_every_missing_key_at_once() {
        let err = ResourceRef::from_json(json!({"id": 1})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("gid"));
        assert!(message.contains("name"));
        assert!(message.contains("resource_type"));
    }

    #[test]
    fn rejects_non_object_payloads() {
        let err = ResourceRef::from_json(json!("1337")).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn follower_tag_is_a_user() {
        assert_eq!(ResourceKind::from_name("follower"), ResourceKind::User);
        assert_eq!(ResourceKind::from_name("user"), ResourceKind::User);
    }

    #[test]
    fn unknown_tags_are_preserved() {
        let kind = ResourceKind::from_name("portfolio");
        assert_eq!(kind, ResourceKind::Other("portfolio".to_string()));
        assert_eq!(kind.name(), "portfolio");
    }

    #[test]
    fn display_prints_the_canonical_tag() {
        assert_eq!(ResourceKind::Section.to_string(), "section");
        assert_eq!(ResourceKind::from_name("follower").to_string(), "user");
    }

    #[test]
    fn fields_expose_the_scalar_columns() {
        let re = ResourceRef {
            id: 7,
            gid: "7".to_string(),
            name: "Roadmap".to_string(),
            resource_type: "project".to_string(),
        };
        assert_eq!(re.field("name"), Some(Value::Str("Roadmap")));
        assert_eq!(re.field("nope"), None);
    }
}
