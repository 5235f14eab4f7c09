//! Tags that label tasks within a workspace.

use backlog_sift::{AsValue, Fields, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{time_value, ApiResource, ResourceRef};

/// A tag.
///
/// The `color` key is always present but null for tags never assigned
/// a swatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub gid: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub followers: Vec<ResourceRef>,
    pub name: String,
    pub notes: String,
    pub resource_type: String,
    pub workspace: ResourceRef,
}

impl ApiResource for Tag {
    const NAME: &'static str = "tag";
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "id",
        "gid",
        "color",
        "created_at",
        "followers",
        "name",
        "notes",
        "resource_type",
        "workspace",
    ];
}

impl Fields for Tag {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "id" => Some(self.id.as_value()),
            "gid" => Some(self.gid.as_value()),
            "color" => Some(self.color.as_value()),
            "created_at" => Some(time_value(&self.created_at)),
            "name" => Some(self.name.as_value()),
            "notes" => Some(self.notes.as_value()),
            "resource_type" => Some(self.resource_type.as_value()),
            "workspace" => Some(Value::Record(&self.workspace)),
            _ => None,
        }
    }
}
