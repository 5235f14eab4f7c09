//! Projects and their posted status updates.

use backlog_sift::{AsValue, Fields, Value};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{date_value, record_value, time_value, ApiResource, ResourceRef};

/// A status update posted on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStatus {
    pub id: i64,
    pub gid: String,
    pub author: ResourceRef,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub created_by: ResourceRef,
    pub modified_at: DateTime<Utc>,
    pub resource_type: String,
    pub text: String,
}

impl ApiResource for ProjectStatus {
    const NAME: &'static str = "project status";
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "id",
        "gid",
        "author",
        "color",
        "created_at",
        "created_by",
        "modified_at",
        "resource_type",
        "text",
    ];
}

impl Fields for ProjectStatus {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "id" => Some(self.id.as_value()),
            "gid" => Some(self.gid.as_value()),
            "author" => Some(Value::Record(&self.author)),
            "color" => Some(self.color.as_value()),
            "created_at" => Some(time_value(&self.created_at)),
            "created_by" => Some(Value::Record(&self.created_by)),
            "modified_at" => Some(time_value(&self.modified_at)),
            "resource_type" => Some(self.resource_type.as_value()),
            "text" => Some(self.text.as_value()),
            _ => None,
        }
    }
}

/// A project.
///
/// Unlike tasks, the service omits several project keys outright when
/// they carry no value, so those decode through plain optional fields
/// and only the always-present keys are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub gid: String,
    pub archived: bool,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub current_status: Option<ProjectStatus>,
    pub due_date: Option<NaiveDate>,
    pub followers: Option<Vec<ResourceRef>>,
    pub layout: Option<String>,
    pub members: Option<Vec<ResourceRef>>,
    pub modified_at: DateTime<Utc>,
    pub name: String,
    pub notes: String,
    pub owner: Option<ResourceRef>,
    pub public: bool,
    pub resource_type: String,
    pub start_on: Option<NaiveDate>,
    pub team: Option<ResourceRef>,
    pub workspace: Option<ResourceRef>,
}

impl ApiResource for Project {
    const NAME: &'static str = "project";
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "id",
        "gid",
        "archived",
        "created_at",
        "modified_at",
        "name",
        "notes",
        "public",
        "resource_type",
    ];
}

impl Fields for Project {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "id" => Some(self.id.as_value()),
            "gid" => Some(self.gid.as_value()),
            "archived" => Some(self.archived.as_value()),
            "color" => Some(self.color.as_value()),
            "created_at" => Some(time_value(&self.created_at)),
            "current_status" => Some(record_value(&self.current_status)),
            "due_date" => Some(self.due_date.as_ref().map_or(Value::Null, date_value)),
            "layout" => Some(self.layout.as_value()),
            "modified_at" => Some(time_value(&self.modified_at)),
            "name" => Some(self.name.as_value()),
            "notes" => Some(self.notes.as_value()),
            "owner" => Some(record_value(&self.owner)),
            "public" => Some(self.public.as_value()),
            "resource_type" => Some(self.resource_type.as_value()),
            "start_on" => Some(self.start_on.as_ref().map_or(Value::Null, date_value)),
            "team" => Some(record_value(&self.team)),
            "workspace" => Some(record_value(&self.workspace)),
            _ => None,
        }
    }
}
