//! Tasks, the unit of work everything else hangs off.

use backlog_sift::{AsValue, Fields, Value};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{date_value, record_value, time_value, ApiResource, ResourceRef};

/// A like (or legacy heart) left on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub gid: String,
    pub user: ResourceRef,
}

/// A task's placement inside one project, optionally pinned to a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub project: Option<ResourceRef>,
    pub section: Option<ResourceRef>,
}

impl Fields for Membership {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "project" => Some(record_value(&self.project)),
            "section" => Some(record_value(&self.section)),
            _ => None,
        }
    }
}

/// A task.
///
/// Payloads carry every key below even when the value is null, so the
/// required-key check still applies to the nullable ones. `due_at` is an
/// exact instant while `due_on` and `start_on` are calendar dates; the
/// date pair surfaces to queries as the timestamp of UTC midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub gid: String,
    pub assignee: Option<ResourceRef>,
    pub assignee_status: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub due_at: Option<DateTime<Utc>>,
    pub due_on: Option<NaiveDate>,
    pub followers: Vec<ResourceRef>,
    pub hearted: bool,
    pub hearts: Vec<Like>,
    pub liked: bool,
    pub likes: Vec<Like>,
    pub memberships: Vec<Membership>,
    pub modified_at: DateTime<Utc>,
    pub name: String,
    pub notes: String,
    pub num_hearts: i64,
    pub num_likes: i64,
    pub parent: Option<ResourceRef>,
    pub projects: Vec<ResourceRef>,
    pub resource_type: String,
    pub resource_subtype: String,
    pub start_on: Option<NaiveDate>,
    pub tags: Vec<ResourceRef>,
    pub workspace: ResourceRef,
}

impl ApiResource for Task {
    const NAME: &'static str = "task";
    const REQUIRED_KEYS: &'static [&'static str] = &[
        "id",
        "gid",
        "assignee",
        "assignee_status",
        "completed",
        "completed_at",
        "created_at",
        "due_at",
        "due_on",
        "followers",
        "hearted",
        "hearts",
        "liked",
        "likes",
        "memberships",
        "modified_at",
        "name",
        "notes",
        "num_hearts",
        "num_likes",
        "parent",
        "projects",
        "resource_type",
        "resource_subtype",
        "start_on",
        "tags",
        "workspace",
    ];
}

impl Fields for Task {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "id" => Some(self.id.as_value()),
            "gid" => Some(self.gid.as_value()),
            "assignee" => Some(record_value(&self.assignee)),
            "assignee_status" => Some(self.assignee_status.as_value()),
            "completed" => Some(self.completed.as_value()),
            "completed_at" => Some(self.completed_at.as_ref().map_or(Value::Null, time_value)),
            "created_at" => Some(time_value(&self.created_at)),
            "due_at" => Some(self.due_at.as_ref().map_or(Value::Null, time_value)),
            "due_on" => Some(self.due_on.as_ref().map_or(Value::Null, date_value)),
            "hearted" => Some(self.hearted.as_value()),
            "liked" => Some(self.liked.as_value()),
            "modified_at" => Some(time_value(&self.modified_at)),
            "name" => Some(self.name.as_value()),
            "notes" => Some(self.notes.as_value()),
            "num_hearts" => Some(self.num_hearts.as_value()),
            "num_likes" => Some(self.num_likes.as_value()),
            "parent" => Some(record_value(&self.parent)),
            "resource_type" => Some(self.resource_type.as_value()),
            "resource_subtype" => Some(self.resource_subtype.as_value()),
            "start_on" => Some(self.start_on.as_ref().map_or(Value::Null, date_value)),
            "workspace" => Some(Value::Record(&self.workspace)),
            _ => None,
        }
    }
}
