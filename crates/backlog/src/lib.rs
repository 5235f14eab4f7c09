//! # Backlog - Typed Work-Tracker Records
//!
//! Strongly typed records for a work-tracker API, wired into the
//! [`backlog_sift`] query engine so collections can be filtered, sorted,
//! and grouped by field path without hand-rolled loops.
//!
//! ## What lives here
//!
//! - Record types ([`Task`], [`Project`], [`User`], [`Tag`], [`Story`],
//!   [`Workspace`]) that decode from API JSON via [`model::ApiResource`],
//!   validating required keys up front and reporting every missing key
//!   in a single error.
//! - [`sift::Fields`] implementations for each record, so dotted paths
//!   like `"workspace.name"` or `"current_status.text"` resolve through
//!   nested records.
//!
//! ## Quick Start
//!
//! ```
//! use backlog::model::{ApiResource, Story};
//! use backlog::sift::Query;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let stories = Story::vec_from_json(json!([
//!     {
//!         "id": 1, "gid": "1",
//!         "created_at": "2025-08-03T14:20:00.000Z",
//!         "created_by": {"id": 22, "gid": "22", "name": "Dev", "resource_type": "user"},
//!         "resource_type": "story", "resource_subtype": "comment_added",
//!         "type": "comment", "text": "ISSUE: importer drops rows",
//!     },
//!     {
//!         "id": 2, "gid": "2",
//!         "created_at": "2025-08-03T15:00:00.000Z",
//!         "created_by": {"id": 22, "gid": "22", "name": "Dev", "resource_type": "user"},
//!         "resource_type": "story", "resource_subtype": "added_to_project",
//!         "type": "system", "text": "added to Engineering",
//!     },
//! ]))?;
//!
//! let mut query = Query::new(&stories);
//! query.equals("type", "comment");
//! query.contains("text", "issue", false, false)?;
//! let issues = query.get_list()?;
//! assert_eq!(issues.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod model;

pub use backlog_sift as sift;

pub use model::{
    ApiResource, Like, Membership, ModelError, Photo, Project, ProjectStatus, ResourceKind,
    ResourceRef, Story, Tag, Task, User, Workspace,
};
