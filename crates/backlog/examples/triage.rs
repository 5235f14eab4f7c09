//! # Task Triage Walkthrough
//!
//! Decodes a small batch of task payloads and runs the everyday triage
//! queries against them:
//! - today's open tasks, ordered by due date
//! - headcount per assignee status
//! - how the backlog splits across workspaces
//!
//! Run with: cargo run --example triage

use backlog::model::{ApiResource, Task};
use backlog::sift::Query;
use serde_json::json;

fn task(
    gid: &str,
    name: &str,
    completed: bool,
    assignee: Option<&str>,
    status: &str,
    due_on: Option<&str>,
    workspace: &str,
) -> serde_json::Value {
    json!({
        "id": gid.parse::<i64>().unwrap(),
        "gid": gid,
        "assignee": assignee.map(|who| json!({
            "id": 1, "gid": "1", "name": who, "resource_type": "user",
        })),
        "assignee_status": status,
        "completed": completed,
        "completed_at": null,
        "created_at": "2025-08-01T08:00:00.000Z",
        "due_at": null,
        "due_on": due_on,
        "followers": [],
        "hearted": false,
        "hearts": [],
        "liked": false,
        "likes": [],
        "memberships": [],
        "modified_at": "2025-08-02T10:00:00.000Z",
        "name": name,
        "notes": "",
        "num_hearts": 0,
        "num_likes": 0,
        "parent": null,
        "projects": [],
        "resource_type": "task",
        "resource_subtype": "default_task",
        "start_on": null,
        "tags": [],
        "workspace": {
            "id": 4004, "gid": "4004", "name": workspace, "resource_type": "workspace",
        },
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let payload = json!([
        task("501", "Fix importer crash", false, Some("ana"), "today", Some("2025-08-25"), "Example Inc"),
        task("502", "Write release notes", false, None, "upcoming", Some("2025-08-27"), "Example Inc"),
        task("503", "Close beta feedback", true, Some("bo"), "today", None, "Example Inc"),
        task("504", "Plan Q4 roadmap", false, Some("ana"), "later", Some("2025-09-10"), "Skunkworks"),
        task("505", "Rotate the API keys", false, Some("bo"), "today", Some("2025-08-22"), "Skunkworks"),
    ]);
    let tasks = Task::vec_from_json(payload)?;

    println!("== Today's open tasks, due first ==");
    let mut query = Query::new(&tasks);
    query.is_false("completed").equals("assignee_status", "today");
    query.is_set("due_on").sort_asc("due_on");
    for task in query.get_list()? {
        println!("  {} (due {})", task.name, task.due_on.map_or_else(|| "-".to_string(), |d| d.to_string()));
    }

    println!("\n== Tasks per status ==");
    for (status, bucket) in &query.group_by("assignee_status")? {
        println!("  {status}: {}", bucket.len());
    }

    println!("\n== Assigned work per person ==");
    query.is_set("assignee");
    query.set_view()?;
    for (who, bucket) in &query.group_by("assignee.name")? {
        println!("  {who}: {}", bucket.len());
    }

    println!("\n== Whole backlog per workspace ==");
    let fresh = query.new_view();
    for (workspace, bucket) in &fresh.group_by("workspace.name")? {
        println!("  {workspace}: {}", bucket.len());
    }

    Ok(())
}
