use backlog::model::{ApiResource, Story, Task};
use backlog::sift::{Query, SiftError, Timestamp};
use serde_json::json;

fn person(gid: &str, name: &str) -> serde_json::Value {
    json!({"id": gid.parse::<i64>().unwrap(), "gid": gid, "name": name, "resource_type": "user"})
}

fn workspace(name: &str) -> serde_json::Value {
    json!({"id": 4004, "gid": "4004", "name": name, "resource_type": "workspace"})
}

fn task_payload(
    gid: &str,
    name: &str,
    completed: bool,
    assignee: Option<&str>,
    status: &str,
    due_on: Option<&str>,
    workspace_name: &str,
) -> serde_json::Value {
    json!({
        "id": gid.parse::<i64>().unwrap(),
        "gid": gid,
        "assignee": assignee.map(|who| person("1", who)),
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
        "workspace": workspace(workspace_name),
    })
}

fn tasks() -> Vec<Task> {
    Task::vec_from_json(json!([
        task_payload("501", "Fix importer crash", false, Some("ana"), "today", Some("2025-08-25"), "Example Inc"),
        task_payload("502", "Write release notes", false, None, "upcoming", Some("2025-08-27"), "Example Inc"),
        task_payload("503", "Close beta feedback", true, Some("bo"), "today", None, "Example Inc"),
        task_payload("504", "Plan Q4 roadmap", false, Some("ana"), "later", Some("2025-09-10"), "Skunkworks"),
    ]))
    .unwrap()
}

fn gids(selected: &[&Task]) -> Vec<String> {
    selected.iter().map(|task| task.gid.clone()).collect()
}

// ==== FILTERING ACROSS TYPED RECORDS ====

#[test]
fn open_tasks_for_today() {
    let tasks = tasks();
    let mut query = Query::new(&tasks);
    query.is_false("completed").equals("assignee_status", "today");
    assert_eq!(gids(&query.get_list().unwrap()), ["501"]);
}

#[test]
fn dotted_paths_reach_nested_records() {
    let tasks = tasks();
    let mut query = Query::new(&tasks);
    query.equals("workspace.name", "Skunkworks");
    assert_eq!(gids(&query.get_list().unwrap()), ["504"]);
}

#[test]
fn walking_through_a_null_reference_fails() {
    let tasks = tasks();
    let mut query = Query::new(&tasks);
    query.equals("assignee.name", "ana");
    let err = query.get_list().unwrap_err();
    assert!(matches!(err, SiftError::NoSuchField { .. }));
    assert!(err.to_string().contains("`name`"));
    assert!(err.to_string().contains("`assignee.name`"));
}

#[test]
fn narrowing_to_assigned_tasks_first_makes_the_path_safe() {
    let tasks = tasks();
    let mut query = Query::new(&tasks);
    query.is_set("assignee");
    query.set_view().unwrap();

    query.equals("assignee.name", "ana");
    assert_eq!(gids(&query.get_list().unwrap()), ["501", "504"]);
}

#[test]
fn due_before_cutoff() {
    let tasks = tasks();
    // 2025-08-31T00:00:00Z
    let cutoff = Timestamp::from_millis(1756598400000);
    let mut query = Query::new(&tasks);
    query.is_set("due_on").less_than("due_on", cutoff, false);
    query.sort_asc("due_on");
    assert_eq!(gids(&query.get_list().unwrap()), ["501", "502"]);
}

// ==== SORTING ====

#[test]
fn status_then_name_orders_within_buckets() {
    let tasks = tasks();
    let mut query = Query::new(&tasks);
    query.sort_asc("assignee_status").sort_asc("name");
    let sorted = query.get_list().unwrap();
    assert_eq!(gids(&sorted), ["504", "503", "501", "502"]);
}

// ==== GROUPING ====

#[test]
fn group_by_status_keeps_first_seen_order() {
    let tasks = tasks();
    let query = Query::new(&tasks);
    let groups = query.group_by("assignee_status").unwrap();
    let keys: Vec<String> = groups.keys().map(|key| key.to_string()).collect();
    assert_eq!(keys, ["today", "upcoming", "later"]);
    assert_eq!(groups.get("today").unwrap().len(), 2);
}

#[test]
fn grouping_by_a_nested_record_is_rejected() {
    let tasks = tasks();
    let query = Query::new(&tasks);
    let err = query.group_by("workspace").unwrap_err();
    assert!(matches!(err, SiftError::BadGroupKey { .. }));
}

// ==== QUERY LIFECYCLE ====

#[test]
fn peek_previews_without_consuming_filters() {
    let tasks = tasks();
    let mut query = Query::new(&tasks);
    query.equals("assignee_status", "today");
    assert_eq!(query.peek().unwrap().len(), 2);
    // the filter is still registered, so materializing applies it too
    assert_eq!(query.get_list().unwrap().len(), 2);
    // and now it is consumed
    assert_eq!(query.get_list().unwrap().len(), 4);
}

// ==== STORY TRIAGE FLOW ====

fn stories() -> Vec<Story> {
    Story::vec_from_json(json!([
        {
            "id": 1, "gid": "1",
            "created_at": "2025-08-03T14:20:00.000Z",
            "created_by": person("22", "Dev"),
            "resource_type": "story", "resource_subtype": "comment_added",
            "type": "comment", "text": "ISSUE: importer drops rows",
        },
        {
            "id": 2, "gid": "2",
            "created_at": "2025-08-03T15:00:00.000Z",
            "created_by": person("22", "Dev"),
            "resource_type": "story", "resource_subtype": "comment_added",
            "type": "comment", "text": "minor issue in the footer",
        },
        {
            "id": 3, "gid": "3",
            "created_at": "2025-08-03T16:00:00.000Z",
            "created_by": person("22", "Dev"),
            "resource_type": "story", "resource_subtype": "added_to_project",
            "type": "system", "text": "issue sweep started",
        },
    ]))
    .unwrap()
}

#[test]
fn comments_flagging_issues() {
    let stories = stories();
    let mut query = Query::new(&stories);
    query.equals("type", "comment");
    query.contains("text", "issue", false, false).unwrap();
    let flagged = query.get_list().unwrap();
    assert_eq!(flagged.len(), 2);
    assert!(flagged.iter().all(|story| story.kind == "comment"));
}

#[test]
fn issues_grouped_by_text() {
    let stories = stories();
    let mut query = Query::new(&stories);
    query.equals("type", "comment");
    let by_text = query.group_by("text").unwrap();
    assert_eq!(by_text.len(), 2);
    assert_eq!(by_text.get("ISSUE: importer drops rows").unwrap().len(), 1);
}
