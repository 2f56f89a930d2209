use crate::Task;
use crate::tests::{member, task};

use chrono::NaiveDate;
use serde_json::json;

#[test]
fn test_task_decodes_offset_deadline_as_utc() {
    let task: Task = serde_json::from_value(json!({
        "id": "t1",
        "name": "Ship",
        "listId": 3,
        "indexNumber": 2,
        "deadline": "2024-05-01T20:30:00+02:00"
    }))
    .unwrap();

    let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap();
    assert_eq!(task.deadline, Some(expected));
    assert_eq!(task.index_number, 2);
    assert!(task.task_members.is_empty());
}

#[test]
fn test_task_serializes_wire_names() {
    let mut task = task("t1", 2);
    task.index_number = 4;
    task.deadline = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5);

    let value = serde_json::to_value(&task).unwrap();

    assert_eq!(value["listId"], 2);
    assert_eq!(value["indexNumber"], 4);
    assert_eq!(value["deadline"], "2024-01-02T03:04:05");
    assert!(value.get("projectId").is_none());
}

#[test]
fn test_task_is_assigned_to() {
    let mut task = task("t1", 1);
    task.task_members.push(member("dev"));

    assert!(task.is_assigned_to(&"dev".into()));
    assert!(!task.is_assigned_to(&"leader".into()));
}
