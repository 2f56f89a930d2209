use crate::{ListId, ProjectId, TaskId, UserId};

#[test]
fn test_string_id_decodes() {
    let id: TaskId = serde_json::from_str("\"64f1c0ffee\"").unwrap();
    assert_eq!(id.as_str(), "64f1c0ffee");
}

#[test]
fn test_numeric_id_decodes_to_string() {
    let id: ProjectId = serde_json::from_str("42").unwrap();
    assert_eq!(id, ProjectId::new("42"));
}

#[test]
fn test_id_serializes_as_plain_string() {
    let id = UserId::new("u-1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"u-1\"");
}

#[test]
fn test_non_scalar_id_is_rejected() {
    let result: Result<TaskId, _> = serde_json::from_str("{\"id\": 1}");
    assert!(result.is_err());
}

#[test]
fn test_list_id_display() {
    assert_eq!(ListId(3).to_string(), "3");
    let decoded: ListId = serde_json::from_str("2").unwrap();
    assert_eq!(decoded, ListId(2));
}
