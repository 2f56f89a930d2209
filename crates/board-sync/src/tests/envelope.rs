use crate::client::envelope::{decode_content, error_message};
use crate::SyncError;

use board_core::{ListId, Project};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

const PROJECT_JSON: &str = r#"{
    "id": 7,
    "name": "Website",
    "leaderId": "3",
    "projectMembers": [{ "user": { "id": 3, "name": "Ana" } }],
    "lists": [
        { "id": 1, "name": "Backlog", "tasks": [
            { "id": "t1", "name": "Design", "listId": 1, "indexNumber": 0,
              "deadline": "2026-03-01T12:00:00", "taskMembers": [] }
        ] },
        { "id": 2, "name": "Done", "tasks": [] }
    ]
}"#;

#[test]
fn given_wrapped_payload_when_decode_then_content_unwrapped() {
    // Given
    let body = format!(r#"{{ "message": "OK", "content": {PROJECT_JSON} }}"#);

    // When
    let project: Project = decode_content(body.as_bytes()).unwrap();

    // Then
    assert_that!(project.id.as_str(), eq("7"));
    assert_that!(project.leader_id.as_str(), eq("3"));
    assert_that!(project.lists.len(), eq(2));
    assert_eq!(project.lists[0].tasks[0].list_id, ListId(1));
    assert_that!(project.project_members[0].user.name.as_str(), eq("Ana"));
}

#[test]
fn given_bare_payload_when_decode_then_accepted() {
    // When
    let project: Project = decode_content(PROJECT_JSON.as_bytes()).unwrap();

    // Then
    assert_that!(project.name.as_str(), eq("Website"));
    assert!(project.lists[0].tasks[0].deadline.is_some());
}

#[test]
fn given_wrong_shape_when_decode_then_decode_error() {
    // Given
    let body = br#"{ "content": { "id": 7 } }"#;

    // When
    let result = decode_content::<Project>(body);

    // Then
    assert!(matches!(result, Err(SyncError::Decode { .. })));
}

#[test]
fn given_non_json_when_decode_then_decode_error() {
    // When
    let result = decode_content::<Project>(b"<html>502</html>");

    // Then
    assert!(matches!(result, Err(SyncError::Decode { .. })));
}

#[test]
fn given_error_body_when_error_message_then_message_returned() {
    // When
    let message = error_message(br#"{ "message": "Task not found", "content": null }"#);

    // Then
    assert_that!(message, some(eq("Task not found")));
}

#[test]
fn given_blank_or_missing_message_when_error_message_then_none() {
    assert_that!(error_message(br#"{ "message": "  " }"#), none());
    assert_that!(error_message(br#"{ "content": null }"#), none());
    assert_that!(error_message(b"Bad Gateway"), none());
}
