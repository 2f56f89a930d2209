use crate::{Project, UserId};

use chrono::NaiveDate;
use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_full_project_payload_when_decoded_then_fields_populated() {
    // Given
    let payload = json!({
        "id": 7,
        "name": "Website",
        "leaderId": 3,
        "description": "<p>Relaunch</p>",
        "deadline": "2024-05-01T18:30:00",
        "projectMembers": [
            { "user": { "id": 3, "name": "Lee", "avatar": "https://example.test/a.png" } },
            { "user": { "id": 9, "name": "Kim" } }
        ],
        "lists": [
            { "id": 1, "name": "Backlog", "tasks": [
                { "id": "t1", "name": "Design", "listId": 1, "indexNumber": 0,
                  "deadline": null, "description": null, "taskMembers": [] }
            ]},
            { "id": 2, "name": "Planned", "tasks": [] }
        ]
    });

    // When
    let project: Project = serde_json::from_value(payload).unwrap();

    // Then
    assert_that!(project.name, eq("Website"));
    assert_eq!(project.leader_id, UserId::new("3"));
    assert_that!(project.project_members.len(), eq(2));
    assert_that!(project.project_members[1].user.avatar, none());
    assert_that!(project.lists.len(), eq(2));
    assert_that!(project.lists[0].tasks[0].name, eq("Design"));
    assert_eq!(
        project.deadline,
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
    );
}

#[test]
fn given_missing_leader_when_decoded_then_error() {
    // Given
    let payload = json!({ "id": 7, "name": "Website", "lists": [] });

    // When
    let result = serde_json::from_value::<Project>(payload);

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_malformed_deadline_when_decoded_then_error() {
    // Given
    let payload = json!({ "id": 7, "name": "Website", "leaderId": 1, "deadline": "tomorrow" });

    // When
    let result = serde_json::from_value::<Project>(payload);

    // Then
    assert_that!(result, err(anything()));
}
