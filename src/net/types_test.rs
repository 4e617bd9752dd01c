use super::*;

// =============================================================
// User and Role
// =============================================================

#[test]
fn user_decodes_backend_shape() {
    let raw = r#"{
        "id": 42,
        "username": "alice",
        "email": "alice@example.com",
        "nickname": "Alice",
        "avatar": "",
        "school": "Example University",
        "student_id": "2023-0042",
        "role": "teacher",
        "solved": 10,
        "submitted": 25,
        "rating": 1620,
        "is_active": true,
        "created_at": "2025-01-01T00:00:00Z",
        "last_login_at": "2025-06-01T00:00:00Z"
    }"#;

    let user: User = serde_json::from_str(raw).expect("user");
    assert_eq!(user.id, 42);
    assert_eq!(user.role, Role::Teacher);
    assert!(user.is_active);
}

#[test]
fn user_round_trips_through_json() {
    let raw = r#"{"id":1,"username":"bob","email":"b@e.com","nickname":"Bob","avatar":"","school":"","student_id":"","role":"student","solved":0,"submitted":0,"rating":1200,"is_active":true,"created_at":"","last_login_at":""}"#;
    let user: User = serde_json::from_str(raw).expect("user");
    let encoded = serde_json::to_string(&user).expect("encode");
    let again: User = serde_json::from_str(&encoded).expect("decode");
    assert_eq!(user, again);
}

#[test]
fn role_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    let role: Role = serde_json::from_str("\"student\"").unwrap();
    assert_eq!(role, Role::Student);
}

#[test]
fn unknown_role_is_rejected() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

// =============================================================
// Problems
// =============================================================

#[test]
fn difficulty_uses_capitalized_wire_names() {
    let d: Difficulty = serde_json::from_str("\"Medium\"").unwrap();
    assert_eq!(d, Difficulty::Medium);
    assert!(serde_json::from_str::<Difficulty>("\"medium\"").is_err());
}

#[test]
fn problem_list_decodes_paged_envelope() {
    let raw = r#"{
        "problems": [{
            "id": 1,
            "title": "A + B",
            "description": "Add two integers.",
            "input_desc": "Two integers a and b.",
            "output_desc": "Their sum.",
            "difficulty": "Easy",
            "category": "math",
            "tags": ["intro"],
            "time_limit": 1000,
            "memory_limit": 65536,
            "submit_count": 120,
            "accepted_count": 90,
            "is_public": true,
            "author": {"id": 3, "username": "setter"},
            "created_at": "2025-02-02T00:00:00Z"
        }],
        "total": 1,
        "page": 1,
        "limit": 20
    }"#;

    let list: ProblemList = serde_json::from_str(raw).expect("problem list");
    assert_eq!(list.total, 1);
    assert_eq!(list.problems[0].difficulty, Difficulty::Easy);
    assert_eq!(list.problems[0].author["username"], "setter");
}

// =============================================================
// Submissions
// =============================================================

#[test]
fn submission_create_request_serializes_expected_fields() {
    let req = SubmissionCreateRequest {
        problem_id: 5,
        code: "fn main() {}".to_owned(),
        language: "rust".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("encode");
    assert_eq!(value["problem_id"], 5);
    assert_eq!(value["language"], "rust");
}

#[test]
fn submission_stats_envelope_unwraps() {
    let raw = r#"{"stats":{"total_submissions":30,"accepted_submissions":12,"solved_problems":9,"acceptance_rate":0.4}}"#;
    let resp: SubmissionStatsResponse = serde_json::from_str(raw).expect("stats");
    assert_eq!(resp.stats.solved_problems, 9);
}

// =============================================================
// Requests with optional fields
// =============================================================

#[test]
fn register_request_omits_absent_optionals() {
    let req = RegisterRequest {
        username: "carol".to_owned(),
        email: "c@example.com".to_owned(),
        password: "hunter22".to_owned(),
        nickname: None,
        school: None,
        student_id: None,
    };
    let value = serde_json::to_value(&req).expect("encode");
    assert!(value.get("nickname").is_none());
    assert!(value.get("school").is_none());
}

#[test]
fn update_profile_request_keeps_present_optionals() {
    let req = UpdateProfileRequest {
        nickname: Some("C".to_owned()),
        ..UpdateProfileRequest::default()
    };
    let value = serde_json::to_value(&req).expect("encode");
    assert_eq!(value["nickname"], "C");
    assert!(value.get("avatar").is_none());
}
