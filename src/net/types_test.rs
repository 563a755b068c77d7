use super::*;

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn envelope_decodes_auth_payload() {
    let json = r#"{
        "status": "s",
        "message": "Login successful",
        "data": {
            "user": {"id": 7, "username": "ana", "email": "ana@example.com"},
            "token": "abc123"
        }
    }"#;
    let env: ApiEnvelope<AuthData> = serde_json::from_str(json).expect("auth envelope");
    assert_eq!(env.status, "s");
    let data = env.data.expect("data");
    assert_eq!(data.token, "abc123");
    assert_eq!(
        data.user,
        User {
            id: 7,
            username: "ana".to_owned(),
            email: "ana@example.com".to_owned(),
        }
    );
}

#[test]
fn envelope_tolerates_null_and_missing_data() {
    let with_null = r#"{"status":"s","message":"Logout successful","data":null}"#;
    let env: ApiEnvelope<AuthData> = serde_json::from_str(with_null).expect("null data");
    assert!(env.data.is_none());

    let without = r#"{"status":"e","message":"Invalid token"}"#;
    let env: ApiEnvelope<AuthData> = serde_json::from_str(without).expect("missing data");
    assert!(env.data.is_none());
    assert_eq!(env.message, "Invalid token");
}

#[test]
fn todo_decodes_backend_field_names() {
    let json = r#"{
        "id": 42,
        "user_id": 7,
        "title": "x",
        "content": "body",
        "completed": false,
        "created_at": "2024-05-01T12:00:00Z"
    }"#;
    let todo: Todo = serde_json::from_str(json).expect("todo");
    assert_eq!(todo.id, 42);
    assert_eq!(todo.user_id, 7);
    assert!(!todo.completed);
    assert_eq!(todo.created_at, "2024-05-01T12:00:00Z");
}

// =============================================================
// Request payload encoding
// =============================================================

#[test]
fn signup_request_serializes_all_credentials() {
    let req = SignupRequest {
        username: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({"username": "ana", "email": "ana@example.com", "password": "hunter2"})
    );
}

#[test]
fn update_request_serializes_completed_flag() {
    let req = UpdateTodoRequest {
        title: "x".to_owned(),
        content: String::new(),
        completed: true,
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value["completed"], serde_json::json!(true));
    assert_eq!(value["title"], serde_json::json!("x"));
}
