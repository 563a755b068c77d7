use super::*;

// =============================================================
// Request shapes: one per documented operation
// =============================================================

#[test]
fn signup_is_unauthenticated_post() {
    let shape = signup_shape();
    assert_eq!(shape.method, Method::Post);
    assert_eq!(shape.path, "/auth/signup");
    assert!(!shape.requires_auth);
}

#[test]
fn login_is_unauthenticated_post() {
    let shape = login_shape();
    assert_eq!(shape.method, Method::Post);
    assert_eq!(shape.path, "/auth/login");
    assert!(!shape.requires_auth);
}

#[test]
fn logout_is_authenticated_post() {
    let shape = logout_shape();
    assert_eq!(shape.method, Method::Post);
    assert_eq!(shape.path, "/auth/logout");
    assert!(shape.requires_auth);
}

#[test]
fn verify_is_authenticated_get() {
    let shape = verify_token_shape();
    assert_eq!(shape.method, Method::Get);
    assert_eq!(shape.path, "/auth/verify");
    assert!(shape.requires_auth);
}

#[test]
fn todo_collection_shapes() {
    let create = create_todo_shape();
    assert_eq!(create.method, Method::Post);
    assert_eq!(create.path, "/todos");
    assert!(create.requires_auth);

    let list = list_todos_shape();
    assert_eq!(list.method, Method::Get);
    assert_eq!(list.path, "/todos");
    assert!(list.requires_auth);
}

#[test]
fn todo_item_shapes_embed_the_id() {
    let update = update_todo_shape(42);
    assert_eq!(update.method, Method::Put);
    assert_eq!(update.path, "/todos/42");
    assert!(update.requires_auth);

    let delete = delete_todo_shape(42);
    assert_eq!(delete.method, Method::Delete);
    assert_eq!(delete.path, "/todos/42");
    assert!(delete.requires_auth);
}

#[test]
fn auth_header_required_exactly_where_documented() {
    assert!(!signup_shape().requires_auth);
    assert!(!login_shape().requires_auth);
    for shape in [
        logout_shape(),
        verify_token_shape(),
        create_todo_shape(),
        list_todos_shape(),
        update_todo_shape(1),
        delete_todo_shape(1),
    ] {
        assert!(shape.requires_auth, "{} {}", shape.method.as_str(), shape.path);
    }
}

#[test]
fn method_names_match_http_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

// =============================================================
// Base URL resolution
// =============================================================

#[test]
fn new_trims_trailing_slash() {
    let client = ApiClient::new("http://localhost:8080/api/");
    assert_eq!(client.base_url(), "http://localhost:8080/api");
    assert_eq!(client.url("/todos"), "http://localhost:8080/api/todos");
}

#[test]
fn url_joins_base_and_path() {
    let client = ApiClient::new("https://example.com/api");
    assert_eq!(client.url("/todos/42"), "https://example.com/api/todos/42");
    assert_eq!(client.url("/auth/verify"), "https://example.com/api/auth/verify");
}

#[test]
fn from_env_resolves_some_http_base() {
    let client = ApiClient::from_env();
    assert!(client.base_url().starts_with("http"));
    assert!(!client.base_url().ends_with('/'));
}
