#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response envelope wrapped around every backend payload.
///
/// `data` is `null` for operations without a payload (logout), so it stays
/// optional here.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

/// Authenticated account as returned by the backend.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// A single todo item. The client renders it and passes it back; ids and
/// timestamps are server-assigned.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub completed: bool,
    pub created_at: String,
}

/// Payload of a successful login or signup.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthData {
    pub user: User,
    pub token: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateTodoRequest {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub content: String,
    pub completed: bool,
}
