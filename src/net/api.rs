#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;

use super::error::ApiError;
use super::types::{
    ApiEnvelope, CreateTodoRequest, LoginRequest, SignupRequest, UpdateTodoRequest,
};

/// Backend endpoint used when no build-time override is present.
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// HTTP method of an API operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Shape of one API request before it reaches the transport: the method,
/// the path relative to the base URL, and whether the stored session token
/// must ride along as the `Authorization` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestShape {
    pub method: Method,
    pub path: String,
    pub requires_auth: bool,
}

pub fn signup_shape() -> RequestShape {
    RequestShape {
        method: Method::Post,
        path: "/auth/signup".to_owned(),
        requires_auth: false,
    }
}

pub fn login_shape() -> RequestShape {
    RequestShape {
        method: Method::Post,
        path: "/auth/login".to_owned(),
        requires_auth: false,
    }
}

pub fn logout_shape() -> RequestShape {
    RequestShape {
        method: Method::Post,
        path: "/auth/logout".to_owned(),
        requires_auth: true,
    }
}

pub fn verify_token_shape() -> RequestShape {
    RequestShape {
        method: Method::Get,
        path: "/auth/verify".to_owned(),
        requires_auth: true,
    }
}

pub fn create_todo_shape() -> RequestShape {
    RequestShape {
        method: Method::Post,
        path: "/todos".to_owned(),
        requires_auth: true,
    }
}

pub fn list_todos_shape() -> RequestShape {
    RequestShape {
        method: Method::Get,
        path: "/todos".to_owned(),
        requires_auth: true,
    }
}

pub fn update_todo_shape(id: i64) -> RequestShape {
    RequestShape {
        method: Method::Put,
        path: format!("/todos/{id}"),
        requires_auth: true,
    }
}

pub fn delete_todo_shape(id: i64) -> RequestShape {
    RequestShape {
        method: Method::Delete,
        path: format!("/todos/{id}"),
        requires_auth: true,
    }
}

/// REST client for the todo backend.
///
/// Owns only the resolved base URL. The session token is passed in per
/// call so the session store stays the single owner of credential state.
/// Every operation returns the transport response untouched; decoding the
/// payload is the caller's business.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Resolve the base URL from the `TODO_API_URL` build-time override,
    /// falling back to the local development default.
    pub fn from_env() -> Self {
        Self::new(option_env!("TODO_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, credentials: &SignupRequest) -> Result<Response, ApiError> {
        self.send_json(&signup_shape(), None, credentials).await
    }

    /// `POST /auth/login`
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Response, ApiError> {
        self.send_json(&login_shape(), None, credentials).await
    }

    /// `POST /auth/logout`
    pub async fn logout(&self, token: &str) -> Result<Response, ApiError> {
        self.send_empty(&logout_shape(), Some(token)).await
    }

    /// `GET /auth/verify`
    pub async fn verify_token(&self, token: &str) -> Result<Response, ApiError> {
        self.send_empty(&verify_token_shape(), Some(token)).await
    }

    /// `POST /todos`
    pub async fn create_todo(
        &self,
        todo: &CreateTodoRequest,
        token: &str,
    ) -> Result<Response, ApiError> {
        self.send_json(&create_todo_shape(), Some(token), todo).await
    }

    /// `GET /todos`
    pub async fn list_todos(&self, token: &str) -> Result<Response, ApiError> {
        self.send_empty(&list_todos_shape(), Some(token)).await
    }

    /// `PUT /todos/{id}`
    pub async fn update_todo(
        &self,
        id: i64,
        todo: &UpdateTodoRequest,
        token: &str,
    ) -> Result<Response, ApiError> {
        self.send_json(&update_todo_shape(id), Some(token), todo).await
    }

    /// `DELETE /todos/{id}`
    pub async fn delete_todo(&self, id: i64, token: &str) -> Result<Response, ApiError> {
        self.send_empty(&delete_todo_shape(id), Some(token)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Start a builder for `shape`, attaching the token when the shape
    /// calls for it. The token value goes out verbatim, no scheme prefix.
    fn builder(&self, shape: &RequestShape, token: Option<&str>) -> RequestBuilder {
        let url = self.url(&shape.path);
        let builder = match shape.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        match token {
            Some(token) if shape.requires_auth => builder.header("Authorization", token),
            _ => builder,
        }
    }

    async fn send_json<B: Serialize>(
        &self,
        shape: &RequestShape,
        token: Option<&str>,
        body: &B,
    ) -> Result<Response, ApiError> {
        let response = self.builder(shape, token).json(body)?.send().await?;
        reject_error_status(response).await
    }

    async fn send_empty(
        &self,
        shape: &RequestShape,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let response = self
            .builder(shape, token)
            .header("Content-Type", "application/json")
            .build()?
            .send()
            .await?;
        reject_error_status(response).await
    }
}

/// Map a non-2xx response to [`ApiError::Status`], preferring the envelope
/// message when the body parses as one.
async fn reject_error_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
        .map_or(body, |envelope| envelope.message);
    Err(ApiError::Status { status, message })
}
