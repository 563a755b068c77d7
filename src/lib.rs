//! # todo-client
//!
//! Leptos + WASM frontend for the todo application. Login and signup
//! screens, a session-gated navigation guard, and a REST client for the
//! backend's auth and todo endpoints.
//!
//! This crate contains pages, components, application state, the route
//! table with its guard policy, and the HTTP client. Rendering is pure
//! client-side; the backend is reached only through [`net::api::ApiClient`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
