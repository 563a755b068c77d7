//! HTTP client for the todo backend.
//!
//! `api` holds the request shapes and the gloo-net transport, `types` the
//! wire contracts, and `error` the failure surface handed to pages.

pub mod api;
pub mod error;
pub mod types;
