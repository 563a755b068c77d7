use thiserror::Error;

/// Failure surface of the API client.
///
/// Both variants carry the transport outcome through untranslated: no
/// retries, no reinterpretation. Pages decide how to present them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    /// The server answered with a non-success status. `message` is the
    /// envelope message when the body parses, otherwise the raw body.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}
