//! Defines the app level error type and its conversion to JSON responses.
use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur while dispatching a request to a controller.
///
/// Controllers return this type too, so it also covers the common failures of
/// the handlers behind the routes.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body could not be parsed as JSON.
    #[error("could not parse the request body as JSON: {0}")]
    InvalidJson(String),

    /// The request body could not be read.
    #[error("could not read the request body: {0}")]
    InvalidBody(String),

    /// The request body is larger than the configured body limit.
    #[error("the request body is too large: {0}")]
    PayloadTooLarge(String),

    /// The path parameters could not be extracted from the request path.
    #[error("invalid path parameters: {0}")]
    InvalidPath(String),

    /// The query string could not be decoded.
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// A required path or query parameter was not in the request.
    #[error("missing parameter \"{0}\"")]
    MissingParameter(String),

    /// A path or query parameter could not be parsed into the expected type.
    #[error("invalid value \"{value}\" for parameter \"{name}\"")]
    InvalidParameter {
        /// The name of the parameter.
        name: String,
        /// The value that could not be parsed.
        value: String,
    },

    /// The session is missing or no longer valid.
    #[error("the session is missing or has expired")]
    Unauthorized,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The route exists but no controller provides the handler.
    ///
    /// Holds the name of the controller method.
    #[error("the handler \"{0}\" is not implemented")]
    NotImplemented(&'static str),

    /// An unexpected error occurred in a controller.
    ///
    /// The error string should only be logged for debugging on the server.
    /// The client receives a general internal server error message.
    #[error("an unexpected error occurred: {0}")]
    Internal(String),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_)
            | Error::InvalidBody(_)
            | Error::InvalidPath(_)
            | Error::InvalidQuery(_)
            | Error::MissingParameter(_)
            | Error::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BytesRejection> for Error {
    fn from(rejection: BytesRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge(rejection.body_text()),
            _ => Error::InvalidBody(rejection.body_text()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let body = match self {
            Error::NotImplemented(handler) => {
                tracing::warn!("No controller provides the handler {handler}");
                json!({
                    "error": message,
                    "handler": handler,
                })
            }
            Error::Internal(description) => {
                tracing::error!("An unexpected error occurred: {description}");
                json!({ "error": "Internal server error" })
            }
            _ => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}
