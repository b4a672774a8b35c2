use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Wire shape for catalog and cart failures: a machine-readable name plus a
/// code-style message ("product.not_found") the storefront views map to
/// user-facing copy.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

/// Maps a domain error onto the status and payload it travels the wire as.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
