//! Registry transport and protocol errors

use super::PkgverError;

/// Longest response body excerpt carried in an error message
const BODY_EXCERPT_LEN: usize = 200;

/// Creates a request failed error
pub fn request_failed(url: impl Into<String>, reason: impl Into<String>) -> PkgverError {
    PkgverError::RequestFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates an HTTP status error, keeping only the start of the body
pub fn http_status(status: u16, body: &str) -> PkgverError {
    let body = body.trim();
    let excerpt = match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    };
    PkgverError::HttpStatus {
        status,
        body: excerpt,
    }
}

/// Creates an error from the messages of a GraphQL `errors` array
pub fn query_failed(messages: Vec<String>) -> PkgverError {
    PkgverError::QueryFailed { messages }
}

/// Creates a malformed response error
pub fn malformed(reason: impl Into<String>) -> PkgverError {
    PkgverError::MalformedResponse {
        reason: reason.into(),
    }
}

/// Creates a project not found error
pub fn project_not_found(path: impl Into<String>) -> PkgverError {
    PkgverError::ProjectNotFound { path: path.into() }
}
