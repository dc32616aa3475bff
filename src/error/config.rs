//! Configuration errors

use super::PkgverError;

/// Creates a missing configuration error naming every absent key
pub fn missing<I, S>(keys: I) -> PkgverError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    PkgverError::ConfigMissing {
        keys: keys.into_iter().map(Into::into).collect(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PkgverError {
    PkgverError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PkgverError {
    PkgverError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> PkgverError {
    PkgverError::ConfigInvalid {
        message: message.into(),
    }
}
