//! Manifest errors

use super::AutofetchError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> AutofetchError {
    AutofetchError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AutofetchError {
    AutofetchError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AutofetchError {
    AutofetchError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid(message: impl Into<String>) -> AutofetchError {
    AutofetchError::ManifestInvalid {
        message: message.into(),
    }
}

pub fn not_declared(name: impl Into<String>) -> AutofetchError {
    AutofetchError::ResourceNotDeclared { name: name.into() }
}

pub fn not_docker(name: impl Into<String>, kind: impl Into<String>) -> AutofetchError {
    AutofetchError::ResourceNotDocker {
        name: name.into(),
        kind: kind.into(),
    }
}
