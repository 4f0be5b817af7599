//! Flag store and registry errors

use super::AutofetchError;

/// Creates a state read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AutofetchError {
    AutofetchError::StateReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a state write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> AutofetchError {
    AutofetchError::StateWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
