//! Fetch errors

use super::AutofetchError;

/// Creates a fetch failed error for a single resource
pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> AutofetchError {
    AutofetchError::FetchFailed {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates a pending fetch failed error listing every resource left in the queue
pub fn pending_failed<S: AsRef<str>>(names: &[S]) -> AutofetchError {
    AutofetchError::PendingFetchFailed {
        names: names
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

pub fn invalid_command(message: impl Into<String>) -> AutofetchError {
    AutofetchError::FetchCommandInvalid {
        message: message.into(),
    }
}
