//! Configuration errors

use super::AutofetchError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AutofetchError {
    AutofetchError::ConfigInvalid {
        message: message.into(),
    }
}
