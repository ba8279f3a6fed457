//! Error handling and exit codes.

use strassen_core::constants::exit_codes;
use strassen_core::StrassenError;

/// Map a multiplication error to the process exit code.
pub fn handle_error(err: &StrassenError) -> i32 {
    match err {
        StrassenError::DimensionMismatch { .. } | StrassenError::InvalidConfiguration(_) => {
            exit_codes::ERROR_CONFIG
        }
        StrassenError::Cancelled => exit_codes::ERROR_CANCELED,
        StrassenError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        StrassenError::Mismatch => exit_codes::ERROR_MISMATCH,
        StrassenError::SubtaskFailure { .. }
        | StrassenError::InvalidSize { .. }
        | StrassenError::NoValidResults
        | StrassenError::Pool(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error; anything that is not a
/// `StrassenError` is generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<StrassenError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
