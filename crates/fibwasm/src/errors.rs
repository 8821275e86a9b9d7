//! Error handling and exit codes.

use fibwasm_core::constants::exit_codes;
use fibwasm_core::FibError;

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::InvalidInput(_)) => exit_codes::ERROR_INVALID_INPUT,
        None => exit_codes::ERROR_GENERIC,
    }
}
