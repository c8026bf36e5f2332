//! Exit codes for the genui binary

use genui_common::GenUiError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when `resolve` finds no mini-app for the prompt
pub const EXIT_NO_MATCH: i32 = 3;

/// Map an error chain to an exit code, preferring the library's own code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<GenUiError>())
        .map(GenUiError::exit_code)
        .unwrap_or(EXIT_GENERAL_ERROR)
}
