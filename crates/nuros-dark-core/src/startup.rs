//! Top-level failure reporting for the shell entry points.
//!
//! A shell runs its toolkit inside [`guard`], then hands the outcome to
//! [`report`], which prints the user-facing line and picks the exit status.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::Error;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Run `f`, turning a panic into an error carrying the panic message.
pub fn guard(f: impl FnOnce() -> anyhow::Result<()>) -> anyhow::Result<()> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let message = if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = payload.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "unknown panic".to_string()
            };
            Err(anyhow::anyhow!(message))
        }
    }
}

/// The line printed for a failed run.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(e @ Error::UnsupportedPlatform { .. }) => e.to_string(),
        _ => format!("Application crashed: {err}"),
    }
}

/// Print the outcome of a run and return the process exit status.
pub fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_OK,
        Err(err) => {
            log::error!("{err:?}");
            println!("{}", failure_message(&err));
            EXIT_FAILURE
        }
    }
}
