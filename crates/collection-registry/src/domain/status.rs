//! Response status envelope.
//!
//! Every RPC response carries exactly one [`Status`]. Error kinds map to codes
//! through a fixed table; anything not listed falls back to
//! [`codes::SERVER_ERROR`].

use crate::error::{ErrorKind, RegistryError};
use serde::{Deserialize, Serialize};

/// Status codes used on the RPC surface
pub mod codes {
    pub const SUCCESS: i32 = 200;
    pub const NOT_FOUND: i32 = 404;
    pub const CONFLICT: i32 = 409;
    pub const SERVER_ERROR: i32 = 500;
}

/// Reason attached to every successful response.
pub const SUCCESS_REASON: &str = "ok";

/// `(code, reason)` pair attached to a response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub code: i32,
    pub reason: String,
}

impl Status {
    pub fn ok() -> Self {
        Self {
            code: codes::SUCCESS,
            reason: SUCCESS_REASON.to_string(),
        }
    }

    /// Failure status with an explicit code; the reason is the error message.
    pub fn failure(err: &RegistryError, code: i32) -> Self {
        Self {
            code,
            reason: err.to_string(),
        }
    }

    /// Failure status using the fixed kind-to-code table.
    pub fn from_error(err: &RegistryError) -> Self {
        Self::failure(err, code_for(err.kind()))
    }

    pub fn is_ok(&self) -> bool {
        self.code == codes::SUCCESS
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::ok()
    }
}

/// Fixed mapping from error kind to status code.
pub fn code_for(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::NotFound => codes::NOT_FOUND,
        ErrorKind::UniqueConstraintViolation => codes::CONFLICT,
        _ => codes::SERVER_ERROR,
    }
}
