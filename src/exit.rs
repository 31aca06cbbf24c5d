// src/exit.rs
//! Process exit codes for `biblionet`.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BiblioExit {
    /// Network built and written.
    Success = 0,
    /// Generic error (IO, config).
    Error = 1,
    /// The corpus is missing fields the socket needs, or holds malformed citations.
    InvalidInput = 2,
    /// The network was written but has no edges.
    EmptyNetwork = 3,
}

impl BiblioExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Classifies a failed run by its root cause.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        use crate::error::BiblioError;
        match err.downcast_ref::<BiblioError>() {
            Some(
                BiblioError::MissingField { .. }
                | BiblioError::FieldKind { .. }
                | BiblioError::MalformedCitation(_),
            ) => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for BiblioExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
