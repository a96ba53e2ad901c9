//! Error types for the waitlist flows

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot {action} while the flow is showing the {view} view")]
    InvalidTransition {
        view: &'static str,
        action: &'static str,
    },

    #[error("expected an answer for {expected}, got one for {got}")]
    QuestionMismatch {
        expected: &'static str,
        got: String,
    },

    #[error("{option:?} is not an option for {question}")]
    UnknownOption {
        question: &'static str,
        option: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A field-level validation failure, caught before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a favorite course.")]
    MissingVenue,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Please agree to receive updates to join the Beta.")]
    ConsentRequired,
}

impl ValidationError {
    /// The form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingVenue => "fav_course",
            ValidationError::InvalidEmail => "email",
            ValidationError::ConsentRequired => "consent",
        }
    }
}

/// A failed call to the managed backend.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The call never produced a usable response (connection, timeout,
    /// malformed body).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}
