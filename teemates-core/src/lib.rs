//! TeeMates Waitlist Core
//!
//! Flow logic for the TeeMates pre-launch funnel:
//! - The "vibe check" survey that collects playing preferences, a
//!   favorite course and an email address
//! - Token-driven claim-beta and unsubscribe verification screens
//! - The magic-link sign-in entry
//!
//! Every data-bearing operation is a single call through the [`Backend`]
//! trait; flows own their state in memory for one session and leave
//! nothing behind when abandoned.

pub mod auth;
pub mod backend;
pub mod error;
pub mod memory;
pub mod questions;
pub mod submission;
pub mod supabase;
pub mod survey;
pub mod validate;
pub mod verification;

pub use auth::{AuthView, MagicLinkFlow};
pub use backend::{
    Backend, FunctionOutcome, SUPPORT_REQUESTS_TABLE, WAITLIST_SURVEYS_TABLE,
};
pub use error::{BackendError, Error, ValidationError};
pub use memory::InMemoryBackend;
pub use questions::{Question, COURSES, QUESTIONS};
pub use submission::{SupportRequest, SurveySubmission};
pub use supabase::SupabaseBackend;
pub use survey::{SurveyConfig, SurveyFlow, SurveyView};
pub use verification::{VerificationFlow, VerifyFunction, VerifyView};

/// Result type for teemates-core operations
pub type Result<T> = std::result::Result<T, Error>;
