//! Token claim and unsubscribe verification flows
//!
//! Both screens behave identically: on mount they read a `token` query
//! parameter, invoke one named edge function with it, and settle into a
//! terminal success or failure view. The only way to re-run a
//! verification is to load the page again with a (possibly different)
//! token, which builds a fresh flow.

use serde_json::json;
use url::form_urlencoded;

use crate::backend::Backend;

/// Shown when the flow starts without a token. No call is made.
pub const MISSING_TOKEN_MESSAGE: &str = "Missing verification token.";

/// Fallback when the call itself fails without a usable message.
const CONNECTION_FAILED_MESSAGE: &str = "Connection failed.";

/// Which edge function a verification screen drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyFunction {
    /// Confirm a reserved beta slot.
    ClaimBeta,
    /// Remove the address behind the token from email updates.
    Unsubscribe,
}

impl VerifyFunction {
    /// Name of the remote function to invoke.
    pub fn name(&self) -> &'static str {
        match self {
            VerifyFunction::ClaimBeta => "claim-beta",
            VerifyFunction::Unsubscribe => "unsubscribe",
        }
    }

    /// Failure message used when the function reports `ok: false`
    /// without an error of its own.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            VerifyFunction::ClaimBeta => "Unable to claim spot.",
            VerifyFunction::Unsubscribe => "Failed to unsubscribe.",
        }
    }
}

/// Which screen a verification flow is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyView {
    /// The call is (about to be) in flight.
    Verifying,
    /// Terminal. The token was accepted.
    Success,
    /// Terminal. Carries the human-readable reason.
    Failure { message: String },
}

/// State machine for one claim/unsubscribe page load.
pub struct VerificationFlow<B: Backend> {
    backend: B,
    function: VerifyFunction,
    token: Option<String>,
    view: VerifyView,
}

impl<B: Backend> VerificationFlow<B> {
    /// Create a flow with an already-extracted token.
    pub fn new(backend: B, function: VerifyFunction, token: Option<String>) -> Self {
        Self {
            backend,
            function,
            token,
            view: VerifyView::Verifying,
        }
    }

    /// Create a flow from the page's raw query string.
    ///
    /// Only the `token` parameter is consumed. An empty value counts as
    /// missing, same as an absent parameter.
    pub fn from_query(backend: B, function: VerifyFunction, query: &str) -> Self {
        let token = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.into_owned())
            .filter(|token| !token.is_empty());
        Self::new(backend, function, token)
    }

    pub fn function(&self) -> VerifyFunction {
        self.function
    }

    pub fn view(&self) -> &VerifyView {
        &self.view
    }

    /// Run the verification once and settle into a terminal view.
    ///
    /// Calling this again after the flow has settled does nothing and
    /// returns the settled view; the token read at construction stays
    /// fixed for the lifetime of the flow.
    pub async fn verify(&mut self) -> &VerifyView {
        if self.view != VerifyView::Verifying {
            return &self.view;
        }

        let Some(token) = self.token.clone() else {
            self.view = VerifyView::Failure {
                message: MISSING_TOKEN_MESSAGE.to_string(),
            };
            return &self.view;
        };

        let outcome = self
            .backend
            .invoke_function(self.function.name(), json!({ "token": token }))
            .await;

        self.view = match outcome {
            Err(err) => {
                tracing::warn!(function = self.function.name(), error = %err, "verification call failed");
                let message = err.to_string();
                VerifyView::Failure {
                    message: if message.is_empty() {
                        CONNECTION_FAILED_MESSAGE.to_string()
                    } else {
                        message
                    },
                }
            }
            Ok(outcome) if !outcome.ok => VerifyView::Failure {
                message: outcome
                    .error
                    .filter(|error| !error.is_empty())
                    .unwrap_or_else(|| self.function.fallback_message().to_string()),
            },
            Ok(_) => VerifyView::Success,
        };
        &self.view
    }
}
