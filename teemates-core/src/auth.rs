//! Magic-link sign-in entry
//!
//! The auth screen is a one-field flow: enter an email, the backend
//! mails a one-time sign-in link. OAuth sign-in is a plain redirect to
//! the URL the backend hands out and needs no state here.

use crate::backend::Backend;
use crate::error::{Error, ValidationError};
use crate::validate::is_valid_email;
use crate::Result;

/// Which screen the auth entry is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    /// The email field.
    EnterEmail,
    /// The send is in flight.
    Sending,
    /// Terminal. "Check your inbox."
    LinkSent,
}

impl AuthView {
    fn name(&self) -> &'static str {
        match self {
            AuthView::EnterEmail => "enter_email",
            AuthView::Sending => "sending",
            AuthView::LinkSent => "link_sent",
        }
    }
}

/// State machine for the magic-link sign-in screen.
pub struct MagicLinkFlow<B: Backend> {
    backend: B,
    view: AuthView,
}

impl<B: Backend> MagicLinkFlow<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            view: AuthView::EnterEmail,
        }
    }

    pub fn view(&self) -> AuthView {
        self.view
    }

    /// Ask the backend to mail a sign-in link.
    ///
    /// On failure the flow returns to the email field so the address can
    /// be corrected and the send retried.
    pub async fn send(&mut self, email: &str, redirect_to: Option<&str>) -> Result<()> {
        if self.view != AuthView::EnterEmail {
            return Err(Error::InvalidTransition {
                view: self.view.name(),
                action: "send a sign-in link",
            });
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        self.view = AuthView::Sending;
        match self.backend.send_magic_link(email, redirect_to).await {
            Ok(()) => {
                tracing::info!(email, "sign-in link requested");
                self.view = AuthView::LinkSent;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in link request failed");
                self.view = AuthView::EnterEmail;
                Err(err.into())
            }
        }
    }
}
