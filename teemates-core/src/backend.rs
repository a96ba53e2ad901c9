//! The managed-backend seam the flows talk through
//!
//! Every data-bearing operation in the funnel is a single call against
//! this trait: a row insert, a named edge-function invocation, or one of
//! the auth primitives. [`SupabaseBackend`](crate::SupabaseBackend) is
//! the hosted implementation; [`InMemoryBackend`](crate::InMemoryBackend)
//! backs tests and local development.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::error::BackendError;

/// Table holding one row per completed vibe-check submission.
pub const WAITLIST_SURVEYS_TABLE: &str = "waitlist_surveys";

/// Table holding contact/support form submissions.
pub const SUPPORT_REQUESTS_TABLE: &str = "support_requests";

/// Application-level result returned by an edge function.
///
/// A body without an `ok` flag counts as success; only an explicit
/// `ok: false` carries an error message.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionOutcome {
    #[serde(default = "default_ok")]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_ok() -> bool {
    true
}

impl FunctionOutcome {
    /// An accepted invocation.
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    /// A rejected invocation with an application-level message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

/// Trait for the managed data/identity service behind the funnel.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Insert a single record into a table.
    async fn insert(&self, table: &str, record: Value) -> Result<(), BackendError>;

    /// Invoke a named server-side function with a JSON payload.
    async fn invoke_function(
        &self,
        name: &str,
        payload: Value,
    ) -> Result<FunctionOutcome, BackendError>;

    /// Ask the backend to email a one-time sign-in link.
    async fn send_magic_link(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> Result<(), BackendError>;

    /// URL to send the browser to for an OAuth sign-in redirect.
    fn oauth_authorize_url(
        &self,
        provider: &str,
        redirect_to: Option<&str>,
    ) -> Result<Url, BackendError>;
}

/// Allow sharing one backend between flows via `Arc`
#[async_trait]
impl<B: Backend + ?Sized> Backend for Arc<B> {
    async fn insert(&self, table: &str, record: Value) -> Result<(), BackendError> {
        (**self).insert(table, record).await
    }

    async fn invoke_function(
        &self,
        name: &str,
        payload: Value,
    ) -> Result<FunctionOutcome, BackendError> {
        (**self).invoke_function(name, payload).await
    }

    async fn send_magic_link(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> Result<(), BackendError> {
        (**self).send_magic_link(email, redirect_to).await
    }

    fn oauth_authorize_url(
        &self,
        provider: &str,
        redirect_to: Option<&str>,
    ) -> Result<Url, BackendError> {
        (**self).oauth_authorize_url(provider, redirect_to)
    }
}
