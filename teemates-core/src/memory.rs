//! In-memory backend for tests and local development

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::backend::{Backend, FunctionOutcome};
use crate::error::BackendError;

/// Backend that keeps every row and call in memory.
///
/// Insert attempts and function invocations are logged even when they
/// fail, so tests can assert exactly how many network calls a flow
/// issued and with what payloads.
#[derive(Default)]
pub struct InMemoryBackend {
    tables: RwLock<HashMap<String, Vec<Value>>>,
    insert_log: RwLock<Vec<(String, Value)>>,
    invocation_log: RwLock<Vec<(String, Value)>>,
    function_outcomes: RwLock<HashMap<String, Result<FunctionOutcome, BackendError>>>,
    pending_insert_failure: RwLock<Option<String>>,
    pending_magic_link_failure: RwLock<Option<String>>,
    magic_links: RwLock<Vec<String>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows successfully inserted into a table.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .read()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of insert attempts against a table, failed ones included.
    pub fn insert_attempts(&self, table: &str) -> usize {
        self.insert_log
            .read()
            .unwrap()
            .iter()
            .filter(|(t, _)| t == table)
            .count()
    }

    /// Every function invocation so far, in order.
    pub fn invocations(&self) -> Vec<(String, Value)> {
        self.invocation_log.read().unwrap().clone()
    }

    /// Script the outcome of a named function. Unscripted functions
    /// succeed with an empty body.
    pub fn set_function_outcome(&self, name: &str, outcome: FunctionOutcome) {
        self.function_outcomes
            .write()
            .unwrap()
            .insert(name.to_string(), Ok(outcome));
    }

    /// Make a named function fail at the transport level.
    pub fn fail_function(&self, name: &str, message: &str) {
        self.function_outcomes
            .write()
            .unwrap()
            .insert(name.to_string(), Err(BackendError::Transport(message.to_string())));
    }

    /// Make the next insert fail with the given message.
    pub fn fail_next_insert(&self, message: &str) {
        *self.pending_insert_failure.write().unwrap() = Some(message.to_string());
    }

    /// Make the next magic-link send fail with the given message.
    pub fn fail_next_magic_link(&self, message: &str) {
        *self.pending_magic_link_failure.write().unwrap() = Some(message.to_string());
    }

    /// Addresses a sign-in link was sent to.
    pub fn magic_links(&self) -> Vec<String> {
        self.magic_links.read().unwrap().clone()
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    async fn insert(&self, table: &str, record: Value) -> Result<(), BackendError> {
        self.insert_log
            .write()
            .unwrap()
            .push((table.to_string(), record.clone()));

        if let Some(message) = self.pending_insert_failure.write().unwrap().take() {
            return Err(BackendError::Rejected {
                status: 500,
                message,
            });
        }

        self.tables
            .write()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn invoke_function(
        &self,
        name: &str,
        payload: Value,
    ) -> Result<FunctionOutcome, BackendError> {
        self.invocation_log
            .write()
            .unwrap()
            .push((name.to_string(), payload));

        match self.function_outcomes.read().unwrap().get(name) {
            Some(outcome) => outcome.clone(),
            None => Ok(FunctionOutcome::success()),
        }
    }

    async fn send_magic_link(
        &self,
        email: &str,
        _redirect_to: Option<&str>,
    ) -> Result<(), BackendError> {
        if let Some(message) = self.pending_magic_link_failure.write().unwrap().take() {
            return Err(BackendError::Transport(message));
        }

        self.magic_links.write().unwrap().push(email.to_string());
        Ok(())
    }

    fn oauth_authorize_url(
        &self,
        provider: &str,
        redirect_to: Option<&str>,
    ) -> Result<Url, BackendError> {
        let mut url = Url::parse("memory://auth/authorize")
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        url.query_pairs_mut().append_pair("provider", provider);
        if let Some(to) = redirect_to {
            url.query_pairs_mut().append_pair("redirect_to", to);
        }
        Ok(url)
    }
}
