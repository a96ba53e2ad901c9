//! Supabase client implementing the [`Backend`] seam

use async_trait::async_trait;
use serde_json::{json, Value};
use url::Url;

use crate::backend::{Backend, FunctionOutcome};
use crate::error::BackendError;

/// Client for a Supabase project's REST, functions and auth endpoints.
///
/// Construct one per process from the project URL and an API key and
/// hand clones to each flow; there is no implicit global client.
#[derive(Clone)]
pub struct SupabaseBackend {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl SupabaseBackend {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, BackendError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BackendError::Transport(format!("invalid backend URL: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::Transport(format!("invalid endpoint {path}: {e}")))
    }

    async fn post(&self, url: Url, body: &Value) -> Result<reqwest::Response, BackendError> {
        self.http
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))
    }
}

/// Pull a human-readable message out of an error response.
///
/// Supabase surfaces errors as `message`, `msg` or `error` depending on
/// the endpoint.
async fn rejection(response: reqwest::Response) -> BackendError {
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<Value>(&body).ok())
        .and_then(|value| {
            ["message", "msg", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| format!("HTTP {status}"));

    BackendError::Rejected {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl Backend for SupabaseBackend {
    async fn insert(&self, table: &str, record: Value) -> Result<(), BackendError> {
        let url = self.endpoint(&format!("rest/v1/{table}"))?;

        // PostgREST takes an array of rows, even for a single insert.
        let response = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&Value::Array(vec![record]))
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }

    async fn invoke_function(
        &self,
        name: &str,
        payload: Value,
    ) -> Result<FunctionOutcome, BackendError> {
        let url = self.endpoint(&format!("functions/v1/{name}"))?;
        let response = self.post(url, &payload).await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Transport(format!("malformed function response: {e}")))
    }

    async fn send_magic_link(
        &self,
        email: &str,
        redirect_to: Option<&str>,
    ) -> Result<(), BackendError> {
        let mut url = self.endpoint("auth/v1/otp")?;
        if let Some(to) = redirect_to {
            url.query_pairs_mut().append_pair("redirect_to", to);
        }

        let body = json!({ "email": email, "create_user": true });
        let response = self.post(url, &body).await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }

    fn oauth_authorize_url(
        &self,
        provider: &str,
        redirect_to: Option<&str>,
    ) -> Result<Url, BackendError> {
        let mut url = self.endpoint("auth/v1/authorize")?;
        url.query_pairs_mut().append_pair("provider", provider);
        if let Some(to) = redirect_to {
            url.query_pairs_mut().append_pair("redirect_to", to);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_redirect_url() {
        let backend = SupabaseBackend::new("https://demo.supabase.co", "anon-key").unwrap();
        let url = backend
            .oauth_authorize_url("google", Some("https://teemates.app"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.supabase.co/auth/v1/authorize?provider=google&redirect_to=https%3A%2F%2Fteemates.app"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(SupabaseBackend::new("not a url", "anon-key").is_err());
    }
}
