//! Persisted record shapes

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

/// The terminal record built from a completed vibe check.
///
/// Created once at submit time and never mutated. Answers are flattened
/// to top-level keys so each question id becomes a column of the
/// `waitlist_surveys` row.
#[derive(Debug, Clone)]
pub struct SurveySubmission {
    /// `(question id, chosen option)` pairs, in question order.
    pub answers: Vec<(&'static str, String)>,
    pub fav_course: String,
    pub email: String,
    /// Set when the consent-collecting variant is active.
    pub consented_at: Option<DateTime<Utc>>,
}

impl SurveySubmission {
    /// Flatten into the row mapping sent to the backend.
    pub fn into_record(self) -> Value {
        let mut row = Map::new();
        for (question, option) in self.answers {
            row.insert(question.to_string(), Value::String(option));
        }
        row.insert("fav_course".to_string(), Value::String(self.fav_course));
        row.insert("email".to_string(), Value::String(self.email));
        if let Some(at) = self.consented_at {
            row.insert("consent_email_updates".to_string(), Value::Bool(true));
            row.insert("consent_at".to_string(), Value::String(iso8601(at)));
        }
        Value::Object(row)
    }
}

/// A contact/support form submission.
#[derive(Debug, Clone)]
pub struct SupportRequest {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl SupportRequest {
    /// The row mapping written to the `support_requests` table.
    pub fn into_record(self) -> Value {
        json!({
            "name": self.name,
            "email": self.email,
            "category": self.category,
            "message": self.message,
            "created_at": iso8601(self.created_at),
        })
    }
}

// Millisecond precision with a Z suffix, e.g. "2026-04-01T12:00:00.000Z".
fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
