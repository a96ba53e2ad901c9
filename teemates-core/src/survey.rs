//! The vibe-check survey flow
//!
//! Drives the waitlist quiz from the intro card through the question
//! steps and the contact-details form to a single terminal insert into
//! the `waitlist_surveys` table. All answer state lives in memory until
//! that insert; an abandoned survey leaves nothing behind.

use std::collections::HashMap;

use chrono::Utc;

use crate::backend::{Backend, WAITLIST_SURVEYS_TABLE};
use crate::error::{Error, ValidationError};
use crate::questions::{Question, COURSES, QUESTIONS};
use crate::submission::SurveySubmission;
use crate::validate::is_valid_email;
use crate::Result;

/// Which screen the survey is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyView {
    /// The pitch card with the start button.
    Intro,
    /// One question step at a time.
    Quiz,
    /// Favorite course, email and (optionally) the consent checkbox.
    ContactDetails,
    /// The insert is in flight; no further submits are accepted.
    Submitting,
    /// Terminal. The submission was stored.
    Success,
}

impl SurveyView {
    fn name(&self) -> &'static str {
        match self {
            SurveyView::Intro => "intro",
            SurveyView::Quiz => "quiz",
            SurveyView::ContactDetails => "contact_details",
            SurveyView::Submitting => "submitting",
            SurveyView::Success => "success",
        }
    }
}

/// Product configuration for the survey.
///
/// The two shipped iterations of the funnel differed only here: one
/// offered a fixed course dropdown plus a consent checkbox, the other a
/// free-text course field and no checkbox. Both collapse into this one
/// shape.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Courses offered on the contact-details step, in display order.
    pub venues: Vec<String>,
    /// Whether the email-updates consent checkbox is shown and required.
    pub collect_consent: bool,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            venues: COURSES.iter().map(|c| c.to_string()).collect(),
            collect_consent: true,
        }
    }
}

/// State machine for one waitlist survey session.
///
/// Sessions are independent and in-memory only; there is no
/// resumability and no deduplication across sessions.
pub struct SurveyFlow<B: Backend> {
    backend: B,
    config: SurveyConfig,
    view: SurveyView,
    step: usize,
    answers: HashMap<&'static str, String>,
}

impl<B: Backend> SurveyFlow<B> {
    /// Create a survey in the intro view with the default configuration.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, SurveyConfig::default())
    }

    pub fn with_config(backend: B, config: SurveyConfig) -> Self {
        Self {
            backend,
            config,
            view: SurveyView::Intro,
            step: 0,
            answers: HashMap::new(),
        }
    }

    pub fn view(&self) -> SurveyView {
        self.view
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Zero-based index of the question on screen; drives the progress dots.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The question currently on screen, while in the quiz view.
    pub fn current_question(&self) -> Option<&'static Question> {
        matches!(self.view, SurveyView::Quiz).then(|| &QUESTIONS[self.step])
    }

    /// Answers recorded so far, keyed by question id.
    pub fn answers(&self) -> &HashMap<&'static str, String> {
        &self.answers
    }

    /// Leave the intro card and show the first question.
    pub fn start(&mut self) -> Result<()> {
        self.guard(SurveyView::Intro, "start")?;
        self.view = SurveyView::Quiz;
        self.step = 0;
        Ok(())
    }

    /// Record the answer for the question currently on screen and advance.
    ///
    /// Advancing is immediate. The shipped UI plays a short selection
    /// animation before revealing the next step; that timing lives in
    /// the presentation layer and the controller does not wait for it.
    pub fn select_option(&mut self, question_id: &str, option: &str) -> Result<()> {
        self.guard(SurveyView::Quiz, "answer a question")?;

        let question = &QUESTIONS[self.step];
        if question.id != question_id {
            return Err(Error::QuestionMismatch {
                expected: question.id,
                got: question_id.to_string(),
            });
        }
        if !question.options.contains(&option) {
            return Err(Error::UnknownOption {
                question: question.id,
                option: option.to_string(),
            });
        }

        self.answers.insert(question.id, option.to_string());

        if self.step + 1 == QUESTIONS.len() {
            self.view = SurveyView::ContactDetails;
        } else {
            self.step += 1;
        }
        Ok(())
    }

    /// Validate the contact details and issue the one terminal insert.
    ///
    /// Validation failures return before any network call with the view
    /// unchanged. A backend failure puts the flow back in the
    /// contact-details view so the user may resubmit; a resubmit is a
    /// second, independent insert.
    pub async fn submit(&mut self, fav_course: &str, email: &str, consent: bool) -> Result<()> {
        self.guard(SurveyView::ContactDetails, "submit")?;

        if fav_course.is_empty() {
            return Err(ValidationError::MissingVenue.into());
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if self.config.collect_consent && !consent {
            return Err(ValidationError::ConsentRequired.into());
        }

        self.view = SurveyView::Submitting;
        let record = self.build_submission(fav_course, email).into_record();

        match self.backend.insert(WAITLIST_SURVEYS_TABLE, record).await {
            Ok(()) => {
                tracing::info!(email, "waitlist survey stored");
                self.view = SurveyView::Success;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "waitlist survey insert failed");
                self.view = SurveyView::ContactDetails;
                Err(err.into())
            }
        }
    }

    fn build_submission(&self, fav_course: &str, email: &str) -> SurveySubmission {
        // Progression through the quiz guarantees one answer per question.
        let answers = QUESTIONS
            .iter()
            .filter_map(|q| self.answers.get(q.id).map(|a| (q.id, a.clone())))
            .collect();

        SurveySubmission {
            answers,
            fav_course: fav_course.to_string(),
            email: email.to_string(),
            consented_at: self.config.collect_consent.then(Utc::now),
        }
    }

    fn guard(&self, expected: SurveyView, action: &'static str) -> Result<()> {
        if self.view == expected {
            Ok(())
        } else {
            Err(Error::InvalidTransition {
                view: self.view.name(),
                action,
            })
        }
    }
}
