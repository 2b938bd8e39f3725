//! Customer-satisfaction survey widget state.

#[cfg(test)]
#[path = "survey_test.rs"]
mod survey_test;

use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;
pub const MAX_COMMENT_CHARS: usize = 500;

/// Payload posted to `/api/survey` when the user submits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySubmission {
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Where the widget was shown, e.g. `"matching"`.
    pub context: String,
}

/// Why a submit was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurveyRejection {
    MissingScore,
    AlreadySubmitted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurveyState {
    pub score: Option<u8>,
    pub comment: String,
    pub submitted: bool,
}

impl SurveyState {
    /// Select a score; values outside 1..=5 and changes after submit are ignored.
    pub fn select(&mut self, score: u8) -> bool {
        if self.submitted || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return false;
        }
        self.score = Some(score);
        true
    }

    /// Replace the comment, truncated to `MAX_COMMENT_CHARS` characters.
    pub fn set_comment(&mut self, raw: &str) {
        if self.submitted {
            return;
        }
        self.comment = raw.chars().take(MAX_COMMENT_CHARS).collect();
    }

    /// Lock the response and produce the payload to send.
    ///
    /// # Errors
    ///
    /// Refuses when no score is selected or the survey was already submitted.
    pub fn submit(&mut self, context: &str) -> Result<SurveySubmission, SurveyRejection> {
        if self.submitted {
            return Err(SurveyRejection::AlreadySubmitted);
        }
        let score = self.score.ok_or(SurveyRejection::MissingScore)?;
        self.submitted = true;
        let comment = self.comment.trim();
        Ok(SurveySubmission {
            score,
            comment: (!comment.is_empty()).then(|| comment.to_owned()),
            context: context.to_owned(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
