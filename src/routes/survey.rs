//! Survey submission route.

#[cfg(test)]
#[path = "survey_test.rs"]
mod survey_test;

use axum::http::StatusCode;
use axum::response::Json;
use haven_client::state::survey::{MAX_COMMENT_CHARS, MAX_SCORE, MIN_SCORE, SurveySubmission};

/// `POST /api/survey`: accept one CSAT response.
///
/// Responses are recorded in the structured log only; there is no storage.
pub async fn submit(Json(submission): Json<SurveySubmission>) -> StatusCode {
    if let Err(reason) = validate(&submission) {
        tracing::warn!(score = submission.score, context = %submission.context, reason, "survey rejected");
        return StatusCode::UNPROCESSABLE_ENTITY;
    }
    tracing::info!(
        score = submission.score,
        context = %submission.context,
        has_comment = submission.comment.is_some(),
        "survey received"
    );
    StatusCode::NO_CONTENT
}

pub(crate) fn validate(submission: &SurveySubmission) -> Result<(), &'static str> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&submission.score) {
        return Err("score out of range");
    }
    if submission.comment.as_ref().is_some_and(|c| c.chars().count() > MAX_COMMENT_CHARS) {
        return Err("comment too long");
    }
    if submission.context.trim().is_empty() {
        return Err("missing context");
    }
    Ok(())
}
