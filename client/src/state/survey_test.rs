use super::*;

#[test]
fn survey_default_is_blank() {
    let state = SurveyState::default();
    assert_eq!(state.score, None);
    assert!(state.comment.is_empty());
    assert!(!state.submitted);
}

#[test]
fn select_accepts_only_one_through_five() {
    let mut state = SurveyState::default();
    assert!(!state.select(0));
    assert!(!state.select(6));
    assert_eq!(state.score, None);
    assert!(state.select(1));
    assert!(state.select(5));
    assert_eq!(state.score, Some(5));
}

#[test]
fn submit_requires_score() {
    let mut state = SurveyState::default();
    assert_eq!(state.submit("matching"), Err(SurveyRejection::MissingScore));
    assert!(!state.submitted);
}

#[test]
fn submit_trims_comment_and_drops_blank() {
    let mut state = SurveyState::default();
    state.select(4);
    state.set_comment("   ");
    let submission = state.submit("playground").expect("submit");
    assert_eq!(
        submission,
        SurveySubmission { score: 4, comment: None, context: "playground".to_owned() }
    );

    let mut state = SurveyState::default();
    state.select(2);
    state.set_comment("  too slow  ");
    assert_eq!(state.submit("x").expect("submit").comment.as_deref(), Some("too slow"));
}

#[test]
fn submit_only_once_and_locks_input() {
    let mut state = SurveyState::default();
    state.select(3);
    assert!(state.submit("x").is_ok());
    assert_eq!(state.submit("x"), Err(SurveyRejection::AlreadySubmitted));
    assert!(!state.select(5));
    state.set_comment("late");
    assert_eq!(state.score, Some(3));
    assert!(state.comment.is_empty());
}

#[test]
fn set_comment_truncates_by_chars() {
    let mut state = SurveyState::default();
    state.set_comment(&"é".repeat(MAX_COMMENT_CHARS + 10));
    assert_eq!(state.comment.chars().count(), MAX_COMMENT_CHARS);
}

#[test]
fn reset_clears_everything() {
    let mut state = SurveyState::default();
    state.select(5);
    state.submit("x").expect("submit");
    state.reset();
    assert_eq!(state, SurveyState::default());
}

#[test]
fn submission_serializes_without_empty_comment() {
    let submission = SurveySubmission { score: 5, comment: None, context: "matching".to_owned() };
    let json = serde_json::to_value(&submission).expect("json");
    assert_eq!(json, serde_json::json!({ "score": 5, "context": "matching" }));
}
