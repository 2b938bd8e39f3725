//! Asset and survey HTTP calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since icon markup is fetched
//! after hydration and the placeholder is what SSR renders.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures come back as `IconError::Fetch`; the icon pipeline logs
//! them and hides the icon. There is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use haven_icons::IconError;

use crate::state::survey::SurveySubmission;

#[cfg(any(test, feature = "hydrate"))]
const SURVEY_ENDPOINT: &str = "/api/survey";

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed(url: &str, reason: impl Into<String>) -> IconError {
    IconError::Fetch { url: url.to_owned(), reason: reason.into() }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_message(status: u16) -> String {
    format!("http status {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn survey_failed_message(status: u16) -> String {
    format!("survey submit failed: {status}")
}

/// Fetch SVG markup for an icon asset URL.
///
/// # Errors
///
/// Returns [`IconError::Fetch`] on transport failure, a non-OK status, or
/// when called outside the browser.
pub async fn fetch_icon_markup(url: &str) -> Result<String, IconError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| fetch_failed(url, e.to_string()))?;
        if !resp.ok() {
            return Err(fetch_failed(url, status_message(resp.status())));
        }
        resp.text().await.map_err(|e| fetch_failed(url, e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(IconError::Fetch { url: url.to_owned(), reason: "not available on server".to_owned() })
    }
}

/// Post a survey response to `/api/survey`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn submit_survey(submission: &SurveySubmission) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SURVEY_ENDPOINT)
            .json(submission)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(survey_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err("not available on server".to_owned())
    }
}
