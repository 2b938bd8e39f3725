//! Five-star customer-satisfaction survey.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::survey::{MAX_SCORE, MIN_SCORE, SurveyRejection, SurveyState};

/// Inline CSAT widget; `context` tags the submission with where it was shown.
#[component]
pub fn SurveyWidget(#[prop(into)] context: String) -> impl IntoView {
    let survey = RwSignal::new(SurveyState::default());
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match survey.try_update(|s| s.submit(&context)) {
            Some(Ok(submission)) => {
                notice.set(None);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    if let Err(e) = crate::net::assets::submit_survey(&submission).await {
                        leptos::logging::warn!("survey: {e}");
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = submission;
            }
            Some(Err(SurveyRejection::MissingScore)) => notice.set(Some("Pick a rating first.")),
            Some(Err(SurveyRejection::AlreadySubmitted)) | None => {}
        }
    };

    view! {
        <div class="survey">
            <Show
                when=move || !survey.with(|s| s.submitted)
                fallback=|| view! { <p class="survey__thanks">"Thank you for your feedback."</p> }
            >
                <form class="survey__form" on:submit=on_submit.clone()>
                    <p class="survey__prompt">"How was your experience today?"</p>
                    <div class="survey__scale" role="radiogroup">
                        {(MIN_SCORE..=MAX_SCORE)
                            .map(|score| {
                                let active = move || survey.with(|s| s.score.is_some_and(|v| v >= score));
                                view! {
                                    <button
                                        type="button"
                                        class="survey__star"
                                        class:survey__star--active=active
                                        aria-label=format!("{score} of {MAX_SCORE}")
                                        on:click=move |_| {
                                            survey.update(|s| {
                                                s.select(score);
                                            });
                                        }
                                    >
                                        <Icon name="star" size=24/>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <textarea
                        class="survey__comment"
                        placeholder="Anything we could do better? (optional)"
                        prop:value=move || survey.with(|s| s.comment.clone())
                        on:input=move |ev| survey.update(|s| s.set_comment(&event_target_value(&ev)))
                    ></textarea>
                    <button class="survey__submit" type="submit">"Send"</button>
                    {move || notice.get().map(|msg| view! { <p class="survey__notice">{msg}</p> })}
                </form>
            </Show>
        </div>
    }
}
