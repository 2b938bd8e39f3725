//! Specialist-matching prototype: chat → loading → results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Answering the last chat question submits the collected criteria to a
//! `ViewFlow`. Each flow phase renders its own pane; panes cross-fade, with
//! the leaving pane kept mounted only for the fade.
//! Leaving the page mid-load cancels the pending transition.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::components::survey_widget::SurveyWidget;
use crate::state::flow::{FlowPhase, ViewFlow};
use crate::state::matching::{ChatMessage, ChatState, MatchCriterion};
use crate::util::fade::{FADE_IN_CLASS, FADE_MS, FADE_OUT_CLASS, fade_duration, fade_vars, pane_class};

#[component]
pub fn MatchingPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let flow = RwSignal::new(ViewFlow::<MatchCriterion>::new());
    let phase = Memo::new(move |_| flow.with(ViewFlow::phase));

    on_cleanup(move || {
        let _ = flow.try_update(ViewFlow::cancel);
    });

    let on_answer = move |value: &'static str| {
        let Some(criteria) = chat.try_update(|c| c.answer(value)).flatten() else {
            return;
        };
        let Some(ticket) = flow.try_update(|f| f.submit(criteria)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        crate::state::flow::schedule_completion(flow, ticket);
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    let on_back = move |_: leptos::ev::MouseEvent| {
        flow.update(|f| {
            f.back();
        });
        chat.update(ChatState::reset);
    };

    let showing = move |target: FlowPhase| Signal::derive(move || phase.get() == target);

    view! {
        <div class="matching" data-phase=move || phase.get().as_str() style=fade_vars(FADE_MS)>
            <AnimatedShow
                when=showing(FlowPhase::Input)
                show_class=FADE_IN_CLASS
                hide_class=FADE_OUT_CLASS
                hide_delay=fade_duration()
            >
                <section class=pane_class("matching", FlowPhase::Input.as_str())>
                    <div class="chat">
                        {move || {
                            chat.with(ChatState::transcript)
                                .into_iter()
                                .map(|message| match message {
                                    ChatMessage::Prompt(text) => view! {
                                        <p class="chat__bubble chat__bubble--bot">{text}</p>
                                    }
                                    .into_any(),
                                    ChatMessage::Reply(text) => view! {
                                        <p class="chat__bubble chat__bubble--user">{text}</p>
                                    }
                                    .into_any(),
                                })
                                .collect_view()
                        }}
                        <div class="chat__chips">
                            {move || {
                                chat.with(ChatState::current_question).map(|question| {
                                    question
                                        .options
                                        .iter()
                                        .map(|option| {
                                            let option = *option;
                                            view! {
                                                <button
                                                    class="chat__chip"
                                                    on:click=move |_| on_answer(option)
                                                >
                                                    {option}
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                        </div>
                    </div>
                </section>
            </AnimatedShow>
            <AnimatedShow
                when=showing(FlowPhase::Loading)
                show_class=FADE_IN_CLASS
                hide_class=FADE_OUT_CLASS
                hide_delay=fade_duration()
            >
                <section class=pane_class("matching", FlowPhase::Loading.as_str()) aria-busy="true">
                    <Icon name="leaf" size=48 color="#6bbf8e"/>
                    <p class="matching__loading">"Finding specialists who fit you..."</p>
                </section>
            </AnimatedShow>
            <AnimatedShow
                when=showing(FlowPhase::Result)
                show_class=FADE_IN_CLASS
                hide_class=FADE_OUT_CLASS
                hide_delay=fade_duration()
            >
                // Results are read once on entry; the leaving pane keeps them
                // while it fades even though `back` has cleared the flow.
                <section class=pane_class("matching", FlowPhase::Result.as_str())>
                    <h2>"Your matches are ready"</h2>
                    <ul class="matching__criteria">
                        {flow
                            .with_untracked(|f| f.results().to_vec())
                            .into_iter()
                            .map(|c| view! {
                                <li>
                                    <Icon name="check" size=16/>
                                    <span class="matching__label">{c.label}</span>
                                    <span class="matching__value">{c.value}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                    <button class="matching__back" on:click=on_back>
                        <Icon name="arrow-left" size=16/>
                        "Start over"
                    </button>
                    <SurveyWidget context="matching"/>
                </section>
            </AnimatedShow>
        </div>
    }
}
