//! Constitution questionnaire, one question at a time.

use std::sync::Arc;

use ayurskin_core::questionnaire::{default_questionnaire, Advance, QuestionnaireSession};
use ayurskin_core::DoshaScores;
use leptos::prelude::*;

#[component]
pub fn DoshaQuestionnaire(on_complete: Callback<DoshaScores>) -> impl IntoView {
    let session = RwSignal::new(QuestionnaireSession::new(Arc::new(default_questionnaire())));
    let current = Memo::new(move |_| session.with(|s| s.current_index()));

    let on_next = move |_| {
        let outcome = session.try_update(|s| s.advance());
        match outcome {
            Some(Ok(Advance::Complete(scores))) => on_complete.run(scores),
            Some(Ok(Advance::Next(_))) | None => {}
            Some(Err(e)) => tracing::debug!("Next ignored: {}", e),
        }
    };

    let on_previous = move |_| {
        if let Some(Err(e)) = session.try_update(|s| s.retreat()) {
            tracing::debug!("Previous ignored: {}", e);
        }
    };

    view! {
        <div class="questionnaire">
            <style>{include_str!("dosha_questionnaire.css")}</style>

            <div class="questionnaire-header">
                <h2 class="step-title">"Ayurvedic Constitution Assessment"</h2>
                <span class="question-position">{move || session.with(|s| s.position())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {:.0}%", session.with(|s| s.progress_percent()))
                ></div>
            </div>
            <p class="page-description">
                "Answer these questions based on your natural tendencies throughout your life"
            </p>

            {move || {
                let index = current.get();
                let question = session.with_untracked(|s| s.current_question().clone());
                view! {
                    <fieldset class="question">
                        <legend class="question-prompt">{question.prompt.clone()}</legend>
                        {question.options.iter().enumerate().map(|(i, option)| {
                            let id = format!("q{}-option-{}", index, i);
                            view! {
                                <label class="option" for=id.clone()>
                                    <input
                                        type="radio"
                                        id=id.clone()
                                        name=question.id.clone()
                                        prop:checked=move || session.with(|s| s.selected_option() == Some(i))
                                        on:change=move |_| {
                                            if let Some(Err(e)) = session.try_update(|s| s.select(i)) {
                                                tracing::warn!("Selection rejected: {}", e);
                                            }
                                        }
                                    />
                                    <span class="option-text">{option.text.clone()}</span>
                                </label>
                            }
                        }).collect::<Vec<_>>()}
                    </fieldset>
                }
            }}

            <div class="questionnaire-nav">
                <button
                    class="btn btn-secondary"
                    on:click=on_previous
                    disabled=move || !session.with(|s| s.can_retreat())
                >
                    "Previous"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=on_next
                    disabled=move || !session.with(|s| s.can_advance())
                >
                    {move || if session.with(|s| s.is_last_question()) { "Complete Assessment" } else { "Next" }}
                </button>
            </div>
        </div>
    }
}
