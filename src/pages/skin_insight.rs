//! The wizard page: welcome, photo, questionnaire, results.

use ayurskin_core::{DoshaScores, SkinAnalysis, WizardState, WizardStep};
use leptos::prelude::*;

use crate::components::analysis_results::AnalysisResults;
use crate::components::dosha_questionnaire::DoshaQuestionnaire;
use crate::components::photo_upload::PhotoUpload;
use crate::components::welcome_hero::WelcomeHero;

#[component]
pub fn SkinInsightPage() -> impl IntoView {
    let wizard = RwSignal::new(WizardState::new());
    let step = Memo::new(move |_| wizard.with(|w| w.step()));

    let on_begin = Callback::new(move |_: ()| {
        wizard.update(|w| log_rejected(w.begin()));
    });

    let on_image_analyzed = Callback::new(move |analysis: SkinAnalysis| {
        wizard.update(|w| log_rejected(w.record_analysis(analysis)));
    });

    let on_questionnaire_complete = Callback::new(move |scores: DoshaScores| {
        wizard.update(|w| log_rejected(w.record_scores(scores)));
    });

    let on_start_over = move |_| {
        wizard.update(|w| log_rejected(w.start_over()));
    };

    view! {
        <div class="page skin-insight-page">
            {move || match step.get() {
                WizardStep::Welcome => view! {
                    <WelcomeHero on_begin=on_begin />
                }.into_any(),

                WizardStep::Photo => view! {
                    <PhotoUpload on_image_analyzed=on_image_analyzed />
                }.into_any(),

                WizardStep::Questionnaire => view! {
                    <DoshaQuestionnaire on_complete=on_questionnaire_complete />
                }.into_any(),

                WizardStep::Results => {
                    let report = wizard.with_untracked(|w| w.report());
                    view! {
                        <div class="results-step">
                            {match report {
                                Some(Ok(report)) => view! { <AnalysisResults report=report /> }.into_any(),
                                Some(Err(e)) => view! {
                                    <div class="error-message">
                                        <h3>"Could not build your report"</h3>
                                        <p>{e.to_string()}</p>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <p class="error-message">"Your results are not available yet."</p>
                                }.into_any(),
                            }}
                            <div class="action-buttons">
                                <button class="btn btn-secondary" on:click=on_start_over>
                                    "Start New Analysis"
                                </button>
                            </div>
                        </div>
                    }.into_any()
                },
            }}
        </div>
    }
}

fn log_rejected(result: Result<(), ayurskin_core::WizardError>) {
    if let Err(e) = result {
        tracing::warn!("Wizard transition rejected: {}", e);
    }
}
