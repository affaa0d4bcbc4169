//! Results report display.
//!
//! Shows the dominant dosha, the score breakdown, the skin analysis and the
//! combined recommendations.

use ayurskin_core::{Dosha, DoshaReport};
use leptos::prelude::*;

#[component]
pub fn AnalysisResults(report: DoshaReport) -> impl IntoView {
    let DoshaReport {
        dominant,
        profile,
        shares,
        analysis,
        fitzpatrick_description,
        modern_advice,
        ..
    } = report;

    let name = profile.name.clone();

    view! {
        <div class="analysis-results">
            <style>{include_str!("analysis_results.css")}</style>

            <section class="results-header card">
                <h2 class="dominant-title">
                    <span class="dosha-icon">{dosha_icon(dominant)}</span>
                    "Your Dominant Dosha: " {profile.name.clone()}
                </h2>
                <p class="dominant-description">
                    {format!("{} \u{2022} {}", profile.element, profile.description)}
                </p>
                <div class=format!("dosha-breakdown dosha-{}", dominant)>
                    {shares.iter().map(|share| {
                        let percent = share.display_percent();
                        view! {
                            <div class="dosha-share">
                                <div class="share-name">{dosha_label(share.dosha)}</div>
                                <div class="share-percent">{format!("{}%", percent)}</div>
                                <div class="progress-bar">
                                    <div class="progress-fill" style=format!("width: {:.1}%", share.percentage)></div>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <div class="results-grid">
                <section class="card">
                    <h3>"AI Skin Analysis"</h3>
                    <p class="section-subtitle">
                        {format!("Analysis confidence: {}%", analysis.confidence_percent())}
                    </p>
                    <div class="analysis-badges">
                        <AnalysisBadge label="Texture" value=analysis.texture.label() />
                        <AnalysisBadge label="Oiliness" value=analysis.oiliness.label() />
                        <AnalysisBadge label="Pigmentation" value=analysis.pigmentation.label() />
                        <AnalysisBadge label="Redness" value=analysis.redness.label() />
                    </div>
                    <div class="fitzpatrick">
                        <span class="badge-label">
                            {format!("Fitzpatrick Type {}:", analysis.fitzpatrick_type)}
                        </span>
                        <p class="fitzpatrick-description">{fitzpatrick_description}</p>
                    </div>
                </section>

                <section class="card">
                    <h3>{format!("{} Skin Characteristics", name)}</h3>
                    <BulletList items=profile.skin_characteristics.clone() />
                </section>
            </div>

            <section class="card recommendations">
                <h3>"Personalized Skincare Recommendations"</h3>
                <p class="section-subtitle">
                    {format!("Based on your {} constitution and AI skin analysis", name)}
                </p>
                <div class="results-grid">
                    <div>
                        <h4 class="recommendations-heading">"Ayurvedic Recommendations:"</h4>
                        <BulletList items=profile.recommendations.clone() />
                    </div>
                    <div>
                        <h4 class="recommendations-heading">"Modern Skincare Advice:"</h4>
                        <BulletList items=modern_advice />
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn AnalysisBadge(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="analysis-badge">
            <span class="badge-label">{format!("{}:", label)}</span>
            <span class="badge-value">{value}</span>
        </div>
    }
}

#[component]
fn BulletList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="bullet-list">
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
        </ul>
    }
}

fn dosha_label(dosha: Dosha) -> &'static str {
    match dosha {
        Dosha::Vata => "Vata",
        Dosha::Pitta => "Pitta",
        Dosha::Kapha => "Kapha",
    }
}

fn dosha_icon(dosha: Dosha) -> &'static str {
    match dosha {
        Dosha::Vata => "\u{1f343}",
        Dosha::Pitta => "\u{1f525}",
        Dosha::Kapha => "\u{1f4a7}",
    }
}
