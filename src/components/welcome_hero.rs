use leptos::prelude::*;

#[component]
pub fn WelcomeHero(on_begin: Callback<()>) -> impl IntoView {
    view! {
        <div class="welcome">
            <div class="hero">
                <h1 class="hero-title">"Ayurvedic Skin Insight"</h1>
                <p class="hero-subtitle">
                    "Discover your dosha and get personalized skincare recommendations"
                </p>
            </div>

            <div class="card-grid">
                <div class="card card-vata">
                    <h3>"AI Skin Analysis"</h3>
                    <p>"Upload your photo for advanced skin characteristic analysis using computer vision"</p>
                </div>
                <div class="card card-pitta">
                    <h3>"Dosha Assessment"</h3>
                    <p>"Complete our comprehensive questionnaire based on classical Ayurvedic principles"</p>
                </div>
                <div class="card card-kapha">
                    <h3>"Personalized Care"</h3>
                    <p>"Receive customized skincare recommendations blending ancient wisdom with modern science"</p>
                </div>
            </div>

            <button class="btn btn-primary btn-large" on:click=move |_| on_begin.run(())>
                "Begin Your Skin Journey"
            </button>
        </div>
    }
}
