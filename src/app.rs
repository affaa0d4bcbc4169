use std::sync::Arc;

use ayurskin_core::{default_mock_config, AnalysisProvider, MockAnalysisProvider};
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::toast::{ToastContext, ToastHost};
use crate::pages::skin_insight::SkinInsightPage;

/// The analysis backend shared with the photo step.
#[derive(Clone)]
pub struct AnalysisBackend(pub Arc<dyn AnalysisProvider + Send + Sync>);

impl AnalysisBackend {
    /// Random stand-in analysis, seeded from the browser RNG.
    pub fn mock() -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let provider = MockAnalysisProvider::new(default_mock_config(), seed);
        tracing::info!(
            "Using mock analysis provider ({} ms latency)",
            provider.config().latency_ms
        );
        Self(Arc::new(provider))
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AnalysisBackend::mock());
    provide_context(ToastContext::new());

    view! {
        <Router>
            <div class="app-layout">
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=SkinInsightPage />
                    </Routes>
                </main>
                <ToastHost />
            </div>
        </Router>
    }
}
