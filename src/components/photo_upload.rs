//! Photo step: pick a face photo and run the skin analysis.
//!
//! Users can drag-and-drop or browse for an image. The analysis result is
//! delivered after the provider's latency; leaving the step clears the
//! pending timeout and the intake ignores any result that still slips in.

use ayurskin_core::analyzer::PhotoIntake;
use ayurskin_core::{ImageUpload, SkinAnalysis};
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AnalysisBackend;
use crate::components::toast::use_toast;

#[component]
pub fn PhotoUpload(on_image_analyzed: Callback<SkinAnalysis>) -> impl IntoView {
    let backend = StoredValue::new(expect_context::<AnalysisBackend>());
    let toast = use_toast();
    let intake = RwSignal::new(PhotoIntake::new());
    let (preview, set_preview) = signal::<Option<String>>(None);
    let (is_over, set_is_over) = signal(false);
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let file_input = NodeRef::<Input>::new();

    let analyzing = move || intake.with(|i| i.is_analyzing());

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
        intake.try_update_untracked(|i| i.cancel());
        if let Some(url) = preview.try_get_untracked().flatten() {
            revoke_preview(&url);
        }
    });

    let handle_file = move |file: web_sys::File| {
        let mut upload = ImageUpload::new(file.name(), file.type_(), Vec::new());
        let ticket = match intake.try_update(|i| i.begin(&upload)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                toast.error("Invalid file type", e.to_string());
                return;
            }
            None => return,
        };

        // A newer photo replaces whatever was pending
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }

        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                if let Some(old) = preview.get_untracked() {
                    revoke_preview(&old);
                }
                set_preview.set(Some(url));
            }
            Err(e) => tracing::warn!("Could not create preview for {}: {:?}", upload.file_name, e),
        }

        spawn_local(async move {
            let bytes = match read_file_bytes(&file).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("{}", e);
                    intake.try_update(|i| i.cancel());
                    toast.error("Analysis failed", "Please try uploading your image again.");
                    return;
                }
            };
            upload.bytes = bytes;

            let Some(provider) = backend.try_get_value().map(|b| b.0) else {
                return;
            };
            let delay = provider.latency();
            let scheduled = set_timeout_with_handle(
                move || match intake.try_update(|i| i.finish(ticket, provider.as_ref(), &upload)) {
                    Some(Ok(Some(analysis))) => {
                        toast.success("Analysis complete", "Your skin has been analyzed successfully!");
                        on_image_analyzed.run(analysis);
                    }
                    Some(Ok(None)) | None => {}
                    Some(Err(e)) => {
                        tracing::warn!("Analysis failed: {}", e);
                        toast.error("Analysis failed", "Please try uploading your image again.");
                    }
                },
                delay,
            );

            match scheduled {
                Ok(handle) => {
                    pending.try_set_value(Some(handle));
                }
                Err(e) => {
                    tracing::warn!("Could not schedule analysis: {:?}", e);
                    intake.try_update(|i| i.cancel());
                    toast.error("Analysis failed", "Please try uploading your image again.");
                }
            }
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if analyzing() {
            return;
        }
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(file);
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div class="photo-upload">
            <style>{include_str!("photo_upload.css")}</style>

            <h2 class="step-title">"Skin Analysis"</h2>
            <p class="page-description">
                "Upload a clear, front-facing photo of your face in natural lighting for AI-powered skin analysis"
            </p>

            <div
                class="drop-zone"
                class:drop-zone-active=move || is_over.get()
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_is_over.set(true);
                }
                on:dragleave=move |_| set_is_over.set(false)
                on:drop=on_drop
            >
                {move || match preview.get() {
                    Some(src) => view! {
                        <div class="preview">
                            <img src=src class="preview-image" alt="Uploaded face" />
                            <Show when=analyzing>
                                <div class="analyzing-overlay">
                                    <div class="spinner"></div>
                                    <p>"Analyzing your skin..."</p>
                                    <p class="analyzing-file">
                                        {move || intake.with(|i| i.pending_file().map(str::to_string))}
                                    </p>
                                </div>
                            </Show>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="drop-zone-content">
                            <div class="drop-icon">"\u{1f4f7}"</div>
                            <p class="drop-main">"Upload Your Photo"</p>
                            <p class="drop-hint">
                                "For best results, use natural lighting and face the camera directly"
                            </p>
                        </div>
                    }.into_any(),
                }}
            </div>

            <div class="action-buttons">
                <button class="btn btn-primary" on:click=open_picker disabled=analyzing>
                    {move || if preview.get().is_some() { "Upload New Photo" } else { "Choose Photo" }}
                </button>
                <input
                    type="file"
                    accept="image/*"
                    style="display: none"
                    node_ref=file_input
                    on:change=on_input_change
                />
            </div>

            <div class="photo-guidelines">
                <p class="guidelines-title">"Photo Guidelines:"</p>
                <ul>
                    <li>"Clean face without makeup"</li>
                    <li>"Natural daylight (avoid harsh shadows)"</li>
                    <li>"Face camera directly"</li>
                    <li>"High resolution image"</li>
                </ul>
            </div>
        </div>
    }
}

fn revoke_preview(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        tracing::debug!("Failed to revoke preview URL: {:?}", e);
    }
}

/// Read a File into memory.
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer")?;

    Ok(Uint8Array::new(&array_buffer).to_vec())
}
