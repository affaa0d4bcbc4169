//! Transient notifications.
//!
//! Components push toasts through `ToastContext`; `ToastHost` renders them
//! in a corner stack and each one dismisses itself after a few seconds.

use std::time::Duration;

use leptos::prelude::*;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, title: impl Into<String>, description: impl Into<String>, variant: ToastVariant) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                title: title.into(),
                description: description.into(),
                variant,
            })
        });

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            TOAST_LIFETIME,
        );
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title, description, ToastVariant::Default);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title, description, ToastVariant::Destructive);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

/// Look up the toast context provided by `App`.
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toast();

    view! {
        <div class="toast-stack">
            <style>{include_str!("toast.css")}</style>
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast-destructive",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <strong class="toast-title">{toast.title}</strong>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| ctx.dismiss(id)>
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
