//! Toast notifications: one message at a time, the rest wait in a queue.

pub mod queue;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use queue::{Toast, ToastQueue, ToastStep, SETTLE_MS};

/// Сервис уведомлений (передаётся через context)
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    visible: RwSignal<Option<String>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
            visible: RwSignal::new(None),
        }
    }

    /// Показать сообщение с таймаутом по умолчанию
    pub fn show(&self, text: impl Into<String>) {
        self.push(Toast::new(text));
    }

    pub fn push(&self, toast: Toast) {
        if let Some(step) = self.queue.try_update(|q| q.push(toast)).flatten() {
            self.drain(step);
        }
    }

    fn drain(self, first: ToastStep) {
        spawn_local(async move {
            let mut step = Some(first);
            while let Some(current) = step.take() {
                step = match current {
                    ToastStep::Show(toast) => {
                        self.visible.set(Some(toast.text));
                        TimeoutFuture::new(toast.timeout_ms).await;
                        self.queue.try_update(|q| q.timeout_elapsed()).flatten()
                    }
                    ToastStep::Hide => {
                        self.visible.set(None);
                        TimeoutFuture::new(SETTLE_MS).await;
                        self.queue.try_update(|q| q.settle_elapsed()).flatten()
                    }
                };
            }
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    expect_context::<ToastService>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();
    view! {
        <div
            id="toast"
            class=move || if toast.visible.get().is_some() { "toast" } else { "toast hidden" }
            role="status"
            aria-live="polite"
        >
            {move || toast.visible.get().unwrap_or_default()}
        </div>
    }
}
