use leptos::prelude::*;

/// Какое окно сейчас открыто поверх каталога
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveModal {
    Cart,
    Details(String),
    Contact,
    Signin,
    Sell,
    Location,
    Gift,
    Author,
}

/// Сервис для централизованного управления модальными окнами
#[derive(Clone, Copy)]
pub struct ModalService {
    active: RwSignal<Option<ActiveModal>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
        }
    }

    /// Показать модальное окно (предыдущее закрывается)
    pub fn show(&self, modal: ActiveModal) {
        self.active.set(Some(modal));
    }

    /// Скрыть модальное окно
    pub fn hide(&self) {
        self.active.set(None);
    }

    pub fn active(&self) -> Option<ActiveModal> {
        self.active.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    expect_context::<ModalService>()
}

/// Рамка модального окна: клик по подложке или Escape закрывает
#[component]
pub fn Modal(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let modal = use_modal();

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            modal.hide();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| modal.hide()>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                on:click=|e| e.stop_propagation()
            >
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" aria-label="Close" on:click=move |_| modal.hide()>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
