pub mod form;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::ui::list::state::CatalogFilter;
use crate::domain::a001_product::ui::list::{scroll_to_grid, use_catalog};
use crate::domain::a003_submission::api;
use crate::domain::a003_submission::location::{use_location, USER_STORAGE_KEY};
use crate::layout::modal_service::{use_modal, Modal};
use crate::shared::storage;
use form::{collect_fields, first_missing, FieldDef, FormKind};

#[component]
fn FormField(def: FieldDef, index: usize, values: RwSignal<Vec<String>>) -> impl IntoView {
    let value = move || values.with(|v| v.get(index).cloned().unwrap_or_default());
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        values.update(|v| {
            if let Some(slot) = v.get_mut(index) {
                *slot = text;
            }
        });
    };

    let input = if def.input_type == "textarea" {
        view! {
            <textarea name=def.name required=def.required prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                name=def.name
                type=def.input_type
                required=def.required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <label class="form-field">
            <span>{def.label}</span>
            {input}
        </label>
    }
}

/// Модальная форма, отправляемая на сервер
#[component]
pub fn SubmissionModal(kind: FormKind) -> impl IntoView {
    let modal = use_modal();
    let location = use_location();

    let defs = kind.fields();
    let values = RwSignal::new(vec![String::new(); defs.len()]);
    let message = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let current = values.get_untracked();
        if let Some(label) = first_missing(defs, &current) {
            message.set(Some(format!("{} is required", label)));
            return;
        }
        let fields = collect_fields(defs, &current);

        if kind.best_effort() {
            location.set(fields.clone());
            spawn_local(async move {
                if let Err(e) = api::submit(kind.endpoint(), &fields).await {
                    log::warn!("Location post failed: {}", e);
                }
            });
            modal.hide();
            return;
        }

        sending.set(true);
        message.set(None);
        spawn_local(async move {
            let result = api::submit(kind.endpoint(), &fields).await;
            sending.set(false);
            match result {
                Ok(_) => {
                    if kind == FormKind::Signin {
                        storage::save(USER_STORAGE_KEY, &fields);
                    }
                    values.set(vec![String::new(); defs.len()]);
                    message.set(kind.success_message().map(str::to_string));
                    let delay = kind.close_delay_ms();
                    if delay > 0 {
                        TimeoutFuture::new(delay).await;
                    }
                    modal.hide();
                }
                Err(e) => {
                    log::error!("{} failed: {}", kind.endpoint().path(), e);
                    message.set(Some(kind.failure_message().to_string()));
                }
            }
        });
    };

    view! {
        <Modal title=kind.title()>
            <form class="modal-form" on:submit=on_submit>
                {defs
                    .iter()
                    .enumerate()
                    .map(|(index, def)| view! { <FormField def=*def index=index values=values /> })
                    .collect_view()}
                <button class="btn primary" type="submit" disabled=move || sending.get()>
                    {kind.submit_label()}
                </button>
                <p class="form-message">{move || message.get().unwrap_or_default()}</p>
            </form>
        </Modal>
    }
}

/// Поиск по автору: фильтр каталога по категории Books
#[component]
pub fn AuthorSearchModal() -> impl IntoView {
    let modal = use_modal();
    let catalog = use_catalog();
    let author = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        catalog.apply_filter(CatalogFilter::author(&author.get_untracked()));
        modal.hide();
        scroll_to_grid();
    };

    view! {
        <Modal title="Search by author">
            <form class="modal-form" on:submit=on_submit>
                <label class="form-field">
                    <span>"Author"</span>
                    <input
                        name="author"
                        type="text"
                        prop:value=move || author.get()
                        on:input=move |ev| author.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn primary" type="submit">"Search"</button>
            </form>
        </Modal>
    }
}
