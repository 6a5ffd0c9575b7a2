//! List Item Modal
//!
//! Child form for a single item draft. The parent owns the draft value and
//! passes it down; this modal reports the outcome through one callback —
//! `Some(validated item)` on submit, `None` on cancel — so closing never
//! masquerades as confirming.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::ListItem;

#[component]
pub fn ListItemModal(
    draft: ListItem,
    #[prop(into)] on_result: Callback<Option<ListItem>>,
) -> impl IntoView {
    let id = draft.id;
    let list_id = draft.list_id;
    let (title, set_title) = signal(draft.title.clone());
    let (description, set_description) = signal(draft.description.clone());
    let (title_error, set_title_error) = signal(None::<&'static str>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item = ListItem {
            id,
            title: title.get(),
            description: description.get(),
            list_id,
        };
        match item.validate() {
            Ok(()) => on_result.run(Some(item)),
            Err(message) => set_title_error.set(Some(message)),
        }
    };

    view! {
        <div class="modal">
            <div class="modal-card">
                <form class="item-form" on:submit=on_submit>
                    <div class="field">
                        <label class="label" for="title">"Title"</label>
                        <input
                            id="title"
                            type="text"
                            class="input"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                        <Show when=move || title_error.get().is_some()>
                            <p class="field-error">{move || title_error.get().unwrap_or_default()}</p>
                        </Show>
                    </div>
                    <div class="field">
                        <label class="label" for="description">"Description"</label>
                        <textarea
                            id="description"
                            class="textarea"
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(area.value());
                            }
                        />
                    </div>
                    <div class="field is-grouped">
                        <button class="button" type="submit">
                            {if id.is_unsaved() { "ADD" } else { "SAVE" }}
                        </button>
                        <button class="button" type="button" on:click=move |_| on_result.run(None)>
                            "CANCEL"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
