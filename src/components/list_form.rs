//! List Form Component
//!
//! Owns the working copy of one list: name editing, the in-memory item
//! add/edit/delete workflow driven by the item modal, drag reordering, and
//! the final Create/Update persist. Each form instance holds its own copy —
//! nothing here is shared across concurrent edits.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_dragdrop::*;

use crate::components::ListItemModal;
use crate::context::{AppContext, Page};
use crate::models::{List, ListItem};
use crate::usecases::{CreateListUseCase, DeleteListItemUseCase, UpdateListUseCase};
use crate::workflow;

#[component]
pub fn ListForm(
    list: List,
    create: CreateListUseCase,
    update: UpdateListUseCase,
    delete_item: DeleteListItemUseCase,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // The items section only exists once the list is persisted; a new list
    // is created with an empty item sequence first.
    let owner_id = list.id.value();

    let (working, set_working) = signal(list);
    let (name_error, set_name_error) = signal(None::<&'static str>);
    // Modal draft owned by the parent; Some = modal open
    let (draft, set_draft) = signal(None::<ListItem>);

    let dnd = create_dnd_signals();

    let reorder = move |source: usize, destination: Option<usize>| {
        set_working.update(|list| workflow::move_item(&mut list.items, source, destination));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let list = working.get();
        if let Err(message) = list.validate() {
            set_name_error.set(Some(message));
            return;
        }
        set_name_error.set(None);

        let create = create.clone();
        let update = update.clone();
        spawn_local(async move {
            match list.id.value() {
                None => match create.execute(&list).await {
                    Ok(saved) => {
                        if let Some(id) = saved.id.value() {
                            ctx.navigate(Page::EditList(id));
                        }
                    }
                    Err(e) => ctx.notify_error(e.to_string()),
                },
                Some(id) => match update.execute(id, &list).await {
                    Ok(saved) => set_working.set(saved),
                    Err(e) => ctx.notify_error(e.to_string()),
                },
            }
        });
    };

    let open_add = move |_: web_sys::MouseEvent| {
        if let Some(owner) = owner_id {
            set_draft.set(Some(ListItem::draft(owner)));
        }
    };

    // Some(item) = validated submit, None = explicit cancel
    let on_item_result = Callback::new(move |result: Option<ListItem>| {
        if let Some(edited) = result {
            set_working.update(|list| workflow::apply_item_edit(list, edited));
        }
        set_draft.set(None);
    });

    let delete_item_usecase = delete_item;

    view! {
        <form class="list-form" on:submit=on_submit>
            <div class="field">
                <label class="label" for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    class="input"
                    prop:value=move || working.get().name
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let value = input.value();
                        set_working.update(|list| list.name = value);
                    }
                />
                <Show when=move || name_error.get().is_some()>
                    <p class="field-error">{move || name_error.get().unwrap_or_default()}</p>
                </Show>
            </div>

            {owner_id.is_some().then(|| view! {
                <div class="list-items">
                    <div class="list-items-header">
                        <span class="label">"List Items"</span>
                        <button type="button" class="button is-small" on:click=open_add>
                            "Add"
                        </button>
                    </div>
                    <div class="dnd-list">
                        <For
                            each={move || working.get().items.into_iter().enumerate().collect::<Vec<_>>()}
                            // Key on position plus the editable fields so both
                            // reorders and in-place edits re-render the row
                            key=|(index, item)| (*index, item.id, item.title.clone(), item.description.clone())
                            children=move |(index, item): (usize, ListItem)| {
                                let item_id = item.id;
                                let title = item.title.clone();

                                let on_dragstart = make_on_dragstart(dnd, index);
                                let on_dragover = make_on_dragover(dnd, index);
                                let on_dragleave = make_on_dragleave(dnd);
                                let on_drop = make_on_drop(dnd, index, reorder);
                                let on_dragend = make_on_dragend(dnd);

                                let open_edit = {
                                    // Defensive copy: cancel must leave the
                                    // working list untouched
                                    let item = item.clone();
                                    move |_: web_sys::MouseEvent| set_draft.set(Some(item.clone()))
                                };

                                let remove = {
                                    let delete_item = delete_item_usecase.clone();
                                    move |_: web_sys::MouseEvent| match item_id.value() {
                                        // Persisted items are gone remotely
                                        // before the row disappears
                                        Some(remote_id) => {
                                            let Some(owner) = owner_id else {
                                                return;
                                            };
                                            let delete_item = delete_item.clone();
                                            spawn_local(async move {
                                                match delete_item.execute(owner, remote_id).await {
                                                    Ok(_) => set_working.update(|list| {
                                                        workflow::remove_item(&mut list.items, index)
                                                    }),
                                                    Err(e) => ctx.notify_error(e.to_string()),
                                                }
                                            });
                                        }
                                        None => set_working.update(|list| {
                                            workflow::remove_item(&mut list.items, index)
                                        }),
                                    }
                                };

                                view! {
                                    <div
                                        class=move || {
                                            if is_drop_target(&dnd, index) {
                                                "dnd-item drop-target"
                                            } else {
                                                "dnd-item"
                                            }
                                        }
                                        draggable="true"
                                        on:dragstart=on_dragstart
                                        on:dragover=on_dragover
                                        on:dragleave=on_dragleave
                                        on:drop=on_drop
                                        on:dragend=on_dragend
                                    >
                                        <span class="item-title">{title}</span>
                                        {(!item_id.is_unsaved()).then(|| view! {
                                            <button type="button" class="button is-small" on:click=open_edit>
                                                "Edit"
                                            </button>
                                        })}
                                        <button type="button" class="button is-small" on:click=remove>
                                            "Delete"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            })}

            <div class="field is-grouped">
                <button class="button" type="submit">
                    {move || if working.get().id.is_unsaved() { "CREATE" } else { "SAVE" }}
                </button>
                <button class="button" type="button" on:click=move |_| ctx.navigate(Page::Lists)>
                    "CANCEL"
                </button>
            </div>
        </form>

        {move || draft.get().map(|draft| view! {
            <ListItemModal draft=draft on_result=on_item_result/>
        })}
    }
}
