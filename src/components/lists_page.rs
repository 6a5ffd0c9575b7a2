//! Lists Page
//!
//! Overview of the first page of lists with add / edit / delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, Page};
use crate::models::{List, PaginationInfo};
use crate::usecases::UseCases;

#[component]
pub fn ListsPage(usecases: UseCases) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (lists, set_lists) = signal(Vec::<List>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let get_lists = usecases.get_lists.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let get_lists = get_lists.clone();
        spawn_local(async move {
            match get_lists.execute(&PaginationInfo::default()).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[LISTS] Loaded {} lists", loaded.len()).into());
                    set_lists.set(loaded);
                }
                Err(e) => ctx.notify_error(e.to_string()),
            }
        });
    });

    let delete_list = usecases.delete_list.clone();

    view! {
        <section class="lists-page">
            <div class="page-header">
                <h1>"Lists"</h1>
                <button class="button" on:click=move |_| ctx.navigate(Page::NewList)>
                    "Add"
                </button>
            </div>
            <ul class="entity-rows">
                <For
                    each=move || lists.get()
                    key=|list| (list.id, list.name.clone())
                    children=move |list: List| {
                        let id = list.id.value().unwrap_or_default();
                        let delete_list = delete_list.clone();
                        let on_delete = move |_: web_sys::MouseEvent| {
                            let delete_list = delete_list.clone();
                            spawn_local(async move {
                                match delete_list.execute(id).await {
                                    Ok(_) => set_reload_trigger.update(|v| *v += 1),
                                    Err(e) => ctx.notify_error(e.to_string()),
                                }
                            });
                        };
                        view! {
                            <li class="entity-row">
                                <a class="entity-link" on:click=move |_| ctx.navigate(Page::EditList(id))>
                                    {list.name.clone()}
                                </a>
                                <button class="button is-small" on:click=on_delete>
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
