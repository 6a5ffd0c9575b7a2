//! List Page
//!
//! Loads the list for the edit view (or starts an empty working copy for
//! the create view) and hands it to the form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ListForm;
use crate::context::AppContext;
use crate::models::List;
use crate::usecases::UseCases;

#[component]
pub fn ListPage(usecases: UseCases, id: Option<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (list, set_list) = signal(None::<List>);

    let get_list = usecases.get_list.clone();
    Effect::new(move |_| match id {
        Some(list_id) => {
            let get_list = get_list.clone();
            spawn_local(async move {
                match get_list.execute(list_id).await {
                    Ok(loaded) => set_list.set(Some(loaded)),
                    Err(e) => ctx.notify_error(e.to_string()),
                }
            });
        }
        None => set_list.set(Some(List::new())),
    });

    let create = usecases.create_list.clone();
    let update = usecases.update_list.clone();
    let delete_item = usecases.delete_list_item.clone();

    view! {
        <section class="list-page">
            <h1>{if id.is_some() { "Edit list" } else { "New list" }}</h1>
            {move || list.get().map(|loaded| view! {
                <ListForm
                    list=loaded
                    create=create.clone()
                    update=update.clone()
                    delete_item=delete_item.clone()
                />
            })}
        </section>
    }
}
