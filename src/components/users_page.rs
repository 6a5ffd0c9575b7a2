//! Users Page
//!
//! Admin-only overview of user accounts with add / edit / delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, Page};
use crate::models::{PaginationInfo, User};
use crate::usecases::UseCases;

#[component]
pub fn UsersPage(usecases: UseCases) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (users, set_users) = signal(Vec::<User>::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let get_users = usecases.get_users.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let get_users = get_users.clone();
        spawn_local(async move {
            match get_users.execute(&PaginationInfo::default()).await {
                Ok(loaded) => set_users.set(loaded),
                Err(e) => ctx.notify_error(e.to_string()),
            }
        });
    });

    let delete_user = usecases.delete_user.clone();

    view! {
        <section class="users-page">
            <div class="page-header">
                <h1>"Users"</h1>
                <button class="button" on:click=move |_| ctx.navigate(Page::NewUser)>
                    "Add"
                </button>
            </div>
            <ul class="entity-rows">
                <For
                    each=move || users.get()
                    key=|user| (user.id, user.name.clone(), user.is_admin)
                    children=move |user: User| {
                        let id = user.id.value().unwrap_or_default();
                        let delete_user = delete_user.clone();
                        let on_delete = move |_: web_sys::MouseEvent| {
                            let delete_user = delete_user.clone();
                            spawn_local(async move {
                                match delete_user.execute(id).await {
                                    Ok(_) => set_reload_trigger.update(|v| *v += 1),
                                    Err(e) => ctx.notify_error(e.to_string()),
                                }
                            });
                        };
                        view! {
                            <li class="entity-row">
                                <a class="entity-link" on:click=move |_| ctx.navigate(Page::EditUser(id))>
                                    {user.name.clone()}
                                </a>
                                {user.is_admin.then(|| view! {
                                    <span class="admin-badge">"admin"</span>
                                })}
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
