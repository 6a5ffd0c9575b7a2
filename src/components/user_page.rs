//! User Page
//!
//! Loads the account for the edit view (or starts a blank one for the
//! create view) and hands it to the form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::UserForm;
use crate::context::AppContext;
use crate::models::User;
use crate::usecases::UseCases;

#[component]
pub fn UserPage(usecases: UseCases, id: Option<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (user, set_user) = signal(None::<User>);

    let get_user = usecases.get_user.clone();
    Effect::new(move |_| match id {
        Some(user_id) => {
            let get_user = get_user.clone();
            spawn_local(async move {
                match get_user.execute(user_id).await {
                    Ok(loaded) => set_user.set(Some(loaded)),
                    Err(e) => ctx.notify_error(e.to_string()),
                }
            });
        }
        None => set_user.set(Some(User::new())),
    });

    let create = usecases.create_user.clone();
    let update = usecases.update_user.clone();

    view! {
        <section class="user-page">
            <h1>{if id.is_some() { "Edit user" } else { "New user" }}</h1>
            {move || user.get().map(|loaded| view! {
                <UserForm user=loaded create=create.clone() update=update.clone()/>
            })}
        </section>
    }
}
