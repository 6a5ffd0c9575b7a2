//! Todos Admin Frontend App
//!
//! Builds the use-case bundle, restores the cached session and renders the
//! page selected by the navigation signal.

use leptos::prelude::*;

use crate::components::{ErrorToast, ListPage, ListsPage, UserPage, UsersPage};
use crate::config;
use crate::context::{AppContext, Page};
use crate::session;
use crate::usecases::UseCases;

#[component]
pub fn App() -> impl IntoView {
    let usecases = UseCases::new(config::api_base_url());

    // State
    let (session, set_session) = signal(session::load());
    let (page, set_page) = signal(Page::Lists);
    let (error, set_error) = signal(None::<String>);

    // Provide context to all children
    let ctx = AppContext::new((session, set_session), (page, set_page), (error, set_error));
    provide_context(ctx);

    let is_admin = move || session.get().map(|user| user.is_admin).unwrap_or(false);

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <span class="app-title">"Todos Admin"</span>
                <nav class="section-tabs">
                    <button
                        class=move || if matches!(page.get(), Page::Users | Page::NewUser | Page::EditUser(_)) { "tab" } else { "tab active" }
                        on:click=move |_| ctx.navigate(Page::Lists)
                    >
                        "Lists"
                    </button>
                    <Show when=is_admin>
                        <button
                            class=move || if matches!(page.get(), Page::Users | Page::NewUser | Page::EditUser(_)) { "tab active" } else { "tab" }
                            on:click=move |_| ctx.navigate(Page::Users)
                        >
                            "Users"
                        </button>
                    </Show>
                </nav>
                {move || session.get().map(|user| view! {
                    <span class="session-user">{user.name.clone()}</span>
                    <button class="button is-small" on:click=move |_| ctx.sign_out()>
                        "Sign out"
                    </button>
                })}
            </header>

            <main class="main-content">
                {move || {
                    let usecases = usecases.clone();
                    match page.get() {
                        Page::Lists => view! { <ListsPage usecases=usecases/> }.into_any(),
                        Page::NewList => view! { <ListPage usecases=usecases id=None/> }.into_any(),
                        Page::EditList(id) => view! { <ListPage usecases=usecases id=Some(id)/> }.into_any(),
                        Page::Users => view! { <UsersPage usecases=usecases/> }.into_any(),
                        Page::NewUser => view! { <UserPage usecases=usecases id=None/> }.into_any(),
                        Page::EditUser(id) => view! { <UserPage usecases=usecases id=Some(id)/> }.into_any(),
                    }
                }}
            </main>

            <ErrorToast/>
        </div>
    }
}
