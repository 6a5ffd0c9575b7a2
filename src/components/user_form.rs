//! User Form Component
//!
//! Binds one account to editable fields. The password pair is transient
//! submission data: empty inputs mean "leave the password alone" on update
//! and are never sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::{AppContext, Page};
use crate::models::User;
use crate::usecases::{CreateUserUseCase, UpdateUserUseCase};

#[component]
pub fn UserForm(user: User, create: CreateUserUseCase, update: UpdateUserUseCase) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let user_id = user.id;
    let (name, set_name) = signal(user.name.clone());
    let (is_admin, set_is_admin) = signal(user.is_admin);
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<&'static str>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let password = password.get();
        let confirm = confirm_password.get();
        let user = User {
            id: user_id,
            name: name.get(),
            is_admin: is_admin.get(),
            password: if password.is_empty() { None } else { Some(password) },
            confirm_password: if confirm.is_empty() { None } else { Some(confirm) },
        };
        if let Err(message) = user.validate() {
            set_form_error.set(Some(message));
            return;
        }
        set_form_error.set(None);

        let create = create.clone();
        let update = update.clone();
        spawn_local(async move {
            let result = match user.id.value() {
                None => create.execute(&user).await,
                Some(id) => update.execute(id, &user).await,
            };
            match result {
                Ok(_) => ctx.navigate(Page::Users),
                Err(e) => ctx.notify_error(e.to_string()),
            }
        });
    };

    view! {
        <form class="user-form" on:submit=on_submit>
            <div class="field">
                <label class="label" for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    class="input"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
            </div>
            <div class="field">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_admin.get()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_is_admin.set(input.checked());
                        }
                    />
                    " Administrator"
                </label>
            </div>
            <div class="field">
                <label class="label" for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    class="input"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />
            </div>
            <div class="field">
                <label class="label" for="confirmPassword">"Confirm password"</label>
                <input
                    id="confirmPassword"
                    type="password"
                    class="input"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_confirm_password.set(input.value());
                    }
                />
            </div>
            <Show when=move || form_error.get().is_some()>
                <p class="field-error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
            <div class="field is-grouped">
                <button class="button" type="submit">
                    {move || if user_id.is_unsaved() { "CREATE" } else { "SAVE" }}
                </button>
                <button class="button" type="button" on:click=move |_| ctx.navigate(Page::Users)>
                    "CANCEL"
                </button>
            </div>
        </form>
    }
}
