//! Error Toast Component
//!
//! Shared surface for API failures fed through `AppContext::notify_error`.
//! Dismisses itself after a few seconds, or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

const DISMISS_AFTER_MS: u32 = 4_000;

#[component]
pub fn ErrorToast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    Effect::new(move |_| {
        if ctx.error.get().is_some() {
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                ctx.clear_error();
            });
        }
    });

    view! {
        <Show when=move || ctx.error.get().is_some()>
            <div class="error-toast" on:click=move |_| ctx.clear_error()>
                {move || ctx.error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
