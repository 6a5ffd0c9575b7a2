//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::session::{self, UserInfo};

/// Top-level navigation target. Plain signal state, not a router — the URL
/// never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Lists,
    NewList,
    EditList(u32),
    Users,
    NewUser,
    EditUser(u32),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session restored from local storage - read
    pub session: ReadSignal<Option<UserInfo>>,
    set_session: WriteSignal<Option<UserInfo>>,
    /// Currently rendered page - read
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    /// Message for the shared error toast - read
    pub error: ReadSignal<Option<String>>,
    set_error: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<Option<UserInfo>>, WriteSignal<Option<UserInfo>>),
        page: (ReadSignal<Page>, WriteSignal<Page>),
        error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            page: page.0,
            set_page: page.1,
            error: error.0,
            set_error: error.1,
        }
    }

    /// Switch the rendered page
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Surface an API failure in the shared toast
    pub fn notify_error(&self, message: String) {
        self.set_error.set(Some(message));
    }

    pub fn clear_error(&self) {
        self.set_error.set(None);
    }

    /// Forget the cached session and fall back to the signed-out state
    pub fn sign_out(&self) {
        session::clear();
        self.set_session.set(None);
    }
}
