//! Application Use Cases
//!
//! One struct per operation, bundled for explicit injection: `App` builds
//! the bundle once from the configured base URL, pages take it as a prop,
//! and each form receives exactly the use-case instances it needs. There is
//! no global registry — tests construct use cases directly.

mod lists;
mod users;

pub use lists::{
    CreateListUseCase, DeleteListItemUseCase, DeleteListUseCase, GetListUseCase, GetListsUseCase,
    UpdateListUseCase,
};
pub use users::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, GetUsersUseCase, UpdateUserUseCase,
};

use crate::api::{ListRepository, UserRepository};

/// Every application operation, constructed once per app instance
#[derive(Clone)]
pub struct UseCases {
    pub get_lists: GetListsUseCase,
    pub get_list: GetListUseCase,
    pub create_list: CreateListUseCase,
    pub update_list: UpdateListUseCase,
    pub delete_list: DeleteListUseCase,
    pub delete_list_item: DeleteListItemUseCase,
    pub get_users: GetUsersUseCase,
    pub get_user: GetUserUseCase,
    pub create_user: CreateUserUseCase,
    pub update_user: UpdateUserUseCase,
    pub delete_user: DeleteUserUseCase,
}

impl UseCases {
    pub fn new(base_url: &str) -> Self {
        let lists = ListRepository::new(base_url);
        let users = UserRepository::new(base_url);
        Self {
            get_lists: GetListsUseCase::new(lists.clone()),
            get_list: GetListUseCase::new(lists.clone()),
            create_list: CreateListUseCase::new(lists.clone()),
            update_list: UpdateListUseCase::new(lists.clone()),
            delete_list: DeleteListUseCase::new(lists.clone()),
            delete_list_item: DeleteListItemUseCase::new(lists),
            get_users: GetUsersUseCase::new(users.clone()),
            get_user: GetUserUseCase::new(users.clone()),
            create_user: CreateUserUseCase::new(users.clone()),
            update_user: UpdateUserUseCase::new(users.clone()),
            delete_user: DeleteUserUseCase::new(users),
        }
    }
}
