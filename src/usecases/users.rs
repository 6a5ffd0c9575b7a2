//! User Use Cases
//!
//! Account operations, one type per operation. Only reachable from the
//! admin section of the UI; authorization itself is the API's concern.

use crate::api::UserRepository;
use crate::error::ApiError;
use crate::models::{PaginationInfo, User};

#[derive(Debug, Clone)]
pub struct GetUsersUseCase {
    repository: UserRepository,
}

impl GetUsersUseCase {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, page: &PaginationInfo) -> Result<Vec<User>, ApiError> {
        self.repository.get_all(page).await
    }
}

#[derive(Debug, Clone)]
pub struct GetUserUseCase {
    repository: UserRepository,
}

impl GetUserUseCase {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: u32) -> Result<User, ApiError> {
        self.repository.get_by_id(id).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserUseCase {
    repository: UserRepository,
}

impl CreateUserUseCase {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user: &User) -> Result<User, ApiError> {
        self.repository.create(user).await
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUserUseCase {
    repository: UserRepository,
}

impl UpdateUserUseCase {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: u32, user: &User) -> Result<User, ApiError> {
        self.repository.update(id, user).await
    }
}

#[derive(Debug, Clone)]
pub struct DeleteUserUseCase {
    repository: UserRepository,
}

impl DeleteUserUseCase {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: u32) -> Result<bool, ApiError> {
        self.repository.delete(id).await
    }
}
