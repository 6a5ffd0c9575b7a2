//! List Use Cases
//!
//! One application operation per type, each delegating to exactly one
//! repository call. Outcomes (entities or `ApiError`) flow back to the
//! caller unchanged — no caching, no retries, no batching.

use crate::api::ListRepository;
use crate::error::ApiError;
use crate::models::{List, PaginationInfo};

#[derive(Debug, Clone)]
pub struct GetListsUseCase {
    repository: ListRepository,
}

impl GetListsUseCase {
    pub fn new(repository: ListRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, page: &PaginationInfo) -> Result<Vec<List>, ApiError> {
        self.repository.get_all(page).await
    }
}

#[derive(Debug, Clone)]
pub struct GetListUseCase {
    repository: ListRepository,
}

impl GetListUseCase {
    pub fn new(repository: ListRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: u32) -> Result<List, ApiError> {
        self.repository.get_by_id(id).await
    }
}

/// Returns the persisted list, including its newly assigned identifier
#[derive(Debug, Clone)]
pub struct CreateListUseCase {
    repository: ListRepository,
}

impl CreateListUseCase {
    pub fn new(repository: ListRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, list: &List) -> Result<List, ApiError> {
        self.repository.create(list).await
    }
}

#[derive(Debug, Clone)]
pub struct UpdateListUseCase {
    repository: ListRepository,
}

impl UpdateListUseCase {
    pub fn new(repository: ListRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: u32, list: &List) -> Result<List, ApiError> {
        self.repository.update(id, list).await
    }
}

#[derive(Debug, Clone)]
pub struct DeleteListUseCase {
    repository: ListRepository,
}

impl DeleteListUseCase {
    pub fn new(repository: ListRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: u32) -> Result<bool, ApiError> {
        self.repository.delete(id).await
    }
}

/// Item-scoped delete: takes the owning list id and the item id, forwarded
/// positionally to the repository
#[derive(Debug, Clone)]
pub struct DeleteListItemUseCase {
    repository: ListRepository,
}

impl DeleteListItemUseCase {
    pub fn new(repository: ListRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, list_id: u32, item_id: u32) -> Result<bool, ApiError> {
        self.repository.delete_item(list_id, item_id).await
    }
}
