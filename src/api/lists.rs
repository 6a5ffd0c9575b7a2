//! Lists Repository
//!
//! Translates list use-case intents into HTTP calls against the `lists`
//! resource (and its nested `items` sub-resource) and maps the JSON
//! responses back into entities. One intent, one call — no retries, no
//! caching.

use crate::error::ApiError;
use crate::models::{List, PaginationInfo};

use super::http::{self, HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct ListRepository {
    base_url: String,
}

impl ListRepository {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_all(&self, page: &PaginationInfo) -> Result<Vec<List>, ApiError> {
        Self::parse_get_all(http::execute(self.build_get_all(page)).await?)
    }

    pub async fn get_by_id(&self, id: u32) -> Result<List, ApiError> {
        Self::parse_list(http::execute(self.build_get_by_id(id)).await?)
    }

    pub async fn create(&self, list: &List) -> Result<List, ApiError> {
        Self::parse_list(http::execute(self.build_create(list)?).await?)
    }

    pub async fn update(&self, id: u32, list: &List) -> Result<List, ApiError> {
        Self::parse_list(http::execute(self.build_update(id, list)?).await?)
    }

    pub async fn delete(&self, id: u32) -> Result<bool, ApiError> {
        Self::parse_delete(http::execute(self.build_delete(id)).await?)
    }

    /// Item-scoped delete: the owning list id and the item id, in that order
    pub async fn delete_item(&self, list_id: u32, item_id: u32) -> Result<bool, ApiError> {
        Self::parse_delete(http::execute(self.build_delete_item(list_id, item_id)).await?)
    }

    fn build_get_all(&self, page: &PaginationInfo) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/lists?{}", self.base_url, page.query()),
            body: None,
        }
    }

    fn build_get_by_id(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/lists/{id}", self.base_url),
            body: None,
        }
    }

    fn build_create(&self, list: &List) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(list).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/lists", self.base_url),
            body: Some(body),
        })
    }

    fn build_update(&self, id: u32, list: &List) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(list).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/lists/{id}", self.base_url),
            body: Some(body),
        })
    }

    fn build_delete(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/lists/{id}", self.base_url),
            body: None,
        }
    }

    fn build_delete_item(&self, list_id: u32, item_id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/lists/{list_id}/items/{item_id}", self.base_url),
            body: None,
        }
    }

    fn parse_get_all(response: HttpResponse) -> Result<Vec<List>, ApiError> {
        http::map_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    fn parse_list(response: HttpResponse) -> Result<List, ApiError> {
        http::map_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    fn parse_delete(response: HttpResponse) -> Result<bool, ApiError> {
        http::map_status(&response)?;
        Ok(true)
    }
}
