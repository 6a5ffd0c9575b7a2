//! Users Repository
//!
//! Account management calls against the `users` resource. Same shape as the
//! lists repository: one use-case intent, one HTTP call, entities in and out.

use crate::error::ApiError;
use crate::models::{PaginationInfo, User};

use super::http::{self, HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct UserRepository {
    base_url: String,
}

impl UserRepository {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_all(&self, page: &PaginationInfo) -> Result<Vec<User>, ApiError> {
        Self::parse_get_all(http::execute(self.build_get_all(page)).await?)
    }

    pub async fn get_by_id(&self, id: u32) -> Result<User, ApiError> {
        Self::parse_user(http::execute(self.build_get_by_id(id)).await?)
    }

    pub async fn create(&self, user: &User) -> Result<User, ApiError> {
        Self::parse_user(http::execute(self.build_create(user)?).await?)
    }

    pub async fn update(&self, id: u32, user: &User) -> Result<User, ApiError> {
        Self::parse_user(http::execute(self.build_update(id, user)?).await?)
    }

    pub async fn delete(&self, id: u32) -> Result<bool, ApiError> {
        Self::parse_delete(http::execute(self.build_delete(id)).await?)
    }

    fn build_get_all(&self, page: &PaginationInfo) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/users?{}", self.base_url, page.query()),
            body: None,
        }
    }

    fn build_get_by_id(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/users/{id}", self.base_url),
            body: None,
        }
    }

    fn build_create(&self, user: &User) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(user).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/users", self.base_url),
            body: Some(body),
        })
    }

    fn build_update(&self, id: u32, user: &User) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(user).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/users/{id}", self.base_url),
            body: Some(body),
        })
    }

    fn build_delete(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/users/{id}", self.base_url),
            body: None,
        }
    }

    fn parse_get_all(response: HttpResponse) -> Result<Vec<User>, ApiError> {
        http::map_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    fn parse_user(response: HttpResponse) -> Result<User, ApiError> {
        http::map_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    fn parse_delete(response: HttpResponse) -> Result<bool, ApiError> {
        http::map_status(&response)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, SortOrder};

    fn repository() -> UserRepository {
        UserRepository::new("http://localhost:3000/api")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn get_all_builds_a_paginated_get() {
        let page = PaginationInfo::new(3, 25, "name", SortOrder::Desc);
        let req = repository().build_get_all(&page);
        assert_eq!(
            req.url,
            "http://localhost:3000/api/users?pageNumber=3&pageSize=25&sortColumn=name&sortOrder=desc"
        );
    }

    #[test]
    fn create_carries_the_transient_password_pair() {
        let user = User {
            id: EntityId::Unsaved,
            name: "new user".to_string(),
            is_admin: false,
            password: Some("secret".to_string()),
            confirm_password: Some("secret".to_string()),
        };
        let req = repository().build_create(&user).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/api/users");

        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["password"], "secret");
        assert_eq!(body["confirmPassword"], "secret");
        assert_eq!(body["isAdmin"], false);
    }

    #[test]
    fn update_without_password_omits_the_pair() {
        let user = User {
            id: EntityId::Persisted(4),
            name: "renamed".to_string(),
            is_admin: true,
            password: None,
            confirm_password: None,
        };
        let req = repository().build_update(4, &user).unwrap();
        assert_eq!(req.url, "http://localhost:3000/api/users/4");

        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert!(body.get("password").is_none());
        assert!(body.get("confirmPassword").is_none());
    }

    #[test]
    fn parse_read_model_has_no_password() {
        let user =
            UserRepository::parse_user(response(200, r#"{"id":4,"name":"admin","isAdmin":true}"#))
                .unwrap();
        assert_eq!(user.id, EntityId::Persisted(4));
        assert!(user.is_admin);
        assert_eq!(user.password, None);
    }

    #[test]
    fn parse_missing_user_is_not_found() {
        let err = UserRepository::parse_user(response(404, "")).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn delete_targets_the_record() {
        let req = repository().build_delete(4);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/api/users/4");
    }
}
