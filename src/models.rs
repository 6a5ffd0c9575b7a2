//! Domain Entities
//!
//! Data structures matching the remote API schema, plus the pagination
//! value object passed to the read use cases.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Persistence identity of an entity.
///
/// `Unsaved` is an explicit state rather than a reserved id value, so "not
/// yet persisted" can never be confused with a real identifier or with "no
/// selection". Serializes as the bare number / JSON `null`; an absent field
/// also reads as `Unsaved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityId {
    #[default]
    Unsaved,
    Persisted(u32),
}

impl EntityId {
    pub fn is_unsaved(&self) -> bool {
        matches!(self, EntityId::Unsaved)
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            EntityId::Unsaved => None,
            EntityId::Persisted(id) => Some(*id),
        }
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EntityId::Persisted(id) => serializer.serialize_some(id),
            EntityId::Unsaved => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<u32>::deserialize(deserializer)? {
            Some(id) => EntityId::Persisted(id),
            None => EntityId::Unsaved,
        })
    }
}

/// A list and its ordered items (order is significant and persisted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl List {
    /// Empty working copy for the create form
    pub fn new() -> Self {
        Self {
            id: EntityId::Unsaved,
            name: String::new(),
            category_id: None,
            items: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Required");
        }
        Ok(())
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

/// A single item owned by a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    #[serde(default)]
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub list_id: u32,
}

impl ListItem {
    /// Fresh modal draft for `addNewItem`: explicitly `Unsaved`, back-linked
    /// to the owning list. Id assignment is deferred to the persist call.
    pub fn draft(list_id: u32) -> Self {
        Self {
            id: EntityId::Unsaved,
            title: String::new(),
            description: String::new(),
            list_id,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Required");
        }
        Ok(())
    }
}

/// A user account. The password pair is transient submission data — present
/// only while a create/update form is in flight, never part of read models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl User {
    pub fn new() -> Self {
        Self {
            id: EntityId::Unsaved,
            name: String::new(),
            is_admin: false,
            password: None,
            confirm_password: None,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Required");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        Ok(())
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query configuration for the paginated read use cases.
/// Constructed fresh per query; it has no lifecycle of its own.
/// The sort column is not validated locally — an unknown column surfaces
/// as an API error.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationInfo {
    pub page_number: u32,
    pub page_size: u32,
    pub sort_column: String,
    pub sort_order: SortOrder,
}

impl PaginationInfo {
    pub fn new(page_number: u32, page_size: u32, sort_column: &str, sort_order: SortOrder) -> Self {
        Self {
            page_number,
            page_size,
            sort_column: sort_column.to_string(),
            sort_order,
        }
    }

    /// Canonical query string, in the parameter order the API documents
    pub fn query(&self) -> String {
        format!(
            "pageNumber={}&pageSize={}&sortColumn={}&sortOrder={}",
            self.page_number,
            self.page_size,
            self.sort_column,
            self.sort_order.as_str()
        )
    }
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self::new(1, 10, "name", SortOrder::Asc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn entity_id_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_value(EntityId::Persisted(7)).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(EntityId::Unsaved).unwrap(), Value::Null);
    }

    #[test]
    fn entity_id_deserializes_from_number_null_and_absent() {
        let item: ListItem = serde_json::from_str(r#"{"id":5,"title":"a","listId":2}"#).unwrap();
        assert_eq!(item.id, EntityId::Persisted(5));

        let item: ListItem = serde_json::from_str(r#"{"id":null,"title":"a","listId":2}"#).unwrap();
        assert_eq!(item.id, EntityId::Unsaved);

        let item: ListItem = serde_json::from_str(r#"{"title":"a","listId":2}"#).unwrap();
        assert_eq!(item.id, EntityId::Unsaved);
    }

    #[test]
    fn new_list_payload_carries_null_id_and_empty_items() {
        let mut list = List::new();
        list.name = "new list".to_string();

        let payload = serde_json::to_value(&list).unwrap();
        assert_eq!(
            payload,
            json!({"id": null, "name": "new list", "items": []})
        );
    }

    #[test]
    fn list_item_serializes_camel_case() {
        let item = ListItem {
            id: EntityId::Persisted(5),
            title: "item title".to_string(),
            description: "item description".to_string(),
            list_id: 2,
        };
        let payload = serde_json::to_value(&item).unwrap();
        assert_eq!(payload["listId"], json!(2));
        assert!(payload.get("list_id").is_none());
    }

    #[test]
    fn blank_list_name_is_required() {
        let mut list = List::new();
        assert_eq!(list.validate(), Err("Required"));
        list.name = "   ".to_string();
        assert_eq!(list.validate(), Err("Required"));
        list.name = "groceries".to_string();
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn blank_item_title_is_required() {
        let mut item = ListItem::draft(2);
        assert_eq!(item.validate(), Err("Required"));
        item.title = "milk".to_string();
        assert_eq!(item.validate(), Ok(()));
    }

    #[test]
    fn draft_item_is_unsaved_and_back_linked() {
        let item = ListItem::draft(9);
        assert!(item.id.is_unsaved());
        assert_eq!(item.list_id, 9);
    }

    #[test]
    fn user_password_pair_must_match() {
        let mut user = User::new();
        user.name = "admin".to_string();
        assert_eq!(user.validate(), Ok(()));

        user.password = Some("secret".to_string());
        user.confirm_password = Some("different".to_string());
        assert_eq!(user.validate(), Err("Passwords do not match"));

        user.confirm_password = Some("secret".to_string());
        assert_eq!(user.validate(), Ok(()));
    }

    #[test]
    fn user_read_model_omits_password_fields() {
        let user: User = serde_json::from_str(r#"{"id":1,"name":"admin","isAdmin":true}"#).unwrap();
        assert!(user.is_admin);
        assert_eq!(user.password, None);

        let payload = serde_json::to_value(&user).unwrap();
        assert!(payload.get("password").is_none());
        assert!(payload.get("confirmPassword").is_none());
    }

    #[test]
    fn pagination_query_uses_camel_case_parameters() {
        let page = PaginationInfo::new(2, 25, "name", SortOrder::Desc);
        assert_eq!(
            page.query(),
            "pageNumber=2&pageSize=25&sortColumn=name&sortOrder=desc"
        );
    }
}
