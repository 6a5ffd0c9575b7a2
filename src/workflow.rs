//! List Working-Copy Workflow
//!
//! In-memory add/edit/delete/reorder operations over one form's working
//! copy of a list. Every function mutates ordering or field values only —
//! item identity is never touched, and nothing here talks to the API.

use crate::models::{EntityId, List, ListItem};

/// Stable single-element move: remove the item at `source` and reinsert it
/// at `destination`, preserving the relative order of everything else.
/// No-op when there is no destination, when source and destination are the
/// same, or when `source` does not address an item.
pub fn move_item(items: &mut Vec<ListItem>, source: usize, destination: Option<usize>) {
    let Some(destination) = destination else {
        return;
    };
    if source == destination || source >= items.len() {
        return;
    }
    let item = items.remove(source);
    let destination = destination.min(items.len());
    items.insert(destination, item);
}

/// Fold a completed modal edit back into the working copy.
///
/// An `Unsaved` draft is appended (its id stays unassigned until the list is
/// persisted). A persisted edit is matched by id and its title, description
/// and list back-reference are overwritten in place; when no item matches,
/// the edit is dropped and the working copy stays untouched.
pub fn apply_item_edit(list: &mut List, edited: ListItem) {
    match edited.id {
        EntityId::Unsaved => list.items.push(edited),
        EntityId::Persisted(_) => {
            if let Some(existing) = list.items.iter_mut().find(|item| item.id == edited.id) {
                existing.title = edited.title;
                existing.description = edited.description;
                existing.list_id = edited.list_id;
            }
        }
    }
}

/// Remove the item at `index` from the working copy. Out-of-range indices
/// are a no-op — the delete action carries no confirmation step, so a stale
/// index must never panic.
pub fn remove_item(items: &mut Vec<ListItem>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_item(id: u32, title: &str) -> ListItem {
        ListItem {
            id: EntityId::Persisted(id),
            title: title.to_string(),
            description: format!("{title} description"),
            list_id: 2,
        }
    }

    fn make_list() -> List {
        List {
            id: EntityId::Persisted(2),
            name: "list name".to_string(),
            category_id: None,
            items: vec![make_item(5, "first"), make_item(6, "second"), make_item(7, "third")],
        }
    }

    fn ids(items: &[ListItem]) -> Vec<EntityId> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn move_down_preserves_relative_order_of_the_rest() {
        let mut items = make_list().items;
        move_item(&mut items, 0, Some(2));

        assert_eq!(
            ids(&items),
            vec![EntityId::Persisted(6), EntityId::Persisted(7), EntityId::Persisted(5)]
        );
    }

    #[test]
    fn move_up_preserves_relative_order_of_the_rest() {
        let mut items = make_list().items;
        move_item(&mut items, 2, Some(0));

        assert_eq!(
            ids(&items),
            vec![EntityId::Persisted(7), EntityId::Persisted(5), EntityId::Persisted(6)]
        );
    }

    #[test]
    fn move_preserves_the_multiset_of_items() {
        let original = make_list().items;
        let mut items = original.clone();
        move_item(&mut items, 1, Some(0));

        let mut before = ids(&original);
        let mut after = ids(&items);
        before.sort_by_key(|id| id.value());
        after.sort_by_key(|id| id.value());
        assert_eq!(before, after);
    }

    #[test]
    fn move_without_destination_is_identity() {
        let original = make_list().items;
        let mut items = original.clone();
        move_item(&mut items, 0, None);
        assert_eq!(items, original);
    }

    #[test]
    fn move_onto_itself_is_identity() {
        let original = make_list().items;
        let mut items = original.clone();
        move_item(&mut items, 1, Some(1));
        assert_eq!(items, original);
    }

    #[test]
    fn move_from_out_of_range_source_is_identity() {
        let original = make_list().items;
        let mut items = original.clone();
        move_item(&mut items, 3, Some(0));
        assert_eq!(items, original);
    }

    #[test]
    fn applying_an_unsaved_draft_appends_it() {
        let mut list = make_list();
        let mut draft = ListItem::draft(2);
        draft.title = "fourth".to_string();

        apply_item_edit(&mut list, draft);

        assert_eq!(list.items.len(), 4);
        let appended = list.items.last().unwrap();
        assert!(appended.id.is_unsaved());
        assert_eq!(appended.list_id, 2);
        assert_eq!(appended.title, "fourth");
    }

    #[test]
    fn applying_a_persisted_edit_rewrites_exactly_the_matched_item() {
        let mut list = make_list();
        let mut edited = make_item(6, "renamed");
        edited.description = "new description".to_string();

        apply_item_edit(&mut list, edited);

        assert_eq!(
            ids(&list.items),
            vec![EntityId::Persisted(5), EntityId::Persisted(6), EntityId::Persisted(7)]
        );
        assert_eq!(list.items[1].title, "renamed");
        assert_eq!(list.items[1].description, "new description");
        assert_eq!(list.items[0].title, "first");
        assert_eq!(list.items[2].title, "third");
    }

    #[test]
    fn an_edit_with_no_matching_id_is_dropped() {
        let mut list = make_list();
        let original = list.clone();

        apply_item_edit(&mut list, make_item(99, "ghost"));

        assert_eq!(list, original);
    }

    #[test]
    fn remove_deletes_exactly_the_targeted_element() {
        let mut items = make_list().items;
        remove_item(&mut items, 1);

        assert_eq!(ids(&items), vec![EntityId::Persisted(5), EntityId::Persisted(7)]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let original = make_list().items;
        let mut items = original.clone();
        remove_item(&mut items, 3);
        assert_eq!(items, original);
    }

    #[test]
    fn dragging_an_item_down_yields_the_reordered_update_payload() {
        // {id:2, name:"list name", items:[5, 6]} + drag item 5 down one
        // position = the exact body the Update use case should send.
        let mut list = List {
            id: EntityId::Persisted(2),
            name: "list name".to_string(),
            category_id: None,
            items: vec![make_item(5, "first"), make_item(6, "second")],
        };

        move_item(&mut list.items, 0, Some(1));

        let payload = serde_json::to_value(&list).unwrap();
        assert_eq!(payload["id"], json!(2));
        assert_eq!(payload["name"], json!("list name"));
        assert_eq!(payload["items"][0]["id"], json!(6));
        assert_eq!(payload["items"][1]["id"], json!(5));
    }
}
