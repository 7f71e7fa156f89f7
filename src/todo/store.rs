//! In-memory todo store.
//!
//! The process-lifetime collection behind the REST collaborator. List ids
//! are positions in the creation order, which is why lists can be created
//! but never removed - removal would shift every later id.

use super::item::ItemStatus;
use super::list::TodoList;

/// All todo lists, in creation order. List id == position.
#[derive(Debug, Clone, Default)]
pub struct Store {
    lists: Vec<TodoList>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo data the original service boots with: two lists, four
    /// items, one already completed.
    pub fn seed_demo() -> Self {
        let mut store = Self::new();

        let groceries = store.create_list("Grocery List").id;
        let chores = store.create_list("Weekend Chores").id;

        store.get_mut(groceries).expect("just created").add_item("Apples");
        store.get_mut(groceries).expect("just created").add_item("Eggs");
        store.get_mut(chores).expect("just created").add_item("Laundry");
        store
            .get_mut(chores)
            .expect("just created")
            .add_item("Water Plants");
        store
            .get_mut(groceries)
            .expect("just created")
            .update_item(1, "Apples", ItemStatus::Complete);

        store
    }

    /// Create a new empty list with the next positional id.
    pub fn create_list(&mut self, name: impl Into<String>) -> &TodoList {
        let id = self.lists.len();
        self.lists.push(TodoList::new(id, name));
        self.lists.last().expect("just pushed")
    }

    pub fn get(&self, id: usize) -> Option<&TodoList> {
        self.lists.get(id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut TodoList> {
        self.lists.get_mut(id)
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_list_ids() {
        let mut store = Store::new();
        assert_eq!(store.create_list("a").id, 0);
        assert_eq!(store.create_list("b").id, 1);
        assert_eq!(store.get(1).unwrap().name, "b");
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_seed_demo_shape() {
        let store = Store::seed_demo();
        assert_eq!(store.lists().len(), 2);

        let groceries = store.get(0).unwrap();
        assert_eq!(groceries.name, "Grocery List");
        assert_eq!(groceries.items.len(), 2);
        assert!(groceries.item(1).unwrap().is_complete());
        assert!(!groceries.item(2).unwrap().is_complete());

        let chores = store.get(1).unwrap();
        assert_eq!(chores.name, "Weekend Chores");
        assert_eq!(chores.items.len(), 2);
    }
}
