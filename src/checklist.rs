//! Checklist State
//!
//! Item list behind a `.lt` leaf.

use crate::content::{encode_items, generate_id, load_items};
use crate::models::ChecklistItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn from_content(name: &str, content: &str) -> Self {
        Self { items: load_items(name, content) }
    }

    pub fn to_content(&self) -> String {
        encode_items(&self.items).unwrap_or_else(|e| {
            log::error!("[CHECKLIST] {}", e);
            String::from("[]")
        })
    }

    /// Append a new unchecked item; blank text is ignored
    pub fn add(&mut self, text: &str) -> Option<&ChecklistItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = generate_id(self.items.iter().map(|i| i.id.as_str()));
        self.items.push(ChecklistItem { id, text: text.to_string(), completed: false });
        self.items.last()
    }

    /// Flip completion of the item with `id`
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}
