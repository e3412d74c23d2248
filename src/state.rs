//! IDE State
//!
//! The tree, the open tabs and the active tab, plus the sidebar view state.
//! Every operation takes a snapshot and produces the next one; the store
//! layer replaces its fields with the result.

use std::collections::HashSet;

use reactive_stores::Store;

use crate::models::{LeafKind, Node};
use crate::tree;

/// What the create menu makes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewNode {
    Folder,
    File(LeafKind),
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct IdeState {
    /// Top-level nodes
    pub tree: Vec<Node>,
    /// Snapshots of open leaves, in opening order, unique by name
    pub open_tabs: Vec<Node>,
    /// Currently displayed tab
    pub active: Option<Node>,
    /// Expanded folder names
    pub expanded: HashSet<String>,
    pub sidebar_open: bool,
    /// Markdown docs show rendered output instead of the textarea
    pub preview_mode: bool,
}

impl IdeState {
    pub fn new(tree: Vec<Node>, sidebar_open: bool) -> Self {
        Self {
            tree,
            sidebar_open,
            ..Default::default()
        }
    }

    /// Open `node` as a tab (deduplicated by name) and make it active
    pub fn open(&mut self, node: Node) {
        if node.is_folder() {
            return;
        }
        if !self.open_tabs.iter().any(|tab| tab.name == node.name) {
            self.open_tabs.push(node.clone());
        }
        log::debug!("[TABS] open {}", node.name);
        self.active = Some(node);
    }

    /// Close a tab. Closing the active tab leaves nothing selected.
    pub fn close(&mut self, name: &str) {
        self.open_tabs.retain(|tab| tab.name != name);
        if self.active.as_ref().is_some_and(|a| a.name == name) {
            self.active = None;
        }
    }

    /// Activate an already open tab
    pub fn select(&mut self, name: &str) {
        if let Some(tab) = self.open_tabs.iter().find(|tab| tab.name == name) {
            self.active = Some(tab.clone());
        }
    }

    /// Write leaf content into the tree and every view of that leaf
    pub fn set_content(&mut self, name: &str, content: &str) {
        self.tree = tree::set_content(&self.tree, name, content);
        for tab in self.open_tabs.iter_mut().filter(|tab| tab.name == name) {
            tab.content = Some(content.to_string());
        }
        if let Some(active) = self.active.as_mut().filter(|a| a.name == name) {
            active.content = Some(content.to_string());
        }
    }

    /// Create a folder or file under `parent` (None = top level).
    /// Blank names are ignored. Returns the created node's name.
    pub fn create(&mut self, parent: Option<&str>, name: &str, what: NewNode) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let node = match what {
            NewNode::Folder => Node::folder(name),
            NewNode::File(kind) => Node::file(name, kind),
        };
        let created = node.name.clone();
        match parent {
            Some(parent) => {
                self.tree = tree::insert(&self.tree, parent, node);
                self.expanded.insert(parent.to_string());
            }
            None => self.tree = tree::insert_root(&self.tree, node),
        }
        log::info!("[TREE] created {} under {:?}", created, parent);
        Some(created)
    }

    /// Delete by name, optionally scoped to a parent folder.
    /// Open tabs are left alone.
    pub fn delete(&mut self, name: &str, parent: Option<&str>) {
        self.tree = tree::remove(&self.tree, name, parent);
        log::info!("[TREE] deleted {} (parent {:?})", name, parent);
    }

    /// Rename the first node named `old`. Leaves keep their extension.
    pub fn rename(&mut self, old: &str, new_base: &str) -> Option<String> {
        let base = new_base.trim();
        let Some(node) = tree::find(&self.tree, old) else {
            log::debug!("[TREE] rename: {:?} not found", old);
            return None;
        };
        if base.is_empty() {
            log::debug!("[TREE] rename: blank name for {:?} ignored", old);
            return None;
        }
        let new_name = match node.leaf_kind() {
            Some(kind) => format!("{}.{}", base, kind.extension()),
            None => base.to_string(),
        };
        let was_folder = node.is_folder();
        self.tree = tree::rename(&self.tree, old, &new_name);

        if was_folder && self.expanded.remove(old) {
            self.expanded.insert(new_name.clone());
        }
        for tab in self.open_tabs.iter_mut().filter(|tab| tab.name == old) {
            tab.name = new_name.clone();
        }
        // Renaming onto an open name merges the two tabs into the first one
        let mut seen = HashSet::new();
        self.open_tabs.retain(|tab| seen.insert(tab.name.clone()));
        if let Some(active) = self.active.as_mut().filter(|a| a.name == old) {
            active.name = new_name.clone();
        }
        log::info!("[TREE] renamed {} -> {}", old, new_name);
        Some(new_name)
    }

    pub fn toggle_folder(&mut self, name: &str) {
        if !self.expanded.remove(name) {
            self.expanded.insert(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeKind;

    fn seeded() -> IdeState {
        let mut state = IdeState::new(vec![Node::folder("docs"), Node::file("a", LeafKind::PlainText)], true);
        state.create(Some("docs"), "b", NewNode::File(LeafKind::Checklist));
        state
    }

    fn leaf(state: &IdeState, name: &str) -> Node {
        tree::find(&state.tree, name).cloned().unwrap()
    }

    #[test]
    fn test_open_dedups_and_activates() {
        let mut state = seeded();
        state.open(leaf(&state, "a.ed"));
        state.open(leaf(&state, "b.lt"));
        state.open(leaf(&state, "a.ed"));

        let names: Vec<_> = state.open_tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a.ed", "b.lt"]);
        assert_eq!(state.active.as_ref().unwrap().name, "a.ed");
    }

    #[test]
    fn test_open_ignores_folders() {
        let mut state = seeded();
        state.open(leaf(&state, "docs"));
        assert!(state.open_tabs.is_empty());
        assert!(state.active.is_none());
    }

    #[test]
    fn test_close_active_selects_nothing() {
        let mut state = seeded();
        state.open(leaf(&state, "a.ed"));
        state.open(leaf(&state, "b.lt"));
        state.close("b.lt");

        assert_eq!(state.open_tabs.len(), 1);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut state = seeded();
        state.open(leaf(&state, "a.ed"));
        state.open(leaf(&state, "b.lt"));
        state.close("a.ed");
        assert_eq!(state.active.as_ref().unwrap().name, "b.lt");
    }

    #[test]
    fn test_select_only_open_tabs() {
        let mut state = seeded();
        state.open(leaf(&state, "a.ed"));
        state.open(leaf(&state, "b.lt"));
        state.select("a.ed");
        assert_eq!(state.active.as_ref().unwrap().name, "a.ed");

        state.select("docs");
        assert_eq!(state.active.as_ref().unwrap().name, "a.ed");
    }

    #[test]
    fn test_set_content_syncs_all_views() {
        let mut state = seeded();
        state.open(leaf(&state, "a.ed"));
        state.set_content("a.ed", "hello");

        assert_eq!(leaf(&state, "a.ed").content.as_deref(), Some("hello"));
        assert_eq!(state.open_tabs[0].content.as_deref(), Some("hello"));
        assert_eq!(state.active.as_ref().unwrap().content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_create_under_folder_expands_it() {
        let state = seeded();
        let docs = leaf(&state, "docs");
        assert_eq!(docs.children.len(), 1);
        assert_eq!(docs.children[0].name, "b.lt");
        assert_eq!(docs.children[0].kind, NodeKind::Checklist);
        assert!(state.expanded.contains("docs"));
    }

    #[test]
    fn test_create_rejects_blank_and_trims() {
        let mut state = seeded();
        assert_eq!(state.create(None, "   ", NewNode::Folder), None);
        assert_eq!(state.create(None, " notes ", NewNode::Folder).as_deref(), Some("notes"));
        assert_eq!(state.tree.last().unwrap().name, "notes");
    }

    #[test]
    fn test_delete_keeps_open_tab() {
        let mut state = seeded();
        state.open(leaf(&state, "b.lt"));
        state.delete("b.lt", Some("docs"));

        assert!(tree::find(&state.tree, "b.lt").is_none());
        assert_eq!(state.open_tabs.len(), 1);
        // Editing an orphaned tab still updates the tab itself
        state.set_content("b.lt", "[]");
        assert_eq!(state.open_tabs[0].content.as_deref(), Some("[]"));
    }

    #[test]
    fn test_rename_keeps_extension_and_follows_tabs() {
        let mut state = seeded();
        state.open(leaf(&state, "b.lt"));
        let renamed = state.rename("b.lt", "groceries");

        assert_eq!(renamed.as_deref(), Some("groceries.lt"));
        assert!(tree::find(&state.tree, "groceries.lt").is_some());
        assert_eq!(state.open_tabs[0].name, "groceries.lt");
        assert_eq!(state.active.as_ref().unwrap().name, "groceries.lt");
    }

    #[test]
    fn test_rename_onto_open_name_keeps_tabs_unique() {
        let mut state = seeded();
        state.create(None, "c", NewNode::File(LeafKind::PlainText));
        state.open(leaf(&state, "a.ed"));
        state.open(leaf(&state, "c.ed"));
        state.rename("a.ed", "c");

        let names: Vec<_> = state.open_tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["c.ed"]);
        assert_eq!(state.active.as_ref().unwrap().name, "c.ed");

        state.close("c.ed");
        assert!(state.open_tabs.is_empty());
    }

    #[test]
    fn test_rename_folder_moves_expansion() {
        let mut state = seeded();
        state.rename("docs", "papers");
        assert!(state.expanded.contains("papers"));
        assert!(!state.expanded.contains("docs"));
        assert_eq!(state.rename("ghost", "x"), None);
        assert_eq!(state.rename("papers", "  "), None);
    }

    #[test]
    fn test_toggle_folder() {
        let mut state = seeded();
        state.toggle_folder("docs");
        assert!(!state.expanded.contains("docs"));
        state.toggle_folder("docs");
        assert!(state.expanded.contains("docs"));
    }
}
