//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Mutations run on
//! an untracked snapshot of `IdeState`; only fields that changed are written
//! back, so each UI action is one wholesale state replacement.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Node;
use crate::state::{IdeState, IdeStateStoreFields, NewNode};

/// Type alias for the store
pub type AppStore = Store<IdeState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

fn snapshot(store: &AppStore) -> IdeState {
    IdeState {
        tree: store.tree().get_untracked(),
        open_tabs: store.open_tabs().get_untracked(),
        active: store.active().get_untracked(),
        expanded: store.expanded().get_untracked(),
        sidebar_open: store.sidebar_open().get_untracked(),
        preview_mode: store.preview_mode().get_untracked(),
    }
}

fn commit(store: &AppStore, prev: &IdeState, next: IdeState) {
    if next.tree != prev.tree {
        store.tree().set(next.tree);
    }
    if next.open_tabs != prev.open_tabs {
        store.open_tabs().set(next.open_tabs);
    }
    if next.active != prev.active {
        store.active().set(next.active);
    }
    if next.expanded != prev.expanded {
        store.expanded().set(next.expanded);
    }
    if next.sidebar_open != prev.sidebar_open {
        store.sidebar_open().set(next.sidebar_open);
    }
    if next.preview_mode != prev.preview_mode {
        store.preview_mode().set(next.preview_mode);
    }
}

/// Run a state transition against the store
pub fn store_apply<R>(store: &AppStore, f: impl FnOnce(&mut IdeState) -> R) -> R {
    let prev = snapshot(store);
    let mut next = prev.clone();
    let result = f(&mut next);
    commit(store, &prev, next);
    result
}

// ========================
// Store Helper Functions
// ========================

pub fn store_open(store: &AppStore, node: Node) {
    store_apply(store, |s| s.open(node));
}

pub fn store_close(store: &AppStore, name: &str) {
    store_apply(store, |s| s.close(name));
}

pub fn store_select(store: &AppStore, name: &str) {
    store_apply(store, |s| s.select(name));
}

/// Route an editor's serialized content back into the tree and tabs
pub fn store_set_content(store: &AppStore, name: &str, content: &str) {
    store_apply(store, |s| s.set_content(name, content));
}

pub fn store_create(store: &AppStore, parent: Option<&str>, name: &str, what: NewNode) -> Option<String> {
    store_apply(store, |s| s.create(parent, name, what))
}

pub fn store_delete(store: &AppStore, name: &str, parent: Option<&str>) {
    store_apply(store, |s| s.delete(name, parent));
}

/// Rename from the sidebar; a blank or unknown rename is a logged no-op
pub fn store_rename(store: &AppStore, old: &str, new_base: &str) {
    store_apply(store, |s| {
        s.rename(old, new_base);
    });
}

pub fn store_toggle_folder(store: &AppStore, name: &str) {
    store_apply(store, |s| s.toggle_folder(name));
}
