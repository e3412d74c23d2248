//! File Tree Component
//!
//! Sidebar listing of folders and files. Folders expand on click, files open
//! as tabs. Rows can be renamed in place or deleted.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, CreateTarget};
use crate::state::IdeStateStoreFields;
use crate::store::{store_delete, store_open, store_rename, store_toggle_folder, use_app_store};
use crate::tree::{flatten_tree, node_at, TreeRow};

#[component]
pub fn FileTree() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let rows = move || store.expanded().with(|expanded| store.tree().with(|tree| flatten_tree(tree, expanded)));

    view! {
        <div class="file-tree-container">
            <div class="tree-header">
                <h3>"Files"</h3>
                <button
                    class="add-folder-btn"
                    title="New at top level"
                    on:click=move |_| ctx.set_creating_under(Some(CreateTarget::Root))
                >
                    "+"
                </button>
            </div>
            <div class="tree-content">
                <For
                    each=rows
                    key=|row| (row.path.clone(), row.name.clone(), row.expanded)
                    children=move |row| view! { <FileTreeRow row=row /> }
                />
            </div>
        </div>
    }
}

#[component]
fn FileTreeRow(row: TreeRow) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (renaming, set_renaming) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let TreeRow { name, is_folder, depth, parent, path, expanded } = row;
    let indent = depth * 16;
    let name = StoredValue::new(name);
    let parent = StoredValue::new(parent);

    let on_row_click = move |_| {
        if is_folder {
            name.with_value(|name| store_toggle_folder(&store, name));
        } else if let Some(node) = store.tree().with_untracked(|tree| node_at(tree, &path).cloned()) {
            store_open(&store, node);
        }
    };

    let open_create = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if is_folder {
            ctx.set_creating_under(Some(CreateTarget::Folder(name.get_value())));
        }
    };

    let start_rename = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let current = name.get_value();
        let base = if is_folder { current.as_str() } else { current.rsplit_once('.').map_or(current.as_str(), |(b, _)| b) };
        set_draft.set(base.to_string());
        set_renaming.set(true);
    };

    let finish_rename = move || {
        if renaming.get_untracked() {
            set_renaming.set(false);
            name.with_value(|old| store_rename(&store, old, &draft.get_untracked()));
        }
    };

    let on_delete = move |_: ()| {
        name.with_value(|name| parent.with_value(|parent| store_delete(&store, name, parent.as_deref())));
    };

    view! {
        <div
            class=if is_folder { "tree-row folder" } else { "tree-row file" }
            style=format!("padding-left: {}px;", indent)
            on:click=on_row_click
            on:contextmenu=open_create
        >
            <span class="toggle-icon">
                {if !is_folder { "·" } else if expanded { "▼" } else { "▶" }}
            </span>
            <span class="node-icon">{if is_folder { "📁" } else { "📄" }}</span>
            <Show
                when=move || renaming.get()
                fallback=move || view! { <span class="node-name">{name.get_value()}</span> }
            >
                <input
                    type="text"
                    class="rename-input"
                    prop:value=move || draft.get()
                    on:click=|ev| ev.stop_propagation()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:blur=move |_| finish_rename()
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => finish_rename(),
                        "Escape" => set_renaming.set(false),
                        _ => {}
                    }
                />
            </Show>
            <div class="row-actions">
                {is_folder.then(|| view! {
                    <button class="action-btn" title="New inside" on:click=open_create>"+"</button>
                })}
                <button class="action-btn" title="Rename" on:click=start_rename>"✎"</button>
                <DeleteConfirmButton button_class="action-btn delete" on_confirm=on_delete />
            </div>
        </div>
    }
}
