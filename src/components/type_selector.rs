//! Type Selector Component
//!
//! One button per kind of node the create form can make.

use leptos::prelude::*;

use crate::models::{LeafKind, LEAF_KINDS};
use crate::state::NewNode;

fn option_label(what: NewNode) -> String {
    match what {
        NewNode::Folder => "Create Folder".to_string(),
        NewNode::File(kind) => format!("Create .{} File", kind.extension()),
    }
}

fn option_class(what: NewNode) -> &'static str {
    match what {
        NewNode::Folder => "type-btn folder",
        NewNode::File(LeafKind::PlainText) => "type-btn plain",
        NewNode::File(LeafKind::Kanban) => "type-btn kanban",
        NewNode::File(LeafKind::Checklist) => "type-btn checklist",
        NewNode::File(LeafKind::MarkdownDoc) => "type-btn markdown",
    }
}

/// Create-type buttons
#[component]
pub fn TypeSelector(on_pick: impl Fn(NewNode) + Copy + 'static) -> impl IntoView {
    let options = std::iter::once(NewNode::Folder).chain(LEAF_KINDS.into_iter().map(NewNode::File));

    view! {
        <div class="type-selector">
            {options.map(|what| view! {
                <button type="button" class=option_class(what) on:click=move |_| on_pick(what)>
                    {option_label(what)}
                </button>
            }).collect_view()}
        </div>
    }
}
