//! Editor Pane
//!
//! Renders the editor for the active tab. The editor is rebuilt only when the
//! active node or the view changes, not on every content edit.

use leptos::prelude::*;

use crate::components::{ChecklistEditor, KanbanBoard, MarkdownEditor, TextEditor};
use crate::editor::EditorView;
use crate::state::IdeStateStoreFields;
use crate::store::use_app_store;

#[component]
pub fn EditorPane() -> impl IntoView {
    let store = use_app_store();

    let current = Memo::new(move |_| {
        let active = store.active().get();
        let view = EditorView::for_node(active.as_ref(), store.preview_mode().get());
        (active.map(|n| n.name), view)
    });

    view! {
        <div class="editor-pane">
            {move || {
                let (name, view) = current.get();
                match (name, view) {
                    (Some(name), EditorView::PlainText) => view! { <TextEditor name=name /> }.into_any(),
                    (Some(name), EditorView::Checklist) => view! { <ChecklistEditor name=name /> }.into_any(),
                    (Some(name), EditorView::Kanban) => view! { <KanbanBoard name=name /> }.into_any(),
                    (Some(name), EditorView::Markdown { preview }) => view! { <MarkdownEditor name=name preview=preview /> }.into_any(),
                    (None, _) | (_, EditorView::Empty) => view! {
                        <div class="editor-empty">"Select a file to start editing"</div>
                    }.into_any(),
                }
            }}
        </div>
    }
}
