//! Editor Dispatch
//!
//! Maps the active node to the editor that renders it.

use crate::models::{LeafKind, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorView {
    /// Nothing open
    Empty,
    PlainText,
    Checklist,
    Kanban,
    Markdown { preview: bool },
}

impl EditorView {
    pub fn for_node(active: Option<&Node>, preview_mode: bool) -> Self {
        let Some(kind) = active.and_then(Node::leaf_kind) else {
            return EditorView::Empty;
        };
        match kind {
            LeafKind::PlainText => EditorView::PlainText,
            LeafKind::Checklist => EditorView::Checklist,
            LeafKind::Kanban => EditorView::Kanban,
            LeafKind::MarkdownDoc => EditorView::Markdown { preview: preview_mode },
        }
    }
}
