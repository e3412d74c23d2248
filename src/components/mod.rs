//! UI Components
//!
//! Reusable Leptos components.

mod file_tree;
mod new_node_form;
mod type_selector;
mod open_tabs;
mod editor_pane;
mod text_editor;
mod checklist_editor;
mod kanban_board;
mod markdown_editor;
mod readme_preview;
mod delete_confirm_button;

pub use file_tree::FileTree;
pub use new_node_form::NewNodeForm;
pub use type_selector::TypeSelector;
pub use open_tabs::OpenTabs;
pub use editor_pane::EditorPane;
pub use text_editor::TextEditor;
pub use checklist_editor::ChecklistEditor;
pub use kanban_board::{handle_board_drop, KanbanBoard};
pub use markdown_editor::MarkdownEditor;
pub use readme_preview::ReadmePreview;
pub use delete_confirm_button::DeleteConfirmButton;
