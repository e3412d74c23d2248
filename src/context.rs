//! Application Context
//!
//! Shared UI signals provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::models::NoteStatus;

/// Where the create form inserts
#[derive(Clone, Debug, PartialEq)]
pub enum CreateTarget {
    Root,
    Folder(String),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Which folder the create form adds under (None = form closed) - read
    pub creating_under: ReadSignal<Option<CreateTarget>>,
    /// Which folder the create form adds under - write
    set_creating_under: WriteSignal<Option<CreateTarget>>,
    /// Kanban drag state; the global drop handler is bound once in App
    pub board_dnd: DndSignals<NoteStatus>,
    /// syntect theme for markdown previews
    pub highlight_theme: StoredValue<String>,
}

impl AppContext {
    pub fn new(
        creating_under: (ReadSignal<Option<CreateTarget>>, WriteSignal<Option<CreateTarget>>),
        board_dnd: DndSignals<NoteStatus>,
        highlight_theme: String,
    ) -> Self {
        Self {
            creating_under: creating_under.0,
            set_creating_under: creating_under.1,
            board_dnd,
            highlight_theme: StoredValue::new(highlight_theme),
        }
    }

    /// Open the create form for a target
    pub fn set_creating_under(&self, target: Option<CreateTarget>) {
        self.set_creating_under.set(target);
    }
}
