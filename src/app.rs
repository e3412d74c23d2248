//! Notes IDE App
//!
//! Sidebar (tree, create form, open files) next to the editor pane, with a
//! status bar underneath.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::components::{handle_board_drop, EditorPane, FileTree, NewNodeForm, OpenTabs};
use crate::config::IdeConfig;
use crate::context::AppContext;
use crate::models::NoteStatus;
use crate::state::{IdeState, IdeStateStoreFields};
use crate::tree;

#[component]
pub fn App(config: IdeConfig) -> impl IntoView {
    let IdeConfig { initial_structure, sidebar_open, highlight_theme, .. } = config;

    let store = Store::new(IdeState::new(initial_structure, sidebar_open));
    provide_context(store);

    // Board drags are app-wide so the document listeners outlive any one board.
    // Binding mouseup also binds mousemove.
    let board_dnd = create_dnd_signals::<NoteStatus>();
    bind_global_mouseup(board_dnd, move |note_id, target| handle_board_drop(&store, &note_id, target));

    let creating_under = signal(None);
    provide_context(AppContext::new(creating_under, board_dnd, highlight_theme));

    let node_count = move || store.tree().with(|t| tree::count(t));
    let tab_count = move || store.open_tabs().with(Vec::len);
    // Re-read after every state change; the log buffer itself is not reactive
    let track_state = move || {
        store.tree().track();
        store.open_tabs().track();
        store.active().track();
    };
    let last_log = move || {
        track_state();
        rolling_logger::last().unwrap_or_default()
    };
    // Hovering the last line shows the whole buffer
    let log_history = move || {
        track_state();
        rolling_logger::recent().join("\n")
    };

    view! {
        <div class="ide-layout">
            <div class=move || if store.sidebar_open().get() { "sidebar" } else { "sidebar collapsed" }>
                <button
                    class="sidebar-toggle"
                    title="Toggle sidebar"
                    on:click=move |_| store.sidebar_open().update(|open| *open = !*open)
                >
                    {move || if store.sidebar_open().get() { "«" } else { "»" }}
                </button>
                <Show when=move || store.sidebar_open().get()>
                    <FileTree />
                    <NewNodeForm />
                    <OpenTabs />
                </Show>
            </div>
            <main class="editor-area">
                <EditorPane />
            </main>
            <footer class="status-bar">
                <span>{move || format!("{} nodes", node_count())}</span>
                <span>{move || format!("{} open", tab_count())}</span>
                <span class="status-log" title=log_history>{last_log}</span>
            </footer>
        </div>
    }
}
