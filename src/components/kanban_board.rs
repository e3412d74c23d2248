//! Kanban Board Component
//!
//! Three columns of notes with drag-and-drop between and within columns.
//! Uses leptos-dragdrop with explicit drop slots between notes.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::AppContext;
use crate::kanban::Board;
use crate::models::{LeafKind, NoteStatus, NOTE_STATUSES};
use crate::state::IdeStateStoreFields;
use crate::store::{store_set_content, use_app_store, AppStore};

/// Apply a finished drag to the active board.
/// Bound once as the global drop handler in App.
pub fn handle_board_drop(store: &AppStore, note_id: &str, target: DropTarget<NoteStatus>) {
    let Some(active) = store.active().get_untracked() else { return };
    if active.leaf_kind() != Some(LeafKind::Kanban) {
        return;
    }
    let mut board = Board::from_content(&active.name, active.content_str());
    if board.drop_at_slot(note_id, target.category(), target.index()) {
        log::info!("[DND] {} dropped on {} ({:?})", note_id, target.category().as_str(), target.index());
        store_set_content(store, &active.name, &board.to_content());
    }
}

fn commit(store: &AppStore, name: &str, board: &Board) {
    store_set_content(store, name, &board.to_content());
}

#[component]
pub fn KanbanBoard(name: String) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = ctx.board_dnd;

    let (new_text, set_new_text) = signal(String::new());
    let (new_status, set_new_status) = signal(NoteStatus::Todo);

    let board_name = name.clone();
    let board = Memo::new(move |_| {
        let content = store.active().get().and_then(|n| n.content).unwrap_or_default();
        Board::from_content(&board_name, &content)
    });

    let name = StoredValue::new(name);
    let add_note = move || {
        let mut next = board.get_untracked();
        if next.add(&new_text.get_untracked(), new_status.get_untracked()).is_some() {
            name.with_value(|name| commit(&store, name, &next));
            set_new_text.set(String::new());
        }
    };

    view! {
        <div class="editor kanban-editor">
            <h2 class="editor-title">{move || name.with_value(|n| format!("Editing {}", n))}</h2>
            <div class="kanban-add-row">
                <input
                    type="text"
                    class="new-entry-input"
                    placeholder="Add new note"
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add_note();
                        }
                    }
                />
                <select
                    class="status-select"
                    on:change=move |ev| {
                        if let Some(status) = NoteStatus::from_str(&event_target_value(&ev)) {
                            set_new_status.set(status);
                        }
                    }
                >
                    {NOTE_STATUSES.into_iter().map(|status| view! {
                        <option value=status.as_str() selected=move || new_status.get() == status>
                            {status.label()}
                        </option>
                    }).collect_view()}
                </select>
                <button on:click=move |_| add_note()>"Add"</button>
            </div>

            <div class="kanban-columns">
                {NOTE_STATUSES.into_iter().map(|status| view! {
                    <KanbanColumn status=status board=board name=name dnd=dnd />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn KanbanColumn(
    status: NoteStatus,
    board: Memo<Board>,
    name: StoredValue<String>,
    dnd: DndSignals<NoteStatus>,
) -> impl IntoView {
    let store = use_app_store();
    let whole_column = DropTarget::Category(status);

    let column_class = move || {
        let mut c = String::from("kanban-column");
        if dnd.is_target(whole_column) { c.push_str(" drop-target"); }
        c
    };

    let notes = move || {
        board.get()
            .column(status)
            .into_iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div
            class=column_class
            on:mouseenter=make_on_target_mouseenter(dnd, whole_column)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <h3 class="kanban-column-title">{status.label()}</h3>
            <For
                each=notes
                key=|(idx, note)| (*idx, note.id.clone(), note.text.clone())
                children=move |(idx, note)| {
                    let slot = DropTarget::Slot(status, idx);
                    let drag_id = note.id.clone();
                    let remove_id = note.id.clone();
                    let is_dragging = move || dnd.is_dragging(&drag_id);
                    let card_class = move || {
                        let mut c = String::from("kanban-note");
                        if is_dragging() { c.push_str(" dragging"); }
                        c
                    };

                    view! {
                        <DropSlot dnd=dnd target=slot />
                        <div
                            class=card_class
                            on:mousedown=make_on_mousedown(dnd, note.id.clone())
                            on:mouseenter=make_on_target_mouseenter(dnd, slot)
                            on:mouseleave=make_on_target_mouseenter(dnd, whole_column)
                        >
                            <span class="kanban-note-text">{note.text}</span>
                            <button
                                class="delete-btn"
                                on:click=move |_| {
                                    // A drag released over this button is not a click
                                    if dnd.click_suppressed() {
                                        return;
                                    }
                                    let mut next = board.get_untracked();
                                    if next.remove(&remove_id) {
                                        name.with_value(|name| commit(&store, name, &next));
                                    }
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
            // Trailing slot: end of column
            {move || {
                let count = board.get().column(status).len();
                view! { <DropSlot dnd=dnd target=DropTarget::Slot(status, count) /> }
            }}
        </div>
    }
}

/// Drop slot - a horizontal separator between notes
#[component]
fn DropSlot(dnd: DndSignals<NoteStatus>, target: DropTarget<NoteStatus>) -> impl IntoView {
    let slot_class = move || {
        let mut c = String::from("drop-zone");
        if dnd.dragging_id_read.get().is_none() { c.push_str(" hidden"); }
        if dnd.is_target(target) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=make_on_target_mouseenter(dnd, target)
            on:mouseleave=make_on_target_mouseenter(dnd, DropTarget::Category(target.category()))
        />
    }
}
