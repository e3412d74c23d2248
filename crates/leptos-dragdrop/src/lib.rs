//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Draggables are identified by string keys. Drop targets are a category
//! (a board column, a folder, ...) optionally narrowed to a slot index, so
//! the caller only has to answer "item X was dropped on category C at N".

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Anything usable as a drop category
pub trait Category: Copy + PartialEq + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Send + Sync + 'static> Category for T {}

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget<C> {
    /// Drop on the category container itself (append at end)
    Category(C),
    /// Drop on a zone between items (category, index within category)
    Slot(C, usize),
}

impl<C: Copy> DropTarget<C> {
    pub fn category(&self) -> C {
        match self {
            DropTarget::Category(c) | DropTarget::Slot(c, _) => *c,
        }
    }

    /// Insertion index within the category, None = end
    pub fn index(&self) -> Option<usize> {
        match self {
            DropTarget::Category(_) => None,
            DropTarget::Slot(_, idx) => Some(*idx),
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<C: Category> {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_target_read: ReadSignal<Option<DropTarget<C>>>,
    pub drop_target_write: WriteSignal<Option<DropTarget<C>>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set so the trailing click can be ignored
const JUST_ENDED_MS: u32 = 100;

pub fn create_dnd_signals<C: Category>() -> DndSignals<C> {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget<C>>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl<C: Category> DndSignals<C> {
    /// Is `id` the item currently being dragged?
    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging_id_read.get().as_deref() == Some(id)
    }

    /// True right after a drop, while the mouseup's trailing click is
    /// still in flight. Click handlers on draggables should bail out.
    pub fn click_suppressed(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }

    /// Is `target` the currently hovered drop target?
    pub fn is_target(&self, target: DropTarget<C>) -> bool {
        self.drop_target_read.get() == Some(target)
    }
}

/// End drag operation
pub fn end_drag<C: Category>(dnd: &DndSignals<C>) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(JUST_ENDED_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<C: Category>(dnd: DndSignals<C>, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(item_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<C: Category>(dnd: DndSignals<C>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_id_read.try_get_untracked().flatten() else { return };
        if dnd.dragging_id_read.get_untracked().is_some() {
            return;
        }
        let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
        let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            dnd.dragging_id_write.set(Some(pending));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop target (column or slot)
pub fn make_on_target_mouseenter<C: Category>(dnd: DndSignals<C>, target: DropTarget<C>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            // Innermost target wins; a slot inside a column must not be overwritten
            ev.stop_propagation();
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<C: Category>(dnd: DndSignals<C>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// `on_drop(dragged_id, target)` runs only for a real drag that ended over a
/// target; a plain click just clears the pending state.
pub fn bind_global_mouseup<C, F>(dnd: DndSignals<C>, on_drop: F)
where
    C: Category,
    F: Fn(String, DropTarget<C>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(dragging_id) = dnd.dragging_id_read.try_get_untracked() else { return };
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        match (dragging_id, drop_target) {
            (Some(dragged), Some(target)) => {
                end_drag(&dnd);
                on_drop(dragged, target);
            }
            (Some(_), None) => end_drag(&dnd),
            // Not dragging - click event will fire naturally on the element
            (None, _) => {}
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
