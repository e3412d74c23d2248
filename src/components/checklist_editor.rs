//! Checklist Editor
//!
//! Items of a `.lt` leaf: Enter adds, clicking text toggles, × removes.

use leptos::prelude::*;

use crate::checklist::Checklist;
use crate::components::DeleteConfirmButton;
use crate::state::IdeStateStoreFields;
use crate::store::{store_set_content, use_app_store, AppStore};

fn commit(store: &AppStore, name: &str, list: &Checklist) {
    store_set_content(store, name, &list.to_content());
}

#[component]
pub fn ChecklistEditor(name: String) -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    // Decoded lazily from the active node; malformed content shows as empty
    let list_name = name.clone();
    let list = Memo::new(move |_| {
        let content = store.active().get().and_then(|n| n.content).unwrap_or_default();
        Checklist::from_content(&list_name, &content)
    });

    let name = StoredValue::new(name);
    let add_item = move || {
        let mut next = list.get_untracked();
        if next.add(&new_text.get_untracked()).is_some() {
            name.with_value(|name| commit(&store, name, &next));
            set_new_text.set(String::new());
        }
    };

    view! {
        <div class="editor checklist-editor">
            <h2 class="editor-title">{move || name.with_value(|n| format!("Editing {}", n))}</h2>
            <input
                type="text"
                class="new-entry-input"
                placeholder="Add new item"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add_item();
                    }
                }
            />
            <ul class="checklist">
                <For
                    each=move || list.get().items
                    key=|item| (item.id.clone(), item.completed, item.text.clone())
                    children=move |item| {
                        let toggle_id = item.id.clone();
                        let remove_id = item.id.clone();
                        view! {
                            <li class="checklist-row">
                                <span
                                    class=if item.completed { "checklist-text completed" } else { "checklist-text" }
                                    on:click=move |_| {
                                        let mut next = list.get_untracked();
                                        if next.toggle(&toggle_id) {
                                            name.with_value(|name| commit(&store, name, &next));
                                        }
                                    }
                                >
                                    {item.text}
                                </span>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    on_confirm=move |_: ()| {
                                        let mut next = list.get_untracked();
                                        if next.remove(&remove_id) {
                                            name.with_value(|name| commit(&store, name, &next));
                                        }
                                    }
                                />
                            </li>
                        }
                    }
                />
            </ul>
            <p class="editor-footer">{move || format!("{} of {} open", list.get().remaining(), list.get().items.len())}</p>
        </div>
    }
}
