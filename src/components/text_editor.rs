//! Plain Text Editor
//!
//! Textarea bound to the active leaf's content.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::IdeStateStoreFields;
use crate::store::{store_set_content, use_app_store};

#[component]
pub fn TextEditor(name: String) -> impl IntoView {
    let store = use_app_store();
    let content = move || store.active().get().map(|n| n.content.unwrap_or_default()).unwrap_or_default();
    let title = format!("Editing {}", name);

    view! {
        <div class="editor text-editor">
            <h2 class="editor-title">{title}</h2>
            <textarea
                class="editor-textarea"
                prop:value=content
                on:input=move |ev| {
                    let Some(textarea) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) else {
                        return;
                    };
                    store_set_content(&store, &name, &textarea.value());
                }
            ></textarea>
        </div>
    }
}
