//! Markdown Doc Editor
//!
//! `.readme` leaves: raw markdown in a textarea, or the rendered preview.
//! The edit/preview switch is global, like a view mode.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::ReadmePreview;
use crate::context::AppContext;
use crate::markdown::parse_markdown;
use crate::state::IdeStateStoreFields;
use crate::store::{store_set_content, use_app_store};

#[component]
pub fn MarkdownEditor(name: String, preview: bool) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let content = move || store.active().get().map(|n| n.content.unwrap_or_default()).unwrap_or_default();
    let rendered_html = move || ctx.highlight_theme.with_value(|theme| parse_markdown(&content(), theme));
    let title = format!("Editing {}", name);

    let body = if preview {
        view! { <div class="markdown-preview" inner_html=rendered_html></div> }.into_any()
    } else {
        view! {
            <textarea
                class="editor-textarea"
                placeholder="Markdown..."
                prop:value=content
                on:input=move |ev| {
                    let Some(textarea) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) else {
                        return;
                    };
                    store_set_content(&store, &name, &textarea.value());
                }
            ></textarea>
        }.into_any()
    };

    view! {
        <div class="editor markdown-editor">
            <h2 class="editor-title">
                {title}
                <button
                    class="preview-toggle"
                    on:click=move |_| store.preview_mode().update(|p| *p = !*p)
                >
                    {if preview { "Edit" } else { "Preview" }}
                </button>
            </h2>
            {body}
            <ReadmePreview />
        </div>
    }
}
