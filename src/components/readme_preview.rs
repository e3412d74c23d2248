//! Readme Preview Component
//!
//! Renders a `.md` file picked from disk. A failed read keeps whatever was
//! shown before.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::markdown::parse_markdown;
use crate::upload::{read_text, selected_file, UploadedDoc};

#[component]
pub fn ReadmePreview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (uploaded, set_uploaded) = signal::<Option<UploadedDoc>>(None);

    let on_change = move |ev: web_sys::Event| {
        let file = match selected_file(&ev) {
            Ok(file) => file,
            Err(e) => {
                log::debug!("[UPLOAD] {}", e);
                return;
            }
        };
        spawn_local(async move {
            match read_text(file).await {
                Ok(doc) => {
                    log::info!("[UPLOAD] loaded {} ({} bytes)", doc.file_name, doc.text.len());
                    set_uploaded.set(Some(doc));
                }
                Err(e) => log::warn!("[UPLOAD] {}", e),
            }
        });
    };

    view! {
        <div class="readme-preview">
            <input type="file" accept=".md" on:change=on_change />
            {move || match uploaded.get() {
                Some(doc) => {
                    let html = ctx.highlight_theme.with_value(|theme| parse_markdown(&doc.text, theme));
                    view! {
                        <div class="upload-name">{doc.file_name}</div>
                        <div class="markdown-preview" inner_html=html></div>
                    }.into_any()
                }
                None => view! { <div class="upload-empty">"No file selected"</div> }.into_any(),
            }}
        </div>
    }
}
