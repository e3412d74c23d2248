//! New Node Form Component
//!
//! Name field plus type buttons for creating a folder or file under the
//! folder picked in the sidebar (or at the top level).

use leptos::prelude::*;

use crate::components::TypeSelector;
use crate::context::{AppContext, CreateTarget};
use crate::state::NewNode;
use crate::store::{store_create, use_app_store};

#[component]
pub fn NewNodeForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (new_name, set_new_name) = signal(String::new());

    let create = move |what: NewNode| {
        let Some(target) = ctx.creating_under.get_untracked() else { return };
        let name = new_name.get_untracked();
        let parent = match &target {
            CreateTarget::Root => None,
            CreateTarget::Folder(folder) => Some(folder.as_str()),
        };
        if store_create(&store, parent, &name, what).is_some() {
            set_new_name.set(String::new());
            ctx.set_creating_under(None);
        }
    };

    view! {
        {move || ctx.creating_under.get().map(|target| {
            let heading = match target {
                CreateTarget::Root => "New at top level".to_string(),
                CreateTarget::Folder(folder) => format!("New in {}", folder),
            };
            view! {
                <div class="new-node-form">
                    <div class="new-node-heading">{heading}</div>
                    <input
                        type="text"
                        placeholder="Enter name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                ctx.set_creating_under(None);
                            }
                        }
                    />
                    <TypeSelector on_pick=create />
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.set_creating_under(None)>
                        "Cancel"
                    </button>
                </div>
            }
        })}
    }
}
