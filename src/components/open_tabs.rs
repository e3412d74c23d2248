//! Open Tabs Component
//!
//! List of open files; click to activate, × to close.

use leptos::prelude::*;

use crate::state::IdeStateStoreFields;
use crate::store::{store_close, store_select, use_app_store};

#[component]
pub fn OpenTabs() -> impl IntoView {
    let store = use_app_store();
    let active_name = Memo::new(move |_| store.active().get().map(|n| n.name));

    view! {
        <div class="open-tabs">
            <h3>"Opened Files:"</h3>
            <ul>
                <For
                    each=move || store.open_tabs().get()
                    key=|tab| tab.name.clone()
                    children=move |tab| {
                        let name = tab.name.clone();
                        let select_name = name.clone();
                        let close_name = name.clone();
                        let is_active = move || active_name.get().as_deref() == Some(name.as_str());

                        view! {
                            <li class="open-tab">
                                <span
                                    class=move || if is_active() { "tab-name active" } else { "tab-name" }
                                    on:click=move |_| store_select(&store, &select_name)
                                >
                                    {tab.name}
                                </span>
                                <button
                                    class="tab-close"
                                    title="Close"
                                    on:click=move |_| store_close(&store, &close_name)
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
