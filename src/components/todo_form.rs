//! Todo Form Component
//!
//! Input row and the (initially empty) item list.

use leptos::prelude::*;

/// Text input, add button and list container
#[component]
pub fn TodoForm(
    #[prop(into, default = "Add new item...".to_string())] placeholder: String,
    #[prop(into, default = "Add".to_string())] add_label: String,
) -> impl IntoView {
    view! {
        <div class="todo-form">
            <div class="new-item-row">
                <input id="todo-input" type="text" placeholder=placeholder />
                <button id="add-button" type="button">{add_label}</button>
            </div>
            // Items are appended here by the widget
            <div id="todo-list" class="todo-list"></div>
        </div>
    }
}
