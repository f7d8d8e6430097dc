//! Edit Dialog
//!
//! Hidden modal shell with the replacement-title input.

use leptos::prelude::*;

#[component]
pub fn EditDialog(
    #[prop(into, default = "Save".to_string())] save_label: String,
    #[prop(into, default = "Cancel".to_string())] cancel_label: String,
) -> impl IntoView {
    view! {
        <div id="edit-modal-container" class="modal-overlay" style="display: none;">
            <div class="modal">
                <div id="edit-modal-header">
                    <h2></h2>
                </div>
                <input id="edit-input" type="text" placeholder="New title" />
                <div class="modal-actions">
                    <button id="edit-btn" type="button">{save_label}</button>
                    <button id="cancel-edit-btn" type="button">{cancel_label}</button>
                </div>
            </div>
        </div>
    }
}
