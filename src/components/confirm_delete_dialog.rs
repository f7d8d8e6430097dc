//! Delete Confirmation Dialog
//!
//! Hidden modal shell; the widget fills in the header and body text.

use leptos::prelude::*;

#[component]
pub fn ConfirmDeleteDialog(
    #[prop(into, default = "Delete".to_string())] confirm_label: String,
    #[prop(into, default = "Cancel".to_string())] cancel_label: String,
) -> impl IntoView {
    view! {
        <div id="modal-container" class="modal-overlay" style="display: none;">
            <div class="modal">
                <div id="modal-header">
                    <h2></h2>
                </div>
                <div id="modal-body">
                    <p></p>
                </div>
                <div id="modal-footer">
                    <button id="delete-btn" type="button" class="danger">{confirm_label}</button>
                    <button id="cancel-btn" type="button">{cancel_label}</button>
                </div>
            </div>
        </div>
    }
}
