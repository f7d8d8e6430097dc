//! UI Components
//!
//! Static page markup the to-do widget binds to.

mod confirm_delete_dialog;
mod edit_dialog;
mod todo_form;

pub use confirm_delete_dialog::ConfirmDeleteDialog;
pub use edit_dialog::EditDialog;
pub use todo_form::TodoForm;
