//! To-Do List App
//!
//! Renders the page markup the widget expects, then hands the mounted page
//! to the widget.

use leptos::prelude::*;

use crate::components::{ConfirmDeleteDialog, EditDialog, TodoForm};
use crate::install;

#[component]
pub fn App() -> impl IntoView {
    // Install once the markup is in the document
    Effect::new(move |_| match install::install_widget() {
        Ok(widget) => log::info!("[APP] ready, {} items", widget.items().len()),
        Err(err) => log::error!("[APP] widget not installed: {}", err),
    });

    view! {
        <main class="todo-app">
            <h1>"To-Do List"</h1>

            <TodoForm />

            <ConfirmDeleteDialog />
            <EditDialog />
        </main>
    }
}
