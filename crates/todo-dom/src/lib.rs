//! To-Do DOM Widget
//!
//! Add/delete/edit to-do items on a host page. The page is reached only
//! through the [`Dom`] capability:
//! - `web`: the real browser document (`web-sys`)
//! - `fake`: an in-memory document for tests and headless use

mod config;
mod dom;
mod error;
mod fake;
mod logging;
mod modal;
pub mod selectors;
mod web;
mod widget;

mod tests;

pub use config::{Labels, Selectors, WidgetConfig, TITLE_PLACEHOLDER};
pub use dom::{ClickHandler, Display, Dom};
pub use error::{DomError, DomResult};
pub use fake::{FakeDocument, NodeId};
pub use logging::log_value;
pub use modal::{DeleteModal, EditModal, Outcome};
pub use web::WebDom;
pub use widget::TodoWidget;
