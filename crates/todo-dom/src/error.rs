//! DOM Errors
//!
//! Failures raised by lookups and element creation.

use thiserror::Error;

/// Common result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("No element found with class {0}")]
    MissingClass(String),

    #[error("No element found with id {0}")]
    MissingId(String),

    #[error("No element found matching {0}")]
    MissingSelector(String),

    #[error("Element name is not valid")]
    InvalidElementName,

    /// Exception thrown by the browser, stringified
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl DomError {
    /// Stringify a thrown `JsValue` the way the console would show it.
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_cite_the_selector() {
        assert_eq!(
            DomError::MissingId("todo-list".into()).to_string(),
            "No element found with id todo-list"
        );
        assert_eq!(
            DomError::MissingClass("title".into()).to_string(),
            "No element found with class title"
        );
        assert_eq!(DomError::InvalidElementName.to_string(), "Element name is not valid");
    }
}
