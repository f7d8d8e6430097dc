//! DOM Capability
//!
//! The widget never touches a global document. Everything it needs from the
//! page goes through [`Dom`], so the browser and the in-memory
//! [`FakeDocument`](crate::FakeDocument) are interchangeable.

use crate::error::DomResult;

/// Visibility of a modal container, applied through its `display` style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Visible,
    Hidden,
}

impl Display {
    /// Value written to `style.display`
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Visible => "flex",
            Display::Hidden => "none",
        }
    }
}

/// Click listener; receives the element that was actually clicked
pub type ClickHandler<N> = Box<dyn FnMut(N)>;

/// Access to a document.
///
/// Handles are cheap clones that refer to the same underlying document, so a
/// click handler can capture its own copy.
pub trait Dom: Clone + 'static {
    /// Element handle
    type Node: Clone + PartialEq + 'static;

    /// First element in the document matching a CSS selector
    fn query(&self, selector: &str) -> DomResult<Option<Self::Node>>;

    /// First descendant of `root` matching a CSS selector
    fn query_within(&self, root: &Self::Node, selector: &str) -> DomResult<Option<Self::Node>>;

    /// Nearest inclusive ancestor matching a CSS selector
    fn closest(&self, node: &Self::Node, selector: &str) -> DomResult<Option<Self::Node>>;

    /// Create a detached element. Callers go through
    /// [`selectors::create`](crate::selectors::create), which rejects empty names.
    fn create_element(&self, tag: &str) -> DomResult<Self::Node>;

    fn add_class(&self, node: &Self::Node, class: &str) -> DomResult<()>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Append `child` as the last child of `parent`
    fn append(&self, parent: &Self::Node, child: &Self::Node) -> DomResult<()>;

    /// Detach `node` from its parent
    fn remove(&self, node: &Self::Node);

    /// Element children of `node`, in document order
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// `textContent`
    fn text(&self, node: &Self::Node) -> String;

    /// Replace the node's content with a single text run. Never parses markup.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Current value of a form field; empty for anything else
    fn value(&self, node: &Self::Node) -> String;

    fn set_value(&self, node: &Self::Node, value: &str);

    fn set_display(&self, node: &Self::Node, display: Display) -> DomResult<()>;

    /// Blocking user-facing message
    fn alert(&self, message: &str);

    /// Listen for clicks on `node` and anything inside it
    fn on_click(&self, node: &Self::Node, handler: ClickHandler<Self::Node>) -> DomResult<()>;
}
