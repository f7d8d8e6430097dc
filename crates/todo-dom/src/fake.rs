//! In-Memory Document
//!
//! A small element tree implementing [`Dom`] so the widget can be driven
//! without a browser. Supports the selector subset the widget uses: type,
//! `#id` and `.class` compounds joined by descendant combinators.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::dom::{ClickHandler, Display, Dom};
use crate::error::{DomError, DomResult};

/// Handle to an element of a [`FakeDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    value: String,
    display: Option<Display>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

type SharedHandler = Rc<RefCell<ClickHandler<NodeId>>>;

#[derive(Default)]
struct State {
    nodes: Vec<ElementData>,
    handlers: HashMap<NodeId, Vec<SharedHandler>>,
    alerts: Vec<String>,
}

/// One `type#id.class` step of a selector
#[derive(Debug, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

const BODY: NodeId = NodeId(0);

#[derive(Clone)]
pub struct FakeDocument {
    state: Rc<RefCell<State>>,
}

impl fmt::Debug for FakeDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FakeDocument")
            .field("nodes", &state.nodes.len())
            .field("alerts", &state.alerts)
            .finish()
    }
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDocument {
    /// Empty document containing only `<body>`
    pub fn new() -> Self {
        let body = ElementData {
            tag: "body".to_string(),
            ..Default::default()
        };
        Self {
            state: Rc::new(RefCell::new(State {
                nodes: vec![body],
                ..Default::default()
            })),
        }
    }

    /// Document with the markup the to-do widget expects
    pub fn todo_page() -> Self {
        let doc = Self::new();
        let body = doc.body();

        doc.element(&body, "input", Some("todo-input"), &[]);
        doc.element(&body, "button", Some("add-button"), &[]);
        doc.element(&body, "div", Some("todo-list"), &[]);

        let modal = doc.element(&body, "div", Some("modal-container"), &["modal"]);
        let header = doc.element(&modal, "div", Some("modal-header"), &[]);
        doc.element(&header, "h2", None, &[]);
        let content = doc.element(&modal, "div", Some("modal-body"), &[]);
        doc.element(&content, "p", None, &[]);
        let footer = doc.element(&modal, "div", Some("modal-footer"), &[]);
        doc.element(&footer, "button", Some("delete-btn"), &[]);
        doc.element(&footer, "button", Some("cancel-btn"), &[]);

        let edit = doc.element(&body, "div", Some("edit-modal-container"), &["modal"]);
        let edit_header = doc.element(&edit, "div", Some("edit-modal-header"), &[]);
        doc.element(&edit_header, "h2", None, &[]);
        doc.element(&edit, "input", Some("edit-input"), &[]);
        doc.element(&edit, "button", Some("edit-btn"), &[]);
        doc.element(&edit, "button", Some("cancel-edit-btn"), &[]);

        doc
    }

    pub fn body(&self) -> NodeId {
        BODY
    }

    /// Append a new element under `parent` and return it
    pub fn element(&self, parent: &NodeId, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        let mut state = self.state.borrow_mut();
        let node = NodeId(state.nodes.len());
        state.nodes.push(ElementData {
            tag: tag.to_ascii_lowercase(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent: Some(*parent),
            ..Default::default()
        });
        state.nodes[parent.0].children.push(node);
        node
    }

    pub fn tag(&self, node: &NodeId) -> String {
        self.state.borrow().nodes[node.0].tag.clone()
    }

    /// Every attached element matching `selector`, in document order
    pub fn query_all(&self, selector: &str) -> DomResult<Vec<NodeId>> {
        let chain = parse_selector(selector)?;
        let state = self.state.borrow();
        let found = state
            .descendants(BODY)
            .into_iter()
            .filter(|node| state.matches(*node, &chain))
            .collect();
        Ok(found)
    }

    /// `true` once `set_display(Visible)` was the last display change
    pub fn is_visible(&self, node: &NodeId) -> bool {
        self.state.borrow().nodes[node.0].display == Some(Display::Visible)
    }

    pub fn is_attached(&self, node: &NodeId) -> bool {
        let state = self.state.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == BODY {
                return true;
            }
            current = state.nodes[id.0].parent;
        }
        false
    }

    /// Messages passed to `alert`, oldest first
    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }

    /// Number of click listeners registered directly on `node`
    pub fn listener_count(&self, node: &NodeId) -> usize {
        self.state.borrow().handlers.get(node).map_or(0, Vec::len)
    }

    /// Dispatch a click on `target`, bubbling to the body.
    ///
    /// The propagation path is fixed before any listener runs, so a listener
    /// that detaches the target does not cut propagation short.
    pub fn click(&self, target: &NodeId) {
        let path = {
            let state = self.state.borrow();
            let mut path = Vec::new();
            let mut current = Some(*target);
            while let Some(id) = current {
                path.push(id);
                current = state.nodes[id.0].parent;
            }
            path
        };

        for node in path {
            let handlers = self
                .state
                .borrow()
                .handlers
                .get(&node)
                .cloned()
                .unwrap_or_default();
            for handler in handlers {
                if let Ok(mut handler) = handler.try_borrow_mut() {
                    (&mut **handler)(*target);
                }
            }
        }
    }

    /// Type into a form field, replacing its value
    pub fn type_text(&self, node: &NodeId, value: &str) {
        self.set_value(node, value);
    }

    fn check(&self, node: &NodeId) -> DomResult<()> {
        if node.0 < self.state.borrow().nodes.len() {
            Ok(())
        } else {
            Err(DomError::Js(format!("unknown node {}", node.0)))
        }
    }
}

impl State {
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[root.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        out
    }

    fn matches_compound(&self, node: NodeId, compound: &Compound) -> bool {
        let data = &self.nodes[node.0];
        if let Some(tag) = &compound.tag {
            if &data.tag != tag {
                return false;
            }
        }
        if let Some(id) = &compound.id {
            if data.id.as_ref() != Some(id) {
                return false;
            }
        }
        compound.classes.iter().all(|c| data.classes.contains(c))
    }

    /// Right-to-left match; ancestors may satisfy earlier steps at any depth
    fn matches(&self, node: NodeId, chain: &[Compound]) -> bool {
        let Some((last, mut remaining)) = chain.split_last() else {
            return false;
        };
        if !self.matches_compound(node, last) {
            return false;
        }
        let mut current = self.nodes[node.0].parent;
        while let Some((want, before)) = remaining.split_last() {
            loop {
                let Some(ancestor) = current else {
                    return false;
                };
                current = self.nodes[ancestor.0].parent;
                if self.matches_compound(ancestor, want) {
                    break;
                }
            }
            remaining = before;
        }
        true
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    fn text_of(&self, node: NodeId) -> String {
        let data = &self.nodes[node.0];
        let mut text = data.text.clone();
        for child in &data.children {
            text.push_str(&self.text_of(*child));
        }
        text
    }
}

fn is_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_selector(selector: &str) -> DomResult<Vec<Compound>> {
    let chain = selector
        .split_whitespace()
        .map(|token| parse_compound(token, selector))
        .collect::<DomResult<Vec<_>>>()?;
    if chain.is_empty() {
        return Err(DomError::Js(format!("'{}' is not a valid selector", selector)));
    }
    Ok(chain)
}

fn parse_compound(token: &str, selector: &str) -> DomResult<Compound> {
    let invalid = || DomError::Js(format!("'{}' is not a valid selector", selector));
    let mut compound = Compound::default();

    let tag_end = token.find(['#', '.']).unwrap_or(token.len());
    if tag_end > 0 {
        let tag = &token[..tag_end];
        if !is_name(tag) {
            return Err(invalid());
        }
        compound.tag = Some(tag.to_ascii_lowercase());
    }

    let mut rest = &token[tag_end..];
    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let name = &body[..end];
        if !is_name(name) {
            return Err(invalid());
        }
        match marker {
            '#' => compound.id = Some(name.to_string()),
            _ => compound.classes.push(name.to_string()),
        }
        rest = &body[end..];
    }
    Ok(compound)
}

impl Dom for FakeDocument {
    type Node = NodeId;

    fn query(&self, selector: &str) -> DomResult<Option<NodeId>> {
        Ok(self.query_all(selector)?.into_iter().next())
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> DomResult<Option<NodeId>> {
        self.check(root)?;
        let chain = parse_selector(selector)?;
        let state = self.state.borrow();
        let found = state
            .descendants(*root)
            .into_iter()
            .find(|node| state.matches(*node, &chain));
        Ok(found)
    }

    fn closest(&self, node: &NodeId, selector: &str) -> DomResult<Option<NodeId>> {
        self.check(node)?;
        let chain = parse_selector(selector)?;
        let state = self.state.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            if state.matches(id, &chain) {
                return Ok(Some(id));
            }
            current = state.nodes[id.0].parent;
        }
        Ok(None)
    }

    fn create_element(&self, tag: &str) -> DomResult<NodeId> {
        if !is_name(tag) {
            return Err(DomError::Js(format!("InvalidCharacterError: '{}'", tag)));
        }
        let mut state = self.state.borrow_mut();
        let node = NodeId(state.nodes.len());
        state.nodes.push(ElementData {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        });
        Ok(node)
    }

    fn add_class(&self, node: &NodeId, class: &str) -> DomResult<()> {
        self.check(node)?;
        if !is_name(class) {
            return Err(DomError::Js(format!("InvalidCharacterError: '{}'", class)));
        }
        let mut state = self.state.borrow_mut();
        let classes = &mut state.nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        Ok(())
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.state
            .borrow()
            .nodes
            .get(node.0)
            .is_some_and(|data| data.classes.iter().any(|c| c == class))
    }

    fn append(&self, parent: &NodeId, child: &NodeId) -> DomResult<()> {
        self.check(parent)?;
        self.check(child)?;
        let mut state = self.state.borrow_mut();

        let mut current = Some(*parent);
        while let Some(id) = current {
            if id == *child {
                return Err(DomError::Js("HierarchyRequestError".to_string()));
            }
            current = state.nodes[id.0].parent;
        }

        state.detach(*child);
        state.nodes[child.0].parent = Some(*parent);
        state.nodes[parent.0].children.push(*child);
        Ok(())
    }

    fn remove(&self, node: &NodeId) {
        if self.check(node).is_ok() {
            self.state.borrow_mut().detach(*node);
        }
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.state
            .borrow()
            .nodes
            .get(node.0)
            .map(|data| data.children.clone())
            .unwrap_or_default()
    }

    fn text(&self, node: &NodeId) -> String {
        if self.check(node).is_err() {
            return String::new();
        }
        self.state.borrow().text_of(*node)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        if self.check(node).is_err() {
            return;
        }
        let mut state = self.state.borrow_mut();
        let children = std::mem::take(&mut state.nodes[node.0].children);
        for child in children {
            state.nodes[child.0].parent = None;
        }
        state.nodes[node.0].text = text.to_string();
    }

    fn value(&self, node: &NodeId) -> String {
        self.state
            .borrow()
            .nodes
            .get(node.0)
            .map(|data| data.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        if let Some(data) = self.state.borrow_mut().nodes.get_mut(node.0) {
            data.value = value.to_string();
        }
    }

    fn set_display(&self, node: &NodeId, display: Display) -> DomResult<()> {
        self.check(node)?;
        self.state.borrow_mut().nodes[node.0].display = Some(display);
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }

    fn on_click(&self, node: &NodeId, handler: ClickHandler<NodeId>) -> DomResult<()> {
        self.check(node)?;
        self.state
            .borrow_mut()
            .handlers
            .entry(*node)
            .or_default()
            .push(Rc::new(RefCell::new(handler)));
        Ok(())
    }
}
