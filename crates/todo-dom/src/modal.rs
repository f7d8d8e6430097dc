//! Modal Helpers
//!
//! Delete-confirmation and edit modals. Each button gets exactly one click
//! listener when the modal is bound; `show` only swaps the pending action, so
//! opening a modal any number of times never stacks listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::Selectors;
use crate::dom::{Display, Dom};
use crate::error::DomResult;
use crate::selectors::{by_id, within};

/// What a primary action wants done with its modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Close,
    KeepOpen,
}

type ConfirmAction = Box<dyn FnMut() -> DomResult<Outcome>>;
type CancelAction = Box<dyn FnMut()>;

/// Callbacks for the request the modal is currently showing
struct Pending {
    confirm: ConfirmAction,
    cancel: Option<CancelAction>,
}

/// Visibility plus the current-action slot, shared with the button listeners
struct ModalCore<D: Dom> {
    dom: D,
    container: D::Node,
    pending: Rc<RefCell<Option<Pending>>>,
    visible: Rc<Cell<bool>>,
}

impl<D: Dom> ModalCore<D> {
    fn bind(dom: &D, container: D::Node, confirm: &D::Node, cancel: &D::Node) -> DomResult<Self> {
        let core = Self {
            dom: dom.clone(),
            container,
            pending: Rc::new(RefCell::new(None)),
            visible: Rc::new(Cell::new(false)),
        };
        set_visible(&core.dom, &core.container, &core.visible, false)?;

        let (dom, container, pending, visible) = core.parts();
        dom.clone().on_click(
            confirm,
            Box::new(move |_: D::Node| {
                let taken = pending.borrow_mut().take();
                let Some(mut action) = taken else {
                    log::warn!("[MODAL] confirm clicked with nothing pending");
                    return;
                };
                match (action.confirm)() {
                    Ok(Outcome::Close) => {
                        if let Err(err) = set_visible(&dom, &container, &visible, false) {
                            log::error!("[MODAL] failed to hide: {}", err);
                        }
                    }
                    Ok(Outcome::KeepOpen) => restore(&pending, action),
                    Err(err) => {
                        log::error!("[MODAL] confirm action failed: {}", err);
                        restore(&pending, action);
                    }
                }
            }),
        )?;

        let (dom, container, pending, visible) = core.parts();
        dom.clone().on_click(
            cancel,
            Box::new(move |_: D::Node| {
                let taken = pending.borrow_mut().take();
                if let Some(Pending { cancel: Some(mut on_cancel), .. }) = taken {
                    on_cancel();
                }
                if let Err(err) = set_visible(&dom, &container, &visible, false) {
                    log::error!("[MODAL] failed to hide: {}", err);
                }
            }),
        )?;

        Ok(core)
    }

    fn parts(&self) -> (D, D::Node, Rc<RefCell<Option<Pending>>>, Rc<Cell<bool>>) {
        (
            self.dom.clone(),
            self.container.clone(),
            self.pending.clone(),
            self.visible.clone(),
        )
    }

    /// Replace the pending action and make the modal visible
    fn open(&self, confirm: ConfirmAction, cancel: Option<CancelAction>) -> DomResult<()> {
        *self.pending.borrow_mut() = Some(Pending { confirm, cancel });
        set_visible(&self.dom, &self.container, &self.visible, true)
    }

    fn state(&self) -> Display {
        if self.visible.get() {
            Display::Visible
        } else {
            Display::Hidden
        }
    }
}

/// Put an action back unless a newer one was installed while it ran
fn restore(slot: &RefCell<Option<Pending>>, action: Pending) {
    let mut slot = slot.borrow_mut();
    if slot.is_none() {
        *slot = Some(action);
    }
}

fn set_visible<D: Dom>(dom: &D, container: &D::Node, flag: &Cell<bool>, visible: bool) -> DomResult<()> {
    let display = if visible { Display::Visible } else { Display::Hidden };
    dom.set_display(container, display)?;
    flag.set(visible);
    Ok(())
}

/// Confirmation modal with a header, a body paragraph and delete/cancel buttons
pub struct DeleteModal<D: Dom> {
    core: ModalCore<D>,
    title: D::Node,
    body: D::Node,
}

impl<D: Dom> DeleteModal<D> {
    pub fn bind(dom: &D, selectors: &Selectors) -> DomResult<Self> {
        let container = by_id(dom, &selectors.delete_modal_id)?;
        let title = within(dom, &container, &selectors.delete_modal_title)?;
        let body = within(dom, &container, &selectors.delete_modal_body)?;
        let confirm = within(dom, &container, &selectors.delete_confirm)?;
        let cancel = within(dom, &container, &selectors.delete_cancel)?;

        Ok(Self {
            core: ModalCore::bind(dom, container, &confirm, &cancel)?,
            title,
            body,
        })
    }

    /// Show the modal. `on_delete` runs when the delete button is clicked and
    /// the modal closes afterwards; `on_cancel` runs on cancel.
    pub fn show<F, C>(&self, title: &str, body: &str, mut on_delete: F, on_cancel: C) -> DomResult<()>
    where
        F: FnMut() -> DomResult<()> + 'static,
        C: FnMut() + 'static,
    {
        self.core.dom.set_text(&self.title, title);
        self.core.dom.set_text(&self.body, body);
        self.core.open(
            Box::new(move || on_delete().map(|()| Outcome::Close)),
            Some(Box::new(on_cancel)),
        )
    }

    pub fn state(&self) -> Display {
        self.core.state()
    }
}

/// Edit modal with a header, a text input and save/cancel buttons
pub struct EditModal<D: Dom> {
    core: ModalCore<D>,
    title: D::Node,
    input: D::Node,
}

impl<D: Dom> EditModal<D> {
    pub fn bind(dom: &D, selectors: &Selectors) -> DomResult<Self> {
        let container = by_id(dom, &selectors.edit_modal_id)?;
        let title = within(dom, &container, &selectors.edit_modal_title)?;
        let input = within(dom, &container, &selectors.edit_input)?;
        let save = within(dom, &container, &selectors.edit_save)?;
        let cancel = within(dom, &container, &selectors.edit_cancel)?;

        Ok(Self {
            core: ModalCore::bind(dom, container, &save, &cancel)?,
            title,
            input,
        })
    }

    /// Show the modal. `on_save` receives the raw input value when save is
    /// clicked; returning [`Outcome::Close`] hides the modal and clears the
    /// input, [`Outcome::KeepOpen`] leaves both untouched.
    pub fn show<F, C>(&self, title: &str, mut on_save: F, on_cancel: C) -> DomResult<()>
    where
        F: FnMut(&str) -> DomResult<Outcome> + 'static,
        C: FnMut() + 'static,
    {
        self.core.dom.set_text(&self.title, title);

        let dom = self.core.dom.clone();
        let input = self.input.clone();
        self.core.open(
            Box::new(move || {
                let value = dom.value(&input);
                let outcome = on_save(&value)?;
                if outcome == Outcome::Close {
                    dom.set_value(&input, "");
                }
                Ok(outcome)
            }),
            Some(Box::new(on_cancel)),
        )
    }

    pub fn input(&self) -> &D::Node {
        &self.input
    }

    pub fn state(&self) -> Display {
        self.core.state()
    }
}
