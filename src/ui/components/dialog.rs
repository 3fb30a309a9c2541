// SPDX-License-Identifier: MPL-2.0
//! Modal dialog state and its parts.
//!
//! A [`Dialog`] owns the open state. Its parts ([`DialogTrigger`],
//! [`DialogContent`], [`DialogClose`]) are built from the [`DialogContext`]
//! the dialog hands out and act on that shared state. A part built from a
//! context that has no live dialog behind it fails with
//! [`Error::MissingProvider`].

use crate::error::{Error, Result};
use crate::ui::state::Controlled;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type OpenState = RefCell<Controlled<bool>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The trigger was pressed.
    Trigger,
    /// A close button was pressed.
    Close,
    /// The backdrop around the content was pressed.
    OverlayPressed,
    /// Escape was pressed while the dialog had focus.
    Escape,
}

/// Root of a dialog. Owns the open state.
#[derive(Debug)]
pub struct Dialog {
    open: Rc<OpenState>,
}

impl Dialog {
    pub fn new(open: Controlled<bool>) -> Self {
        Self {
            open: Rc::new(RefCell::new(open.named("Dialog"))),
        }
    }

    pub fn is_open(&self) -> bool {
        *self.open.borrow().value()
    }

    /// Handle for building the dialog's parts.
    pub fn context(&self) -> DialogContext {
        DialogContext {
            open: Rc::downgrade(&self.open),
        }
    }

    pub fn update(&mut self, message: Message) {
        let next = match message {
            Message::Trigger => !self.is_open(),
            Message::Close | Message::OverlayPressed | Message::Escape => false,
        };
        Controlled::request_shared(&self.open, next);
    }

    /// Applies the host-supplied `open` prop for this render.
    pub fn sync(&self, open: Option<bool>) -> Result<()> {
        self.open.borrow_mut().sync(open)
    }
}

/// Weak handle to a dialog's open state.
///
/// The default context is not attached to any dialog.
#[derive(Debug, Clone, Default)]
pub struct DialogContext {
    open: Weak<OpenState>,
}

impl DialogContext {
    fn attach(&self, component: &'static str) -> Result<Weak<OpenState>> {
        if self.open.strong_count() == 0 {
            tracing::error!(component, "dialog part used without a dialog");
            return Err(Error::MissingProvider { component });
        }
        Ok(self.open.clone())
    }
}

fn with_dialog<R>(
    open: &Weak<OpenState>,
    component: &'static str,
    f: impl FnOnce(&OpenState) -> R,
) -> Result<R> {
    let open = open
        .upgrade()
        .ok_or(Error::MissingProvider { component })?;
    Ok(f(&open))
}

/// Button that flips the dialog open or closed.
#[derive(Debug)]
pub struct DialogTrigger {
    open: Weak<OpenState>,
}

impl DialogTrigger {
    pub fn new(context: &DialogContext) -> Result<Self> {
        Ok(Self {
            open: context.attach("DialogTrigger")?,
        })
    }

    pub fn press(&self) -> Result<()> {
        with_dialog(&self.open, "DialogTrigger", |open| {
            let next = !*open.borrow().value();
            Controlled::request_shared(open, next);
        })
    }
}

/// Button that closes the dialog.
#[derive(Debug)]
pub struct DialogClose {
    open: Weak<OpenState>,
}

impl DialogClose {
    pub fn new(context: &DialogContext) -> Result<Self> {
        Ok(Self {
            open: context.attach("DialogClose")?,
        })
    }

    pub fn press(&self) -> Result<()> {
        with_dialog(&self.open, "DialogClose", |open| {
            Controlled::request_shared(open, false);
        })
    }
}

/// Dialog body, shown only while the dialog is open.
#[derive(Debug)]
pub struct DialogContent {
    open: Weak<OpenState>,
}

impl DialogContent {
    pub fn new(context: &DialogContext) -> Result<Self> {
        Ok(Self {
            open: context.attach("DialogContent")?,
        })
    }

    pub fn is_visible(&self) -> Result<bool> {
        with_dialog(&self.open, "DialogContent", |open| *open.borrow().value())
    }

    /// A press on the backdrop closes the dialog.
    pub fn overlay_pressed(&self) -> Result<()> {
        with_dialog(&self.open, "DialogContent", |open| {
            Controlled::request_shared(open, false);
        })
    }
}
