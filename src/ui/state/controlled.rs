// SPDX-License-Identifier: MPL-2.0
//! Controlled/uncontrolled widget state.
//!
//! Every interactive widget either owns its value (uncontrolled) or displays
//! a value owned by the host and only *requests* changes through a callback
//! (controlled). The mode is picked once, when the widget is constructed,
//! and a later attempt to switch is rejected with [`Error::ModeSwitch`].
//!
//! # Example
//!
//! ```
//! use lumen_ui::ui::state::Controlled;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let requested = Rc::new(Cell::new(false));
//! let sink = Rc::clone(&requested);
//! let mut checked = Controlled::external(false).on_change(move |v| sink.set(v));
//!
//! checked.request(true);
//! assert!(requested.get());
//! assert!(!checked.value()); // unchanged until the host supplies `true`
//!
//! checked.sync(Some(true)).unwrap();
//! assert!(*checked.value());
//! ```

use crate::error::{Error, ModeSwitch, Result};
use std::cell::RefCell;
use std::fmt;

/// Callback invoked with every proposed value.
pub type OnChange<T> = Box<dyn FnMut(T)>;

/// Who owns a widget's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ownership<T> {
    /// The widget owns the value and updates it on interaction.
    Internal(T),
    /// The host owns the value; this is the last value it supplied.
    External(T),
}

/// A widget value in controlled or uncontrolled mode.
pub struct Controlled<T> {
    ownership: Ownership<T>,
    on_change: Option<OnChange<T>>,
    widget: &'static str,
}

impl<T: Clone> Controlled<T> {
    /// Uncontrolled: the widget owns the value, starting at `initial`.
    pub fn internal(initial: T) -> Self {
        Self {
            ownership: Ownership::Internal(initial),
            on_change: None,
            widget: "widget",
        }
    }

    /// Controlled: the host owns the value and supplies it on every render.
    pub fn external(value: T) -> Self {
        Self {
            ownership: Ownership::External(value),
            on_change: None,
            widget: "widget",
        }
    }

    /// Resolves the mode from optional props, once.
    ///
    /// A supplied `value` selects controlled mode. Otherwise the widget owns
    /// its value, starting from `default` or `T::default()`.
    pub fn from_props(value: Option<T>, default: Option<T>) -> Self
    where
        T: Default,
    {
        match value {
            Some(value) => Self::external(value),
            None => Self::internal(default.unwrap_or_default()),
        }
    }

    /// Sets the change callback.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(T) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Names the owning widget in error messages.
    #[must_use]
    pub fn named(mut self, widget: &'static str) -> Self {
        self.widget = widget;
        self
    }

    /// The value to display.
    pub fn value(&self) -> &T {
        match &self.ownership {
            Ownership::Internal(value) | Ownership::External(value) => value,
        }
    }

    pub fn ownership(&self) -> &Ownership<T> {
        &self.ownership
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.ownership, Ownership::External(_))
    }

    /// Proposes a new value after a user interaction.
    ///
    /// In controlled mode only the callback sees the value. In uncontrolled
    /// mode the value is stored first and the callback, if any, observes it.
    pub fn request(&mut self, proposed: T) {
        self.store(&proposed);
        if let Some(callback) = self.on_change.as_mut() {
            callback(proposed);
        }
    }

    /// [`request`](Self::request) for a value shared through a `RefCell`.
    ///
    /// The borrow is released before the callback runs, so the callback may
    /// read or sync the same state.
    pub fn request_shared(state: &RefCell<Self>, proposed: T) {
        let callback = {
            let mut state = state.borrow_mut();
            state.store(&proposed);
            state.on_change.take()
        };
        let Some(mut callback) = callback else {
            return;
        };
        callback(proposed);

        let mut state = state.borrow_mut();
        if state.on_change.is_none() {
            state.on_change = Some(callback);
        }
    }

    fn store(&mut self, proposed: &T) {
        if let Ownership::Internal(value) = &mut self.ownership {
            *value = proposed.clone();
        }
    }

    /// Applies the value the host supplies on a render.
    ///
    /// `Some` keeps a controlled widget in sync; `None` is what an
    /// uncontrolled widget receives. Anything else is a mode switch: it is
    /// logged, rejected, and the widget keeps its original mode.
    pub fn sync(&mut self, supplied: Option<T>) -> Result<()> {
        self.check_mode(supplied.is_some())?;
        if let (Ownership::External(value), Some(supplied)) = (&mut self.ownership, supplied) {
            *value = supplied;
        }
        Ok(())
    }

    /// Checks that a render supplying (`true`) or omitting (`false`) the
    /// value keeps the current mode, without applying anything.
    pub fn check_mode(&self, supplied: bool) -> Result<()> {
        let controlled = self.is_controlled();
        if controlled == supplied {
            return Ok(());
        }
        let switch = ModeSwitch {
            widget: self.widget,
            was_controlled: controlled,
        };
        tracing::error!(widget = self.widget, "{switch}");
        Err(Error::from(switch))
    }
}

impl<T: fmt::Debug> fmt::Debug for Controlled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controlled")
            .field("widget", &self.widget)
            .field("ownership", &self.ownership)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
