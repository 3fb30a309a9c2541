// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the demo application.

use crate::ui::components::{dialog, tabs, toggle};
use crate::ui::notifications::{Kind, NotificationMessage};
use std::time::Instant;

/// Messages consumed by `App::update`. Component messages are forwarded.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raise a toast of the given kind with its default text.
    Push(Kind),
    ClearToasts,
    Notification(NotificationMessage),
    Toggle(toggle::Message),
    Tabs(tabs::Message),
    Dialog(dialog::Message),
    Tick(Instant), // Periodic tick for toast expiry
}
