// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the demo application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks only while some toast is waiting to expire.
pub fn create_tick_subscription(has_pending_expiry: bool) -> Subscription<Message> {
    if has_pending_expiry {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
