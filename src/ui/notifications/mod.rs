// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about the outcome of an
//! action (success, failure, work in progress) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `Kind` and the caller-facing `ToastOptions`
//! - [`manager`] - `Manager`, the ordered, capacity-bounded list
//! - [`toaster`] - `Toaster`, the shared service with timers and subscribers
//! - [`position`] - `ToastPosition`, where the overlay is anchored
//! - [`toast`] - Toast widget for rendering notifications
//!
//! # Usage
//!
//! ```no_run
//! use lumen_ui::ui::notifications::{ToastOptions, Toaster};
//! use std::time::Duration;
//!
//! let toaster = Toaster::new();
//! let _subscription = toaster.subscribe(|toasts| println!("{} toasts", toasts.len()));
//!
//! let id = toaster.success(ToastOptions::new().expiry(Duration::from_secs(3)));
//! toaster.dismiss(id);
//! ```
//!
//! # Design Considerations
//!
//! - At most five toasts are kept by default; the oldest are evicted first
//! - Toasts without an expiry stay until dismissed
//! - Position: top-right corner unless configured otherwise

mod manager;
mod notification;
mod position;
mod toast;
mod toaster;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, ToastOptions};
pub use position::ToastPosition;
pub use toast::Toast;
pub use toaster::{Subscription, TimerMode, Toaster};
