// SPDX-License-Identifier: MPL-2.0
//! `lumen_ui` is a small toolkit of interactive widgets and a toast
//! notification service for Iced applications.
//!
//! Every widget can run uncontrolled (it owns its value) or controlled (the
//! host owns the value and receives change requests). Toasts are queued by a
//! shared [`ui::notifications::Toaster`] that expires them on a timer and
//! broadcasts every change to its subscribers.

#![doc(html_root_url = "https://docs.rs/lumen_ui/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
