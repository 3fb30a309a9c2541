// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`notifications`] - Toast notification queue, service and overlay
//! - [`components`] - Interactive widgets (toggle, dialog, dropdown, tabs, table)
//! - [`state`] - Controlled/uncontrolled value handling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod state;
