// SPDX-License-Identifier: MPL-2.0
//! Widget state shared by the interactive components.

pub mod controlled;

pub use controlled::{Controlled, OnChange, Ownership};
