// SPDX-License-Identifier: MPL-2.0
//! Interactive widgets built on controlled/uncontrolled state.
//!
//! # Components
//!
//! - [`toggle`] - On/off switch
//! - [`dialog`] - Modal dialog and its trigger, content and close parts
//! - [`dropdown`] - Select menu with search and keyboard navigation
//! - [`tabs`] - Horizontal tab strip
//! - [`table`] - Sortable headers and status badges

pub mod dialog;
pub mod dropdown;
pub mod table;
pub mod tabs;
pub mod toggle;

pub use dialog::{Dialog, DialogClose, DialogContent, DialogContext, DialogTrigger};
pub use dropdown::{Dropdown, DropdownOption};
pub use table::{SortDirection, SortState, StatusBadge, TableColumn, TableSort};
pub use tabs::{TabItem, Tabs};
pub use toggle::Toggle;
