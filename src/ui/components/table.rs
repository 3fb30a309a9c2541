// SPDX-License-Identifier: MPL-2.0
//! Sortable table headers and status badges.

use crate::error::Result;
use crate::ui::design_tokens::palette;
use crate::ui::state::Controlled;
use iced::Color;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header glyph.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub id: String,
    pub label: String,
    pub sortable: bool,
}

impl TableColumn {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sortable: false,
        }
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    HeaderPressed(String),
}

/// Sort state of a table's header row.
#[derive(Debug)]
pub struct TableSort {
    columns: Vec<TableColumn>,
    sort: Controlled<Option<SortState>>,
}

impl TableSort {
    pub fn new(columns: Vec<TableColumn>, sort: Controlled<Option<SortState>>) -> Self {
        Self {
            columns,
            sort: sort.named("Table"),
        }
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.value().as_ref()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::HeaderPressed(column) => self.header_pressed(&column),
        }
    }

    fn header_pressed(&mut self, column: &str) {
        if !self.columns.iter().any(|c| c.id == column && c.sortable) {
            return;
        }
        let direction = match self.sort() {
            Some(current) if current.column == column => current.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.sort.request(Some(SortState {
            column: column.to_owned(),
            direction,
        }));
    }

    /// Glyph shown next to `column`'s label, if it is the sorted column.
    pub fn indicator(&self, column: &str) -> Option<&'static str> {
        self.sort()
            .filter(|state| state.column == column)
            .map(|state| state.direction.indicator())
    }

    /// Applies the host-supplied sort prop for this render.
    pub fn sync(&mut self, sort: Option<Option<SortState>>) -> Result<()> {
        self.sort.sync(sort)
    }

    /// Sorts `rows` in place by `key`, honouring the current direction.
    ///
    /// Stable; rows are left untouched when nothing is sorted.
    pub fn sort_rows<R, K, F>(&self, rows: &mut [R], mut key: F)
    where
        K: Ord,
        F: FnMut(&R, &str) -> K,
    {
        let Some(state) = self.sort() else {
            return;
        };
        rows.sort_by(|a, b| {
            let ordering: Ordering = key(a, &state.column).cmp(&key(b, &state.column));
            match state.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Pending,
    Failed,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Pending => palette::GRAY_400,
            Self::Failed => palette::ERROR_500,
        }
    }
}

/// Status cell content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

impl StatusBadge {
    pub fn from_status(status: &str) -> Self {
        let (label, tone) = match status.to_lowercase().as_str() {
            "success" => ("Success", Tone::Success),
            "active" => ("Active", Tone::Success),
            "pending" => ("Pending", Tone::Pending),
            "failed" => ("Failed", Tone::Failed),
            "inactive" => ("Inactive", Tone::Failed),
            _ => {
                return Self {
                    label: status.to_owned(),
                    tone: Tone::Pending,
                }
            }
        };
        Self {
            label: label.to_owned(),
            tone,
        }
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn columns() -> Vec<TableColumn> {
        vec![
            TableColumn::new("name", "Name").sortable(),
            TableColumn::new("created", "Created").sortable(),
            TableColumn::new("actions", "Actions"),
        ]
    }

    #[test]
    fn first_press_sorts_ascending_then_flips() {
        let mut table = TableSort::new(columns(), Controlled::internal(None));

        table.update(Message::HeaderPressed("name".to_string()));
        assert_eq!(table.indicator("name"), Some("▲"));

        table.update(Message::HeaderPressed("name".to_string()));
        assert_eq!(
            table.sort(),
            Some(&SortState {
                column: "name".to_string(),
                direction: SortDirection::Descending,
            })
        );

        table.update(Message::HeaderPressed("created".to_string()));
        assert_eq!(table.indicator("created"), Some("▲"));
        assert_eq!(table.indicator("name"), None);
    }

    #[test]
    fn non_sortable_columns_are_ignored() {
        let mut table = TableSort::new(columns(), Controlled::internal(None));
        table.update(Message::HeaderPressed("actions".to_string()));
        table.update(Message::HeaderPressed("unknown".to_string()));
        assert!(table.sort().is_none());
    }

    #[test]
    fn controlled_sort_reports_request() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut table = TableSort::new(
            columns(),
            Controlled::external(None).on_change(move |s| sink.borrow_mut().push(s)),
        );

        table.update(Message::HeaderPressed("name".to_string()));
        assert!(table.sort().is_none());
        assert_eq!(calls.borrow().len(), 1);

        let requested = calls.borrow()[0].clone();
        table.sync(Some(requested)).expect("sync");
        assert_eq!(table.indicator("name"), Some("▲"));
    }

    #[test]
    fn sort_rows_is_stable_and_directional() {
        let mut table = TableSort::new(columns(), Controlled::internal(None));
        let mut rows = vec![("b", 1), ("a", 2), ("b", 0), ("a", 1)];

        table.sort_rows(&mut rows, |row, _| row.0);
        assert_eq!(rows, vec![("b", 1), ("a", 2), ("b", 0), ("a", 1)]);

        table.update(Message::HeaderPressed("name".to_string()));
        table.sort_rows(&mut rows, |row, _| row.0);
        assert_eq!(rows, vec![("a", 2), ("a", 1), ("b", 1), ("b", 0)]);

        table.update(Message::HeaderPressed("name".to_string()));
        table.sort_rows(&mut rows, |row, _| row.0);
        assert_eq!(rows, vec![("b", 1), ("b", 0), ("a", 2), ("a", 1)]);
    }

    #[test]
    fn status_badges_map_known_statuses() {
        assert_eq!(StatusBadge::from_status("success").tone, Tone::Success);
        assert_eq!(StatusBadge::from_status("Active").label, "Active");
        assert_eq!(StatusBadge::from_status("pending").tone, Tone::Pending);
        assert_eq!(StatusBadge::from_status("FAILED").tone, Tone::Failed);
        assert_eq!(StatusBadge::from_status("inactive").tone, Tone::Failed);

        let unknown = StatusBadge::from_status("archived");
        assert_eq!(unknown.label, "archived");
        assert_eq!(unknown.tone, Tone::Pending);
        assert_eq!(unknown.to_string(), "archived");
    }
}
