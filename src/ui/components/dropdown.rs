// SPDX-License-Identifier: MPL-2.0
//! Dropdown (select) state machine with search and keyboard navigation.
//!
//! The selected value, the open flag, the search term and the highlighted
//! row are each a [`Controlled`] value, so a host may own any subset of them.
//! All interactions go through [`Controlled::request`]; in controlled mode the
//! displayed state only changes once the host passes the new value back via
//! [`Dropdown::sync`].

use crate::error::Result;
use crate::ui::state::Controlled;

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Visual variant. Only affects the text shown when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Type1,
    Type2,
    Type3,
    Combo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    ArrowDown,
    ArrowUp,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    TriggerPressed,
    OptionPressed(String),
    OptionHovered(usize),
    SearchChanged(String),
    KeyPressed(Key),
}

/// Host-supplied values for one render. `None` leaves a field uncontrolled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Supplied {
    pub value: Option<Option<String>>,
    pub open: Option<bool>,
    pub search: Option<String>,
    pub highlighted: Option<Option<usize>>,
}

const DEFAULT_PLACEHOLDER: &str = "-- Select --";

#[derive(Debug)]
pub struct Dropdown {
    options: Vec<DropdownOption>,
    variant: Variant,
    label: Option<String>,
    placeholder: String,
    searchable: bool,
    disabled: bool,
    value: Controlled<Option<String>>,
    open: Controlled<bool>,
    search: Controlled<String>,
    highlighted: Controlled<Option<usize>>,
}

impl Dropdown {
    /// Creates a dropdown whose state is entirely uncontrolled.
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self {
            options,
            variant: Variant::default(),
            label: None,
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            searchable: false,
            disabled: false,
            value: Controlled::internal(None).named("Dropdown"),
            open: Controlled::internal(false).named("Dropdown"),
            search: Controlled::internal(String::new()).named("Dropdown"),
            highlighted: Controlled::internal(None).named("Dropdown"),
        }
    }

    #[must_use]
    pub fn value(mut self, value: Controlled<Option<String>>) -> Self {
        self.value = value.named("Dropdown");
        self
    }

    #[must_use]
    pub fn open(mut self, open: Controlled<bool>) -> Self {
        self.open = open.named("Dropdown");
        self
    }

    #[must_use]
    pub fn search(mut self, search: Controlled<String>) -> Self {
        self.search = search.named("Dropdown");
        self
    }

    #[must_use]
    pub fn highlighted(mut self, highlighted: Controlled<Option<usize>>) -> Self {
        self.highlighted = highlighted.named("Dropdown");
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.value.value().as_deref()
    }

    pub fn selected_option(&self) -> Option<&DropdownOption> {
        let value = self.selected_value()?;
        self.options.iter().find(|option| option.value == value)
    }

    pub fn is_open(&self) -> bool {
        *self.open.value()
    }

    pub fn search_term(&self) -> &str {
        self.search.value()
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        *self.highlighted.value()
    }

    /// Options matching the search term (case-insensitive, on the label).
    pub fn filtered_options(&self) -> Vec<&DropdownOption> {
        let term = self.search_term();
        if !self.searchable || term.is_empty() {
            return self.options.iter().collect();
        }
        let term = term.to_lowercase();
        self.options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&term))
            .collect()
    }

    /// Text shown on the trigger.
    pub fn display_text(&self) -> &str {
        if let Some(option) = self.selected_option() {
            return &option.label;
        }
        match self.variant {
            Variant::Type1 => self.label.as_deref().unwrap_or("Dropdown"),
            Variant::Type2 => self.label.as_deref().unwrap_or("All Items"),
            Variant::Type3 | Variant::Combo => &self.placeholder,
        }
    }

    pub fn update(&mut self, message: Message) {
        if self.disabled {
            return;
        }
        match message {
            Message::TriggerPressed => {
                let next = !self.is_open();
                self.open.request(next);
            }
            Message::OptionPressed(value) => self.select(&value),
            Message::OptionHovered(index) => self.highlighted.request(Some(index)),
            Message::SearchChanged(term) => self.search.request(term),
            Message::KeyPressed(key) => self.key(key),
        }
    }

    /// Applies the host-supplied props for this render.
    ///
    /// Every field is checked before any is applied, so a mode switch leaves
    /// the dropdown exactly as it was.
    pub fn sync(&mut self, supplied: Supplied) -> Result<()> {
        self.value.check_mode(supplied.value.is_some())?;
        self.open.check_mode(supplied.open.is_some())?;
        self.search.check_mode(supplied.search.is_some())?;
        self.highlighted.check_mode(supplied.highlighted.is_some())?;

        self.value.sync(supplied.value)?;
        self.open.sync(supplied.open)?;
        self.search.sync(supplied.search)?;
        self.highlighted.sync(supplied.highlighted)
    }

    /// Picks the option with `value`. Disabled and unknown options are ignored.
    fn select(&mut self, value: &str) {
        let Some(option) = self.options.iter().find(|option| option.value == value) else {
            return;
        };
        if option.disabled {
            return;
        }
        let value = option.value.clone();
        self.value.request(Some(value));
        self.close();
    }

    fn close(&mut self) {
        self.open.request(false);
        self.search.request(String::new());
        self.highlighted.request(None);
    }

    fn key(&mut self, key: Key) {
        if !self.is_open() {
            if matches!(key, Key::Enter | Key::Space) {
                self.open.request(true);
            }
            return;
        }

        let count = self.filtered_options().len();
        match key {
            Key::ArrowDown if count > 0 => {
                let next = match self.highlighted_index() {
                    Some(index) if index + 1 < count => index + 1,
                    _ => 0,
                };
                self.highlighted.request(Some(next));
            }
            Key::ArrowUp if count > 0 => {
                let next = match self.highlighted_index() {
                    Some(index) if index > 0 && index < count => index - 1,
                    _ => count - 1,
                };
                self.highlighted.request(Some(next));
            }
            Key::Enter => {
                let target = self
                    .highlighted_index()
                    .and_then(|index| self.filtered_options().get(index).map(|o| o.value.clone()));
                if let Some(value) = target {
                    self.select(&value);
                }
            }
            Key::Escape => self.close(),
            Key::Space | Key::ArrowDown | Key::ArrowUp => {}
        }
    }
}
