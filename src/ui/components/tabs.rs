// SPDX-License-Identifier: MPL-2.0
//! Horizontal tab strip.

use crate::error::Result;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::Controlled;
use iced::widget::{button, Row, Text};
use iced::{Element, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub disabled: bool,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Select(String),
}

#[derive(Debug)]
pub struct Tabs {
    items: Vec<TabItem>,
    active: Controlled<String>,
}

impl Tabs {
    /// Uncontrolled tabs starting on `default`, or on the first item.
    pub fn new(items: Vec<TabItem>, default: Option<String>) -> Self {
        let initial = default
            .or_else(|| items.first().map(|item| item.id.clone()))
            .unwrap_or_default();
        Self {
            items,
            active: Controlled::internal(initial).named("Tabs"),
        }
    }

    /// Tabs whose active id is owned by the host.
    pub fn controlled(items: Vec<TabItem>, active: Controlled<String>) -> Self {
        Self {
            items,
            active: active.named("Tabs"),
        }
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn active(&self) -> &str {
        self.active.value()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Select(id) => {
                let selectable = self
                    .items
                    .iter()
                    .any(|item| item.id == id && !item.disabled);
                if selectable {
                    self.active.request(id);
                }
            }
        }
    }

    /// Applies the host-supplied `active` prop for this render.
    pub fn sync(&mut self, active: Option<String>) -> Result<()> {
        self.active.sync(active)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.items
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, item| {
                let style: fn(&Theme, button::Status) -> button::Style =
                    if self.is_active(&item.id) {
                        button::primary
                    } else {
                        button::secondary
                    };
                let mut tab = button(Text::new(item.label.as_str()).size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .style(style);
                if !item.disabled {
                    tab = tab.on_press(Message::Select(item.id.clone()));
                }
                row.push(tab)
            })
            .into()
    }
}
