// SPDX-License-Identifier: MPL-2.0
//! On/off switch.

use crate::error::Result;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::Controlled;
use iced::widget::{toggler, Row, Text};
use iced::{Alignment, Element};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
}

#[derive(Debug)]
pub struct Toggle {
    checked: Controlled<bool>,
    disabled: bool,
    label: Option<String>,
}

impl Toggle {
    pub fn new(checked: Controlled<bool>) -> Self {
        Self {
            checked: checked.named("Toggle"),
            disabled: false,
            label: None,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_checked(&self) -> bool {
        *self.checked.value()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Toggle => {
                if !self.disabled {
                    let next = !self.is_checked();
                    self.checked.request(next);
                }
            }
        }
    }

    /// Applies the host-supplied `checked` prop for this render.
    pub fn sync(&mut self, checked: Option<bool>) -> Result<()> {
        self.checked.sync(checked)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut switch = toggler(self.is_checked()).size(20.0);
        if !self.disabled {
            switch = switch.on_toggle(|_| Message::Toggle);
        }

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(switch);
        if let Some(label) = &self.label {
            row = row.push(Text::new(label.as_str()).size(typography::BODY));
        }
        row.into()
    }
}
