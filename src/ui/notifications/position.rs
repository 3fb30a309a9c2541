// SPDX-License-Identifier: MPL-2.0
//! Screen anchor of the toast overlay.

use iced::alignment::{Horizontal, Vertical};
use serde::{Deserialize, Serialize};

/// Where the toast stack is anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    Center,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 7] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
        ToastPosition::Center,
    ];

    #[must_use]
    pub fn horizontal(self) -> Horizontal {
        match self {
            ToastPosition::TopLeft | ToastPosition::BottomLeft => Horizontal::Left,
            ToastPosition::TopCenter | ToastPosition::BottomCenter | ToastPosition::Center => {
                Horizontal::Center
            }
            ToastPosition::TopRight | ToastPosition::BottomRight => Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(self) -> Vertical {
        match self {
            ToastPosition::TopLeft | ToastPosition::TopCenter | ToastPosition::TopRight => {
                Vertical::Top
            }
            ToastPosition::Center => Vertical::Center,
            ToastPosition::BottomLeft
            | ToastPosition::BottomCenter
            | ToastPosition::BottomRight => Vertical::Bottom,
        }
    }

    /// Bottom-anchored stacks grow upwards, so the newest toast is drawn last
    /// (closest to the screen edge).
    #[must_use]
    pub fn newest_at_bottom(self) -> bool {
        self.vertical() == Vertical::Bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_top_right() {
        let position = ToastPosition::default();
        assert_eq!(position.horizontal(), Horizontal::Right);
        assert_eq!(position.vertical(), Vertical::Top);
    }

    #[test]
    fn center_is_centered_both_ways() {
        assert_eq!(ToastPosition::Center.horizontal(), Horizontal::Center);
        assert_eq!(ToastPosition::Center.vertical(), Vertical::Center);
    }

    #[test]
    fn only_bottom_positions_reverse_the_stack() {
        let reversed: Vec<_> = ToastPosition::ALL
            .into_iter()
            .filter(|p| p.newest_at_bottom())
            .collect();
        assert_eq!(
            reversed,
            vec![
                ToastPosition::BottomLeft,
                ToastPosition::BottomCenter,
                ToastPosition::BottomRight
            ]
        );
    }

    #[test]
    fn serializes_as_kebab_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            position: ToastPosition,
        }
        let text = toml::to_string(&Wrapper {
            position: ToastPosition::BottomCenter,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "position = \"bottom-center\"");
        let back: Wrapper = toml::from_str("position = \"top-left\"").expect("deserialize");
        assert_eq!(back.position, ToastPosition::TopLeft);
    }
}
