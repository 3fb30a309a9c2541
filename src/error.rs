// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A widget part was built without the parent that owns its state.
    MissingProvider { component: &'static str },
    /// A widget was switched between controlled and uncontrolled mode.
    ModeSwitch(ModeSwitch),
}

/// Details of a rejected controlled/uncontrolled mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSwitch {
    pub widget: &'static str,
    /// `true` if the widget was constructed in controlled mode.
    pub was_controlled: bool,
}

impl ModeSwitch {
    fn describe(controlled: bool) -> &'static str {
        if controlled {
            "controlled"
        } else {
            "uncontrolled"
        }
    }
}

impl fmt::Display for ModeSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} switched from {} to {} mode",
            self.widget,
            Self::describe(self.was_controlled),
            Self::describe(!self.was_controlled)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::MissingProvider { component } => {
                write!(f, "Widget Error: {} used outside of its parent", component)
            }
            Error::ModeSwitch(switch) => write!(f, "Widget Error: {}", switch),
        }
    }
}

impl std::error::Error for Error {}

impl From<ModeSwitch> for Error {
    fn from(switch: ModeSwitch) -> Self {
        Error::ModeSwitch(switch)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
