// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the widgets and the toast service together.
//!
//! The `App` owns one [`Toaster`] in tick mode: Iced drives expiry through a
//! periodic subscription while any toast is waiting to expire, and the
//! toaster's subscriber mirrors each broadcast into the list the view renders.

mod message;
mod subscription;
mod view;

pub use message::Message;

use crate::config::{self, Config};
use crate::ui::components::{Dialog, TabItem, Tabs, Toggle};
use crate::ui::notifications::{
    self, Notification, TimerMode, ToastOptions, ToastPosition, Toaster,
};
use crate::ui::state::Controlled;
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;

type Mirror = Arc<Mutex<Vec<Notification>>>;

/// Root Iced application state.
pub struct App {
    config: Config,
    toaster: Toaster,
    /// Written by the toaster subscriber, read back after each update.
    mirror: Mirror,
    toasts: Vec<Notification>,
    _toast_subscription: notifications::Subscription,
    toggle: Toggle,
    tabs: Tabs,
    dialog: Dialog,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("dialog_open", &self.dialog.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to load settings, using defaults");
            Config::default()
        });
        (Self::with_config(config), Task::none())
    }

    /// Builds the app state from an already loaded configuration.
    pub fn with_config(config: Config) -> Self {
        let toaster = Toaster::from_config(&config.toasts).with_timer_mode(TimerMode::Tick);

        let mirror: Mirror = Arc::default();
        let sink = Arc::clone(&mirror);
        let subscription = toaster.subscribe(move |toasts| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = toasts.to_vec();
        });

        let tabs = Tabs::new(
            vec![
                TabItem::new("wallets", "Wallets"),
                TabItem::new("policies", "Policies"),
                TabItem::new("audit", "Audit log").disabled(),
            ],
            None,
        );

        let mut app = Self {
            config,
            toaster,
            mirror,
            toasts: Vec::new(),
            _toast_subscription: subscription,
            toggle: Toggle::new(Controlled::internal(false)).label("Require approval"),
            tabs,
            dialog: Dialog::new(Controlled::internal(false)),
        };
        app.refresh_toasts();
        app
    }

    fn title(&self) -> String {
        String::from("Lumen UI")
    }

    pub fn toasts(&self) -> &[Notification] {
        &self.toasts
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn position(&self) -> ToastPosition {
        self.toaster.position()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toaster.has_pending_expiry())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Push(kind) => {
                let options = match kind {
                    notifications::Kind::Error => ToastOptions::new(),
                    _ => ToastOptions::new().timed(&self.config.toasts),
                };
                self.toaster.add(kind, options);
            }
            Message::ClearToasts => self.toaster.clear(),
            Message::Notification(message) => self.toaster.handle_message(&message),
            Message::Tick(_) => {
                self.toaster.tick();
            }
            Message::Toggle(message) => self.toggle.update(message),
            Message::Tabs(message) => self.tabs.update(message),
            Message::Dialog(message) => self.dialog.update(message),
        }
        self.refresh_toasts();
        Task::none()
    }

    fn refresh_toasts(&mut self) {
        let mirror = self.mirror.lock().unwrap_or_else(PoisonError::into_inner);
        self.toasts.clone_from(&mirror);
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toggle: &self.toggle,
            tabs: &self.tabs,
            dialog_open: self.dialog.is_open(),
            toasts: &self.toasts,
            position: self.position(),
        })
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_open()
    }
}
