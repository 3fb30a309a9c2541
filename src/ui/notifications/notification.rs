// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Kind` enum and the
//! `ToastOptions` used by callers to describe a new toast.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Identifiers are handed out from a process-wide counter and are never
/// reused, so a late timer can never hit a newer toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    // Base-36, lowercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let mut n = self.0;
        let mut buf = [0u8; 13];
        let mut i = buf.len();
        loop {
            i -= 1;
            buf[i] = DIGITS[(n % 36) as usize];
            n /= 36;
            if n == 0 {
                break;
            }
        }
        // Only ASCII digits were written.
        f.write_str(std::str::from_utf8(&buf[i..]).map_err(|_| fmt::Error)?)
    }
}

/// Category of a notification. Determines default texts and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Operation completed (green).
    #[default]
    Success,
    /// Operation failed (red).
    Error,
    /// Operation still running (blue).
    Processing,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Success, Kind::Error, Kind::Processing];

    /// Title used when the caller did not supply one.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Kind::Success => "Success",
            Kind::Error => "Failed!",
            Kind::Processing => "Processing",
        }
    }

    /// Body used when the caller did not supply one.
    #[must_use]
    pub fn default_body(self) -> &'static str {
        match self {
            Kind::Success => "Endpoint is successfully generated.",
            Kind::Error => "Please check your credentials and reattempt.",
            Kind::Processing => "Lorem lipsum set amet",
        }
    }

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Processing => palette::INFO_500,
        }
    }

    /// Short glyph shown in front of the toast text.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "⚠",
            Kind::Processing => "…",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Processing => "processing",
        })
    }
}

/// Caller-supplied description of a toast.
///
/// Every field is optional. Missing or empty texts are resolved from the
/// kind, and a missing or zero expiry keeps the toast until it is dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub title: Option<String>,
    pub body: Option<String>,
    pub expiry: Option<Duration>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn expiry(mut self, expiry: Duration) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Uses the configured default duration.
    #[must_use]
    pub fn timed(self, config: &crate::config::ToastConfig) -> Self {
        self.expiry(config.default_duration())
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: String,
    body: String,
    /// `None` means the toast stays until dismissed.
    expiry: Option<Duration>,
    created_at: Instant,
}

impl Notification {
    /// Creates a notification with the default texts of `kind` and no expiry.
    pub fn new(kind: Kind) -> Self {
        Self::with_options(kind, ToastOptions::default())
    }

    /// Creates a notification, resolving omitted fields from `kind`.
    pub fn with_options(kind: Kind, options: ToastOptions) -> Self {
        let ToastOptions {
            title,
            body,
            expiry,
        } = options;
        Self {
            id: NotificationId::new(),
            kind,
            title: title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| kind.default_title().to_owned()),
            body: body
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| kind.default_body().to_owned()),
            expiry: expiry.filter(|d| !d.is_zero()),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success() -> Self {
        Self::new(Kind::Success)
    }

    /// Creates an error notification.
    pub fn error() -> Self {
        Self::new(Kind::Error)
    }

    /// Creates a processing notification.
    pub fn processing() -> Self {
        Self::new(Kind::Processing)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn expiry(&self) -> Option<Duration> {
        self.expiry
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Instant at which the toast expires, if it expires at all.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.expiry.map(|d| self.created_at + d)
    }

    /// Returns whether the toast's expiry has elapsed at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success();
        let n2 = Notification::success();
        assert_ne!(n1.id(), n2.id());
        assert!(n2.id() > n1.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        assert_ne!(Kind::Success.color(), Kind::Error.color());
        assert_ne!(Kind::Success.color(), Kind::Processing.color());
        assert_ne!(Kind::Error.color(), Kind::Processing.color());
    }

    #[test]
    fn omitted_texts_fall_back_to_kind_defaults() {
        let n = Notification::error();
        assert_eq!(n.title(), "Failed!");
        assert_eq!(n.body(), "Please check your credentials and reattempt.");

        let n = Notification::processing();
        assert_eq!(n.title(), "Processing");
    }

    #[test]
    fn empty_texts_fall_back_to_kind_defaults() {
        let notification =
            Notification::with_options(Kind::Success, ToastOptions::new().title("").body(""));
        assert_eq!(notification.title(), "Success");
        assert_eq!(notification.body(), "Endpoint is successfully generated.");

        let notification = Notification::with_options(Kind::Error, ToastOptions::new().body(""));
        assert_eq!(notification.body(), "Please check your credentials and reattempt.");
    }

    #[test]
    fn supplied_texts_win_over_defaults() {
        let n = Notification::with_options(
            Kind::Success,
            ToastOptions::new().title("Saved").body("Wallet stored"),
        );
        assert_eq!(n.title(), "Saved");
        assert_eq!(n.body(), "Wallet stored");
    }

    #[test]
    fn zero_expiry_means_persistent() {
        let n = Notification::with_options(
            Kind::Success,
            ToastOptions::new().expiry(Duration::ZERO),
        );
        assert_eq!(n.expiry(), None);
        assert!(n.deadline().is_none());
        assert!(!n.is_expired_at(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn timed_notification_expires_at_deadline() {
        let n = Notification::with_options(
            Kind::Success,
            ToastOptions::new().expiry(Duration::from_millis(100)),
        );
        let created = n.created_at();
        assert!(!n.is_expired_at(created + Duration::from_millis(99)));
        assert!(n.is_expired_at(created + Duration::from_millis(100)));
    }

    #[test]
    fn id_displays_in_base36() {
        assert_eq!(NotificationId(0).to_string(), "0");
        assert_eq!(NotificationId(35).to_string(), "z");
        assert_eq!(NotificationId(36).to_string(), "10");
        assert_eq!(NotificationId(u64::MAX).to_string(), "3w5e11264sgsf");
    }

    #[test]
    fn kind_displays_lowercase() {
        assert_eq!(Kind::Processing.to_string(), "processing");
    }
}
