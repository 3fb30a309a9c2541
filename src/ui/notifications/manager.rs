// SPDX-License-Identifier: MPL-2.0
//! Notification list management.
//!
//! The `Manager` owns the ordered list of active notifications (newest first),
//! enforces the capacity limit and knows which notifications have expired.
//! It is purely synchronous; [`Toaster`](super::Toaster) adds timers and
//! subscribers on top of it.

use super::notification::{Notification, NotificationId};
use super::position::ToastPosition;
use crate::config::DEFAULT_MAX_TOASTS;
use std::collections::VecDeque;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss deadlines.
    Tick,
}

/// Holds the active notifications, newest first.
#[derive(Debug)]
pub struct Manager {
    notifications: VecDeque<Notification>,
    capacity: usize,
    position: ToastPosition,
}

impl Default for Manager {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_TOASTS)
    }
}

impl Manager {
    /// Creates a new empty manager with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager keeping at most `capacity` notifications.
    ///
    /// A capacity of zero keeps nothing: every push is evicted immediately.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            notifications: VecDeque::new(),
            capacity,
            position: ToastPosition::default(),
        }
    }

    /// Inserts a notification at the front of the list.
    ///
    /// Returns the notifications evicted from the tail to stay within capacity.
    pub fn push(&mut self, notification: Notification) -> Vec<Notification> {
        tracing::debug!(
            id = %notification.id(),
            kind = %notification.kind(),
            "toast added"
        );
        self.notifications.push_front(notification);
        self.truncate()
    }

    /// Removes a notification by its ID.
    ///
    /// Returns `true` if the notification was found. Unknown IDs are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.notifications.iter().position(|n| n.id() == id) {
            self.notifications.remove(pos);
            tracing::debug!(%id, "toast removed");
            true
        } else {
            false
        }
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    /// Changes the capacity and drops the oldest entries that no longer fit.
    pub fn set_capacity(&mut self, capacity: usize) -> Vec<Notification> {
        self.capacity = capacity;
        self.truncate()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn set_position(&mut self, position: ToastPosition) {
        self.position = position;
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position
    }

    /// Removes every notification whose expiry has elapsed at `now`.
    ///
    /// Returns the IDs that were removed.
    pub fn expire(&mut self, now: Instant) -> Vec<NotificationId> {
        let expired: Vec<NotificationId> = self
            .notifications
            .iter()
            .filter(|n| n.is_expired_at(now))
            .map(Notification::id)
            .collect();

        if !expired.is_empty() {
            self.notifications.retain(|n| !n.is_expired_at(now));
            tracing::debug!(count = expired.len(), "toasts expired");
        }
        expired
    }

    /// Returns the notifications, newest first.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    /// Copies the current list, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Returns whether any notification is waiting for its expiry.
    #[must_use]
    pub fn has_pending_expiry(&self) -> bool {
        self.notifications.iter().any(|n| n.expiry().is_some())
    }

    fn truncate(&mut self) -> Vec<Notification> {
        if self.notifications.len() <= self.capacity {
            return Vec::new();
        }
        let evicted: Vec<Notification> = self.notifications.drain(self.capacity..).collect();
        tracing::debug!(count = evicted.len(), capacity = self.capacity, "toasts evicted");
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Kind, ToastOptions};
    use std::time::Duration;

    fn ids(manager: &Manager) -> Vec<NotificationId> {
        manager.notifications().map(Notification::id).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.capacity(), DEFAULT_MAX_TOASTS);
        assert_eq!(manager.position(), ToastPosition::TopRight);
    }

    #[test]
    fn push_keeps_newest_first() {
        let mut manager = Manager::new();
        let first = Notification::success();
        let second = Notification::error();
        let (id1, id2) = (first.id(), second.id());

        manager.push(first);
        manager.push(second);

        assert_eq!(ids(&manager), vec![id2, id1]);
    }

    #[test]
    fn push_past_capacity_evicts_oldest() {
        let mut manager = Manager::with_capacity(2);
        let n1 = Notification::success();
        let n2 = Notification::error();
        let n3 = Notification::processing();
        let (id1, id2, id3) = (n1.id(), n2.id(), n3.id());

        assert!(manager.push(n1).is_empty());
        assert!(manager.push(n2).is_empty());
        let evicted = manager.push(n3);

        assert_eq!(ids(&manager), vec![id3, id2]);
        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].id(), id1);
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut manager = Manager::with_capacity(3);
        for i in 0..20 {
            manager.push(Notification::new(Kind::ALL[i % 3]));
            assert!(manager.len() <= 3);
        }
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn dismiss_removes_and_is_idempotent() {
        let mut manager = Manager::new();
        let notification = Notification::success();
        let id = notification.id();
        manager.push(notification);

        assert!(manager.dismiss(id));
        assert!(manager.is_empty());
        assert!(!manager.dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        manager.push(Notification::success());
        let fake_id = Notification::success().id();

        assert!(!manager.dismiss(fake_id));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn dismiss_preserves_order_of_the_rest() {
        let mut manager = Manager::new();
        let pushed: Vec<NotificationId> = (0..4)
            .map(|_| {
                let n = Notification::success();
                let id = n.id();
                manager.push(n);
                id
            })
            .collect();

        manager.dismiss(pushed[1]);
        assert_eq!(ids(&manager), vec![pushed[3], pushed[2], pushed[0]]);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::success());
        }

        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn shrinking_capacity_truncates_tail() {
        let mut manager = Manager::new();
        let pushed: Vec<NotificationId> = (0..5)
            .map(|_| {
                let n = Notification::success();
                let id = n.id();
                manager.push(n);
                id
            })
            .collect();

        let evicted = manager.set_capacity(2);
        assert_eq!(ids(&manager), vec![pushed[4], pushed[3]]);
        assert_eq!(evicted.len(), 3);
        assert_eq!(evicted[0].id(), pushed[2]);
    }

    #[test]
    fn growing_capacity_keeps_everything() {
        let mut manager = Manager::with_capacity(2);
        manager.push(Notification::success());
        manager.push(Notification::success());

        assert!(manager.set_capacity(10).is_empty());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn capacity_is_stored_as_given() {
        let mut manager = Manager::new();
        manager.set_capacity(100);
        for _ in 0..60 {
            manager.push(Notification::success());
        }
        assert_eq!(manager.capacity(), 100);
        assert_eq!(manager.len(), 60);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut manager = Manager::new();
        manager.push(Notification::success());
        assert_eq!(manager.set_capacity(0).len(), 1);

        let notification = Notification::success();
        let id = notification.id();
        let evicted = manager.push(notification);

        assert_eq!(manager.capacity(), 0);
        assert!(manager.is_empty());
        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].id(), id);
    }

    #[test]
    fn expire_removes_only_elapsed_toasts() {
        let mut manager = Manager::new();
        let timed = Notification::with_options(
            Kind::Success,
            ToastOptions::new().expiry(Duration::from_millis(100)),
        );
        let sticky = Notification::error();
        let (timed_id, sticky_id) = (timed.id(), sticky.id());
        let created = timed.created_at();
        manager.push(timed);
        manager.push(sticky);

        assert!(manager.expire(created + Duration::from_millis(50)).is_empty());
        assert_eq!(manager.len(), 2);

        let expired = manager.expire(created + Duration::from_millis(150));
        assert_eq!(expired, vec![timed_id]);
        assert_eq!(ids(&manager), vec![sticky_id]);
    }

    #[test]
    fn error_without_expiry_never_ticks_away() {
        let mut manager = Manager::new();
        let notification = Notification::error();
        let id = notification.id();
        manager.push(notification);

        let far_future = Instant::now() + Duration::from_secs(3600);
        assert!(manager.expire(far_future).is_empty());
        assert_eq!(manager.len(), 1);
        assert!(!manager.has_pending_expiry());

        assert!(manager.dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn get_finds_by_id() {
        let mut manager = Manager::new();
        let notification = Notification::processing();
        let id = notification.id();
        manager.push(notification);

        assert_eq!(manager.get(id).map(Notification::kind), Some(Kind::Processing));
    }
}
