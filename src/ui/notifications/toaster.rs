// SPDX-License-Identifier: MPL-2.0
//! Shared notification service.
//!
//! A `Toaster` wraps a [`Manager`] behind a cloneable handle. It broadcasts
//! every change to subscribers and arms one-shot tokio timers that remove
//! toasts once their expiry has elapsed.
//!
//! Hosts create one `Toaster` and hand clones to the code that needs to raise
//! toasts; separate instances never share state.

use super::manager::{Manager, Message};
use super::notification::{Kind, Notification, NotificationId, ToastOptions};
use super::position::ToastPosition;
use crate::config::ToastConfig;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

type Callback = Arc<dyn Fn(&[Notification]) + Send + Sync>;

/// How expiring toasts are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// Spawn a tokio timer per expiring toast. Falls back to [`Toaster::tick`]
    /// when called outside a runtime.
    #[default]
    Runtime,
    /// Never spawn timers; the host calls [`Toaster::tick`] periodically.
    Tick,
}

struct Subscriber {
    id: u64,
    callback: Callback,
}

struct Inner {
    manager: Manager,
    subscribers: Vec<Subscriber>,
    next_subscriber: u64,
    timers: HashMap<NotificationId, AbortHandle>,
    timer_mode: TimerMode,
}

impl Inner {
    fn cancel_timer(&mut self, id: NotificationId) {
        if let Some(timer) = self.timers.remove(&id) {
            timer.abort();
        }
    }

    fn cancel_timers(&mut self, evicted: &[Notification]) {
        for notification in evicted {
            self.cancel_timer(notification.id());
        }
    }
}

/// Cloneable handle to a notification queue.
#[derive(Clone)]
pub struct Toaster {
    inner: Arc<Mutex<Inner>>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::with_manager(Manager::new())
    }
}

impl fmt::Debug for Toaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Toaster")
            .field("manager", &inner.manager)
            .field("subscribers", &inner.subscribers.len())
            .field("timers", &inner.timers.len())
            .field("timer_mode", &inner.timer_mode)
            .finish()
    }
}

impl Toaster {
    /// Creates an empty toaster with the default capacity and position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty toaster using the capacity and position from `config`.
    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        let mut manager = Manager::with_capacity(config.max_toasts());
        manager.set_position(config.position());
        Self::with_manager(manager)
    }

    fn with_manager(manager: Manager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                manager,
                subscribers: Vec::new(),
                next_subscriber: 0,
                timers: HashMap::new(),
                timer_mode: TimerMode::default(),
            })),
        }
    }

    /// Selects how expiring toasts are removed.
    #[must_use]
    pub fn with_timer_mode(self, mode: TimerMode) -> Self {
        self.lock().timer_mode = mode;
        self
    }

    /// Adds a toast and returns its ID.
    ///
    /// The oldest toasts are evicted if the list is full. A positive expiry
    /// arms a timer that removes the toast once it elapses.
    pub fn add(&self, kind: Kind, options: ToastOptions) -> NotificationId {
        let notification = Notification::with_options(kind, options);
        let id = notification.id();
        let expiry = notification.expiry();
        let weak = Arc::downgrade(&self.inner);

        self.mutate(|inner| {
            let evicted = inner.manager.push(notification);
            inner.cancel_timers(&evicted);
            if let Some(expiry) = expiry {
                arm_timer(inner, weak, id, expiry);
            }
        });
        id
    }

    /// Adds a success toast.
    pub fn success(&self, options: ToastOptions) -> NotificationId {
        self.add(Kind::Success, options)
    }

    /// Adds an error toast.
    pub fn error(&self, options: ToastOptions) -> NotificationId {
        self.add(Kind::Error, options)
    }

    /// Adds a processing toast.
    pub fn processing(&self, options: ToastOptions) -> NotificationId {
        self.add(Kind::Processing, options)
    }

    /// Removes a toast and cancels its pending timer.
    ///
    /// Unknown IDs are ignored. Subscribers are notified either way.
    pub fn remove(&self, id: NotificationId) -> bool {
        self.mutate(|inner| {
            inner.cancel_timer(id);
            inner.manager.dismiss(id)
        })
    }

    /// Same as [`Toaster::remove`].
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.remove(id)
    }

    /// Applies a message emitted by the toast overlay.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Removes every toast and cancels all pending timers.
    pub fn clear(&self) {
        self.mutate(|inner| {
            for (_, timer) in inner.timers.drain() {
                timer.abort();
            }
            inner.manager.clear();
        });
    }

    /// Changes the capacity and evicts the oldest toasts that no longer fit.
    pub fn set_capacity(&self, capacity: usize) {
        self.mutate(|inner| {
            let evicted = inner.manager.set_capacity(capacity);
            inner.cancel_timers(&evicted);
        });
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().manager.capacity()
    }

    pub fn set_position(&self, position: ToastPosition) {
        self.mutate(|inner| inner.manager.set_position(position));
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.lock().manager.position()
    }

    /// Removes toasts whose expiry has elapsed.
    ///
    /// Only needed in [`TimerMode::Tick`] or outside a tokio runtime.
    pub fn tick(&self) -> Vec<NotificationId> {
        self.expire_at(Instant::now())
    }

    /// Removes toasts whose expiry has elapsed at `now`.
    ///
    /// Subscribers are only notified when something was removed.
    pub fn expire_at(&self, now: Instant) -> Vec<NotificationId> {
        let (expired, snapshot) = {
            let mut inner = self.lock();
            let expired = inner.manager.expire(now);
            if expired.is_empty() {
                return expired;
            }
            for id in &expired {
                inner.cancel_timer(*id);
            }
            (expired, Self::prepare_broadcast(&inner))
        };
        Self::broadcast(snapshot);
        expired
    }

    /// Registers a callback that receives the current list now and after
    /// every change.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped or [`Subscription::unsubscribe`] is called.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&[Notification]) + Send + Sync + 'static,
    {
        let callback: Callback = Arc::new(callback);
        let (id, snapshot) = {
            let mut inner = self.lock();
            let id = inner.next_subscriber;
            inner.next_subscriber += 1;
            inner.subscribers.push(Subscriber {
                id,
                callback: Arc::clone(&callback),
            });
            (id, inner.manager.snapshot())
        };
        callback(snapshot.as_slice());

        Subscription {
            toaster: Arc::downgrade(&self.inner),
            id,
            active: true,
        }
    }

    /// Copies the current list, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().manager.snapshot()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().manager.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().manager.is_empty()
    }

    /// Returns whether a toast is waiting for its expiry.
    #[must_use]
    pub fn has_pending_expiry(&self) -> bool {
        self.lock().manager.has_pending_expiry()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock_inner(&self.inner)
    }

    /// Applies `change` under the lock, then notifies subscribers without it.
    fn mutate<R>(&self, change: impl FnOnce(&mut Inner) -> R) -> R {
        let (result, broadcast) = {
            let mut inner = self.lock();
            let result = change(&mut inner);
            (result, Self::prepare_broadcast(&inner))
        };
        Self::broadcast(broadcast);
        result
    }

    fn prepare_broadcast(inner: &Inner) -> (Vec<Notification>, Vec<Callback>) {
        let callbacks = inner
            .subscribers
            .iter()
            .map(|s| Arc::clone(&s.callback))
            .collect();
        (inner.manager.snapshot(), callbacks)
    }

    fn broadcast((snapshot, callbacks): (Vec<Notification>, Vec<Callback>)) {
        for callback in callbacks {
            callback(snapshot.as_slice());
        }
    }
}

fn lock_inner(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    // A panicking subscriber never runs under the lock, so the data is intact.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

fn arm_timer(inner: &mut Inner, weak: Weak<Mutex<Inner>>, id: NotificationId, expiry: Duration) {
    if inner.timer_mode == TimerMode::Tick {
        return;
    }
    let Ok(handle) = Handle::try_current() else {
        tracing::warn!(%id, "no tokio runtime, toast will only expire on tick");
        return;
    };

    let task = handle.spawn(async move {
        tokio::time::sleep(expiry).await;
        if let Some(inner) = weak.upgrade() {
            let toaster = Toaster { inner };
            toaster.mutate(|inner| {
                inner.timers.remove(&id);
                inner.manager.dismiss(id)
            });
        }
    });
    inner.timers.insert(id, task.abort_handle());
}

/// Keeps a [`Toaster`] callback registered.
#[must_use = "dropping a Subscription unsubscribes the callback"]
pub struct Subscription {
    toaster: Weak<Mutex<Inner>>,
    id: u64,
    active: bool,
}

impl Subscription {
    /// Removes the callback.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Keeps the callback registered for the lifetime of the toaster.
    pub fn detach(mut self) {
        self.active = false;
    }

    fn release(&mut self) {
        if !std::mem::take(&mut self.active) {
            return;
        }
        if let Some(inner) = self.toaster.upgrade() {
            let id = self.id;
            lock_inner(&inner).subscribers.retain(|s| s.id != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}
