// SPDX-License-Identifier: MPL-2.0
use lumen_ui::config::{self, Config, ToastConfig};
use lumen_ui::ui::components::dropdown::{self, Dropdown, DropdownOption};
use lumen_ui::ui::notifications::{Kind, TimerMode, ToastOptions, ToastPosition, Toaster};
use lumen_ui::ui::state::Controlled;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_toaster_follows_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        toasts: ToastConfig {
            max_toasts: Some(2),
            position: Some(ToastPosition::BottomCenter),
            default_duration_ms: Some(1500),
        },
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, saved);

    let toaster = Toaster::from_config(&loaded.toasts).with_timer_mode(TimerMode::Tick);
    assert_eq!(toaster.capacity(), 2);
    assert_eq!(toaster.position(), ToastPosition::BottomCenter);

    for _ in 0..3 {
        toaster.success(ToastOptions::new().timed(&loaded.toasts));
    }
    assert_eq!(toaster.len(), 2);

    let later = Instant::now() + Duration::from_millis(1500);
    assert_eq!(toaster.expire_at(later).len(), 2);
    assert!(toaster.is_empty());
}

#[test]
fn test_partial_config_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[toasts]\nposition = \"top-left\"\n").expect("write");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.toasts.position(), ToastPosition::TopLeft);
    assert_eq!(loaded.toasts.max_toasts(), config::DEFAULT_MAX_TOASTS);
}

#[test]
fn test_subscribers_see_every_change_in_order() {
    let toaster = Toaster::new().with_timer_mode(TimerMode::Tick);
    let seen: Arc<Mutex<Vec<Vec<Kind>>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let subscription = toaster.subscribe(move |toasts| {
        sink.lock()
            .expect("lock")
            .push(toasts.iter().map(|t| t.kind()).collect());
    });

    let first = toaster.success(ToastOptions::new());
    toaster.error(ToastOptions::new().title("Signing failed"));
    toaster.remove(first);
    subscription.unsubscribe();
    toaster.processing(ToastOptions::new());

    let seen = seen.lock().expect("lock");
    assert_eq!(
        *seen,
        vec![
            vec![],
            vec![Kind::Success],
            vec![Kind::Error, Kind::Success],
            vec![Kind::Error],
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_timed_toast_disappears_on_its_own() {
    let toaster = Toaster::new();
    let id = toaster.success(ToastOptions::new().expiry(Duration::from_secs(3)));

    tokio::time::sleep(Duration::from_millis(2900)).await;
    assert!(toaster.snapshot().iter().any(|t| t.id() == id));

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(toaster.is_empty());
}

#[test]
fn test_controlled_dropdown_round_trip_through_host() {
    let requested: std::rc::Rc<std::cell::RefCell<Vec<Option<String>>>> = Default::default();
    let sink = std::rc::Rc::clone(&requested);
    let mut dropdown = Dropdown::new(vec![
        DropdownOption::new("eth", "Ethereum"),
        DropdownOption::new("sol", "Solana"),
    ])
    .value(
        Controlled::external(Some("eth".to_string()))
            .on_change(move |value| sink.borrow_mut().push(value)),
    );

    dropdown.update(dropdown::Message::OptionPressed("sol".to_string()));
    assert_eq!(dropdown.display_text(), "Ethereum");

    let next = requested.borrow().last().cloned().expect("one request");
    dropdown
        .sync(dropdown::Supplied {
            value: Some(next),
            ..Default::default()
        })
        .expect("sync");
    assert_eq!(dropdown.display_text(), "Solana");
}
