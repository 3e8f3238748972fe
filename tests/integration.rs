// SPDX-License-Identifier: MPL-2.0
use folio_deck::config::{self, Config};
use folio_deck::input::keyboard::command_for_key;
use folio_deck::input::{NavCommand, SwipeTracker, WheelDebouncer};
use folio_deck::manifest;
use folio_deck::navigator::SlideNavigator;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::mouse::ScrollDelta;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_transition_duration_survives_a_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let written = Config {
        transition_ms: Some(400),
        dark_theme: Some(false),
    };
    config::save_to_path(&written, &temp_config_file_path).expect("Failed to write config file");

    let loaded =
        config::load_from_path(&temp_config_file_path).expect("Failed to load config from path");
    assert_eq!(loaded, written);
    assert_eq!(loaded.transition_settle(), Duration::from_millis(400));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_manifest_loads_from_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest_path = dir.path().join("portfolio.toml");

    std::fs::write(
        &manifest_path,
        r#"
            [[slides]]
            label = "Artwork"
            frames = [{ title = "Study", source = "study.png" }]

            [[gallery]]
            title = "Sketch"
            source = "sketch.png"
        "#,
    )
    .expect("Failed to write manifest file");

    let manifest = manifest::load_from_path(&manifest_path).expect("Failed to load manifest");
    assert_eq!(manifest.deck.len(), 1);
    assert_eq!(manifest.deck.slides()[0].label, "Artwork");
    assert_eq!(manifest.gallery_frames.len(), 1);

    dir.close().expect("Failed to close temporary directory");
}

/// Drives the navigator through one of every input adapter, the way the
/// update loop does, and checks the transition gate holds across them.
#[test]
fn test_all_input_adapters_drive_one_navigator() {
    let mut navigator = SlideNavigator::new(2);
    let start = Instant::now();

    // Keyboard: ArrowDown advances to the second slide.
    let command = command_for_key(&Key::Named(Named::ArrowDown), navigator.total())
        .expect("ArrowDown maps to a command");
    assert_eq!(command, NavCommand::Next);
    assert!(navigator.next(start));
    assert_eq!(navigator.current(), 1);

    // A swipe during the transition is measured but its command dropped.
    let mut swipe = SwipeTracker::new();
    swipe.begin(400.0);
    let command = swipe.finish(200.0).expect("long swipe maps to a command");
    assert_eq!(command, NavCommand::Next);
    assert!(!navigator.next(start + Duration::from_millis(100)));
    assert_eq!(navigator.current(), 1);

    // After the transition settles, a wheel gesture wraps back around.
    let settled = start + Duration::from_secs(1);
    navigator.tick(settled);

    let mut wheel = WheelDebouncer::new();
    wheel.observe(&ScrollDelta::Lines { x: 0.0, y: -1.0 }, settled);
    assert!(wheel.poll(settled).is_none());

    let quiet = settled + Duration::from_millis(60);
    let command = wheel.poll(quiet).expect("quiet wheel resolves");
    assert_eq!(command, NavCommand::Next);
    assert!(navigator.next(quiet));
    assert_eq!(navigator.current(), 0);
}
