// SPDX-License-Identifier: MPL-2.0
use folio_fx::app::{App, Message};
use folio_fx::application::port::PreferenceStore;
use folio_fx::config::{self, Config, ProfileConfig, ToastConfig, TypewriterConfig};
use folio_fx::infrastructure::{FilePreferences, MemorySurface, VirtualScheduler};
use folio_fx::ui::notifications::{Severity, ToastView};
use folio_fx::ui::resume;
use folio_fx::ui::theming::{ThemeMode, ThemeToggle};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn theme_choice_survives_reopening_preferences() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (prefs, warning) = FilePreferences::open_in(Some(dir.path().to_path_buf()))
        .expect("data dir override resolves");
    assert!(warning.is_none());

    let mut app = App::new(Config::default(), prefs, String::new());
    let mut scheduler = VirtualScheduler::<Message>::new();
    let mut surface = MemorySurface::<ToastView>::new();
    assert_eq!(app.theme().mode(), ThemeMode::Light);

    app.toggle_theme(&mut scheduler, &mut surface);
    assert_eq!(app.theme().mode(), ThemeMode::Dark);
    // Saving succeeded, so no error toast.
    assert!(!app.notifications().is_showing());

    let (reopened, warning) =
        FilePreferences::open_in(Some(dir.path().to_path_buf())).expect("reopen");
    assert!(warning.is_none());
    assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
    assert_eq!(ThemeToggle::load(&reopened).mode(), ThemeMode::Dark);
}

#[test]
fn corrupt_preferences_reset_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("preferences.toml"), "theme = [unterminated").unwrap();

    let (prefs, warning) = FilePreferences::open_in(Some(dir.path().to_path_buf())).unwrap();
    assert_eq!(warning.as_deref(), Some("notification-preferences-load-error"));
    assert!(prefs.get("theme").is_none());

    let mut app = App::new(Config::default(), prefs, String::new());
    let mut scheduler = VirtualScheduler::<Message>::new();
    let mut surface = MemorySurface::<ToastView>::new();
    app.boot(&warning.into_iter().collect::<Vec<_>>(), &mut scheduler, &mut surface);

    let toast = app.notifications().current().unwrap();
    assert_eq!(toast.severity(), Severity::Error);
}

#[test]
fn configured_timings_drive_the_page() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let custom = Config {
        toast: ToastConfig {
            auto_dismiss_ms: Some(1000),
            ..ToastConfig::default()
        },
        typewriter: TypewriterConfig {
            phrases: Some(vec!["Hi".to_string()]),
            start_delay_ms: Some(10),
            ..TypewriterConfig::default()
        },
        profile: ProfileConfig::default(),
    };
    config::save_to_path(&custom, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, custom);

    let prefs_dir = tempdir().unwrap();
    let (prefs, _) = FilePreferences::open_in(Some(prefs_dir.path().to_path_buf())).unwrap();
    let mut app = App::new(loaded, prefs, String::new());
    let mut scheduler = VirtualScheduler::<Message>::new();
    let mut surface = MemorySurface::<ToastView>::new();
    app.boot(&[], &mut scheduler, &mut surface);
    let id = app.notify("quick", Severity::Info, &mut scheduler, &mut surface);

    let horizon = Duration::from_millis(1300);
    while let Some(message) = scheduler.next_due(horizon) {
        app.update(message, &mut scheduler, &mut surface);
    }

    assert_eq!(app.typewriter().sink(), "Hi");
    assert!(app.notifications().phase(id).is_some());
    assert!(!app.notifications().is_showing());
    assert!(surface.is_empty());
}

#[test]
fn resume_download_reports_through_toast() {
    let assets = tempdir().unwrap();
    let downloads = tempdir().unwrap();
    let prefs_dir = tempdir().unwrap();

    let config = Config {
        profile: ProfileConfig {
            name: Some("Grace Hopper".to_string()),
            ..ProfileConfig::default()
        },
        ..Config::default()
    };
    let (prefs, _) = FilePreferences::open_in(Some(prefs_dir.path().to_path_buf())).unwrap();
    let mut app = App::new(config, prefs, String::new());
    let mut scheduler = VirtualScheduler::<Message>::new();
    let mut surface = MemorySurface::<ToastView>::new();

    let path = app
        .download_resume(assets.path(), downloads.path(), &mut scheduler, &mut surface)
        .expect("resume written");
    assert_eq!(path, downloads.path().join("Grace_Hopper_Resume_Temp.txt"));
    assert_eq!(
        app.notifications().current().map(|n| n.message()),
        Some(resume::GENERATED_MESSAGE)
    );
}
