//! Configuration loading tests
//!
//! These touch the process working directory and environment, so they run
//! serially.

use serial_test::serial;

use eventhub::Settings;

#[test]
#[serial]
fn loads_settings_from_a_toml_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("config.toml"),
        "[app]\nname = \"LocalHub\"\nevents_per_page = 4\n\n[seed]\nenabled = false\n",
    )
    .expect("write config");

    let original = std::env::current_dir().expect("cwd");
    std::env::set_current_dir(dir.path()).expect("enter temp dir");
    let settings = Settings::new();
    std::env::set_current_dir(original).expect("restore cwd");

    let settings = settings.expect("settings load");
    assert_eq!(settings.app.name, "LocalHub");
    assert_eq!(settings.app.events_per_page, 4);
    assert!(!settings.seed.enabled);
    // Sections the file omits keep their defaults.
    assert_eq!(settings.logging.level, "info");
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn environment_overrides_the_file() {
    std::env::set_var("EVENTHUB_APP__NAME", "EnvHub");
    let settings = Settings::new();
    std::env::remove_var("EVENTHUB_APP__NAME");

    assert_eq!(settings.expect("settings load").app.name, "EnvHub");
}

#[test]
#[serial]
fn defaults_are_valid_out_of_the_box() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.app.events_per_page, 6);
    assert!(settings.seed.enabled);
}
