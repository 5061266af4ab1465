//! Config file to running presenter.

use std::io::Write;
use std::time::Duration;

use roller_config::{ConfigError, RollerConfig};
use roller_types::{PhaseKind, Presenter};

use crate::common::finish_reveal;

fn write_config(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(body.as_bytes()).expect("write config");
    file
}

#[test]
fn config_drives_presenter() {
    let file = write_config(
        r#"
        [app]
        reduced_motion = false

        [hero]
        phrases = ["Fast", "Typed"]
        rotation_ms = 500
        frame_interval_ms = 5
        frames_per_char = 2
        sample_span = 26
        "#,
    );
    let config = RollerConfig::load_from(file.path()).unwrap();
    config.validate().unwrap();

    let settings = config.hero.reveal_settings(config.app.reduced_motion).unwrap();
    assert_eq!(settings.rotation_period, Duration::from_millis(500));
    let mut p = Presenter::new(
        config.hero.phrases.clone(),
        settings,
        config.hero.charset().unwrap(),
    )
    .unwrap();
    assert_eq!(p.charset().span(), 26);

    p.start();
    // 4 graphemes at 2 frames each, frame 0 rendered by start.
    assert_eq!(finish_reveal(&mut p), 7);
    assert_eq!(p.display(), "Fast");

    p.tick(p.until_rotation());
    finish_reveal(&mut p);
    assert_eq!(p.display(), "Typed");
}

#[test]
fn reduced_motion_config_skips_scramble() {
    let file = write_config("[app]\nreduced_motion = true\n");
    let config = RollerConfig::load_from(file.path()).unwrap();
    let mut p = Presenter::new(
        config.hero.phrases.clone(),
        config.hero.reveal_settings(config.app.reduced_motion).unwrap(),
        config.hero.charset().unwrap(),
    )
    .unwrap();
    p.start();
    assert_eq!(p.phase(), PhaseKind::WaitingForRotation);
    assert_eq!(p.display(), "Generate Mutations");
}

#[test]
fn invalid_sidebar_fails_validation() {
    let file = write_config(
        r#"
        [[site.sidebar]]
        label = "Broken"
        "#,
    );
    let config = RollerConfig::load_from(file.path()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSidebar { ref label, .. } if label == "Broken"));
}

#[test]
fn blank_phrase_fails_to_parse() {
    let file = write_config("[hero]\nphrases = [\"ok\", \"\"]\n");
    let err = RollerConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn combining_scramble_letter_fails_validation() {
    let file = write_config("[hero]\nletters = \"\\u0301\"\n");
    let config = RollerConfig::load_from(file.path()).unwrap();
    assert_eq!(config.hero.letters, "\u{301}");
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Charset(_)), "{err:?}");
}
