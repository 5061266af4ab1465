//! End-to-end presenter scenarios driven through virtual time.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use roller_types::{PhaseKind, Visibility};

use crate::common::{FASTGQL_PHRASES, FRAME, fastgql_presenter, finish_reveal};

#[test]
fn documented_rotation_example() {
    let mut p = fastgql_presenter();
    p.start();
    finish_reveal(&mut p);
    assert_eq!(p.display(), "Generate Mutations");

    p.tick(p.until_rotation());
    assert_eq!(p.current_phrase().as_str(), "Queries with filters & pagination");

    for _ in 0..3 {
        p.tick(p.until_rotation());
    }
    assert_eq!(p.current_phrase().as_str(), "Generate Mutations");
}

#[test]
fn every_phrase_reveals_exactly() {
    let mut p = fastgql_presenter();
    p.start();
    for expected in FASTGQL_PHRASES {
        assert_eq!(p.current_phrase().as_str(), expected);
        let frames = finish_reveal(&mut p);
        assert_eq!(p.display(), expected);
        // Frame 0 renders on reveal start; 3 frames per grapheme in total.
        assert_eq!(frames + 1, expected.graphemes(true).count() * 3);
        p.tick(p.until_rotation());
    }
    assert_eq!(p.index(), 0);
}

#[test]
fn reveal_cursor_never_regresses_within_a_phrase() {
    let mut p = fastgql_presenter();
    p.start();
    let mut last = p.reveal_cursor();
    while p.wants_frames() {
        p.tick(FRAME);
        assert!(p.reveal_cursor() >= last);
        assert!(p.reveal_cursor() <= p.current_phrase().len());
        last = p.reveal_cursor();
    }
}

#[test]
fn background_then_foreground_resumes_on_current_phrase() {
    let mut p = fastgql_presenter();
    p.start();
    p.tick(FRAME * 5);

    p.set_visibility(Visibility::Hidden);
    assert!(!p.wants_frames());

    // Ten seconds in the background: two rotations, no frames.
    let mut rendered = false;
    for _ in 0..1000 {
        rendered |= p.tick(Duration::from_millis(10)).rendered;
    }
    assert!(!rendered);
    assert_eq!(p.index(), 2);
    assert_eq!(p.phase(), PhaseKind::Idle);
    // The unfocused screen shows the phrase its markers point at.
    assert_eq!(p.display(), "Aggregations");

    p.set_visibility(Visibility::Visible);
    assert_eq!(p.phase(), PhaseKind::Revealing);
    finish_reveal(&mut p);
    assert_eq!(p.display(), "Aggregations");
}

#[test]
fn stalled_caller_catches_up_on_rotations() {
    let mut p = fastgql_presenter();
    p.start();
    let report = p.tick(Duration::from_secs(17));
    assert_eq!(report.rotations, 4);
    assert_eq!(p.index(), 0);
    assert!(report.rendered);
}
