//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use roller_types::{
    Charset, CyclingLetters, LetterSource, Phrases, Presenter, RevealSettings,
};

/// Comfortably above the default 10ms frame interval.
pub const FRAME: Duration = Duration::from_millis(11);

pub const FASTGQL_PHRASES: [&str; 4] = [
    "Generate Mutations",
    "Queries with filters & pagination",
    "Aggregations",
    "Support interfaces",
];

pub fn fastgql_presenter() -> Presenter<CyclingLetters> {
    Presenter::with_source(
        Phrases::new(FASTGQL_PHRASES).expect("non-empty phrases"),
        RevealSettings::default(),
        Charset::default(),
        CyclingLetters::new(),
    )
    .expect("default settings are valid")
}

/// Ticks frames until the current reveal completes. Returns frames rendered.
pub fn finish_reveal<S: LetterSource>(presenter: &mut Presenter<S>) -> usize {
    let mut rendered = 0;
    while presenter.wants_frames() {
        if presenter.tick(FRAME).rendered {
            rendered += 1;
        }
    }
    rendered
}
