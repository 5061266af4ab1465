//! Core domain types for roller.
//!
//! This crate contains the hero-heading model with no IO, no async, and no
//! terminal dependency: the phrase list, scramble frame generation, the
//! virtual-time timers, and the reveal [`Presenter`] state machine.
//!
//! Everything is driven by explicit `tick(delta)` calls so callers (and
//! tests) own the clock.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod animation;
mod phrases;
mod presenter;
mod scramble;

pub use phrases::{Phrase, Phrases, PhrasesError};
pub use presenter::{
    DEFAULT_FRAME_INTERVAL, DEFAULT_FRAMES_PER_CHAR, DEFAULT_ROTATION_PERIOD, PhaseKind, Presenter,
    RevealSettings, SettingsError, TickReport, Visibility,
};
pub use scramble::{
    Charset, CharsetError, CyclingLetters, DEFAULT_LETTERS, DEFAULT_SAMPLE_SPAN, LetterSource,
    RandomLetters, scramble_frame,
};
