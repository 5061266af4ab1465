//! Reveal presenter for the hero heading.
//!
//! The presenter cycles through a [`Phrases`] list. Each phrase is revealed
//! left to right while the unresolved tail is rendered as random letters.
//!
//! ```text
//!            start() / set_visibility(Visible)
//!   Idle ─────────────────────────────────────────▶ Revealing
//!    ▲                                                │   ▲
//!    │ stop() / set_visibility(Hidden)   last frame   │   │ rotation
//!    └────────────────────────────────────────────────┤   │ (visible)
//!                                                     ▼   │
//!                                              WaitingForRotation
//! ```
//!
//! A rotation while hidden swaps in the new phrase in full, with no frames.
//!
//! Time only moves through [`Presenter::tick`], so the owner decides whether
//! it is wall-clock or virtual.

use std::time::Duration;

use thiserror::Error;

use crate::animation::{FrameClock, RotationTimer};
use crate::scramble::{Charset, LetterSource, RandomLetters, scramble_frame};
use crate::{Phrase, Phrases};

pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_millis(4000);
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(10);
pub const DEFAULT_FRAMES_PER_CHAR: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("rotation period must be greater than zero")]
    ZeroRotationPeriod,
    #[error("frames per character must be at least 1")]
    ZeroFramesPerChar,
}

/// Whether the hosting surface is currently shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSettings {
    /// Time between phrase swaps.
    pub rotation_period: Duration,
    /// Minimum time between reveal frames.
    pub frame_interval: Duration,
    /// Frames spent on each character before it resolves.
    pub frames_per_char: u32,
    /// Show each phrase immediately instead of scrambling it in.
    pub reduced_motion: bool,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            rotation_period: DEFAULT_ROTATION_PERIOD,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            frames_per_char: DEFAULT_FRAMES_PER_CHAR,
            reduced_motion: false,
        }
    }
}

impl RevealSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rotation_period.is_zero() {
            return Err(SettingsError::ZeroRotationPeriod);
        }
        if self.frames_per_char == 0 {
            return Err(SettingsError::ZeroFramesPerChar);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// Not animating: stopped, hidden, or never started.
    Idle,
    /// Scrambling the current phrase in.
    Revealing,
    /// Current phrase fully shown; waiting for the next rotation.
    WaitingForRotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// `frame` is the index of the next frame to render.
    Revealing { frame: usize },
    WaitingForRotation,
}

/// What a single [`Presenter::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Phrase rotations applied during this tick.
    pub rotations: u32,
    /// Whether an animation frame was rendered.
    pub rendered: bool,
}

impl TickReport {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.rendered || self.rotations > 0
    }
}

#[derive(Debug)]
pub struct Presenter<S = RandomLetters> {
    phrases: Phrases,
    index: usize,
    phase: Phase,
    visibility: Visibility,
    running: bool,
    settings: RevealSettings,
    charset: Charset,
    source: S,
    frames: FrameClock,
    rotation: RotationTimer,
    display: String,
    resolved: usize,
}

impl Presenter<RandomLetters> {
    pub fn new(
        phrases: Phrases,
        settings: RevealSettings,
        charset: Charset,
    ) -> Result<Self, SettingsError> {
        Self::with_source(phrases, settings, charset, RandomLetters)
    }
}

impl<S: LetterSource> Presenter<S> {
    pub fn with_source(
        phrases: Phrases,
        settings: RevealSettings,
        charset: Charset,
        source: S,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        let first = phrases.first();
        let display = first.as_str().to_owned();
        let resolved = first.len();
        Ok(Self {
            frames: FrameClock::new(settings.frame_interval),
            rotation: RotationTimer::new(settings.rotation_period),
            phrases,
            index: 0,
            phase: Phase::Idle,
            visibility: Visibility::Visible,
            running: false,
            settings,
            charset,
            source,
            display,
            resolved,
        })
    }

    /// Starts rotation and, when visible, the first reveal.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.rotation.reset();
        if self.visibility.is_visible() {
            self.begin_reveal();
        }
    }

    /// Halts rotation and any in-flight reveal. The display keeps its text.
    pub fn stop(&mut self) {
        self.running = false;
        self.phase = Phase::Idle;
    }

    /// Applies a visibility change. Returns `false` if nothing changed.
    ///
    /// Hiding cancels the in-flight reveal. Showing again restarts a fresh
    /// reveal of whichever phrase is current by then.
    pub fn set_visibility(&mut self, visibility: Visibility) -> bool {
        if self.visibility == visibility {
            return false;
        }
        self.visibility = visibility;
        match visibility {
            Visibility::Hidden => self.phase = Phase::Idle,
            Visibility::Visible => {
                if self.running {
                    self.begin_reveal();
                }
            }
        }
        true
    }

    /// Advances time by `delta`.
    pub fn tick(&mut self, delta: Duration) -> TickReport {
        let mut report = TickReport::default();
        if !self.running {
            return report;
        }

        report.rotations = self.rotation.advance(delta);
        if report.rotations > 0 {
            let count = self.phrases.len();
            let steps = usize::try_from(report.rotations).unwrap_or(usize::MAX) % count;
            self.index = (self.index + steps) % count;

            if self.visibility.is_visible() {
                self.begin_reveal();
                report.rendered = true;
            } else {
                self.settle();
            }
            return report;
        }

        if matches!(self.phase, Phase::Revealing { .. }) && self.frames.advance(delta) {
            self.render_frame();
            report.rendered = true;
        }
        report
    }

    fn begin_reveal(&mut self) {
        if self.settings.reduced_motion {
            self.settle();
            self.phase = Phase::WaitingForRotation;
            return;
        }
        self.frames.reset();
        self.phase = Phase::Revealing { frame: 0 };
        self.render_frame();
    }

    /// Shows the current phrase in full without touching the phase.
    fn settle(&mut self) {
        let phrase = self.phrases.get(self.index).unwrap_or(self.phrases.first());
        self.display.clear();
        self.display.push_str(phrase.as_str());
        self.resolved = phrase.len();
    }

    fn render_frame(&mut self) {
        let Phase::Revealing { frame } = self.phase else {
            return;
        };
        let per_char = self.settings.frames_per_char as usize;
        let phrase = self.phrases.get(self.index).unwrap_or(self.phrases.first());
        let len = phrase.len();

        self.resolved = frame.div_ceil(per_char).min(len);
        self.display = scramble_frame(phrase, self.resolved, &self.charset, &mut self.source);

        let next = frame + 1;
        self.phase = if next >= len.saturating_mul(per_char) {
            Phase::WaitingForRotation
        } else {
            Phase::Revealing { frame: next }
        };
    }
}

impl<S> Presenter<S> {
    /// Text currently shown.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Count of leading graphemes in [`Self::display`] that are final.
    #[must_use]
    pub fn reveal_cursor(&self) -> usize {
        self.resolved
    }

    #[must_use]
    pub fn current_phrase(&self) -> &Phrase {
        self.phrases.get(self.index).unwrap_or(self.phrases.first())
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn phrases(&self) -> &Phrases {
        &self.phrases
    }

    #[must_use]
    pub fn phase(&self) -> PhaseKind {
        match self.phase {
            Phase::Idle => PhaseKind::Idle,
            Phase::Revealing { .. } => PhaseKind::Revealing,
            Phase::WaitingForRotation => PhaseKind::WaitingForRotation,
        }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the owner should keep delivering frame ticks.
    #[must_use]
    pub fn wants_frames(&self) -> bool {
        self.running && matches!(self.phase, Phase::Revealing { .. })
    }

    #[must_use]
    pub fn until_rotation(&self) -> Duration {
        self.rotation.until_next()
    }

    #[must_use]
    pub fn settings(&self) -> &RevealSettings {
        &self.settings
    }

    #[must_use]
    pub fn charset(&self) -> &Charset {
        &self.charset
    }
}
