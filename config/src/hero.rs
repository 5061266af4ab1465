use std::time::Duration;

use serde::Deserialize;

use roller_types::{
    Charset, DEFAULT_FRAME_INTERVAL, DEFAULT_FRAMES_PER_CHAR, DEFAULT_LETTERS,
    DEFAULT_ROTATION_PERIOD, DEFAULT_SAMPLE_SPAN, Phrases, RevealSettings,
};

use crate::ConfigError;

pub const DEFAULT_PHRASES: [&str; 4] = [
    "Generate Mutations",
    "Queries with filters & pagination",
    "Aggregations",
    "Support interfaces",
];

/// Hero heading settings.
///
/// ```toml
/// [hero]
/// phrases = ["Generate Mutations", "Aggregations"]
/// rotation_ms = 4000
/// frame_interval_ms = 10
/// frames_per_char = 3
/// letters = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
/// sample_span = 22
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub phrases: Phrases,
    pub rotation_ms: u64,
    pub frame_interval_ms: u64,
    pub frames_per_char: u32,
    pub letters: String,
    /// Leading letters eligible for sampling. Defaults to 22 for the stock
    /// alphabet and to the whole alphabet otherwise.
    pub sample_span: Option<usize>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            phrases: Phrases::new(DEFAULT_PHRASES).expect("default phrases are non-empty"),
            rotation_ms: DEFAULT_ROTATION_PERIOD.as_millis() as u64,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL.as_millis() as u64,
            frames_per_char: DEFAULT_FRAMES_PER_CHAR,
            letters: DEFAULT_LETTERS.to_string(),
            sample_span: None,
        }
    }
}

impl HeroConfig {
    pub fn reveal_settings(&self, reduced_motion: bool) -> Result<RevealSettings, ConfigError> {
        let settings = RevealSettings {
            rotation_period: Duration::from_millis(self.rotation_ms),
            frame_interval: Duration::from_millis(self.frame_interval_ms),
            frames_per_char: self.frames_per_char,
            reduced_motion,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn charset(&self) -> Result<Charset, ConfigError> {
        let span = self.sample_span.unwrap_or_else(|| {
            if self.letters == DEFAULT_LETTERS {
                DEFAULT_SAMPLE_SPAN
            } else {
                self.letters.chars().count()
            }
        });
        Ok(Charset::new(&self.letters, span)?)
    }
}
