//! Scramble frame generation.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::Phrase;

pub const DEFAULT_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of leading letters sampled from [`DEFAULT_LETTERS`].
///
/// Only `A..=V` are ever drawn, matching the heading shipped on the docs
/// site. Set the span to 26 to sample the full alphabet.
pub const DEFAULT_SAMPLE_SPAN: usize = 22;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CharsetError {
    #[error("scramble alphabet must not be empty")]
    Empty,
    #[error("sample span {span} is outside 1..={len}")]
    SpanOutOfRange { span: usize, len: usize },
    #[error("scramble letter {letter:?} does not stand alone as one character")]
    NotStandalone { letter: char },
}

/// Picks an index into the sampled part of a [`Charset`].
pub trait LetterSource {
    /// Returns an index in `0..span`. `span` is never zero.
    fn next_index(&mut self, span: usize) -> usize;
}

impl<S: LetterSource + ?Sized> LetterSource for &mut S {
    fn next_index(&mut self, span: usize) -> usize {
        (**self).next_index(span)
    }
}

/// Uniform draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLetters;

impl LetterSource for RandomLetters {
    fn next_index(&mut self, span: usize) -> usize {
        let draw = (rand::random::<f64>() * span as f64).floor() as usize;
        draw.min(span.saturating_sub(1))
    }
}

/// Deterministic source that walks the sampled letters in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclingLetters {
    next: usize,
}

impl CyclingLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LetterSource for CyclingLetters {
    fn next_index(&mut self, span: usize) -> usize {
        let index = self.next % span;
        self.next = index + 1;
        index
    }
}

/// Scramble alphabet and the number of leading letters eligible for sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    letters: Vec<char>,
    span: usize,
}

impl Charset {
    pub fn new(letters: &str, span: usize) -> Result<Self, CharsetError> {
        let letters: Vec<char> = letters.chars().collect();
        if letters.is_empty() {
            return Err(CharsetError::Empty);
        }
        if let Some(&letter) = letters.iter().find(|&&c| !stands_alone(c)) {
            return Err(CharsetError::NotStandalone { letter });
        }
        // Pairs such as regional indicators or Hangul jamo merge only with
        // each other.
        for &first in &letters {
            for &second in &letters {
                let pair = format!("{first}{second}");
                if pair.graphemes(true).count() != 2 {
                    return Err(CharsetError::NotStandalone { letter: second });
                }
            }
        }
        if span == 0 || span > letters.len() {
            return Err(CharsetError::SpanOutOfRange {
                span,
                len: letters.len(),
            });
        }
        Ok(Self { letters, span })
    }

    /// Charset that samples every letter.
    pub fn full(letters: &str) -> Result<Self, CharsetError> {
        Self::new(letters, letters.chars().count())
    }

    #[must_use]
    pub fn span(&self) -> usize {
        self.span
    }

    /// The letters that can appear in a scrambled position.
    #[must_use]
    pub fn sampled(&self) -> &[char] {
        &self.letters[..self.span]
    }

    pub fn pick<S: LetterSource + ?Sized>(&self, source: &mut S) -> char {
        let index = source.next_index(self.span).min(self.span - 1);
        self.letters[index]
    }
}

/// A scrambled letter must never merge with its neighbours, or the frame
/// would be shorter than the phrase.
fn stands_alone(letter: char) -> bool {
    if letter.is_control() || letter.is_whitespace() {
        return false;
    }
    format!("A{letter}A").graphemes(true).count() == 3
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            letters: DEFAULT_LETTERS.chars().collect(),
            span: DEFAULT_SAMPLE_SPAN,
        }
    }
}

/// Renders one frame of a reveal.
///
/// The first `resolved` graphemes come from `phrase` verbatim. Spaces always
/// pass through. Every other position is a freshly sampled letter, so the
/// output has exactly `phrase.len()` graphemes.
pub fn scramble_frame<S: LetterSource + ?Sized>(
    phrase: &Phrase,
    resolved: usize,
    charset: &Charset,
    source: &mut S,
) -> String {
    let mut out = String::with_capacity(phrase.as_str().len());
    for (index, grapheme) in phrase.graphemes().enumerate() {
        if index < resolved || grapheme == " " {
            out.push_str(grapheme);
        } else {
            out.push(charset.pick(source));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use unicode_segmentation::UnicodeSegmentation;

    use super::{
        Charset, CharsetError, CyclingLetters, DEFAULT_SAMPLE_SPAN, LetterSource, RandomLetters,
        scramble_frame,
    };
    use crate::Phrase;

    struct Fixed(usize);

    impl LetterSource for Fixed {
        fn next_index(&mut self, _span: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn default_charset_samples_first_22_letters() {
        let charset = Charset::default();
        assert_eq!(charset.span(), DEFAULT_SAMPLE_SPAN);
        assert_eq!(charset.sampled().first(), Some(&'A'));
        assert_eq!(charset.sampled().last(), Some(&'V'));
    }

    #[test]
    fn span_is_validated() {
        assert_eq!(Charset::new("", 1).unwrap_err(), CharsetError::Empty);
        assert_eq!(
            Charset::new("ABC", 4).unwrap_err(),
            CharsetError::SpanOutOfRange { span: 4, len: 3 }
        );
        assert!(Charset::new("ABC", 0).is_err());
        assert_eq!(Charset::full("ABC").unwrap().span(), 3);
    }

    #[test]
    fn merging_letters_are_rejected() {
        assert_eq!(
            Charset::full("AB\u{301}").unwrap_err(),
            CharsetError::NotStandalone { letter: '\u{301}' }
        );
        assert_eq!(
            Charset::full("X\u{200d}").unwrap_err(),
            CharsetError::NotStandalone { letter: '\u{200d}' }
        );
        assert!(matches!(
            Charset::full("\u{1f1e6}\u{1f1e7}"),
            Err(CharsetError::NotStandalone { .. })
        ));
        assert!(Charset::full("A\tB").is_err());
        assert!(Charset::full("A B").is_err());
        assert!(Charset::full("\u{3b1}\u{3b2}\u{3b3}").is_ok());
    }

    #[test]
    fn out_of_range_source_is_clamped() {
        let charset = Charset::new("XYZ", 2).unwrap();
        assert_eq!(charset.pick(&mut Fixed(99)), 'Y');
    }

    #[test]
    fn random_letters_stay_in_span() {
        let charset = Charset::default();
        let mut source = RandomLetters;
        for _ in 0..500 {
            let letter = charset.pick(&mut source);
            assert!(charset.sampled().contains(&letter), "drew {letter}");
        }
    }

    #[test]
    fn resolved_prefix_is_kept_and_spaces_pass_through() {
        let phrase = Phrase::new("Support interfaces");
        let frame = scramble_frame(&phrase, 3, &Charset::default(), &mut Fixed(25));
        assert_eq!(frame, "SupVVVV VVVVVVVVVV");
    }

    #[test]
    fn frame_length_matches_phrase() {
        let phrase = Phrase::new("Queries with filters & pagination");
        for resolved in 0..=phrase.len() + 2 {
            let frame = scramble_frame(&phrase, resolved, &Charset::default(), &mut RandomLetters);
            assert_eq!(frame.graphemes(true).count(), phrase.len());
        }
    }

    #[test]
    fn fully_resolved_frame_is_the_phrase() {
        let phrase = Phrase::new("Aggregations");
        let frame = scramble_frame(&phrase, phrase.len(), &Charset::default(), &mut RandomLetters);
        assert_eq!(frame, "Aggregations");
    }

    #[test]
    fn cycling_frames_progress_left_to_right() {
        let phrase = Phrase::new("Go fast");
        let charset = Charset::default();
        let mut source = CyclingLetters::new();
        let frames: Vec<String> = (0..=phrase.len())
            .map(|resolved| scramble_frame(&phrase, resolved, &charset, &mut source))
            .collect();
        assert_snapshot!(
            frames.join(" | "),
            @"AB CDEF | GG HIJK | Go LMNO | Go PQRS | Go fTUV | Go faAB | Go fasC | Go fast"
        );
    }
}
