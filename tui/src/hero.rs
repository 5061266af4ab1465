//! Hero heading widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_segmentation::UnicodeSegmentation;

/// Renders the presenter's display text on the middle row of its area.
///
/// The resolved prefix and the scrambled tail get separate styles so the
/// reveal reads left to right.
#[derive(Debug, Clone)]
pub struct Hero<'a> {
    text: &'a str,
    resolved: usize,
    resolved_style: Style,
    scrambled_style: Style,
}

impl<'a> Hero<'a> {
    #[must_use]
    pub fn new(text: &'a str, resolved: usize) -> Self {
        Self {
            text,
            resolved,
            resolved_style: Style::default(),
            scrambled_style: Style::default(),
        }
    }

    #[must_use]
    pub fn resolved_style(mut self, style: Style) -> Self {
        self.resolved_style = style;
        self
    }

    #[must_use]
    pub fn scrambled_style(mut self, style: Style) -> Self {
        self.scrambled_style = style;
        self
    }

    fn split(&self) -> (&'a str, &'a str) {
        let at = self
            .text
            .grapheme_indices(true)
            .nth(self.resolved)
            .map_or(self.text.len(), |(offset, _)| offset);
        self.text.split_at(at)
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Nothing to draw into.
        if area.is_empty() {
            return;
        }
        let (done, pending) = self.split();
        let line = Line::from(vec![
            Span::styled(done, self.resolved_style),
            Span::styled(pending, self.scrambled_style),
        ])
        .centered();
        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        line.render(row, buf);
    }
}
