//! Navigation sidebar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use roller_config::{GroupContents, SiteConfig};

use crate::theme::{Glyphs, Palette, styles};

pub struct Sidebar<'a> {
    site: &'a SiteConfig,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
}

impl<'a> Sidebar<'a> {
    #[must_use]
    pub fn new(site: &'a SiteConfig, palette: &'a Palette, glyphs: &'a Glyphs) -> Self {
        Self {
            site,
            palette,
            glyphs,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let item_style = Style::default().fg(self.palette.text_secondary);
        let muted = Style::default().fg(self.palette.text_muted);
        let site: &'a SiteConfig = self.site;
        let mut lines = Vec::new();

        for group in &site.sidebar {
            // Malformed groups are rejected by validation before we get here.
            let Ok(contents) = group.contents() else {
                continue;
            };
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                group.label.as_str(),
                styles::group_label(self.palette),
            )));
            match contents {
                GroupContents::Items(items) => {
                    for item in items {
                        lines.push(Line::from(vec![
                            Span::styled(format!(" {} ", self.glyphs.bullet), muted),
                            Span::styled(item.label.as_str(), item_style),
                        ]));
                    }
                }
                GroupContents::Autogenerated(auto) => {
                    let directory = auto.directory.trim_matches('/');
                    lines.push(Line::from(vec![
                        Span::styled(format!(" {} ", self.glyphs.bullet), muted),
                        Span::styled(format!("{directory}/{}", self.glyphs.ellipsis), muted),
                    ]));
                }
            }
        }
        lines
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(self.palette.bg_border));
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
