//! TUI rendering for roller using ratatui.

mod hero;
mod input;
mod sidebar;
mod theme;

pub use hero::Hero;
pub use input::{Action, InputOutcome, InputPump, apply, classify, handle_events};
pub use sidebar::Sidebar;
pub use theme::{Glyphs, Palette, UiOptions, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use roller_config::SiteConfig;
use roller_types::{Presenter, Visibility};

const SIDEBAR_WIDTH: u16 = 28;
/// Below this width the sidebar is dropped and the hero takes the full body.
const MIN_WIDTH_FOR_SIDEBAR: u16 = 60;

/// Everything the landing screen needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct LandingView<'a> {
    pub display: &'a str,
    pub resolved: usize,
    pub phrase_index: usize,
    pub phrase_count: usize,
    pub running: bool,
    pub visibility: Visibility,
    pub site: &'a SiteConfig,
    pub options: UiOptions,
}

impl<'a> LandingView<'a> {
    #[must_use]
    pub fn new<S>(presenter: &'a Presenter<S>, site: &'a SiteConfig, options: UiOptions) -> Self {
        Self {
            display: presenter.display(),
            resolved: presenter.reveal_cursor(),
            phrase_index: presenter.index(),
            phrase_count: presenter.phrases().len(),
            running: presenter.is_running(),
            visibility: presenter.visibility(),
            site,
            options,
        }
    }
}

/// Main draw function
pub fn draw(frame: &mut Frame, view: &LandingView) {
    let palette = palette(view.options);
    let glyphs = glyphs(view.options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let [title, body, status] = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Min(1),    // Sidebar + hero
        Constraint::Length(1), // Status bar
    ])
    .areas(frame.area());

    draw_title(frame, view, title, &palette);

    let hero_area = if body.width >= MIN_WIDTH_FOR_SIDEBAR && !view.site.sidebar.is_empty() {
        let [side, hero] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .areas(body);
        frame.render_widget(Sidebar::new(view.site, &palette, &glyphs), side);
        hero
    } else {
        body
    };

    draw_hero(frame, view, hero_area, &palette, &glyphs);
    draw_status_bar(frame, view, status, &palette, &glyphs);
}

fn draw_title(frame: &mut Frame, view: &LandingView, area: Rect, palette: &Palette) {
    let location = view
        .site
        .base_url()
        .map_or_else(|_| view.site.url.clone(), |url| url.to_string());

    let mut spans = vec![Span::raw(" ")];
    if !view.site.title.trim().is_empty() {
        spans.push(Span::styled(view.site.title.as_str(), styles::site_title(palette)));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(location, Style::default().fg(palette.primary_dim)));
    let title = Line::from(spans);
    let title_width = title.width() as u16;
    frame.render_widget(Paragraph::new(title), area);

    let links = view.site.social_links();
    if links.is_empty() {
        return;
    }
    let social = Line::from(Span::styled(
        format!("{} ", links.join("  ")),
        Style::default().fg(palette.text_muted),
    ));
    let social_width = social.width() as u16;
    if area.width > title_width + social_width {
        let social_area = Rect {
            x: area.right() - social_width,
            width: social_width,
            ..area
        };
        frame.render_widget(Paragraph::new(social), social_area);
    }
}

fn draw_hero(
    frame: &mut Frame,
    view: &LandingView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let hero = Hero::new(view.display, view.resolved)
        .resolved_style(styles::hero_resolved(palette))
        .scrambled_style(styles::hero_scrambled(palette));
    frame.render_widget(hero, area);

    // Phrase position markers two rows under the heading.
    let markers_y = area.y + area.height / 2 + 2;
    if view.phrase_count < 2 || markers_y >= area.y + area.height {
        return;
    }
    let markers: Vec<Span> = (0..view.phrase_count)
        .map(|i| {
            if i == view.phrase_index {
                Span::styled(
                    format!("{} ", glyphs.current),
                    Style::default().fg(palette.accent),
                )
            } else {
                Span::styled(
                    format!("{} ", glyphs.other),
                    Style::default().fg(palette.text_muted),
                )
            }
        })
        .collect();
    let row = Rect {
        y: markers_y,
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(markers).centered()), row);
}

pub(crate) fn draw_status_bar(
    frame: &mut Frame,
    view: &LandingView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (glyph, label, color) = match (view.running, view.visibility) {
        (false, _) => (glyphs.paused, "paused", palette.yellow),
        (true, Visibility::Hidden) => (glyphs.hidden, "hidden", palette.text_muted),
        (true, Visibility::Visible) => (glyphs.running, "rotating", palette.green),
    };
    let status_text = format!(
        "{glyph} {label} │ {}/{}",
        view.phrase_index + 1,
        view.phrase_count
    );

    let hints = Line::from(vec![
        Span::styled("p", styles::key_highlight(palette)),
        Span::styled(" pause  ", styles::key_hint(palette)),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit ", styles::key_hint(palette)),
    ]);

    let status_width = status_text.width() as u16 + 1;
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text, Style::default().fg(color)),
    ]));
    frame.render_widget(status, area);

    // Hints only when they fit beside the status text.
    let hints_width = hints.width() as u16;
    if area.width > status_width + hints_width {
        let hints_area = Rect {
            x: area.right() - hints_width,
            width: hints_width,
            ..area
        };
        frame.render_widget(Paragraph::new(hints), hints_area);
    }
}
