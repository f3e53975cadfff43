// Views module - page rendering
//
// The page is one long document built fresh every frame: each section
// appends its lines to a PageDoc, recording anchors (for navigation jumps)
// and hotspots (for pointer targets). The document is then drawn through the
// page scroll, with overlays, effects and the toast on top.

mod contact;
mod effects;
mod experience;
mod hero;
mod modal;
mod projects;
mod skills;

use super::app::{App, Target};
use super::components::{self, scrollbar::render_scrollbar};
use super::layout::{content_column, Breakpoint};
use super::theme::Theme;
use crate::effects::Bounds;
use crate::util::{display_width, wrap_text};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tokio::time::Instant;

/// A pointer target laid out in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hotspot {
    pub target: Target,
    pub line: usize,
    pub column: u16,
    pub width: u16,
}

/// The page as a list of lines
#[derive(Debug, Default)]
pub struct PageDoc {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<(String, usize)>,
    pub hotspots: Vec<Hotspot>,
    pub width: u16,
    /// Viewport height; the hero fills at least this much
    pub viewport: u16,
}

impl PageDoc {
    pub fn new(width: u16, viewport: u16) -> Self {
        Self {
            width: width.max(1),
            viewport,
            ..Default::default()
        }
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Mark the next line as the start of section `id`
    pub fn anchor(&mut self, id: &str) {
        self.anchors.push((id.to_string(), self.lines.len()));
    }

    /// Register a target on the next line pushed
    pub fn hotspot(&mut self, target: Target, column: u16, width: u16) {
        self.hotspots.push(Hotspot {
            target,
            line: self.lines.len(),
            column,
            width,
        });
    }

    pub fn anchor_line(&self, id: &str) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(anchor, _)| anchor == id)
            .map(|(_, line)| *line)
    }

    /// Section heading with an underline
    pub fn heading(&mut self, title: &str, theme: &Theme) {
        self.blank();
        self.push(Line::from(Span::styled(title.to_string(), theme.heading())));
        self.push(Line::from(Span::styled(
            "─".repeat(display_width(title).min(self.width as usize)),
            Style::default().fg(theme.accent_alt),
        )));
        self.blank();
    }

    /// Word-wrapped paragraph with a left indent
    pub fn paragraph(&mut self, text: &str, style: Style, indent: u16) {
        let width = self.width.saturating_sub(indent) as usize;
        let pad = " ".repeat(indent as usize);
        for line in wrap_text(text, width) {
            self.push(Line::from(vec![Span::raw(pad.clone()), Span::styled(line, style)]));
        }
    }

    /// Bulleted, wrapped item; continuation lines hang under the text
    pub fn bullet(&mut self, text: &str, bullet_style: Style, style: Style, indent: u16) {
        let width = self.width.saturating_sub(indent + 2) as usize;
        let pad = " ".repeat(indent as usize);
        for (i, line) in wrap_text(text, width).into_iter().enumerate() {
            let marker = if i == 0 { "• " } else { "  " };
            self.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(marker, bullet_style),
                Span::styled(line, style),
            ]));
        }
    }

    /// Centered line built from spans
    pub fn centered(&mut self, spans: Vec<Span<'static>>) {
        let width: usize = spans.iter().map(|s| s.width()).sum();
        let pad = (self.width as usize).saturating_sub(width) / 2;
        let mut line = vec![Span::raw(" ".repeat(pad))];
        line.extend(spans);
        self.push(Line::from(line));
    }

    /// Centered, wrapped text
    pub fn centered_paragraph(&mut self, text: &str, style: Style, max_width: u16) {
        let width = self.width.min(max_width) as usize;
        for line in wrap_text(text, width) {
            self.centered(vec![Span::styled(line, style)]);
        }
    }
}

/// Tags rendered inline: `[Rust] [Tokio]`, wrapped to the doc width
pub fn tag_lines(tags: &[String], style: Style, indent: u16, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = vec![Span::raw(" ".repeat(indent as usize))];
    let mut used = indent as usize;
    for tag in tags {
        let chip = format!("[{}]", tag);
        let chip_width = display_width(&chip) + 1;
        if used + chip_width > width as usize && used > indent as usize {
            lines.push(Line::from(std::mem::take(&mut current)));
            current.push(Span::raw(" ".repeat(indent as usize)));
            used = indent as usize;
        }
        current.push(Span::styled(chip, style));
        current.push(Span::raw(" "));
        used += chip_width;
    }
    if used > indent as usize {
        lines.push(Line::from(current));
    }
    lines
}

/// Build the whole page for a content width
pub fn build_page(app: &App, width: u16, viewport: u16, now: Instant) -> PageDoc {
    let mut doc = PageDoc::new(width, viewport);
    hero::render(&mut doc, app, now);
    hero::render_about(&mut doc, app);
    skills::render(&mut doc, app);
    projects::render(&mut doc, app);
    experience::render(&mut doc, app);
    contact::render(&mut doc, app, now);
    contact::render_footer(&mut doc, app);
    doc
}

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let now = Instant::now();
    let area = f.area();
    app.set_breakpoint(Breakpoint::from_width(area.width));

    let bg_block = Block::default().style(app.theme.base());
    f.render_widget(bg_block, area);

    let mut constraints = vec![Constraint::Length(2), Constraint::Min(5)];
    if app.show_logs {
        constraints.push(Constraint::Length(components::logs_panel::STRIP_HEIGHT));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    components::nav_bar::render(f, chunks[0], app);
    render_page(f, chunks[1], app, now);
    if app.show_logs {
        components::logs_panel::render(f, chunks[2], app);
    }

    if app.gallery.is_open() {
        modal::render_project(f, area, app);
    } else {
        app.overlay_area = None;
    }
    if let Some(overlay) = app.modal.clone() {
        modal::render(f, area, &overlay, app);
    }

    effects::render_trail(f, area, app, now);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}

fn render_page(f: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    let (column_width, margin) = content_column(area.width);
    // 2 cells of padding each side, scrollbar in the right one
    let text_area = Rect::new(
        area.x + margin + 2,
        area.y,
        column_width.saturating_sub(4),
        area.height,
    );

    let doc = build_page(app, text_area.width, text_area.height, now);

    app.anchors = doc.anchors.iter().cloned().collect();
    app.scroll.update_dimensions(doc.lines.len(), area.height as usize);
    let offset = app.scroll.offset();

    // Screen bounds for every pointer target (off-screen ones get None)
    for target in Target::ALL {
        let bounds = doc
            .hotspots
            .iter()
            .find(|h| h.target == target)
            .and_then(|h| {
                let row = h.line.checked_sub(offset)?;
                (row < text_area.height as usize).then(|| {
                    Bounds::new(
                        (text_area.x + h.column) as f32,
                        (text_area.y as usize + row) as f32,
                        h.width as f32,
                        1.0,
                    )
                })
            });
        app.set_target_bounds(target, bounds);
    }

    // Hero band on screen, for the ambient particles
    let hero_start = doc.anchor_line("home").unwrap_or(0);
    let hero_end = doc.anchor_line("about").unwrap_or(hero_start);
    let top = hero_start.max(offset);
    let bottom = hero_end.min(offset + text_area.height as usize);

    let page = Paragraph::new(doc.lines).scroll((offset.min(u16::MAX as usize) as u16, 0));
    f.render_widget(page, text_area);

    if bottom > top {
        let band = Rect::new(
            area.x + margin,
            area.y + (top - offset) as u16,
            column_width,
            (bottom - top) as u16,
        );
        effects::render_particles(f, band, app, now);
    }

    let bar_area = Rect::new(area.x + margin, area.y, column_width, area.height);
    render_scrollbar(f, bar_area, app.scroll.state(), Style::default().fg(app.theme.border));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_anchor_and_hotspot_point_at_next_line() {
        let mut doc = PageDoc::new(40, 10);
        doc.blank();
        doc.anchor("about");
        doc.hotspot(Target::CopyEmail, 4, 6);
        doc.push(Line::from("hello"));
        assert_eq!(doc.anchor_line("about"), Some(1));
        assert_eq!(doc.hotspots[0].line, 1);
        assert_eq!(doc.anchor_line("missing"), None);
    }

    #[test]
    fn test_centered_pads_left() {
        let mut doc = PageDoc::new(10, 10);
        doc.centered(vec![Span::raw("abcd")]);
        assert_eq!(text(&doc.lines[0]), "   abcd");
    }

    #[test]
    fn test_bullet_hangs_continuation_lines() {
        let mut doc = PageDoc::new(12, 10);
        let style = Style::default();
        doc.bullet("one two three four", style, style, 0);
        assert_eq!(text(&doc.lines[0]), "• one two");
        assert_eq!(text(&doc.lines[1]), "  three four");
    }

    #[test]
    fn test_heading_underline_matches_title() {
        let mut doc = PageDoc::new(40, 10);
        doc.heading("Projects", &Theme::dark());
        assert_eq!(text(&doc.lines[1]), "Projects");
        assert_eq!(text(&doc.lines[2]), "────────");
    }

    #[test]
    fn test_tag_lines_wrap() {
        let tags: Vec<String> = ["Rust", "Tokio", "Axum"].iter().map(|s| s.to_string()).collect();
        let lines = tag_lines(&tags, Style::default(), 0, 15);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), "[Rust] [Tokio] ");
        assert_eq!(text(&lines[1]), "[Axum] ");
    }
}
