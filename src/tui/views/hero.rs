// Hero and About sections

use super::PageDoc;
use crate::tui::app::{App, Target};
use crate::util::display_width;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use tokio::time::Instant;

const CARET: &str = "▍";
const BUTTON_GAP: u16 = 4;
const HERO_TEXT_WIDTH: u16 = 72;

pub fn render(doc: &mut PageDoc, app: &App, now: Instant) {
    let theme = &app.theme;
    let personal = &app.content.personal;
    let start = doc.lines.len();

    doc.anchor("home");
    doc.blank();
    doc.blank();
    doc.centered(vec![Span::styled("Hi, I'm".to_string(), theme.dim())]);
    doc.centered(vec![Span::styled(
        personal.name.clone(),
        theme.heading().add_modifier(Modifier::UNDERLINED),
    )]);
    doc.blank();

    // Typed headline; the caret keeps its cell even when faded out
    let typed = app.typing.text();
    let caret_color = theme.fade(theme.accent_alt, app.typing.caret_opacity(now));
    doc.centered(vec![
        Span::styled(typed, Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::styled(CARET, Style::default().fg(caret_color)),
    ]);
    doc.blank();

    doc.centered_paragraph(&personal.title, Style::default().fg(theme.foreground), HERO_TEXT_WIDTH);
    doc.blank();
    doc.centered_paragraph(&personal.bio, theme.dim(), HERO_TEXT_WIDTH);
    doc.blank();

    render_buttons(doc, app);
    doc.blank();

    if !app.content.social_links.is_empty() {
        let mut spans = Vec::new();
        for (i, link) in app.content.social_links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", theme.dim()));
            }
            spans.push(Span::styled(link.platform.clone(), Style::default().fg(theme.highlight)));
        }
        doc.centered(spans);
    }

    // Hero fills the first screen
    while doc.lines.len() - start < doc.viewport as usize {
        doc.blank();
    }
}

/// "View My Work" (filled) and "Get In Touch" (outlined), pulled by the pointer
fn render_buttons(doc: &mut PageDoc, app: &App) {
    let theme = &app.theme;
    let buttons = [
        (Target::ViewWork, " View My Work → "),
        (Target::GetInTouch, " Get In Touch "),
    ];
    let widths: Vec<u16> = buttons
        .iter()
        .map(|(_, label)| display_width(label) as u16 + 2)
        .collect();
    let total: u16 = widths.iter().sum::<u16>() + BUTTON_GAP;
    let left = doc.width.saturating_sub(total) / 2;

    let mut spans = Vec::new();
    let mut cursor: i32 = 0;
    let mut column = left;
    for (i, ((target, label), width)) in buttons.iter().zip(&widths).enumerate() {
        doc.hotspot(*target, column, *width);

        let drawn_at = (column as i32 + app.pull(*target) as i32).max(cursor);
        spans.push(Span::raw(" ".repeat((drawn_at - cursor) as usize)));

        let hovered = app.is_hovering(*target);
        let style = match (i, hovered) {
            (0, false) => Style::default().fg(theme.background).bg(theme.accent),
            (0, true) => Style::default().fg(theme.background).bg(theme.highlight),
            (_, false) => Style::default().fg(theme.accent),
            (_, true) => Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
        };
        let text = if i == 0 {
            format!(" {} ", label)
        } else {
            format!("[{}]", label)
        };
        spans.push(Span::styled(text, style.add_modifier(Modifier::BOLD)));

        cursor = drawn_at + *width as i32;
        column += width + BUTTON_GAP;
    }
    doc.push(Line::from(spans));
}

pub fn render_about(doc: &mut PageDoc, app: &App) {
    let theme = &app.theme;
    let personal = &app.content.personal;

    doc.anchor("about");
    doc.heading("About Me", theme);
    if let Some(subtitle) = &personal.about_subtitle {
        doc.paragraph(subtitle, Style::default().fg(theme.accent_alt), 0);
        doc.blank();
    }

    if personal.extended_bio.is_empty() {
        doc.paragraph(&personal.bio, Style::default().fg(theme.foreground), 0);
        doc.blank();
    }
    for paragraph in &personal.extended_bio {
        doc.paragraph(paragraph, Style::default().fg(theme.foreground), 0);
        doc.blank();
    }

    let title = personal.quick_info_title.as_deref().unwrap_or("Quick Info");
    doc.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
    )));

    let contact = &personal.contact;
    let mut rows = vec![
        ("Location", contact.location.clone()),
        ("Email", contact.email.clone()),
    ];
    if let Some(status) = &personal.availability_status {
        rows.push(("Status", status.clone()));
    }
    if let Some(badge) = &personal.education_badge {
        rows.push(("Education", badge.clone()));
    }
    for (label, value) in rows {
        doc.push(Line::from(vec![
            Span::styled(format!("  {:<10}", label), theme.dim()),
            Span::styled(value, Style::default().fg(theme.foreground)),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::Portfolio;
    use crate::logging::LogBuffer;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn app() -> App {
        let (events_tx, _) = mpsc::unbounded_channel();
        let (prompt_tx, _) = mpsc::unbounded_channel();
        App::new(
            Config::default(),
            Arc::new(Portfolio::bundled().unwrap()),
            LogBuffer::new(),
            events_tx,
            prompt_tx,
        )
        .unwrap()
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hero_fills_viewport_and_shows_first_phrase() {
        let app = app();
        let mut doc = PageDoc::new(80, 30);
        render(&mut doc, &app, Instant::now());

        assert_eq!(doc.lines.len(), 30);
        let phrase = &app.content.typing_phrases[0];
        assert!(doc.lines.iter().any(|l| text(l).contains(phrase.as_str())));
    }

    #[test]
    fn test_hero_buttons_register_hotspots_on_one_line() {
        let app = app();
        let mut doc = PageDoc::new(80, 10);
        render(&mut doc, &app, Instant::now());

        let view = doc.hotspots.iter().find(|h| h.target == Target::ViewWork).unwrap();
        let touch = doc.hotspots.iter().find(|h| h.target == Target::GetInTouch).unwrap();
        assert_eq!(view.line, touch.line);
        assert_eq!(touch.column, view.column + view.width + BUTTON_GAP);
        assert!(text(&doc.lines[view.line]).contains("View My Work"));
    }

    #[test]
    fn test_about_anchor_follows_hero() {
        let app = app();
        let mut doc = PageDoc::new(80, 60);
        render(&mut doc, &app, Instant::now());
        render_about(&mut doc, &app);
        assert_eq!(doc.anchor_line("about"), Some(doc.anchor_line("home").unwrap() + 60));
    }
}
