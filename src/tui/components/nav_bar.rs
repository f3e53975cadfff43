//! Top bar: name, section shortcuts, and the key hint

use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(
        format!(" {} ", app.content.personal.name),
        theme.heading(),
    )];

    if app.breakpoint.at_least(Breakpoint::Normal) {
        let current = current_section(app);
        for (i, item) in app.content.navigation.iter().take(9).enumerate() {
            let label_style = if current == Some(item.href.trim_start_matches('#')) {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground)
            };
            spans.push(Span::styled(format!(" {}", i + 1), Style::default().fg(theme.accent_alt)));
            spans.push(Span::styled(format!(" {} ", item.label), label_style));
        }
    }

    let hint = match app.focus {
        Focus::Form => " Esc leave form · Ctrl+S send ",
        Focus::Page => " ? help ",
    };

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title_top(
                Line::from(Span::styled(hint, Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC)))
                    .right_aligned(),
            ),
    );
    f.render_widget(bar, area);
}

/// Section whose anchor was most recently scrolled past
fn current_section(app: &App) -> Option<&str> {
    let offset = app.scroll.offset();
    app.anchors
        .iter()
        .filter(|(_, line)| **line <= offset)
        .max_by_key(|(_, line)| **line)
        .map(|(id, _)| id.as_str())
}
