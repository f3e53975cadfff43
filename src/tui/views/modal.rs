// Overlay rendering
//
// Overlays are drawn on top of the page:
// - Project detail: the gallery's open project (scrollable)
// - Help: keyboard shortcuts and the current theme
// - Manual copy: text to copy by hand when no clipboard tier worked

use crate::clipboard::prompt::MANUAL_COPY_HINT;
use crate::tui::app::App;
use crate::tui::components::scrollbar::render_scrollbar;
use crate::tui::modal::Modal;
use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a help or manual-copy overlay
pub fn render(f: &mut Frame, area: Rect, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, area, app),
        Modal::ManualCopy(text) => render_manual_copy(f, area, modal, text, app),
    }
}

/// Calculate centered rect for an overlay
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn overlay_block<'a>(title: &'a str, hint: &'a str, app: &App) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .border_type(app.theme.border_type)
        .title(title)
        .title_bottom(Line::from(hint).centered())
        .style(Style::default().bg(app.theme.background))
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(app.theme.accent);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Page", header_style)),
        kb("↑/↓, j/k", "Scroll"),
        kb("PgUp/PgDn", "Scroll a page"),
        kb("Home/End", "Top / bottom"),
        kb("1-9", "Jump to section"),
        Line::raw(""),
        Line::from(Span::styled("  Projects", header_style)),
        kb("←/→, h/l", "Select project"),
        kb("Enter", "Open details"),
        kb("f", "Toggle featured filter"),
        kb("Esc", "Close details"),
        Line::raw(""),
        Line::from(Span::styled("  Contact", header_style)),
        kb("c / p", "Copy email / phone"),
        kb("i", "Write a message"),
        kb("Ctrl+S", "Send message"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Cycle theme"),
        kb("L", "Toggle log strip"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name, key_style),
        ]),
    ]);

    let overlay = centered_rect(44, 30, area);
    f.render_widget(Clear, overlay);
    f.render_widget(
        Paragraph::new(content).block(overlay_block(
            Modal::Help.title(),
            " Press ? or Esc to close ",
            app,
        )),
        overlay,
    );
}

fn render_manual_copy(f: &mut Frame, area: Rect, modal: &Modal, text: &str, app: &App) {
    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(MANUAL_COPY_HINT, Style::default().fg(app.theme.foreground))),
        Line::raw(""),
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ]);

    let width = (area.width * 7 / 10).max(30);
    let overlay = centered_rect(width, 8, area);
    f.render_widget(Clear, overlay);
    f.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(overlay_block(modal.title(), " Enter or Esc to close ", app)),
        overlay,
    );
}

/// Project detail overlay; records its area so backdrop clicks can close it
pub fn render_project(f: &mut Frame, area: Rect, app: &mut App) {
    let Some(project) = app.gallery.selected_project().cloned() else {
        app.overlay_area = None;
        return;
    };
    let theme = &app.theme;

    let width = (area.width * 4 / 5).max(20);
    let height = (area.height * 4 / 5).max(8);
    let overlay = centered_rect(width, height, area);

    let title_style = theme.heading();
    let label = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(theme.foreground);

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(project.title.clone(), title_style),
            Span::styled(
                if project.featured { "  ★ Featured" } else { "" },
                Style::default().fg(theme.accent_alt),
            ),
        ]),
        Line::raw(""),
    ];
    for paragraph in project.modal_description().split("\n\n") {
        lines.push(Line::from(Span::styled(paragraph.trim().to_string(), text)));
        lines.push(Line::raw(""));
    }

    if !project.technologies.is_empty() {
        lines.push(Line::from(Span::styled("Technologies", label)));
        lines.push(Line::from(Span::styled(
            project.technologies.join(" · "),
            Style::default().fg(theme.accent),
        )));
        lines.push(Line::raw(""));
    }

    if !project.buttons.is_empty() {
        lines.push(Line::from(Span::styled("Links", label)));
        for button in &project.buttons {
            lines.push(Line::from(vec![
                Span::styled(format!("{} → ", button.label), text),
                Span::styled(button.url.clone(), Style::default().fg(theme.accent_alt)),
            ]));
        }
    }

    let inner_width = overlay.width.saturating_sub(4).max(1) as usize;
    let inner_height = overlay.height.saturating_sub(2) as usize;
    // Wrapped height, for clamping the scroll and sizing the scrollbar
    let total: usize = lines
        .iter()
        .map(|l| l.width().max(1).div_ceil(inner_width))
        .sum();

    let max_scroll = total.saturating_sub(inner_height);
    app.project_scroll = app.project_scroll.min(max_scroll as u16);
    let mut scroll = ScrollState::new();
    scroll.update_dimensions(total, inner_height);
    scroll.scroll_to(app.project_scroll as usize);

    let block = overlay_block(
        " Project ",
        " ←/→ switch · y copy link · Esc close ",
        app,
    );
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.project_scroll, 0))
        .block(block.padding(ratatui::widgets::Padding::horizontal(1)));

    f.render_widget(Clear, overlay);
    f.render_widget(paragraph, overlay);
    render_scrollbar(
        f,
        overlay.inner(ratatui::layout::Margin::new(0, 1)),
        &scroll,
        Style::default().fg(app.theme.border),
    );
    app.overlay_area = Some(overlay);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 20, area), Rect::new(30, 10, 40, 20));
        let small = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(40, 20, small), Rect::new(0, 0, 20, 10));
    }
}
