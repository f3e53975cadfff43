// Projects section: filter tabs, count label, and a grid of cards
//
// Cards are drawn dimmed while a filter transition is settling.

use super::PageDoc;
use crate::content::{ButtonKind, Project};
use crate::gallery::ProjectFilter;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::{display_width, truncate_to_width, wrap_text};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const CARD_GAP: u16 = 2;
const MIN_CARD_WIDTH: u16 = 24;
const DESCRIPTION_LINES: usize = 3;

pub fn render(doc: &mut PageDoc, app: &App) {
    let theme = &app.theme;
    let gallery = &app.gallery;

    doc.anchor("projects");
    doc.heading("Projects", theme);

    let mut tabs = Vec::new();
    for filter in [ProjectFilter::All, ProjectFilter::Featured] {
        let style = if filter == gallery.filter() {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent)
        };
        tabs.push(Span::styled(format!(" {} ", filter.label()), style));
        tabs.push(Span::raw(" "));
    }
    tabs.push(Span::styled(format!("  {}", gallery.count_label()), theme.dim()));
    doc.push(Line::from(tabs));
    doc.push(Line::from(Span::styled(
        "f filter · ←/→ select · Enter details",
        theme.dim().add_modifier(Modifier::ITALIC),
    )));
    doc.blank();

    let visible = gallery.visible_projects();
    if visible.is_empty() {
        doc.paragraph("No projects match this filter.", theme.dim(), 0);
        return;
    }

    let mut columns = app.breakpoint.gallery_columns().max(1);
    let mut card_width = card_width_for(doc.width, columns);
    while columns > 1 && card_width < MIN_CARD_WIDTH {
        columns -= 1;
        card_width = card_width_for(doc.width, columns);
    }

    let dimmed = gallery.is_transitioning();
    for (row, chunk) in visible.chunks(columns as usize).enumerate() {
        let cards: Vec<Vec<Line<'static>>> = chunk
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let highlighted = row * columns as usize + i == gallery.cursor();
                card_lines(project, card_width, highlighted, dimmed, theme)
            })
            .collect();
        for line in join_cards(cards, card_width) {
            doc.push(line);
        }
        doc.blank();
    }
}

fn card_width_for(width: u16, columns: u16) -> u16 {
    width.saturating_sub(CARD_GAP * (columns - 1)) / columns
}

fn pad_to(mut spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let used: usize = spans.iter().map(|s| s.width()).sum();
    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }
    spans
}

/// One card as lines exactly `width` cells wide
pub fn card_lines(
    project: &Project,
    width: u16,
    highlighted: bool,
    dimmed: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let width = width.max(6) as usize;
    let inner = width - 4;

    let border = if highlighted {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    let text = |style: Style| if dimmed { theme.dim() } else { style };

    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();

    // Title (+ star for featured)
    let star = if project.featured { " ★" } else { "" };
    let title = truncate_to_width(&project.title, inner.saturating_sub(display_width(star)));
    rows.push(vec![
        Span::styled(title, text(Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD))),
        Span::styled(star, text(Style::default().fg(theme.accent_alt))),
    ]);
    rows.push(Vec::new());

    // Description, clipped to a fixed height so cards in a row line up
    let mut description = wrap_text(&project.description, inner);
    if description.len() > DESCRIPTION_LINES {
        description.truncate(DESCRIPTION_LINES);
        let last = description[DESCRIPTION_LINES - 1].clone();
        description[DESCRIPTION_LINES - 1] = truncate_to_width(&format!("{last}…"), inner);
    }
    description.resize(DESCRIPTION_LINES, String::new());
    for line in description {
        rows.push(vec![Span::styled(line, text(theme.dim()))]);
    }
    rows.push(Vec::new());

    // First few technologies, then "+N more"
    let (shown, more) = project.tech_preview();
    let mut tech = shown.join(" · ");
    if more > 0 {
        tech.push_str(&format!(" +{more} more"));
    }
    rows.push(vec![Span::styled(
        truncate_to_width(&tech, inner),
        text(Style::default().fg(theme.highlight)),
    )]);

    let mut buttons = Vec::new();
    let mut used = 0;
    for button in project.card_buttons() {
        let chip = format!("[{}]", button.label);
        let gap = usize::from(!buttons.is_empty());
        let chip_width = display_width(&chip) + gap;
        if used + chip_width > inner {
            break;
        }
        if gap > 0 {
            buttons.push(Span::raw(" "));
        }
        let style = match button.kind {
            ButtonKind::Primary => Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ButtonKind::Secondary => Style::default().fg(theme.accent_alt),
            ButtonKind::Outline => Style::default().fg(theme.foreground),
        };
        buttons.push(Span::styled(chip, text(style)));
        used += chip_width;
    }
    rows.push(buttons);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(Line::from(Span::styled(
        format!("╭{}╮", "─".repeat(width - 2)),
        border,
    )));
    for row in rows {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(pad_to(row, inner));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width - 2)),
        border,
    )));
    lines
}

/// Lay cards side by side
fn join_cards(cards: Vec<Vec<Line<'static>>>, card_width: u16) -> Vec<Line<'static>> {
    let height = cards.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, card) in cards.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" ".repeat(CARD_GAP as usize)));
                }
                match card.get(row) {
                    Some(line) => spans.extend(line.spans.iter().cloned()),
                    None => spans.push(Span::raw(" ".repeat(card_width as usize))),
                }
            }
            Line::from(spans)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ProjectButton;

    fn project(techs: &[&str], buttons: usize) -> Project {
        Project {
            id: "p".into(),
            title: "Relay".into(),
            description: "A small mail relay".into(),
            long_description: None,
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            image_url: String::new(),
            buttons: (0..buttons)
                .map(|i| ProjectButton {
                    label: format!("B{i}"),
                    url: format!("https://example.com/{i}"),
                    kind: ButtonKind::Primary,
                    icon: None,
                })
                .collect(),
            featured: true,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_lines_are_uniform_width() {
        let card = card_lines(&project(&["Rust"], 1), 30, false, false, &Theme::dark());
        for line in &card {
            assert_eq!(line.width(), 30, "{:?}", text(line));
        }
        // border, title, gap, 3 description, gap, tech, buttons, border
        assert_eq!(card.len(), 10);
    }

    #[test]
    fn test_card_collapses_extra_technologies() {
        let card = card_lines(
            &project(&["Rust", "Tokio", "Axum", "Serde", "Tracing"], 0),
            60,
            false,
            false,
            &Theme::dark(),
        );
        assert!(card.iter().any(|l| text(l).contains("Rust · Tokio · Axum +2 more")));
    }

    #[test]
    fn test_card_shows_at_most_two_buttons() {
        let card = card_lines(&project(&[], 3), 60, false, false, &Theme::dark());
        let row = card.iter().map(text).find(|t| t.contains("[B0]")).unwrap();
        assert!(row.contains("[B1]"));
        assert!(!row.contains("[B2]"));
    }

    #[test]
    fn test_join_cards_pads_short_cards() {
        let theme = Theme::dark();
        let a = card_lines(&project(&[], 0), 20, false, false, &theme);
        let mut b = a.clone();
        b.truncate(3);
        let joined = join_cards(vec![a, b], 20);
        assert_eq!(joined.len(), 10);
        assert_eq!(joined[9].width(), 20 + CARD_GAP as usize + 20);
    }
}
