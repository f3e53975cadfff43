// Skills section: one block per category with a four-pip level meter

use super::PageDoc;
use crate::content::SkillLevel;
use crate::tui::app::App;
use crate::util::{display_width, truncate_to_width};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const NAME_WIDTH: usize = 18;

/// `●●●○`
pub fn level_pips(level: SkillLevel) -> String {
    let filled = level.rank() as usize;
    format!("{}{}", "●".repeat(filled), "○".repeat(4 - filled))
}

pub fn render(doc: &mut PageDoc, app: &App) {
    let theme = &app.theme;
    let title = app
        .content
        .personal
        .skills_title
        .as_deref()
        .unwrap_or("Skills & Technologies");

    doc.anchor("skills");
    doc.heading(title, theme);

    for (category, skills) in app.content.skills_by_category() {
        doc.push(Line::from(Span::styled(
            category.title().to_string(),
            Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
        )));
        for skill in skills {
            let name = truncate_to_width(&skill.name, NAME_WIDTH);
            let pad = NAME_WIDTH.saturating_sub(display_width(&name));
            doc.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(name, Style::default().fg(theme.foreground)),
                Span::raw(" ".repeat(pad + 2)),
                Span::styled(level_pips(skill.level), Style::default().fg(theme.accent)),
                Span::styled(format!("  {}", skill.level.label()), theme.dim()),
            ]));
        }
        doc.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_pips() {
        assert_eq!(level_pips(SkillLevel::Beginner), "●○○○");
        assert_eq!(level_pips(SkillLevel::Expert), "●●●●");
    }
}
