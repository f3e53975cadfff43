// Experience timeline and education

use super::{tag_lines, PageDoc};
use crate::content::dates::{duration_label, format_range};
use crate::content::{Education, Experience};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use chrono::NaiveDate;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const INDENT: u16 = 2;

pub fn render(doc: &mut PageDoc, app: &App) {
    let theme = &app.theme;
    let today = chrono::Local::now().date_naive();

    doc.anchor("experience");
    doc.heading("Experience", theme);

    if app.content.experience.is_empty() {
        doc.paragraph("Nothing to show yet.", theme.dim(), 0);
    }
    for entry in &app.content.experience {
        render_entry(doc, entry, theme, today);
        doc.blank();
    }

    if !app.content.education.is_empty() {
        doc.push(Line::from(Span::styled(
            "Education",
            Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
        )));
        doc.blank();
        for education in &app.content.education {
            render_education(doc, education, theme);
            doc.blank();
        }
    }
}

fn render_entry(doc: &mut PageDoc, entry: &Experience, theme: &Theme, today: NaiveDate) {
    doc.push(Line::from(vec![
        Span::styled("◆ ", Style::default().fg(theme.accent)),
        Span::styled(entry.title.clone(), theme.heading()),
        Span::styled(format!("  {}", entry.kind.label()), theme.dim()),
    ]));
    doc.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(entry.company.clone(), Style::default().fg(theme.accent_alt)),
        Span::styled(format!(" · {}", entry.location), theme.dim()),
    ]));

    let mut when = format_range(&entry.start_date, entry.end_date.as_deref(), "Present");
    if let Some(duration) = duration_label(&entry.start_date, entry.end_date.as_deref(), today) {
        when.push_str(&format!(" ({duration})"));
    }
    doc.push(Line::from(vec![Span::raw("  "), Span::styled(when, theme.dim())]));

    let text = Style::default().fg(theme.foreground);
    let bullet = Style::default().fg(theme.accent);
    for item in &entry.description {
        doc.bullet(item, bullet, text, INDENT);
    }
    for line in tag_lines(
        &entry.key_areas,
        Style::default().fg(theme.highlight),
        INDENT,
        doc.width,
    ) {
        doc.push(line);
    }
}

fn render_education(doc: &mut PageDoc, education: &Education, theme: &Theme) {
    let text = Style::default().fg(theme.foreground);
    let bullet = Style::default().fg(theme.accent_alt);

    let mut degree = format!("{} in {}", education.degree, education.field);
    if let Some(specialization) = &education.specialization {
        degree.push_str(&format!(" ({specialization})"));
    }
    doc.push(Line::from(vec![
        Span::styled("◇ ", Style::default().fg(theme.accent_alt)),
        Span::styled(degree, theme.heading()),
    ]));
    doc.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(education.institution.clone(), Style::default().fg(theme.accent_alt)),
        Span::styled(format!(" · {}", education.location), theme.dim()),
    ]));
    let when = format_range(
        &education.start_date,
        education.end_date.as_deref(),
        education.open_end_label(),
    );
    doc.push(Line::from(vec![Span::raw("  "), Span::styled(when, theme.dim())]));

    let mut facts = Vec::new();
    if let Some(gpa) = &education.gpa {
        match &education.grade_system {
            Some(system) => facts.push(format!("GPA {gpa} ({system})")),
            None => facts.push(format!("GPA {gpa}")),
        }
    }
    if let Some(honors) = &education.honors {
        facts.push(honors.clone());
    }
    if !facts.is_empty() {
        doc.paragraph(&facts.join(" · "), text, INDENT);
    }

    if let Some(thesis) = &education.thesis {
        doc.paragraph(&format!("Thesis: {}", thesis.title), text, INDENT);
        if let Some(advisor) = &thesis.advisor {
            doc.paragraph(&format!("Advisor: {advisor}"), theme.dim(), INDENT + 2);
        }
    }

    for item in education.achievements.iter().chain(&education.awards) {
        doc.bullet(item, bullet, text, INDENT);
    }
    for cert in &education.certifications {
        doc.bullet(&format!("{} ({})", cert.name, cert.issuer), bullet, text, INDENT);
    }

    if !education.relevant_coursework.is_empty() {
        doc.paragraph("Coursework", theme.dim(), INDENT);
        for line in tag_lines(
            &education.relevant_coursework,
            Style::default().fg(theme.highlight),
            INDENT,
            doc.width,
        ) {
            doc.push(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ExperienceKind;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn entry(end: Option<&str>) -> Experience {
        Experience {
            id: "e".into(),
            title: "Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            start_date: "2023-01".into(),
            end_date: end.map(String::from),
            description: vec!["Built things".into()],
            key_areas: vec!["Rust".into()],
            kind: ExperienceKind::Internship,
        }
    }

    #[test]
    fn test_entry_shows_range_and_tags() {
        let mut doc = PageDoc::new(60, 10);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        render_entry(&mut doc, &entry(None), &Theme::dark(), today);

        let all: Vec<String> = doc.lines.iter().map(text).collect();
        assert!(all[2].contains("Present"));
        assert!(all.iter().any(|l| l.contains("• Built things")));
        assert!(all.iter().any(|l| l.contains("[Rust]")));
    }
}
