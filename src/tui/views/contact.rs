// Contact section: copyable details, links, and the message form

use super::PageDoc;
use crate::tui::app::{App, CopyTarget, Focus, Target};
use crate::tui::form::{FormField, FormStatus};
use crate::util::{display_width, wrap_text};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use tokio::time::Instant;

const LABEL_WIDTH: usize = 10;
const ROW_INDENT: &str = "  ";
const CHIP_GAP: usize = 2;

pub fn render(doc: &mut PageDoc, app: &App, now: Instant) {
    let theme = &app.theme;
    let contact = &app.content.personal.contact;

    doc.anchor("contact");
    doc.heading("Get In Touch", theme);
    doc.paragraph(
        "Have a project in mind or just want to say hi? My inbox is open.",
        theme.dim(),
        0,
    );
    doc.blank();

    copy_row(doc, app, "Email", &contact.email, Target::CopyEmail, CopyTarget::Email, now);
    if let Some(phone) = &contact.phone {
        copy_row(doc, app, "Phone", phone, Target::CopyPhone, CopyTarget::Phone, now);
    }
    info_row(doc, app, "Location", &contact.location);
    info_row(doc, app, "LinkedIn", &contact.linkedin);
    info_row(doc, app, "GitHub", &contact.github);
    if let Some(resume) = &contact.resume {
        info_row(doc, app, "Resume", resume);
    }
    doc.blank();

    render_form(doc, app);
}

fn info_row(doc: &mut PageDoc, app: &App, label: &str, value: &str) {
    let theme = &app.theme;
    doc.push(Line::from(vec![
        Span::raw(ROW_INDENT),
        Span::styled(format!("{:<LABEL_WIDTH$}", label), theme.dim()),
        Span::styled(value.to_string(), Style::default().fg(theme.foreground)),
    ]));
}

/// A contact row followed by a copy chip that flips to "Copied" for a while
fn copy_row(
    doc: &mut PageDoc,
    app: &App,
    label: &str,
    value: &str,
    target: Target,
    copy: CopyTarget,
    now: Instant,
) {
    let theme = &app.theme;
    let copied = app.is_copied(copy, now);
    let chip = if copied { "[ ✓ Copied ]" } else { "[ Copy ]" };

    let column = ROW_INDENT.len() + LABEL_WIDTH + display_width(value) + CHIP_GAP;
    doc.hotspot(target, column as u16, display_width(chip) as u16);

    let shift = (CHIP_GAP as i32 + app.pull(target) as i32).max(1) as usize;
    let chip_style = if copied {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    } else if app.is_hovering(target) {
        Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };

    doc.push(Line::from(vec![
        Span::raw(ROW_INDENT),
        Span::styled(format!("{:<LABEL_WIDTH$}", label), theme.dim()),
        Span::styled(value.to_string(), Style::default().fg(theme.foreground)),
        Span::raw(" ".repeat(shift)),
        Span::styled(chip, chip_style),
    ]));
}

fn render_form(doc: &mut PageDoc, app: &App) {
    let theme = &app.theme;
    let form = &app.form;
    let editing = app.focus == Focus::Form;

    doc.push(Line::from(Span::styled(
        "Send a Message",
        Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD),
    )));
    let hint = if editing {
        "Tab next field · Ctrl+S send · Esc done"
    } else {
        "Press i to write a message"
    };
    doc.push(Line::from(Span::styled(hint, theme.dim().add_modifier(Modifier::ITALIC))));
    doc.blank();

    let value_width = (doc.width as usize)
        .saturating_sub(ROW_INDENT.len() + LABEL_WIDTH + 2)
        .max(1);

    for field in FormField::ALL {
        let focused = editing && form.focus() == field;
        let label_style = if focused {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            theme.dim()
        };
        let marker = if focused { "› " } else { "  " };

        let value = form.value(field);
        let mut lines: Vec<String> = value
            .split('\n')
            .flat_map(|part| {
                let wrapped = wrap_text(part, value_width);
                if wrapped.is_empty() {
                    vec![String::new()]
                } else {
                    wrapped
                }
            })
            .collect();
        if lines.is_empty() {
            lines.push(String::new());
        }

        let last = lines.len() - 1;
        for (i, text) in lines.into_iter().enumerate() {
            let label = if i == 0 { field.label() } else { "" };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(format!("{:<LABEL_WIDTH$}", label), label_style),
                Span::styled(text, Style::default().fg(theme.foreground)),
            ];
            if focused && i == last {
                spans.push(Span::styled("▏", Style::default().fg(theme.accent_alt)));
            }
            doc.push(Line::from(spans));
        }
    }
    doc.blank();

    let status = match form.status() {
        FormStatus::Idle => None,
        FormStatus::Sending => Some(("Sending…".to_string(), theme.dim())),
        FormStatus::Sent(message) => {
            Some((format!("✓ {message}"), Style::default().fg(theme.success)))
        }
        FormStatus::Failed(message) => {
            Some((format!("✗ {message}"), Style::default().fg(theme.error)))
        }
    };
    if let Some((text, style)) = status {
        doc.paragraph(&text, style, 2);
    }
}

pub fn render_footer(doc: &mut PageDoc, app: &App) {
    let theme = &app.theme;
    let year = chrono::Local::now().format("%Y");
    doc.blank();
    doc.push(Line::from(Span::styled(
        "─".repeat(doc.width as usize),
        Style::default().fg(theme.border),
    )));
    doc.centered(vec![Span::styled(
        format!("© {} {}", year, app.content.personal.name),
        theme.dim(),
    )]);
    doc.blank();
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
    fn test_email_chip_hotspot_lines_up_with_text() {
        let app = app();
        let mut doc = PageDoc::new(100, 30);
        render(&mut doc, &app, Instant::now());

        let spot = doc
            .hotspots
            .iter()
            .find(|h| h.target == Target::CopyEmail)
            .unwrap();
        let line = text(&doc.lines[spot.line]);
        let prefix: String = line.chars().take(spot.column as usize).collect();
        assert_eq!(display_width(&prefix), spot.column as usize);
        assert!(line[prefix.len()..].starts_with("[ Copy ]"));
    }

    #[test]
    fn test_form_lists_every_field() {
        let app = app();
        let mut doc = PageDoc::new(80, 30);
        render(&mut doc, &app, Instant::now());
        let all: Vec<String> = doc.lines.iter().map(text).collect();
        for field in FormField::ALL {
            assert!(all.iter().any(|l| l.contains(field.label())), "{}", field.label());
        }
        assert!(all.iter().any(|l| l.contains("Press i")));
    }

    #[test]
    fn test_footer_names_owner() {
        let app = app();
        let mut doc = PageDoc::new(60, 10);
        render_footer(&mut doc, &app);
        let all: Vec<String> = doc.lines.iter().map(text).collect();
        assert!(all.iter().any(|l| l.contains(&app.content.personal.name)));
    }
}
