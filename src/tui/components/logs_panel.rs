//! Log strip: the most recent tracing output, toggled with `L`
//!
//! Logs can't go to stdout while the TUI owns the terminal, so the
//! TuiLogLayer buffers them and this panel shows the tail.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Rows the strip takes including its border
pub const STRIP_HEIGHT: u16 = 7;

pub fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.accent_alt),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let rows = area.height.saturating_sub(2) as usize;
    let width = area.width.saturating_sub(2) as usize;
    let theme = &app.theme;

    let items: Vec<ListItem> = app
        .log_buffer
        .recent(rows)
        .iter()
        .map(|entry| {
            ListItem::new(truncate_to_width(&format_log_entry(entry), width))
                .style(log_level_style(entry.level, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Logs "),
    );
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_log_entry() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 5).unwrap(),
            level: LogLevel::Warn,
            target: "folio::clipboard".into(),
            message: "Clipboard tier failed tier=native".into(),
        };
        assert_eq!(
            format_log_entry(&entry),
            "[09:30:05] WARN  Clipboard tier failed tier=native"
        );
    }
}
