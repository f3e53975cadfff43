// Ambient particles and the cursor trail, drawn straight into the buffer

use crate::tui::app::App;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;
use tokio::time::Instant;

/// Glyph for a particle's drawn size (size x scale)
pub fn particle_glyph(magnitude: f32) -> &'static str {
    if magnitude < 4.0 {
        "·"
    } else if magnitude < 8.0 {
        "•"
    } else {
        "●"
    }
}

/// Put a glyph on a blank cell; text is never overdrawn
fn put_on_blank(buf: &mut Buffer, x: u16, y: u16, glyph: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        if cell.symbol() == " " {
            cell.set_symbol(glyph);
            cell.set_style(style);
        }
    }
}

pub fn render_particles(f: &mut Frame, band: Rect, app: &App, now: Instant) {
    if band.width == 0 || band.height == 0 || !app.particles.is_mounted() {
        return;
    }
    let theme = &app.theme;
    let elapsed = app.particles_elapsed(now);
    let buf = f.buffer_mut();

    for frame in app.particles.frame(elapsed) {
        let x = band.x + ((band.width - 1) as f32 * frame.x).round() as u16;
        let y = band.y + ((band.height - 1) as f32 * frame.y).round() as u16;
        let color = theme.fade(theme.accent_alt, frame.opacity);
        put_on_blank(
            buf,
            x,
            y,
            particle_glyph(frame.size * frame.scale),
            Style::default().fg(color),
        );
    }
}

pub fn render_trail(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    if !app.trail.is_enabled() {
        return;
    }
    let theme = &app.theme;
    let buf = f.buffer_mut();

    if let Some(glow) = app.trail.glow() {
        let (x, y) = (glow.x.round(), glow.y.round());
        if x >= 0.0 && y >= 0.0 {
            let position = (x as u16, y as u16);
            if area.contains(position.into()) {
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_bg(theme.fade(theme.accent, 0.25));
                }
            }
        }
    }

    for frame in app.trail.frames(now) {
        let (x, y) = (frame.position.x.round(), frame.position.y.round());
        if x < 0.0 || y < 0.0 {
            continue;
        }
        let position = (x as u16, y as u16);
        if !area.contains(position.into()) {
            continue;
        }
        let glyph = if frame.scale > 0.5 { "•" } else { "·" };
        put_on_blank(
            buf,
            position.0,
            position.1,
            glyph,
            Style::default().fg(theme.fade(theme.accent, frame.opacity)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_glyph_grows_with_size() {
        assert_eq!(particle_glyph(2.0), "·");
        assert_eq!(particle_glyph(5.0), "•");
        assert_eq!(particle_glyph(12.0), "●");
    }

    #[test]
    fn test_put_on_blank_keeps_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.set_string(0, 0, "ab", Style::default());
        put_on_blank(&mut buf, 0, 0, "•", Style::default());
        put_on_blank(&mut buf, 3, 0, "•", Style::default());
        put_on_blank(&mut buf, 9, 0, "•", Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(3, 0)].symbol(), "•");
    }
}
