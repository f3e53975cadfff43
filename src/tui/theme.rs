// Color themes for the page
//
// Named themes use true color (RGB); "Terminal" sticks to the ANSI palette so
// it inherits whatever the user's terminal is configured with.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    /// Headline, links, focused elements
    pub accent: Color,
    /// Secondary accent (caret, tags, cursor glow)
    pub accent_alt: Color,

    pub border: Color,
    pub highlight: Color,
    pub success: Color,
    pub error: Color,

    pub border_type: BorderType,
}

impl Theme {
    pub const NAMES: [&'static str; 3] = ["Folio Dark", "Folio Light", "Terminal"];

    /// Look up a theme by name (case-insensitive); unknown names fall back to Folio Dark
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "folio light" | "light" => Self::light(),
            "terminal" | "auto" => Self::terminal(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Folio Dark",
            background: Color::Rgb(15, 23, 42),
            foreground: Color::Rgb(226, 232, 240),
            muted: Color::Rgb(100, 116, 139),
            accent: Color::Rgb(96, 165, 250),
            accent_alt: Color::Rgb(167, 139, 250),
            border: Color::Rgb(51, 65, 85),
            highlight: Color::Rgb(56, 189, 248),
            success: Color::Rgb(74, 222, 128),
            error: Color::Rgb(248, 113, 113),
            border_type: BorderType::Rounded,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Folio Light",
            background: Color::Rgb(248, 250, 252),
            foreground: Color::Rgb(15, 23, 42),
            muted: Color::Rgb(100, 116, 139),
            accent: Color::Rgb(37, 99, 235),
            accent_alt: Color::Rgb(124, 58, 237),
            border: Color::Rgb(203, 213, 225),
            highlight: Color::Rgb(2, 132, 199),
            success: Color::Rgb(22, 163, 74),
            error: Color::Rgb(220, 38, 38),
            border_type: BorderType::Rounded,
        }
    }

    pub fn terminal() -> Self {
        Self {
            name: "Terminal",
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            accent_alt: Color::Magenta,
            border: Color::DarkGray,
            highlight: Color::LightCyan,
            success: Color::Green,
            error: Color::Red,
            border_type: BorderType::Plain,
        }
    }

    /// Mix `color` toward the background by `opacity` (1.0 = full color).
    /// ANSI colors can't be mixed, so they switch to `muted` below half opacity.
    pub fn fade(&self, color: Color, opacity: f32) -> Color {
        let opacity = opacity.clamp(0.0, 1.0);
        match (color, self.background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let mix = |c: u8, base: u8| {
                    (base as f32 + (c as f32 - base as f32) * opacity).round() as u8
                };
                Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
            }
            _ if opacity >= 0.5 => color,
            _ => self.muted,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("folio LIGHT").name, "Folio Light");
        assert_eq!(Theme::by_name("Terminal").name, "Terminal");
        assert_eq!(Theme::by_name("nope").name, "Folio Dark");
    }

    #[test]
    fn test_every_listed_name_resolves() {
        for name in Theme::NAMES {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }

    #[test]
    fn test_fade_rgb_blends_toward_background() {
        let theme = Theme::dark();
        assert_eq!(theme.fade(theme.accent, 1.0), theme.accent);
        assert_eq!(theme.fade(theme.accent, 0.0), theme.background);
    }

    #[test]
    fn test_fade_ansi_thresholds() {
        let theme = Theme::terminal();
        assert_eq!(theme.fade(Color::Cyan, 0.8), Color::Cyan);
        assert_eq!(theme.fade(Color::Cyan, 0.2), Color::DarkGray);
    }
}
