/// Responsive breakpoints for the page layout.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: phone-sized; single column, no pointer effects
    Compact,
    /// 60-99 cols: two-column project grid
    Normal,
    /// 100-139 cols: three-column project grid
    Wide,
    /// 140+ cols: content width capped and centered
    UltraWide,
}

/// Widest the page content is allowed to get
pub const MAX_CONTENT_WIDTH: u16 = 120;

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    pub fn is_compact(&self) -> bool {
        *self == Breakpoint::Compact
    }

    /// Project cards per row
    pub fn gallery_columns(&self) -> u16 {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Normal => 2,
            Breakpoint::Wide | Breakpoint::UltraWide => 3,
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// Content column width and its left margin for a terminal width
pub fn content_column(width: u16) -> (u16, u16) {
    let content = width.min(MAX_CONTENT_WIDTH);
    (content, (width - content) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(139), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::UltraWide);
    }

    #[test]
    fn at_least_comparisons() {
        let wide = Breakpoint::Wide;
        assert!(wide.at_least(Breakpoint::Compact));
        assert!(wide.at_least(Breakpoint::Normal));
        assert!(wide.at_least(Breakpoint::Wide));
        assert!(!wide.at_least(Breakpoint::UltraWide));
    }

    #[test]
    fn gallery_columns_grow_with_width() {
        assert_eq!(Breakpoint::from_width(50).gallery_columns(), 1);
        assert_eq!(Breakpoint::from_width(80).gallery_columns(), 2);
        assert_eq!(Breakpoint::from_width(200).gallery_columns(), 3);
    }

    #[test]
    fn content_is_centered_when_capped() {
        assert_eq!(content_column(80), (80, 0));
        assert_eq!(content_column(160), (MAX_CONTENT_WIDTH, 20));
    }
}
