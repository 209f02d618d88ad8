use colored::Color;
use once_cell::sync::Lazy;

/// Colors by role: message kinds, headings, menus and help text.
pub struct Palette {
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    /// Menu titles, help headings and usage lines.
    pub heading: Color,
    /// Sub-headings and example commands.
    pub accent: Color,
    pub muted: Color,
    /// Menu tokens and environment variable names.
    pub token: Color,
    pub label: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Blue,
            heading: Color::Cyan,
            accent: Color::Magenta,
            muted: Color::BrightBlack,
            token: Color::BrightCyan,
            label: Color::White,
        }
    }
}

pub static PALETTE: Lazy<Palette> = Lazy::new(Palette::default);

/// Glyphs prefixed to messages and reaction counts.
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub arrow: &'static str,
    pub bullet: &'static str,
    pub like: &'static str,
    pub comment: &'static str,
}

pub const GLYPHS: Glyphs = Glyphs {
    success: "✓",
    error: "✗",
    warning: "⚠",
    info: "ℹ",
    arrow: "→",
    bullet: "•",
    like: "👍",
    comment: "💬",
};
