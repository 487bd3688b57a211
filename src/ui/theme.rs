use crate::glsl::TokenKind;
use ratatui::style::{Color, Modifier, Style};

/// Midnight theme colors for the terminal viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dimmed: Color,
    pub border_focused: Color,
    pub comment: Color,
    pub string: Color,
    pub number: Color,
    pub keyword: Color,
    pub type_name: Color,
    pub builtin: Color,
    pub preprocessor: Color,
    pub operator: Color,
    pub punctuation: Color,
    pub unknown: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),      // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),         // #A9B1D6 Light Blue
            dimmed: Color::Rgb(100, 110, 150),       // #646E96 Dimmed Blue
            border_focused: Color::Rgb(122, 162, 247), // #7AA2F7
            comment: Color::Rgb(86, 95, 137),        // #565F89
            string: Color::Rgb(158, 206, 106),       // #9ECE6A
            number: Color::Rgb(255, 158, 100),       // #FF9E64
            keyword: Color::Rgb(187, 154, 247),      // #BB9AF7
            type_name: Color::Rgb(42, 195, 222),     // #2AC3DE
            builtin: Color::Rgb(122, 162, 247),      // #7AA2F7
            preprocessor: Color::Rgb(247, 118, 142), // #F7768E Coral Red
            operator: Color::Rgb(137, 221, 255),     // #89DDFF
            punctuation: Color::Rgb(169, 177, 214),
            unknown: Color::Rgb(219, 75, 75),        // #DB4B4B
        }
    }

    /// Style for a token of the given kind.
    pub fn style_for(&self, kind: TokenKind) -> Style {
        let base = Style::default().bg(self.background);
        match kind {
            TokenKind::Whitespace | TokenKind::Identifier => base.fg(self.text),
            TokenKind::Comment => base.fg(self.comment).add_modifier(Modifier::ITALIC),
            TokenKind::String => base.fg(self.string),
            TokenKind::Number => base.fg(self.number),
            TokenKind::Keyword => base.fg(self.keyword).add_modifier(Modifier::BOLD),
            TokenKind::Type => base.fg(self.type_name),
            TokenKind::Builtin => base.fg(self.builtin),
            TokenKind::Preprocessor => base.fg(self.preprocessor),
            TokenKind::Operator => base.fg(self.operator),
            TokenKind::Punctuation => base.fg(self.punctuation),
            TokenKind::Unknown => base.fg(self.unknown).add_modifier(Modifier::UNDERLINED),
        }
    }

    pub fn pane_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.border_focused } else { self.dimmed };
        Style::default().fg(color).bg(self.background)
    }
}
