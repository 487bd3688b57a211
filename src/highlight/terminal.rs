use crate::glsl::Token;
use crate::ui::theme::Theme;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Converts a token stream into styled terminal lines.
///
/// Tokens spanning several lines (block comments, whitespace runs) are split
/// at each `\n`. Tabs expand to the next multiple of `tab_width`, measured in
/// display columns, so wide characters keep the following tab stops aligned.
pub fn to_lines(tokens: &[Token<'_>], theme: &Theme, tab_width: usize) -> Vec<Line<'static>> {
    let tab_width = tab_width.max(1);
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut column = 0;

    for token in tokens {
        let style = theme.style_for(token.kind);

        for (i, piece) in token.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::from(std::mem::take(&mut spans)));
                column = 0;
            }

            let mut content = String::with_capacity(piece.len());
            for c in piece.chars() {
                match c {
                    '\t' => {
                        let pad = tab_width - column % tab_width;
                        content.extend(std::iter::repeat(' ').take(pad));
                        column += pad;
                    }
                    '\r' => {}
                    c if c.is_control() => {
                        content.push(char::REPLACEMENT_CHARACTER);
                        column += 1;
                    }
                    c => {
                        content.push(c);
                        column += c.width().unwrap_or(0);
                    }
                }
            }

            if !content.is_empty() {
                spans.push(Span::styled(content, style));
            }
        }
    }

    lines.push(Line::from(spans));
    lines
}
