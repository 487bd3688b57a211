//! Markup renderer for the editor overlay.
//!
//! Every non-whitespace token becomes `<span class="token-{kind}">…</span>`;
//! whitespace is emitted escaped but unwrapped so indentation and line breaks
//! line up with the raw text layer underneath.

use crate::engine::config::HighlightConfig;
use crate::glsl::Token;

/// Escapes `& < > " '` for safe inclusion in HTML text or attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    push_escaped(&mut escaped, text);
    escaped
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Renders tokens with the default `token-` classes and trailing newline.
pub fn render(tokens: &[Token<'_>]) -> String {
    render_with(tokens, &HighlightConfig::default())
}

pub fn render_with(tokens: &[Token<'_>], config: &HighlightConfig) -> String {
    let mut markup = String::new();

    for token in tokens {
        if token.is_whitespace() {
            push_escaped(&mut markup, token.text);
            continue;
        }

        markup.push_str("<span class=\"");
        push_escaped(&mut markup, &config.class_prefix);
        markup.push_str(token.kind.as_str());
        markup.push_str("\">");
        push_escaped(&mut markup, token.text);
        markup.push_str("</span>");
    }

    if config.trailing_newline {
        markup.push('\n');
    }
    markup
}

/// Unhighlighted fallback: escaped text with `<br />` line breaks.
pub fn render_plain(source: &str) -> String {
    escape_html(source).replace('\n', "<br />")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glsl::{tokenize, TokenKind};

    #[test]
    fn test_escape_html_all_specials() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_escape_html_leaves_plain_text() {
        assert_eq!(escape_html("vec3 color;"), "vec3 color;");
    }

    #[test]
    fn test_empty_input_renders_only_trailing_newline() {
        assert_eq!(render(&[]), "\n");
    }

    #[test]
    fn test_keyword_is_wrapped() {
        let tokens = [Token::new(TokenKind::Keyword, "if")];
        assert_eq!(render(&tokens), "<span class=\"token-keyword\">if</span>\n");
    }

    #[test]
    fn test_whitespace_is_not_wrapped() {
        let tokens = tokenize("a \t\nb");
        assert_eq!(
            render(&tokens),
            "<span class=\"token-identifier\">a</span> \t\n<span class=\"token-identifier\">b</span>\n"
        );
    }

    #[test]
    fn test_operators_are_escaped_inside_spans() {
        let markup = render(&tokenize("<a&b>"));
        assert_eq!(
            markup,
            concat!(
                "<span class=\"token-operator\">&lt;</span>",
                "<span class=\"token-identifier\">a</span>",
                "<span class=\"token-operator\">&amp;</span>",
                "<span class=\"token-identifier\">b</span>",
                "<span class=\"token-operator\">&gt;</span>\n",
            )
        );
    }

    #[test]
    fn test_string_quotes_are_escaped() {
        let markup = render(&tokenize("\"it's\""));
        assert_eq!(markup, "<span class=\"token-string\">&quot;it&#39;s&quot;</span>\n");
    }

    #[test]
    fn test_custom_prefix_without_trailing_newline() {
        let config = HighlightConfig {
            class_prefix: "hl-".to_string(),
            trailing_newline: false,
        };
        let markup = render_with(&tokenize("1.0"), &config);
        assert_eq!(markup, "<span class=\"hl-number\">1.0</span>");
    }

    #[test]
    fn test_class_prefix_is_escaped() {
        let config = HighlightConfig {
            class_prefix: "\"><x".to_string(),
            trailing_newline: false,
        };
        let markup = render_with(&tokenize("x"), &config);
        assert!(markup.starts_with("<span class=\"&quot;&gt;&lt;x"));
    }

    #[test]
    fn test_render_plain_breaks_lines() {
        assert_eq!(render_plain("a<b\nc"), "a&lt;b<br />c");
    }
}
