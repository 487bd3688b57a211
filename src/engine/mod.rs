pub mod config;
pub mod error;

use crate::glsl::tokenize;
use crate::highlight::render_with;

pub use config::{Config, HighlightConfig, ViewConfig};
pub use error::CliError;

/// Tokenizes and renders `source` to overlay markup with default settings.
///
/// This is the whole contract the editor overlay relies on: a pure function
/// from buffer text to markup, re-run on every edit.
pub fn highlight_glsl(source: &str) -> String {
    highlight_glsl_with(source, &HighlightConfig::default())
}

pub fn highlight_glsl_with(source: &str, config: &HighlightConfig) -> String {
    let tokens = tokenize(source);
    let markup = render_with(&tokens, config);
    tracing::debug!(
        tokens = tokens.len(),
        markup_bytes = markup.len(),
        "highlighted glsl source"
    );
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_glsl_uses_default_config() {
        assert_eq!(
            highlight_glsl("if"),
            "<span class=\"token-keyword\">if</span>\n"
        );
    }

    #[test]
    fn test_highlight_glsl_is_deterministic() {
        let source = "uniform float uTime;\nvoid main() { gl_FragColor = vec4(sin(uTime)); }";
        assert_eq!(highlight_glsl(source), highlight_glsl(source));
    }

    #[test]
    fn test_highlight_glsl_with_custom_config() {
        let config = HighlightConfig {
            class_prefix: "glsl-".to_string(),
            trailing_newline: false,
        };
        assert_eq!(
            highlight_glsl_with("x", &config),
            "<span class=\"glsl-identifier\">x</span>"
        );
    }
}
