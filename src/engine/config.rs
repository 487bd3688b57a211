// Configuration for the highlighting pipeline and the terminal viewer.
// Defaults follow the playground's editor: `token-` class names, a trailing
// newline after the markup and two-column tabs.

/// Markup renderer settings
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightConfig {
    /// Prefix of the class attribute on each wrapper element (default "token-")
    pub class_prefix: String,

    /// Append a final newline so the last line of the overlay keeps its height
    pub trailing_newline: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            class_prefix: "token-".to_string(),
            trailing_newline: true,
        }
    }
}

/// Terminal viewer settings
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Columns per tab stop when expanding `\t` (default 2)
    pub tab_width: usize,

    /// Lines moved by a single scroll key (default 1)
    pub scroll_step: usize,

    /// Lines moved by PageUp/PageDown (default 10)
    pub page_step: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tab_width: 2,
            scroll_step: 1,
            page_step: 10,
        }
    }
}

/// Master configuration combining all shadepad settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub highlight: HighlightConfig,
    pub view: ViewConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_defaults() {
        let config = HighlightConfig::default();
        assert_eq!(config.class_prefix, "token-");
        assert!(config.trailing_newline);
    }

    #[test]
    fn test_view_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.tab_width, 2);
        assert_eq!(config.scroll_step, 1);
        assert_eq!(config.page_step, 10);
    }

    #[test]
    fn test_config_combines_sections() {
        let config = Config::default();
        assert_eq!(config.highlight, HighlightConfig::default());
        assert_eq!(config.view, ViewConfig::default());
    }
}
