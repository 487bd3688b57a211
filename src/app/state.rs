use crate::input::LoadedShader;

/// Which of the two shader panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Vertex,
    Fragment,
}

impl Pane {
    pub fn other(self) -> Pane {
        match self {
            Pane::Vertex => Pane::Fragment,
            Pane::Fragment => Pane::Vertex,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pane::Vertex => "Vertex shader",
            Pane::Fragment => "Fragment shader",
        }
    }
}

/// Shader text shown in one pane plus its scroll position.
///
/// The text is kept as loaded; tokens are recomputed on every frame.
pub struct ShaderPane {
    pub shader: LoadedShader,
    pub scroll: usize,
}

impl ShaderPane {
    pub fn new(shader: LoadedShader) -> Self {
        Self { shader, scroll: 0 }
    }

    /// Number of display lines, counting a trailing empty line after a final `\n`.
    pub fn line_count(&self) -> usize {
        self.shader.text.split('\n').count()
    }

    fn max_scroll(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}
