use crate::app::mode::AppMode;
use crate::app::state::{Pane, ShaderPane};

/// What the terminal needs to draw one pane.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneRenderState<'a> {
    pub title: &'static str,
    pub origin: &'a str,
    pub text: &'a str,
    pub scroll: usize,
    pub focused: bool,
}

impl<'a> PaneRenderState<'a> {
    pub fn from_pane(which: Pane, pane: &'a ShaderPane, focused: Pane) -> Self {
        Self {
            title: which.title(),
            origin: &pane.shader.origin,
            text: &pane.shader.text,
            scroll: pane.scroll,
            focused: which == focused,
        }
    }
}

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState<'a> {
    pub mode: AppMode,
    pub vertex: PaneRenderState<'a>,
    pub fragment: PaneRenderState<'a>,
    pub tab_width: usize,
}
