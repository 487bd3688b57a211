use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{PaneRenderState, RenderState};
use super::state::{Pane, ShaderPane};
use crate::engine::config::ViewConfig;
use crate::input::LoadedShader;

/// Read-only playground holding the vertex and fragment shader panes.
pub struct App {
    pub mode: AppMode,
    pub focused: Pane,
    vertex: ShaderPane,
    fragment: ShaderPane,
    config: ViewConfig,
}

impl App {
    pub fn new(vertex: LoadedShader, fragment: LoadedShader, config: ViewConfig) -> Self {
        Self {
            mode: AppMode::Viewing,
            focused: Pane::Vertex,
            vertex: ShaderPane::new(vertex),
            fragment: ShaderPane::new(fragment),
            config,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn pane(&self, which: Pane) -> &ShaderPane {
        match which {
            Pane::Vertex => &self.vertex,
            Pane::Fragment => &self.fragment,
        }
    }

    fn focused_pane_mut(&mut self) -> &mut ShaderPane {
        match self.focused {
            Pane::Vertex => &mut self.vertex,
            Pane::Fragment => &mut self.fragment,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        let step = self.config.scroll_step;
        let page = self.config.page_step;

        match event {
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::SwitchFocus => self.focused = self.focused.other(),
            AppEvent::ScrollDown => self.focused_pane_mut().scroll_down(step),
            AppEvent::ScrollUp => self.focused_pane_mut().scroll_up(step),
            AppEvent::PageDown => self.focused_pane_mut().scroll_down(page),
            AppEvent::PageUp => self.focused_pane_mut().scroll_up(page),
            AppEvent::Top => self.focused_pane_mut().scroll_to_top(),
            AppEvent::Bottom => self.focused_pane_mut().scroll_to_bottom(),
            AppEvent::None => {}
        }
    }

    pub fn get_render_state(&self) -> RenderState<'_> {
        RenderState {
            mode: self.mode,
            vertex: PaneRenderState::from_pane(Pane::Vertex, &self.vertex, self.focused),
            fragment: PaneRenderState::from_pane(Pane::Fragment, &self.fragment, self.focused),
            tab_width: self.config.tab_width,
        }
    }
}
