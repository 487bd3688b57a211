use crate::app::{App, AppEvent, AppMode, PaneRenderState};
use crate::glsl::tokenize;
use crate::highlight::to_lines;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

const HINT: &str = " q quit  Tab switch pane  j/k scroll  PgUp/PgDn page  g/G top/bottom ";

/// Map a key press to the viewer event it triggers.
pub fn key_to_event(code: KeyCode) -> AppEvent {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
        KeyCode::Tab | KeyCode::BackTab => AppEvent::SwitchFocus,
        KeyCode::Char('j') | KeyCode::Down => AppEvent::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => AppEvent::ScrollUp,
        KeyCode::PageDown => AppEvent::PageDown,
        KeyCode::PageUp => AppEvent::PageUp,
        KeyCode::Char('g') | KeyCode::Home => AppEvent::Top,
        KeyCode::Char('G') | KeyCode::End => AppEvent::Bottom,
        _ => AppEvent::None,
    }
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    // Dropped after `terminal`, restoring the screen last.
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<AppMode> {
        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                tracing::debug!("viewer closed");
                return Ok(AppMode::Quit);
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_event(key_to_event(key.code));
                }
                Event::Resize(..) => {}
                _ => continue,
            }

            self.render_frame(app)?;
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        let theme = self.theme;

        self.terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);

            render_pane(frame, panes[0], &state.vertex, state.tab_width, &theme);
            render_pane(frame, panes[1], &state.fragment, state.tab_width, &theme);

            let hint = Paragraph::new(Line::from(Span::styled(
                HINT,
                theme.border_style(false),
            )))
            .style(theme.pane_style());
            frame.render_widget(hint, rows[1]);
        })?;

        Ok(())
    }
}

fn render_pane(
    frame: &mut Frame<'_>,
    area: Rect,
    pane: &PaneRenderState<'_>,
    tab_width: usize,
    theme: &Theme,
) {
    let tokens = tokenize(pane.text);
    let lines = to_lines(&tokens, theme, tab_width);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", pane.title, pane.origin))
        .border_style(theme.border_style(pane.focused))
        .style(theme.pane_style());

    let scroll = u16::try_from(pane.scroll).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.pane_style())
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
