/// Application events produced by the viewer's key handling
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppEvent {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    SwitchFocus,
    Quit,
    None,
}
