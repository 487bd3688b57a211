pub mod command;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

pub use command::{parse_args, run_batch, Command, Invocation, USAGE};
pub use terminal::{key_to_event, TuiManager};
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
