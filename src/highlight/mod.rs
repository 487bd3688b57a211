pub mod html;
pub mod terminal;

pub use html::{escape_html, render, render_plain, render_with};
pub use terminal::to_lines;
