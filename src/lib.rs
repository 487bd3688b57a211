//! GLSL syntax highlighting for the shader playground.
//!
//! The core is [`glsl::tokenize`] plus [`highlight::render`]: a lossless
//! lexer and a markup renderer the editor overlay calls on every edit. The
//! remaining modules are the command-line shell around them.

pub mod app;
pub mod engine;
pub mod glsl;
pub mod highlight;
pub mod input;
pub mod ui;

pub use engine::{highlight_glsl, highlight_glsl_with};
pub use glsl::{tokenize, Token, TokenKind};
pub use highlight::render;
