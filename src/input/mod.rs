use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub mod clipboard;
pub mod file;
pub mod stdin;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid UTF-8 in {0}")]
    InvalidEncoding(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Nothing to load from {0}")]
    EmptySource(String),
}

/// Where a pane's shader text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderSource {
    File(PathBuf),
    Clipboard,
    Stdin,
}

impl ShaderSource {
    /// Parses a command line source argument.
    ///
    /// - `@@` → clipboard
    /// - `-` → standard input
    /// - `@path` or `path` → file
    pub fn parse(arg: &str) -> Option<ShaderSource> {
        let arg = arg.trim();
        match arg {
            "" | "@" => None,
            "@@" => Some(ShaderSource::Clipboard),
            "-" => Some(ShaderSource::Stdin),
            _ => {
                let path = arg.strip_prefix('@').unwrap_or(arg).trim();
                if path.is_empty() {
                    None
                } else {
                    Some(ShaderSource::File(PathBuf::from(path)))
                }
            }
        }
    }

    pub fn origin(&self) -> String {
        match self {
            ShaderSource::File(path) => format!("file:{}", path.display()),
            ShaderSource::Clipboard => "clipboard".to_string(),
            ShaderSource::Stdin => "stdin".to_string(),
        }
    }
}

/// Shader text together with a label describing where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedShader {
    pub text: String,
    pub origin: String,
}

pub fn load(source: &ShaderSource) -> Result<LoadedShader, LoadError> {
    let loaded = match source {
        ShaderSource::File(path) => file::load(path)?,
        ShaderSource::Clipboard => clipboard::load()?,
        ShaderSource::Stdin => stdin::load()?,
    };
    tracing::info!(origin = %loaded.origin, bytes = loaded.text.len(), "loaded shader source");
    Ok(loaded)
}
