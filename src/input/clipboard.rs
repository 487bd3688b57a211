use super::{LoadError, LoadedShader, ShaderSource};

/// Load shader text from the system clipboard.
pub fn load() -> Result<LoadedShader, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    from_text(text)
}

fn from_text(text: String) -> Result<LoadedShader, LoadError> {
    let origin = ShaderSource::Clipboard.origin();
    if text.trim().is_empty() {
        return Err(LoadError::EmptySource(origin));
    }
    Ok(LoadedShader { text, origin })
}
