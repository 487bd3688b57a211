use super::{LoadError, LoadedShader, ShaderSource};
use std::fs;
use std::path::Path;

/// Load shader text from a file on disk.
///
/// An empty file is a valid (empty) shader; only missing files, read
/// failures and non UTF-8 content are errors.
pub fn load(path: &Path) -> Result<LoadedShader, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let origin = ShaderSource::File(path.to_path_buf()).origin();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        origin: origin.clone(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding(origin.clone()))?;

    Ok(LoadedShader { text, origin })
}
