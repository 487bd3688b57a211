use super::{LoadError, LoadedShader, ShaderSource};
use std::io::{self, Read};

/// Load shader text from standard input until EOF.
pub fn load() -> Result<LoadedShader, LoadError> {
    read_from(io::stdin().lock())
}

fn read_from<R: Read>(mut reader: R) -> Result<LoadedShader, LoadError> {
    let origin = ShaderSource::Stdin.origin();
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Io {
            origin: origin.clone(),
            source,
        })?;

    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding(origin.clone()))?;
    Ok(LoadedShader { text, origin })
}
