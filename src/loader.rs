use std::fs;
use std::io;
use std::ops::Deref;
use std::path::Path;

use crate::error::LoadError;

/// Program text loaded from disk. Read-only for the whole run and released
/// when dropped, whichever way the run ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    bytes: Box<[u8]>,
}

impl Program {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Deref for Program {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Program {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes: bytes.into_boxed_slice() }
    }
}

/// Read the whole file at `path` into an owned buffer.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound { path: path.to_path_buf() },
        _ => LoadError::Unreadable { path: path.to_path_buf(), source },
    })?;

    if bytes.is_empty() {
        return Err(LoadError::EmptyProgram { path: path.to_path_buf() });
    }

    log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(Program::from(bytes))
}
