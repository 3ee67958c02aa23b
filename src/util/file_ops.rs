// File Operations for RSA key files
// Handles reading and writing key files in the text key format

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rsa::{self, RsaError, RsaKey};

/// Errors that can occur during key file operations
#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Key {
        path: PathBuf,
        #[source]
        source: RsaError,
    },
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// Which half of a key a file is read as
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Public,
    Private,
}

/// Read entire file into a string
pub fn read_file(path: &Path) -> FileResult<String> {
    fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write data to file
pub fn write_file(path: &Path, data: &str) -> FileResult<()> {
    fs::write(path, data).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a key file as a public or private key
pub fn load_key(path: &Path, kind: KeyKind) -> FileResult<RsaKey> {
    let text = read_file(path)?;
    let parsed = match kind {
        KeyKind::Public => rsa::read_public(&text),
        KeyKind::Private => rsa::read_private(&text),
    };
    parsed.map_err(|source| FileError::Key {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a key file, private or public form
pub fn save_key(path: &Path, key: &RsaKey, kind: KeyKind) -> FileResult<()> {
    let serialized = match kind {
        KeyKind::Public => rsa::write_public(key),
        KeyKind::Private => rsa::write_private(key),
    };
    let text = serialized.map_err(|source| FileError::Key {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, &text)
}
