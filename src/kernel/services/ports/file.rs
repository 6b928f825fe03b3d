//! 文件访问契约：持久化层只通过 FileProvider 读写磁盘

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    NotFound(PathBuf),
    NotAFile(PathBuf),
    AlreadyExists(PathBuf),
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FileError::NotAFile(path) => write!(f, "Not a file: {}", path.display()),
            FileError::AlreadyExists(path) => {
                write!(f, "File already exists: {}", path.display())
            }
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FileError {
    fn from(e: std::io::Error) -> Self {
        FileError::Io(e)
    }
}

impl From<serde_json::Error> for FileError {
    fn from(e: serde_json::Error) -> Self {
        FileError::Parse(e.to_string())
    }
}

pub trait FileProvider: Send + Sync {
    fn read_file_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replaces the file's contents in one step; readers never observe a partial write.
    fn write_file_bytes(&self, path: &Path, content: &[u8]) -> Result<()>;

    fn delete_file(&self, path: &Path) -> Result<()>;

    /// Fails with `AlreadyExists` instead of overwriting `to`.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
