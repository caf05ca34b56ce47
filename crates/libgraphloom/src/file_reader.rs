use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadContentError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadContentError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

/// Read every file in order and join their contents into one document, so
/// that declarations split across files can reference each other.
pub fn read_concatenated<P: AsRef<Path>>(file_paths: &[P]) -> Result<String> {
    let mut content = String::new();
    for file_path in file_paths {
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(read_content(file_path)?.as_str());
    }
    Ok(content)
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("File at {file_path:?} is not valid UTF-8")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read file at {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Path {0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
