//! JSON document persistence shared by baselines and reports
//!
//! Documents are read whole and written whole. Reads hold the file only for
//! the duration of the call; writes go through [`FileSystem::write_atomic`],
//! so a failed serialization or write never leaves a truncated file behind.

use crate::error::{BundleSizeError, DocumentKind};
use crate::infra::FileSystem;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::Path;

/// Read and parse a JSON document
///
/// # Errors
///
/// - [`BundleSizeError::DocumentNotFound`] if `path` does not exist
/// - [`BundleSizeError::MalformedDocument`] if it is not valid JSON of the expected shape
/// - [`BundleSizeError::Io`] for any other read failure
pub fn load_json<T, FS>(fs: &FS, path: &Path, kind: DocumentKind) -> Result<T, BundleSizeError>
where
    T: DeserializeOwned,
    FS: FileSystem,
{
    let contents = fs.read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BundleSizeError::DocumentNotFound {
            kind,
            path: path.to_path_buf(),
        },
        io::ErrorKind::InvalidData => BundleSizeError::MalformedDocument {
            kind,
            path: path.to_path_buf(),
            reason: "file is not valid UTF-8".to_string(),
        },
        _ => BundleSizeError::Io {
            context: format!("reading {}", path.display()),
            source: e,
        },
    })?;

    serde_json::from_str(&contents).map_err(|e| BundleSizeError::MalformedDocument {
        kind,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Serialize a document as pretty JSON and replace `path` with it
pub fn save_json<T, FS>(fs: &FS, path: &Path, document: &T) -> Result<(), BundleSizeError>
where
    T: Serialize,
    FS: FileSystem,
{
    let mut contents = serde_json::to_string_pretty(document).map_err(|e| BundleSizeError::Io {
        context: format!("serializing {}", path.display()),
        source: io::Error::other(e),
    })?;
    contents.push('\n');

    fs.write_atomic(path, contents)
        .map_err(|e| BundleSizeError::Io {
            context: format!("writing {}", path.display()),
            source: e,
        })
}
