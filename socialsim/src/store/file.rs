use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::RecordBackend;
use crate::{
    errors::{SocialError, SocialResult},
    keys::{Collection, KeyContext},
};

/// One JSON file per collection inside a data directory.
///
/// Writes go straight to the target file. A crash mid-write can leave a
/// truncated document behind, which the next load reports as corrupt.
#[derive(Debug, Clone)]
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(KeyContext::file_name(collection))
    }
}

impl RecordBackend for FileBackend {
    fn read(&self, collection: Collection) -> SocialResult<Option<Vec<u8>>> {
        let path = self.path(collection);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SocialError::Storage {
                location: path.display().to_string(),
                source,
            }),
        }
    }

    fn write(&self, collection: Collection, document: &[u8]) -> SocialResult<()> {
        fs::create_dir_all(&self.data_dir).map_err(|source| SocialError::Storage {
            location: self.data_dir.display().to_string(),
            source,
        })?;
        let path = self.path(collection);
        fs::write(&path, document).map_err(|source| SocialError::Storage {
            location: path.display().to_string(),
            source,
        })
    }

    fn location(&self, collection: Collection) -> String {
        self.path(collection).display().to_string()
    }
}
