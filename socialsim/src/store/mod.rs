//! Whole-document record store.
//!
//! Each collection is one document. `load` reads and parses the whole thing,
//! `save` serializes and replaces the whole thing. There is no locking and no
//! version check: the simulator runs one operation at a time in one process and
//! the last write wins.

mod file;
mod memory;
#[cfg(feature = "redis")]
mod redis_backend;

pub use file::FileBackend;
pub use memory::MemoryBackend;
#[cfg(feature = "redis")]
pub use redis_backend::RedisBackend;

use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::ser::PrettyFormatter;

use crate::{
    config::{BackendKind, StoreConfig},
    errors::{SocialError, SocialResult},
    keys::Collection,
};

/// Raw byte storage for whole collection documents.
pub trait RecordBackend {
    /// Returns the stored document, or `None` if the collection was never written.
    fn read(&self, collection: Collection) -> SocialResult<Option<Vec<u8>>>;

    /// Replaces the stored document.
    fn write(&self, collection: Collection, document: &[u8]) -> SocialResult<()>;

    /// Human-readable location of the document, used in logs and errors.
    fn location(&self, collection: Collection) -> String;
}

/// Typed load/save of collections on top of a [`RecordBackend`].
pub struct RecordStore {
    backend: Box<dyn RecordBackend>,
}

impl RecordStore {
    pub fn new(backend: impl RecordBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Builds the backend selected by `config`.
    pub fn from_config(config: &StoreConfig) -> SocialResult<Self> {
        match config.store.backend {
            BackendKind::File => Ok(Self::new(FileBackend::new(config.data_dir()?))),
            BackendKind::Memory => Ok(Self::in_memory()),
            #[cfg(feature = "redis")]
            BackendKind::Redis => {
                let backend = RedisBackend::connect(&config.redis_url()?, config.redis.prefix.clone())?;
                Ok(Self::new(backend))
            }
            #[cfg(not(feature = "redis"))]
            BackendKind::Redis => Err(SocialError::config(
                "the redis backend requires building with the `redis` feature",
            )),
        }
    }

    /// Loads a collection, or its empty default if it has never been written.
    pub fn load<T>(&self, collection: Collection) -> SocialResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(document) = self.backend.read(collection)? else {
            debug!("{collection} record absent at {}", self.location(collection));
            return Ok(T::default());
        };
        debug!(
            "loaded {collection} record ({} bytes) from {}",
            document.len(),
            self.location(collection)
        );
        serde_json::from_slice(&document).map_err(|source| SocialError::StorageCorrupt {
            collection,
            location: self.location(collection),
            source,
        })
    }

    /// Serializes a collection and replaces whatever was stored before.
    pub fn save<T>(&self, collection: Collection, value: &T) -> SocialResult<()>
    where
        T: Serialize + ?Sized,
    {
        let document = to_document(value).map_err(|source| SocialError::Serialize { collection, source })?;
        self.backend.write(collection, &document)?;
        debug!(
            "saved {collection} record ({} bytes) to {}",
            document.len(),
            self.location(collection)
        );
        Ok(())
    }

    /// Whether the collection has ever been written.
    pub fn exists(&self, collection: Collection) -> SocialResult<bool> {
        Ok(self.backend.read(collection)?.is_some())
    }

    pub fn location(&self, collection: Collection) -> String {
        self.backend.location(collection)
    }
}

/// Pretty JSON with four-space indentation.
fn to_document<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn missing_record_loads_as_empty_mapping() {
        let store = RecordStore::in_memory();
        let users: BTreeMap<String, u64> = store.load(Collection::Users).unwrap();
        assert!(users.is_empty());
        assert!(!store.exists(Collection::Users).unwrap());
    }

    #[test]
    fn save_replaces_the_whole_document() {
        let store = RecordStore::in_memory();
        let first = BTreeMap::from([("a".to_string(), 1u64), ("b".to_string(), 2)]);
        store.save(Collection::Posts, &first).unwrap();

        let second = BTreeMap::from([("c".to_string(), 3u64)]);
        store.save(Collection::Posts, &second).unwrap();

        let loaded: BTreeMap<String, u64> = store.load(Collection::Posts).unwrap();
        assert_eq!(loaded, second);
        assert!(store.exists(Collection::Posts).unwrap());
    }

    #[test]
    fn non_mapping_document_is_corrupt() {
        let backend = MemoryBackend::default();
        backend.write(Collection::Reactions, b"[1, 2, 3]").unwrap();
        let store = RecordStore::new(backend);

        let err = store.load::<BTreeMap<String, u64>>(Collection::Reactions).unwrap_err();
        assert!(matches!(
            err,
            SocialError::StorageCorrupt {
                collection: Collection::Reactions,
                ..
            }
        ));
    }

    #[test]
    fn documents_use_four_space_indent() {
        let document = to_document(&BTreeMap::from([("k", 1)])).unwrap();
        assert_eq!(String::from_utf8(document).unwrap(), "{\n    \"k\": 1\n}");
    }

    #[cfg(not(feature = "redis"))]
    #[test]
    fn redis_backend_needs_feature() {
        let mut config = StoreConfig::default();
        config.store.backend = BackendKind::Redis;
        assert!(matches!(RecordStore::from_config(&config), Err(SocialError::Config { .. })));
    }
}
