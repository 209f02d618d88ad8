use std::{cell::RefCell, collections::HashMap};

use super::RecordBackend;
use crate::{errors::SocialResult, keys::Collection};

/// Process-local documents. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: RefCell<HashMap<Collection, Vec<u8>>>,
}

impl RecordBackend for MemoryBackend {
    fn read(&self, collection: Collection) -> SocialResult<Option<Vec<u8>>> {
        Ok(self.documents.borrow().get(&collection).cloned())
    }

    fn write(&self, collection: Collection, document: &[u8]) -> SocialResult<()> {
        self.documents.borrow_mut().insert(collection, document.to_vec());
        Ok(())
    }

    fn location(&self, collection: Collection) -> String {
        format!("memory:{collection}")
    }
}
