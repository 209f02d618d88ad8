use std::cell::RefCell;

use log::debug;
use redis::Commands;

use super::RecordBackend;
use crate::{
    errors::SocialResult,
    keys::{Collection, KeyContext},
};

/// One Redis string key per collection, named `{prefix}:{collection}`.
pub struct RedisBackend {
    conn: RefCell<redis::Connection>,
    prefix: String,
}

impl RedisBackend {
    /// Opens a blocking connection to the server at `url`.
    pub fn connect(url: &str, prefix: impl Into<String>) -> SocialResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_connection()?;
        Ok(Self::new(conn, prefix))
    }

    pub fn new(conn: redis::Connection, prefix: impl Into<String>) -> Self {
        Self {
            conn: RefCell::new(conn),
            prefix: prefix.into(),
        }
    }

    fn key(&self, collection: Collection) -> String {
        KeyContext::new(&self.prefix).record(collection)
    }

    /// Deletes every collection key under this prefix (for test cleanup).
    pub fn clear(&self) -> SocialResult<u64> {
        let keys: Vec<String> = Collection::ALL.iter().map(|collection| self.key(*collection)).collect();
        let deleted: u64 = self.conn.borrow_mut().del(&keys)?;
        debug!("deleted {deleted} keys under prefix {}", self.prefix);
        Ok(deleted)
    }
}

impl RecordBackend for RedisBackend {
    fn read(&self, collection: Collection) -> SocialResult<Option<Vec<u8>>> {
        let document: Option<Vec<u8>> = self.conn.borrow_mut().get(self.key(collection))?;
        Ok(document)
    }

    fn write(&self, collection: Collection, document: &[u8]) -> SocialResult<()> {
        let _: () = self.conn.borrow_mut().set(self.key(collection), document)?;
        Ok(())
    }

    fn location(&self, collection: Collection) -> String {
        format!("redis key {}", self.key(collection))
    }
}
