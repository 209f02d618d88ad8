//! Client module: the one store handle the rest of the program passes around.
//!
//! # Example
//! ```
//! use socialsim::Client;
//!
//! let client = Client::in_memory();
//! let post = client.posts().create_post("alice", "hello").unwrap();
//! assert!(client.reactions().add_like(post.id, "bob").unwrap());
//! assert_eq!(client.analytics().user_analytics("alice").unwrap().total_likes, 1);
//! ```

use crate::{
    analytics::AnalyticsAggregator,
    config::StoreConfig,
    directory::UserDirectory,
    errors::SocialResult,
    ledger::PostLedger,
    reactions::ReactionIndex,
    seed::{SeedReport, seed_defaults},
    store::RecordStore,
};

/// Owns the record store and hands out the domain components borrowing it.
pub struct Client {
    store: RecordStore,
}

impl Client {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(RecordStore::in_memory())
    }

    /// Build a client from configuration, opening the configured backend.
    pub fn from_config(config: &StoreConfig) -> SocialResult<Self> {
        RecordStore::from_config(config).map(Self::new)
    }

    pub fn users(&self) -> UserDirectory<'_> {
        UserDirectory::new(&self.store)
    }

    pub fn posts(&self) -> PostLedger<'_> {
        PostLedger::new(&self.store)
    }

    pub fn reactions(&self) -> ReactionIndex<'_> {
        ReactionIndex::new(&self.store)
    }

    pub fn analytics(&self) -> AnalyticsAggregator<'_> {
        AnalyticsAggregator::new(&self.store)
    }

    pub fn seed_defaults(&self) -> SocialResult<SeedReport> {
        seed_defaults(&self.store)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
