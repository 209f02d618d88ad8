//! socialsim core library.
//!
//! Persistence and consistency layer of a console social-network simulator:
//! a whole-document record store plus the user directory, post ledger,
//! reaction index and analytics built on top of it.

pub mod analytics;
pub mod client;
pub mod config;
pub mod directory;
pub mod errors;
pub mod keys;
pub mod ledger;
pub mod reactions;
pub mod seed;
pub mod store;
pub mod types;
pub mod validators;

pub use analytics::AnalyticsAggregator;
pub use client::Client;
pub use config::{BackendKind, StoreConfig};
pub use directory::UserDirectory;
pub use errors::*;
pub use keys::Collection;
pub use ledger::PostLedger;
pub use reactions::ReactionIndex;
pub use store::{FileBackend, MemoryBackend, RecordBackend, RecordStore};
pub use types::{
    Comment, LedgerEntry, Post, PostEngagement, PostId, ProfileUpdate, ReactionRecord, SKILL_COUNT, Skills, User,
    UserAnalytics,
};

#[cfg(feature = "redis")]
pub use store::RedisBackend;
