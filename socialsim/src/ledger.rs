use chrono::Local;
use log::{info, warn};
use rand::{Rng, seq::SliceRandom};

use crate::{
    errors::SocialResult,
    keys::Collection,
    store::RecordStore,
    types::{LedgerEntry, Post, PostId, PostLedgerRecord},
};

/// Format of persisted post timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Current local wall-clock time rendered with [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Posts keyed by sequential id.
#[derive(Clone, Copy)]
pub struct PostLedger<'a> {
    store: &'a RecordStore,
}

impl<'a> PostLedger<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    pub fn list_posts(&self) -> SocialResult<PostLedgerRecord> {
        self.store.load(Collection::Posts)
    }

    pub fn get_post(&self, post_id: PostId) -> SocialResult<Option<Post>> {
        Ok(self.list_posts()?.remove(&post_id))
    }

    pub fn create_post(&self, username: &str, content: &str) -> SocialResult<LedgerEntry> {
        self.create_post_at(username, content, now_timestamp())
    }

    /// Appends a post under id `count + 1`.
    ///
    /// Ids derive from the current count, so they stay unique only while posts are
    /// never removed. `username` is stored as given.
    pub fn create_post_at(&self, username: &str, content: &str, time: impl Into<String>) -> SocialResult<LedgerEntry> {
        let mut posts = self.list_posts()?;
        let id = PostId::new(posts.len() as u64 + 1);
        let post = Post {
            username: username.to_string(),
            content: content.to_string(),
            created_at: time.into(),
        };
        if posts.insert(id, post.clone()).is_some() {
            warn!("post {id} already existed and was overwritten; the ledger has gaps");
        }
        self.store.save(Collection::Posts, &posts)?;
        info!("user {username} published post {id}");
        Ok(LedgerEntry { id, post })
    }

    /// Posts authored by `username`, in ledger order.
    pub fn posts_by(&self, username: &str) -> SocialResult<Vec<LedgerEntry>> {
        Ok(self
            .list_posts()?
            .into_iter()
            .filter(|(_, post)| post.username == username)
            .map(|(id, post)| LedgerEntry { id, post })
            .collect())
    }

    /// Up to `count` distinct post ids in random order.
    pub fn sample_ids<R>(&self, count: usize, rng: &mut R) -> SocialResult<Vec<PostId>>
    where
        R: Rng + ?Sized,
    {
        let ids: Vec<PostId> = self.list_posts()?.into_keys().collect();
        Ok(ids.choose_multiple(rng, count).copied().collect())
    }
}
