use log::{debug, info};

use crate::{
    errors::SocialResult,
    keys::Collection,
    store::RecordStore,
    types::{Comment, PostId, ReactionIndexRecord, ReactionRecord},
};

/// Likes and comments per post.
///
/// Post ids are not checked against the ledger; callers restrict selection to
/// existing posts.
#[derive(Clone, Copy)]
pub struct ReactionIndex<'a> {
    store: &'a RecordStore,
}

impl<'a> ReactionIndex<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    pub fn list_reactions(&self) -> SocialResult<ReactionIndexRecord> {
        self.store.load(Collection::Reactions)
    }

    /// Records a like. Returns `false`, without writing, if `username` already liked the post.
    pub fn add_like(&self, post_id: PostId, username: &str) -> SocialResult<bool> {
        let mut index = self.list_reactions()?;
        let record = index.entry(post_id).or_default();
        if record.has_liked(username) {
            debug!("{username} already liked post {post_id}");
            return Ok(false);
        }
        record.likes.push(username.to_string());
        self.store.save(Collection::Reactions, &index)?;
        info!("{username} liked post {post_id}");
        Ok(true)
    }

    pub fn add_comment(&self, post_id: PostId, username: &str, text: &str) -> SocialResult<()> {
        let mut index = self.list_reactions()?;
        index.entry(post_id).or_default().comments.push(Comment {
            username: username.to_string(),
            text: text.to_string(),
        });
        self.store.save(Collection::Reactions, &index)?;
        info!("{username} commented on post {post_id}");
        Ok(())
    }

    pub fn get_reactions(&self, post_id: PostId) -> SocialResult<ReactionRecord> {
        Ok(self.list_reactions()?.remove(&post_id).unwrap_or_default())
    }
}
