use crate::{
    errors::SocialResult,
    keys::Collection,
    store::RecordStore,
    types::{PostEngagement, PostLedgerRecord, ReactionIndexRecord, UserAnalytics},
};

/// Read-only engagement figures derived from the post ledger and reaction index.
#[derive(Clone, Copy)]
pub struct AnalyticsAggregator<'a> {
    store: &'a RecordStore,
}

impl<'a> AnalyticsAggregator<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// One row per post authored by `username`, in ascending post id order.
    pub fn post_engagement(&self, username: &str) -> SocialResult<Vec<PostEngagement>> {
        let posts: PostLedgerRecord = self.store.load(Collection::Posts)?;
        let reactions: ReactionIndexRecord = self.store.load(Collection::Reactions)?;

        Ok(posts
            .iter()
            .filter(|(_, post)| post.username == username)
            .map(|(post_id, _)| {
                let record = reactions.get(post_id);
                PostEngagement {
                    post_id: *post_id,
                    likes: record.map_or(0, |record| record.likes.len()),
                    comments: record.map_or(0, |record| record.comments.len()),
                }
            })
            .collect())
    }

    pub fn user_analytics(&self, username: &str) -> SocialResult<UserAnalytics> {
        let rows = self.post_engagement(username)?;
        Ok(UserAnalytics::from_rows(username, &rows))
    }
}
