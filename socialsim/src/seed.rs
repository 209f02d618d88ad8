//! First-run defaults.

use log::info;
use serde::Serialize;

use crate::{
    errors::SocialResult,
    keys::Collection,
    ledger::now_timestamp,
    store::RecordStore,
    types::{Post, PostId, PostLedgerRecord, ReactionIndexRecord, User, UserDirectoryRecord},
};

pub const ADMIN_USERNAME: &str = "admin";
pub const SAMPLE_POST_COUNT: u64 = 10;

/// What [`seed_defaults`] wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub admin_created: bool,
    pub posts_created: u64,
    pub reactions_initialized: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        !self.admin_created && self.posts_created == 0 && !self.reactions_initialized
    }
}

/// The built-in moderator account. It carries user id 0 so the first real
/// profile still receives id 1.
pub fn admin_user() -> User {
    User {
        user_id: 0,
        username: ADMIN_USERNAME.to_string(),
        name: "Admin User".to_string(),
        email: "admin@example.com".to_string(),
        skills: ["Management", "Moderation", "Support", "Communication", "Leadership"].map(String::from),
    }
}

/// Fills empty collections with the admin account and sample posts.
///
/// Collections that already hold entries are never touched.
pub fn seed_defaults(store: &RecordStore) -> SocialResult<SeedReport> {
    let mut report = SeedReport::default();

    let mut users: UserDirectoryRecord = store.load(Collection::Users)?;
    if users.is_empty() {
        let admin = admin_user();
        users.insert(admin.username.clone(), admin);
        store.save(Collection::Users, &users)?;
        report.admin_created = true;
    }

    let posts: PostLedgerRecord = store.load(Collection::Posts)?;
    if posts.is_empty() {
        let time = now_timestamp();
        let posts: PostLedgerRecord = (1..=SAMPLE_POST_COUNT)
            .map(|i| {
                let post = Post {
                    username: ADMIN_USERNAME.to_string(),
                    content: format!("Sample Post {i}"),
                    created_at: time.clone(),
                };
                (PostId::new(i), post)
            })
            .collect();
        store.save(Collection::Posts, &posts)?;
        report.posts_created = SAMPLE_POST_COUNT;
    }

    if !store.exists(Collection::Reactions)? {
        store.save(Collection::Reactions, &ReactionIndexRecord::new())?;
        report.reactions_initialized = true;
    }

    if !report.is_empty() {
        info!("seeded defaults: {report:?}");
    }
    Ok(report)
}
