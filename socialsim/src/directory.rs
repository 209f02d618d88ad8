use log::{info, warn};

use crate::{
    errors::{SocialError, SocialResult},
    keys::Collection,
    store::RecordStore,
    types::{ProfileUpdate, Skills, User, UserDirectoryRecord},
};

/// User profiles keyed by username.
#[derive(Clone, Copy)]
pub struct UserDirectory<'a> {
    store: &'a RecordStore,
}

impl<'a> UserDirectory<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    pub fn list_users(&self) -> SocialResult<UserDirectoryRecord> {
        self.store.load(Collection::Users)
    }

    pub fn find_user(&self, username: &str) -> SocialResult<Option<User>> {
        Ok(self.list_users()?.remove(username))
    }

    pub fn contains(&self, username: &str) -> SocialResult<bool> {
        Ok(self.list_users()?.contains_key(username))
    }

    /// Registers a new profile with the next free user id.
    ///
    /// Fails with [`SocialError::DuplicateUsername`] when `username` is empty or
    /// already registered; the directory is left untouched in that case.
    pub fn create_user(&self, username: &str, name: &str, email: &str, skills: Skills) -> SocialResult<User> {
        let mut users = self.list_users()?;
        if username.is_empty() || users.contains_key(username) {
            warn!("rejected profile creation for username '{username}'");
            return Err(SocialError::DuplicateUsername {
                username: username.to_string(),
            });
        }

        let user = User {
            user_id: next_user_id(&users),
            username: username.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            skills,
        };
        users.insert(user.username.clone(), user.clone());
        self.store.save(Collection::Users, &users)?;
        info!("created user {} with id {}", user.username, user.user_id);
        Ok(user)
    }

    /// Overwrites the stored profile for `user.username`.
    ///
    /// The stored `user_id` is kept; an unknown username is [`SocialError::NotFound`].
    pub fn update_user(&self, user: &User) -> SocialResult<()> {
        let mut users = self.list_users()?;
        let Some(stored) = users.get_mut(&user.username) else {
            return Err(SocialError::NotFound {
                collection: Collection::Users,
                key: user.username.clone(),
            });
        };
        *stored = User {
            user_id: stored.user_id,
            ..user.clone()
        };
        self.store.save(Collection::Users, &users)
    }

    /// Applies one field edit to a stored profile and persists it.
    pub fn apply_update(&self, username: &str, update: ProfileUpdate) -> SocialResult<User> {
        let mut user = self.find_user(username)?.ok_or_else(|| SocialError::NotFound {
            collection: Collection::Users,
            key: username.to_string(),
        })?;
        let field = update.field();
        user.apply(update);
        self.update_user(&user)?;
        info!("updated {field} of user {username}");
        Ok(user)
    }
}

fn next_user_id(users: &UserDirectoryRecord) -> u64 {
    users.values().map(|user| user.user_id).max().unwrap_or(0) + 1
}
