use std::{collections::BTreeMap, fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Number of skills every profile carries.
pub const SKILL_COUNT: usize = 5;

/// Ordered skills of a profile. The array length is the "exactly five" rule.
pub type Skills = [String; SKILL_COUNT];

/// Persisted user directory: username -> profile.
pub type UserDirectoryRecord = BTreeMap<String, User>;
/// Persisted post ledger: post id -> post, iterated in ascending numeric id order.
pub type PostLedgerRecord = BTreeMap<PostId, Post>;
/// Persisted reaction index: post id -> likes and comments.
pub type ReactionIndexRecord = BTreeMap<PostId, ReactionRecord>;

/// A user profile as stored in the users record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub skills: Skills,
}

impl User {
    /// Applies a single field edit. `username` and `user_id` are not editable.
    pub fn apply(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::Name(name) => self.name = name,
            ProfileUpdate::Email(email) => self.email = email,
            ProfileUpdate::Skills(skills) => self.skills = skills,
        }
    }
}

/// Tagged edit request over the closed set of editable profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUpdate {
    Name(String),
    Email(String),
    Skills(Skills),
}

impl ProfileUpdate {
    pub fn field(&self) -> &'static str {
        match self {
            ProfileUpdate::Name(_) => "name",
            ProfileUpdate::Email(_) => "email",
            ProfileUpdate::Skills(_) => "skills",
        }
    }
}

/// Sequential post identifier. Persisted as the decimal string of the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(u64);

impl PostId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl Serialize for PostId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PostIdVisitor;

        impl de::Visitor<'_> for PostIdVisitor {
            type Value = PostId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a positive post id as a canonical decimal string")
            }

            /// Stored keys must be canonical: no padding, no leading zeros, never 0.
            fn visit_str<E: de::Error>(self, value: &str) -> Result<PostId, E> {
                match value.parse::<u64>() {
                    Ok(id) if id > 0 && value == id.to_string() => Ok(PostId(id)),
                    _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
                }
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<PostId, E> {
                if value == 0 {
                    return Err(E::invalid_value(de::Unexpected::Unsigned(value), &self));
                }
                Ok(PostId(value))
            }
        }

        deserializer.deserialize_str(PostIdVisitor)
    }
}

/// A post as stored in the posts record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub username: String,
    pub content: String,
    #[serde(rename = "time")]
    pub created_at: String,
}

/// A post together with the id it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub id: PostId,
    #[serde(flatten)]
    pub post: Post,
}

/// A single comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub username: String,
    pub text: String,
}

/// Likes and comments collected for one post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    /// Usernames in the order they liked the post; each appears at most once.
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl ReactionRecord {
    pub fn has_liked(&self, username: &str) -> bool {
        self.likes.iter().any(|liker| liker == username)
    }

    pub fn engagement(&self) -> usize {
        self.likes.len() + self.comments.len()
    }
}

/// Engagement figures for one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostEngagement {
    pub post_id: PostId,
    pub likes: usize,
    pub comments: usize,
}

impl PostEngagement {
    pub fn total(&self) -> usize {
        self.likes + self.comments
    }
}

/// Aggregate engagement for everything a user has posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAnalytics {
    pub username: String,
    pub total_posts: usize,
    pub total_likes: usize,
    pub total_comments: usize,
    /// `None` when the user has no posts.
    pub most_engaged_post_id: Option<PostId>,
    pub most_engaged_count: usize,
}

impl UserAnalytics {
    /// Folds per-post rows into totals.
    ///
    /// The most engaged post is the first row holding the maximum engagement, so
    /// callers must pass rows in ledger order for the result to be reproducible.
    pub fn from_rows(username: impl Into<String>, rows: &[PostEngagement]) -> Self {
        let mut most_engaged: Option<&PostEngagement> = None;
        for row in rows {
            if most_engaged.is_none_or(|best| row.total() > best.total()) {
                most_engaged = Some(row);
            }
        }

        Self {
            username: username.into(),
            total_posts: rows.len(),
            total_likes: rows.iter().map(|row| row.likes).sum(),
            total_comments: rows.iter().map(|row| row.comments).sum(),
            most_engaged_post_id: most_engaged.map(|row| row.post_id),
            most_engaged_count: most_engaged.map_or(0, PostEngagement::total),
        }
    }
}
