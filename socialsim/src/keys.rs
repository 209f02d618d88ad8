use std::fmt;

use serde::{Deserialize, Serialize};

/// The three independent records the simulator persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Users,
    Posts,
    Reactions,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Users, Collection::Posts, Collection::Reactions];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Posts => "posts",
            Collection::Reactions => "reactions",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common key-construction helpers used by the storage backends.
#[derive(Debug, Clone)]
pub struct KeyContext<'a> {
    pub prefix: &'a str,
}

impl<'a> KeyContext<'a> {
    pub fn new(prefix: &'a str) -> Self {
        Self { prefix }
    }

    /// Key holding a whole collection document: `prefix:collection`.
    pub fn record(&self, collection: Collection) -> String {
        format!("{}:{}", self.prefix, collection)
    }

    /// File name holding a whole collection document inside a data directory.
    pub fn file_name(collection: Collection) -> String {
        format!("{collection}.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_record_keys() {
        let ctx = KeyContext::new("snet");
        assert_eq!(ctx.record(Collection::Users), "snet:users");
        assert_eq!(ctx.record(Collection::Reactions), "snet:reactions");
    }

    #[test]
    fn builds_file_names() {
        assert_eq!(KeyContext::file_name(Collection::Posts), "posts.json");
    }
}
