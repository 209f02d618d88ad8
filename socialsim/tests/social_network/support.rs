pub(crate) use serde_json::Value;
pub(crate) use socialsim::{
    Client, Collection, FileBackend, PostId, ProfileUpdate, RecordStore, SocialError, Skills,
    seed::{ADMIN_USERNAME, SAMPLE_POST_COUNT},
};
pub(crate) use std::fs;
pub(crate) use tempfile::TempDir;

/// A client over JSON files in a private temporary directory.
pub(crate) struct TestData {
    pub(crate) dir: TempDir,
    pub(crate) client: Client,
}

impl TestData {
    pub(crate) fn empty() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let client = client_in(&dir);
        Self { dir, client }
    }

    pub(crate) fn seeded() -> Self {
        let data = Self::empty();
        data.client.seed_defaults().expect("seed defaults");
        data
    }

    /// A second client over the same files, as a fresh process would see them.
    pub(crate) fn reopen(&self) -> Client {
        client_in(&self.dir)
    }

    pub(crate) fn read_json(&self, collection: Collection) -> Value {
        let path = self.dir.path().join(format!("{}.json", collection.name()));
        let raw = fs::read_to_string(&path).expect("record file");
        serde_json::from_str(&raw).expect("valid json")
    }

    pub(crate) fn write_raw(&self, collection: Collection, content: &str) {
        let path = self.dir.path().join(format!("{}.json", collection.name()));
        fs::write(path, content).expect("write record file");
    }
}

fn client_in(dir: &TempDir) -> Client {
    Client::new(RecordStore::new(FileBackend::new(dir.path())))
}

pub(crate) fn skills(values: [&str; 5]) -> Skills {
    values.map(String::from)
}

pub(crate) fn register(client: &Client, username: &str) {
    client
        .users()
        .create_user(username, &format!("{username} name"), &format!("{username}@x.com"), skills([
            "a", "b", "c", "d", "e",
        ]))
        .expect("create user");
}

pub(crate) fn post_id(id: u64) -> PostId {
    PostId::new(id)
}
