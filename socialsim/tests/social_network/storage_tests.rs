use super::support::*;

#[test]
fn corrupt_record_surfaces_storage_error() {
    let data = TestData::seeded();
    data.write_raw(Collection::Posts, "{ not json");

    let err = data.client.posts().list_posts().unwrap_err();
    assert!(matches!(err, SocialError::StorageCorrupt { collection: Collection::Posts, .. }));

    let err = data.client.posts().create_post("alice", "lost").unwrap_err();
    assert!(matches!(err, SocialError::StorageCorrupt { .. }));
}

#[test]
fn missing_files_read_as_empty_collections() {
    let data = TestData::empty();
    assert!(data.client.users().list_users().unwrap().is_empty());
    assert!(data.client.posts().list_posts().unwrap().is_empty());
    assert!(data.client.reactions().list_reactions().unwrap().is_empty());
    assert!(!data.dir.path().join("users.json").exists());
}

#[test]
fn on_disk_layout_uses_string_ids_and_time_key() {
    let data = TestData::empty();
    register(&data.client, "alice");
    data.client
        .posts()
        .create_post_at("alice", "Hello", "2024-01-01 10:00:00.000000")
        .unwrap();

    let users = data.read_json(Collection::Users);
    assert_eq!(users["alice"]["user_id"], 1);
    assert_eq!(users["alice"]["skills"].as_array().map(Vec::len), Some(5));

    let posts = data.read_json(Collection::Posts);
    assert_eq!(posts["1"]["time"], "2024-01-01 10:00:00.000000");
    assert_eq!(posts["1"]["username"], "alice");
    assert!(posts["1"].get("created_at").is_none());
}

#[test]
fn documents_are_indented_with_four_spaces() {
    let data = TestData::empty();
    register(&data.client, "alice");

    let raw = fs::read_to_string(data.dir.path().join("users.json")).unwrap();
    assert!(raw.starts_with("{\n    \"alice\": {\n        \"user_id\": 1"));
}

#[test]
fn hand_written_records_are_read_back() {
    let data = TestData::empty();
    data.write_raw(
        Collection::Reactions,
        r#"{"2": {"likes": ["bob"], "comments": [{"username": "bob", "text": "hey"}]}}"#,
    );

    let record = data.client.reactions().get_reactions(post_id(2)).unwrap();
    assert_eq!(record.likes, vec!["bob"]);
    assert_eq!(record.comments[0].text, "hey");
}

#[test]
fn colliding_post_keys_are_corrupt_and_left_on_disk() {
    let data = TestData::empty();
    let original = r#"{"3": {"username": "a", "content": "three", "time": "t"},
        "03": {"username": "a", "content": "zero-three", "time": "t"}}"#;
    data.write_raw(Collection::Posts, original);

    let err = data.client.posts().list_posts().unwrap_err();
    assert!(matches!(err, SocialError::StorageCorrupt { collection: Collection::Posts, .. }));

    let err = data.client.posts().create_post("d", "new").unwrap_err();
    assert!(matches!(err, SocialError::StorageCorrupt { .. }));
    let raw = fs::read_to_string(data.dir.path().join("posts.json")).unwrap();
    assert_eq!(raw, original);
}

#[test]
fn zero_post_id_is_corrupt() {
    let data = TestData::empty();
    data.write_raw(
        Collection::Reactions,
        r#"{"0": {"likes": ["bob"], "comments": []}}"#,
    );
    let err = data.client.reactions().list_reactions().unwrap_err();
    assert!(matches!(err, SocialError::StorageCorrupt { collection: Collection::Reactions, .. }));
}
