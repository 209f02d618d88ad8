use super::support::*;

#[test]
fn post_after_seed_gets_id_eleven() {
    let data = TestData::seeded();
    let entry = data.client.posts().create_post("alice", "Hello").expect("create post");

    assert_eq!(entry.id, post_id(SAMPLE_POST_COUNT + 1));
    assert_eq!(entry.id.to_string(), "11");
    assert_eq!(data.read_json(Collection::Posts)["11"]["content"], "Hello");
}

#[test]
fn create_then_get_returns_the_same_post() {
    let data = TestData::empty();
    let ledger = data.client.posts();

    let entry = ledger
        .create_post_at("alice", "Hello", "2024-01-01 10:00:00.000000")
        .unwrap();
    let post = data.reopen().posts().get_post(entry.id).unwrap().expect("stored post");

    assert_eq!(entry.id, post_id(1));
    assert_eq!(post.username, "alice");
    assert_eq!(post.content, "Hello");
    assert_eq!(post.created_at, "2024-01-01 10:00:00.000000");
}

#[test]
fn unknown_post_is_none() {
    let data = TestData::seeded();
    assert!(data.client.posts().get_post(post_id(999)).unwrap().is_none());
}

#[test]
fn author_is_not_checked_against_directory() {
    let data = TestData::empty();
    let entry = data.client.posts().create_post("nobody", "orphan").unwrap();
    assert_eq!(data.client.posts().get_post(entry.id).unwrap().unwrap().username, "nobody");
}

#[test]
fn ledger_with_gap_overwrites_highest_post() {
    let data = TestData::empty();
    data.write_raw(
        Collection::Posts,
        r#"{"1": {"username": "a", "content": "one", "time": "t"},
            "3": {"username": "a", "content": "three", "time": "t"}}"#,
    );

    let entry = data.client.posts().create_post("b", "new").unwrap();
    let posts = data.client.posts().list_posts().unwrap();

    assert_eq!(entry.id, post_id(3));
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[&post_id(3)].content, "new");
}

#[test]
fn posts_by_filters_author_in_id_order() {
    let data = TestData::seeded();
    let ledger = data.client.posts();
    ledger.create_post("alice", "first").unwrap();
    ledger.create_post("bob", "other").unwrap();
    ledger.create_post("alice", "second").unwrap();

    let ids: Vec<String> = ledger.posts_by("alice").unwrap().iter().map(|e| e.id.to_string()).collect();
    assert_eq!(ids, vec!["11", "13"]);
    assert_eq!(ledger.posts_by(ADMIN_USERNAME).unwrap().len(), SAMPLE_POST_COUNT as usize);
}
