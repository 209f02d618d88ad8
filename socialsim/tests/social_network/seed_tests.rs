use super::support::*;

#[test]
fn seeding_fills_every_empty_record() {
    let data = TestData::empty();
    let report = data.client.seed_defaults().unwrap();

    assert!(report.admin_created);
    assert_eq!(report.posts_created, SAMPLE_POST_COUNT);
    assert!(report.reactions_initialized);

    let posts = data.client.posts().list_posts().unwrap();
    assert_eq!(posts.len(), SAMPLE_POST_COUNT as usize);
    assert_eq!(posts[&post_id(1)].content, "Sample Post 1");
    assert_eq!(data.read_json(Collection::Reactions), serde_json::json!({}));
}

#[test]
fn seeding_twice_changes_nothing() {
    let data = TestData::seeded();
    data.client.posts().create_post("alice", "kept").unwrap();
    let before = data.read_json(Collection::Posts);

    let report = data.reopen().seed_defaults().unwrap();
    assert!(report.is_empty());
    assert_eq!(data.read_json(Collection::Posts), before);
}

#[test]
fn seeding_leaves_populated_users_alone() {
    let data = TestData::empty();
    register(&data.client, "alice");

    let report = data.client.seed_defaults().unwrap();
    assert!(!report.admin_created);
    assert!(!data.client.users().contains(ADMIN_USERNAME).unwrap());
    assert_eq!(report.posts_created, SAMPLE_POST_COUNT);
}
