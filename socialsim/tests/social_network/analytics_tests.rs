use super::support::*;

#[test]
fn user_without_posts_reports_zeroes() {
    let data = TestData::seeded();
    register(&data.client, "alice");

    let summary = data.client.analytics().user_analytics("alice").unwrap();
    assert_eq!(summary.total_posts, 0);
    assert_eq!(summary.total_likes, 0);
    assert_eq!(summary.total_comments, 0);
    assert_eq!(summary.most_engaged_post_id, None);
    assert_eq!(summary.most_engaged_count, 0);
}

#[test]
fn totals_and_most_engaged_post() {
    let data = TestData::seeded();
    let posts = data.client.posts();
    let reactions = data.client.reactions();
    let first = posts.create_post("alice", "one").unwrap().id;
    let second = posts.create_post("alice", "two").unwrap().id;
    posts.create_post("bob", "not mine").unwrap();

    reactions.add_like(first, "bob").unwrap();
    reactions.add_like(second, "bob").unwrap();
    reactions.add_like(second, "carol").unwrap();
    reactions.add_comment(second, "bob", "nice").unwrap();
    reactions.add_comment(post_id(13), "alice", "ignored").unwrap();

    let summary = data.client.analytics().user_analytics("alice").unwrap();
    assert_eq!(summary.total_posts, 2);
    assert_eq!(summary.total_likes, 3);
    assert_eq!(summary.total_comments, 1);
    assert_eq!(summary.most_engaged_post_id, Some(second));
    assert_eq!(summary.most_engaged_count, 3);
}

#[test]
fn ties_go_to_the_lowest_post_id() {
    let data = TestData::empty();
    let posts = data.client.posts();
    let reactions = data.client.reactions();
    let first = posts.create_post("alice", "one").unwrap().id;
    let second = posts.create_post("alice", "two").unwrap().id;
    reactions.add_comment(second, "bob", "hey").unwrap();
    reactions.add_like(first, "bob").unwrap();

    let summary = data.client.analytics().user_analytics("alice").unwrap();
    assert_eq!(summary.most_engaged_post_id, Some(first));
    assert_eq!(summary.most_engaged_count, 1);
}

#[test]
fn posts_without_engagement_still_name_the_first() {
    let data = TestData::seeded();
    let summary = data.client.analytics().user_analytics(ADMIN_USERNAME).unwrap();
    assert_eq!(summary.total_posts, SAMPLE_POST_COUNT as usize);
    assert_eq!(summary.most_engaged_post_id, Some(post_id(1)));
    assert_eq!(summary.most_engaged_count, 0);
}

#[test]
fn post_engagement_rows_follow_ledger_order() {
    let data = TestData::empty();
    let posts = data.client.posts();
    for _ in 0..11 {
        posts.create_post("alice", "x").unwrap();
    }
    data.client.reactions().add_like(post_id(10), "bob").unwrap();

    let rows = data.client.analytics().post_engagement("alice").unwrap();
    let ids: Vec<u64> = rows.iter().map(|row| row.post_id.get()).collect();
    assert_eq!(ids, (1..=11).collect::<Vec<u64>>());
    assert_eq!(rows[9].likes, 1);
}
