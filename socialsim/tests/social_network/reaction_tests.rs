use super::support::*;

#[test]
fn second_like_is_rejected_and_not_stored() {
    let data = TestData::seeded();
    let reactions = data.client.reactions();

    assert!(reactions.add_like(post_id(3), "alice").unwrap());
    assert!(!reactions.add_like(post_id(3), "alice").unwrap());

    let record = data.reopen().reactions().get_reactions(post_id(3)).unwrap();
    assert_eq!(record.likes, vec!["alice".to_string()]);
}

#[test]
fn like_on_empty_index_creates_entry() {
    let data = TestData::empty();
    assert!(data.client.reactions().add_like(post_id(3), "alice").unwrap());

    let json = data.read_json(Collection::Reactions);
    assert_eq!(json, serde_json::json!({"3": {"likes": ["alice"], "comments": []}}));
}

#[test]
fn likes_keep_arrival_order() {
    let data = TestData::seeded();
    let reactions = data.client.reactions();
    for user in ["carol", "alice", "bob"] {
        reactions.add_like(post_id(1), user).unwrap();
    }
    assert_eq!(reactions.get_reactions(post_id(1)).unwrap().likes, vec!["carol", "alice", "bob"]);
}

#[test]
fn comments_append_in_order_and_allow_repeats() {
    let data = TestData::seeded();
    let reactions = data.client.reactions();
    let texts = ["first", "second", "first"];
    for text in texts {
        reactions.add_comment(post_id(2), "bob", text).unwrap();
    }

    let record = data.reopen().reactions().get_reactions(post_id(2)).unwrap();
    assert_eq!(record.comments.len(), texts.len());
    let stored: Vec<&str> = record.comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(stored, texts);
    assert!(record.comments.iter().all(|c| c.username == "bob"));
    assert!(record.likes.is_empty());
}

#[test]
fn post_without_reactions_reads_as_empty() {
    let data = TestData::seeded();
    let record = data.client.reactions().get_reactions(post_id(5)).unwrap();
    assert!(record.likes.is_empty());
    assert!(record.comments.is_empty());
    assert!(data.client.reactions().list_reactions().unwrap().is_empty());
}

#[test]
fn reactions_for_unknown_post_are_accepted() {
    let data = TestData::seeded();
    data.client.reactions().add_comment(post_id(404), "alice", "hi").unwrap();
    assert_eq!(data.client.reactions().get_reactions(post_id(404)).unwrap().comments.len(), 1);
}
