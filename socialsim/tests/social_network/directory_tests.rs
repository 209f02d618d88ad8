use super::support::*;

#[test]
fn first_profiles_get_ids_one_and_two() {
    let data = TestData::empty();
    let users = data.client.users();

    let alice = users
        .create_user("alice", "Alice A", "a@x.com", skills(["Rust", "SQL", "Go", "Lua", "Zig"]))
        .expect("create alice");
    let bob = users
        .create_user("bob", "Bob B", "b@x.com", skills(["C", "C++", "Java", "Perl", "Ruby"]))
        .expect("create bob");

    assert_eq!(alice.user_id, 1);
    assert_eq!(bob.user_id, 2);

    let stored = data.reopen().users().find_user("alice").unwrap().expect("alice persisted");
    assert_eq!(stored, alice);
}

#[test]
fn seeded_admin_keeps_first_real_id_at_one() {
    let data = TestData::seeded();
    register(&data.client, "alice");

    let alice = data.client.users().find_user("alice").unwrap().unwrap();
    let admin = data.client.users().find_user(ADMIN_USERNAME).unwrap().unwrap();
    assert_eq!(admin.user_id, 0);
    assert_eq!(alice.user_id, 1);
}

#[test]
fn ids_continue_from_the_highest_stored_id() {
    let data = TestData::empty();
    data.write_raw(
        Collection::Users,
        r#"{"zed": {"user_id": 7, "username": "zed", "name": "Zed", "email": "z@x.com",
            "skills": ["a", "b", "c", "d", "e"]}}"#,
    );

    let user = data
        .client
        .users()
        .create_user("amy", "Amy", "amy@x.com", skills(["a", "b", "c", "d", "e"]))
        .unwrap();
    assert_eq!(user.user_id, 8);
}

#[test]
fn duplicate_username_leaves_directory_unchanged() {
    let data = TestData::empty();
    register(&data.client, "alice");
    let before = data.read_json(Collection::Users);

    let err = data
        .client
        .users()
        .create_user("alice", "Other", "o@x.com", skills(["1", "2", "3", "4", "5"]))
        .unwrap_err();

    assert!(matches!(err, SocialError::DuplicateUsername { ref username } if username == "alice"));
    assert_eq!(data.read_json(Collection::Users), before);
}

#[test]
fn empty_username_is_rejected() {
    let data = TestData::empty();
    let err = data
        .client
        .users()
        .create_user("", "Nobody", "n@x.com", skills(["a", "b", "c", "d", "e"]))
        .unwrap_err();
    assert!(matches!(err, SocialError::DuplicateUsername { .. }));
    assert!(data.client.users().list_users().unwrap().is_empty());
}

#[test]
fn find_user_on_empty_store_is_none() {
    let data = TestData::empty();
    assert!(data.client.users().find_user("ghost").unwrap().is_none());
    assert!(!data.client.users().contains("ghost").unwrap());
}

#[test]
fn update_user_overwrites_profile_but_keeps_id() {
    let data = TestData::empty();
    register(&data.client, "alice");
    let users = data.client.users();

    let mut edited = users.find_user("alice").unwrap().unwrap();
    edited.name = "Alice Liddell".into();
    edited.user_id = 99;
    users.update_user(&edited).expect("update");

    let stored = data.reopen().users().find_user("alice").unwrap().unwrap();
    assert_eq!(stored.name, "Alice Liddell");
    assert_eq!(stored.user_id, 1);
}

#[test]
fn update_unknown_user_is_not_found() {
    let data = TestData::empty();
    register(&data.client, "alice");
    let mut ghost = data.client.users().find_user("alice").unwrap().unwrap();
    ghost.username = "ghost".into();

    let err = data.client.users().update_user(&ghost).unwrap_err();
    assert!(matches!(err, SocialError::NotFound { collection: Collection::Users, .. }));
    assert_eq!(data.client.users().list_users().unwrap().len(), 1);
}

#[test]
fn apply_update_changes_one_field_at_a_time() {
    let data = TestData::empty();
    register(&data.client, "alice");
    let users = data.client.users();

    users
        .apply_update("alice", ProfileUpdate::Email("alice@example.org".into()))
        .unwrap();
    let user = users
        .apply_update("alice", ProfileUpdate::Skills(skills(["v", "w", "x", "y", "z"])))
        .unwrap();

    assert_eq!(user.email, "alice@example.org");
    assert_eq!(user.skills[0], "v");
    assert_eq!(user.name, "alice name");
}
