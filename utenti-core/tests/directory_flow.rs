//! End-to-end directory behavior against the 10-user reference payload.

use utenti_core::{LoadPhase, User, UserDirectory, UserId, UtentiError};

fn reference_users() -> Vec<User> {
    let raw = include_str!("fixtures/users.json");
    serde_json::from_str(raw).expect("fixture parses")
}

fn loaded_directory() -> UserDirectory {
    let mut dir = UserDirectory::new();
    dir.finish_load(Ok(reference_users()));
    dir
}

#[test]
fn renders_all_ten_users_after_load() {
    let dir = loaded_directory();
    assert!(matches!(dir.phase(), LoadPhase::Loaded(_)));
    assert_eq!(dir.filtered().len(), 10);
}

#[test]
fn search_leanne_yields_exactly_leanne_graham() {
    let mut dir = loaded_directory();

    for term in ["Leanne", "leanne", "LEANNE", "eanne"] {
        dir.search(term);
        let filtered = dir.filtered();
        assert_eq!(filtered.len(), 1, "term {:?}", term);
        assert_eq!(filtered[0].name, "Leanne Graham");
    }
}

#[test]
fn filter_preserves_fetch_order() {
    let mut dir = loaded_directory();
    dir.search("cle");

    let names: Vec<&str> = dir.filtered().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Clementine Bauch", "Clementina DuBuque"]);
}

#[test]
fn clearing_the_term_restores_the_full_list() {
    let mut dir = loaded_directory();
    dir.search("graham");
    assert_eq!(dir.filtered().len(), 1);

    dir.search("");
    assert_eq!(dir.filtered().len(), 10);
}

#[test]
fn selection_marks_one_user_moves_and_is_idempotent() {
    let mut dir = loaded_directory();

    // Click Leanne Graham
    dir.select(UserId(1));
    let marked: Vec<UserId> = dir
        .filtered()
        .iter()
        .filter(|u| dir.is_selected(u.id))
        .map(|u| u.id)
        .collect();
    assert_eq!(marked, [UserId(1)]);

    // Click Ervin Howell: the marker moves, never accumulates
    dir.select(UserId(2));
    assert!(dir.is_selected(UserId(2)));
    assert!(!dir.is_selected(UserId(1)));
    assert_eq!(
        dir.filtered().iter().filter(|u| dir.is_selected(u.id)).count(),
        1
    );

    // Click Ervin Howell again: still exactly him, no toggle-off
    dir.select(UserId(2));
    assert!(dir.is_selected(UserId(2)));
}

#[test]
fn failed_load_is_observable_and_final() {
    let mut dir = UserDirectory::new();
    dir.finish_load(Err(UtentiError::unexpected_status(
        404,
        "https://jsonplaceholder.typicode.com/users",
    )));

    assert!(matches!(dir.phase(), LoadPhase::Failed(_)));
    assert!(dir.filtered().is_empty());

    // A duplicate delivery after failure is ignored too
    dir.finish_load(Ok(reference_users()));
    assert!(matches!(dir.phase(), LoadPhase::Failed(_)));
}
