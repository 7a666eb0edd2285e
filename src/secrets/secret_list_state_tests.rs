//! Tests for secret list state

use super::*;
use proptest::prelude::*;

fn secret(name: &str, namespace: &str) -> SecretRef {
    SecretRef {
        name: name.to_string(),
        namespace: namespace.to_string(),
    }
}

fn many(count: usize) -> Vec<SecretRef> {
    (0..count)
        .map(|i| secret(&format!("secret-{}", i), "default"))
        .collect()
}

#[test]
fn test_new_is_hidden() {
    let state = SecretListState::new();
    assert!(!state.is_visible());
    assert!(state.selected().is_none());
}

#[test]
fn test_open_starts_loading() {
    let mut state = SecretListState::new();
    state.open();

    assert!(state.is_visible());
    assert!(state.is_loading());
    assert!(state.secrets().is_empty());
}

#[test]
fn test_reopen_resets_previous_results() {
    let mut state = SecretListState::new();
    state.open();
    state.set_secrets(many(3));
    state.select_next();
    state.close();

    state.open();

    assert!(state.is_loading());
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn test_set_secrets_selects_first() {
    let mut state = SecretListState::new();
    state.open();
    state.set_secrets(vec![secret("db", "prod"), secret("api", "dev")]);

    assert!(!state.is_loading());
    assert_eq!(state.selected(), Some(&secret("db", "prod")));
}

#[test]
fn test_navigation_is_clamped() {
    let mut state = SecretListState::new();
    state.set_secrets(many(2));

    state.select_previous();
    assert_eq!(state.selected_index(), 0);

    state.select_next();
    state.select_next();
    state.select_next();
    assert_eq!(state.selected_index(), 1);
}

#[test]
fn test_navigation_on_empty_list() {
    let mut state = SecretListState::new();
    state.set_secrets(Vec::new());

    state.select_next();
    state.select_previous();

    assert_eq!(state.selected_index(), 0);
    assert!(state.selected().is_none());
}

#[test]
fn test_error_state() {
    let mut state = SecretListState::new();
    state.open();
    state.set_error("HTTP error 500: boom".to_string());

    assert_eq!(
        state.status(),
        &ListStatus::Failed("HTTP error 500: boom".to_string())
    );
    assert!(state.secrets().is_empty());
}

#[test]
fn test_scrolls_to_keep_selection_visible() {
    let mut state = SecretListState::new();
    state.set_secrets(many(MAX_VISIBLE_SECRETS + 5));

    for _ in 0..MAX_VISIBLE_SECRETS {
        state.select_next();
    }
    assert_eq!(state.selected_index(), MAX_VISIBLE_SECRETS);
    assert_eq!(state.scroll_offset(), 1);

    let first_visible = state.visible_secrets().next().map(|(i, _)| i);
    assert_eq!(first_visible, Some(1));

    for _ in 0..MAX_VISIBLE_SECRETS {
        state.select_previous();
    }
    assert_eq!(state.selected_index(), 0);
    assert_eq!(state.scroll_offset(), 0);
}

#[test]
fn test_select_visible_row() {
    let mut state = SecretListState::new();
    state.set_secrets(many(3));

    assert!(state.select_visible_row(2));
    assert_eq!(state.selected_index(), 2);
    assert!(!state.select_visible_row(3));
    assert_eq!(state.selected_index(), 2);
}

proptest! {
    // The selection always stays inside the list and inside the visible window
    #[test]
    fn prop_selection_stays_visible(
        count in 0usize..40,
        moves in prop::collection::vec(prop::bool::ANY, 0..80),
    ) {
        let mut state = SecretListState::new();
        state.set_secrets(many(count));

        for down in moves {
            if down {
                state.select_next();
            } else {
                state.select_previous();
            }

            if count > 0 {
                prop_assert!(state.selected_index() < count);
                prop_assert!(state.selected_index() >= state.scroll_offset());
                prop_assert!(state.selected_index() < state.scroll_offset() + MAX_VISIBLE_SECRETS);
            } else {
                prop_assert_eq!(state.selected_index(), 0);
            }
        }
    }
}
