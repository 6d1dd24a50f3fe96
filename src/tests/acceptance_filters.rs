//! Acceptance: filter panel checkboxes.

use crate::model::{Gender, Status};
use crate::state::FocusPane;
use crate::test_harness::{sample_characters, AcceptanceTestHarness};
use crossterm::event::KeyCode;

fn filters_focused() -> AcceptanceTestHarness {
    let mut harness = AcceptanceTestHarness::from_characters(sample_characters()).unwrap();
    harness.send_key(KeyCode::Tab);
    assert_eq!(harness.state().focus, FocusPane::Filters);
    harness
}

#[test]
fn toggling_dead_keeps_only_dead_characters() {
    let mut harness = filters_focused();

    // Options: Alive, Dead, ...
    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Char(' ')]);

    assert!(harness.state().query().status_filter.contains(&Status::Dead));
    assert_eq!(harness.visible_names(), vec!["Birdperson", "Tammy Guetermann"]);
}

#[test]
fn filters_in_different_groups_combine() {
    let mut harness = filters_focused();

    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Char(' ')]);
    // Down to Female: Unknown, Male, Female
    harness.send_keys(&[
        KeyCode::Char('j'),
        KeyCode::Char('j'),
        KeyCode::Char('j'),
        KeyCode::Enter,
    ]);

    assert!(harness.state().query().gender_filter.contains(&Gender::Female));
    assert_eq!(harness.visible_names(), vec!["Tammy Guetermann"]);
}

#[test]
fn filters_in_the_same_group_widen() {
    let mut harness = filters_focused();

    // Alive, then Dead
    harness.send_keys(&[KeyCode::Char(' '), KeyCode::Char('j'), KeyCode::Char(' ')]);

    assert_eq!(harness.state().matched(), 10);
}

#[test]
fn species_options_come_from_the_full_list() {
    let mut harness = filters_focused();

    // Narrow to Dead first; species options must not shrink
    harness.send_keys(&[KeyCode::Char('j'), KeyCode::Char(' ')]);

    let species = &harness.state().filter_options().species;
    assert_eq!(species, &["Human", "Alien", "Poopybutthole", "Cat-Person"]);

    let screen = harness.render_to_string();
    assert!(screen.contains("Cat-Person"));
}

#[test]
fn toggling_a_filter_twice_restores_the_list() {
    let mut harness = filters_focused();

    harness.send_keys(&[KeyCode::Char(' '), KeyCode::Char(' ')]);

    assert!(harness.state().query().status_filter.is_empty());
    assert_eq!(harness.state().matched(), 12);
}

#[test]
fn clear_resets_every_filter() {
    let mut harness = filters_focused();
    harness.send_keys(&[KeyCode::Char(' '), KeyCode::Char('j'), KeyCode::Char(' ')]);

    harness.send_key(KeyCode::Char('c'));

    assert!(!harness.state().query().has_filters());
    assert_eq!(harness.state().matched(), 12);
}

#[test]
fn space_in_the_table_does_nothing() {
    let mut harness = AcceptanceTestHarness::from_characters(sample_characters()).unwrap();

    harness.send_key(KeyCode::Char(' '));

    assert!(!harness.state().query().has_filters());
}
