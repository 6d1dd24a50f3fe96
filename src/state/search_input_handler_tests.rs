//! Tests for search input handler.

use super::*;

fn edit(text: &str, cursor: usize) -> SearchEdit {
    SearchEdit {
        text: text.to_string(),
        cursor,
    }
}

// ===== SearchEdit::new =====

#[test]
fn new_places_cursor_at_end() {
    let e = SearchEdit::new("rick");
    assert_eq!(e.cursor, 4);
}

#[test]
fn new_counts_characters_not_bytes() {
    let e = SearchEdit::new("Señor");
    assert_eq!(e.cursor, 5, "ñ is two bytes but one character");
}

// ===== handle_char_input =====

#[test]
fn char_input_appends_at_end() {
    let result = handle_char_input(edit("mort", 4), 'y');
    assert_eq!(result, edit("morty", 5));
}

#[test]
fn char_input_inserts_mid_text() {
    let result = handle_char_input(edit("mrty", 1), 'o');
    assert_eq!(result, edit("morty", 2));
}

#[test]
fn char_input_after_multibyte_character() {
    let result = handle_char_input(edit("ñ", 1), 'a');
    assert_eq!(result, edit("ña", 2));
}

// ===== handle_backspace =====

#[test]
fn backspace_removes_previous_character() {
    let result = handle_backspace(edit("rick", 4));
    assert_eq!(result, edit("ric", 3));
}

#[test]
fn backspace_at_start_is_noop() {
    let result = handle_backspace(edit("rick", 0));
    assert_eq!(result, edit("rick", 0));
}

#[test]
fn backspace_removes_whole_multibyte_character() {
    let result = handle_backspace(edit("señ", 3));
    assert_eq!(result, edit("se", 2));
}

// ===== handle_delete =====

#[test]
fn delete_removes_character_under_cursor() {
    let result = handle_delete(edit("rick", 0));
    assert_eq!(result, edit("ick", 0));
}

#[test]
fn delete_at_end_is_noop() {
    let result = handle_delete(edit("rick", 4));
    assert_eq!(result, edit("rick", 4));
}

// ===== cursor movement =====

#[test]
fn cursor_left_saturates_at_zero() {
    assert_eq!(handle_cursor_left(edit("ab", 0)).cursor, 0);
    assert_eq!(handle_cursor_left(edit("ab", 2)).cursor, 1);
}

#[test]
fn cursor_right_saturates_at_char_length() {
    assert_eq!(handle_cursor_right(edit("añ", 2)).cursor, 2);
    assert_eq!(handle_cursor_right(edit("añ", 1)).cursor, 2);
}

#[test]
fn home_and_end_jump_to_bounds() {
    assert_eq!(handle_home(edit("summer", 3)).cursor, 0);
    assert_eq!(handle_end(edit("summer", 3)).cursor, 6);
}
