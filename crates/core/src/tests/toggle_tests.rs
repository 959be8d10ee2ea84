// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ToggleMode, toggle};
use marquee_domain::Selection;

fn sample_selections() -> Vec<Selection> {
    vec![
        Selection::new(),
        Selection::from_values(["Drama"]),
        Selection::from_values(["Drama", "Crime", "Sci-Fi"]),
    ]
}

#[test]
fn test_add_appends_absent_value() {
    let selection: Selection = Selection::from_values(["Drama"]);
    let updated: Selection = toggle(&selection, "Crime", ToggleMode::Add);

    assert_eq!(updated.values(), ["Drama", "Crime"]);
    assert_eq!(selection.values(), ["Drama"]);
}

#[test]
fn test_add_is_idempotent() {
    for selection in sample_selections() {
        for value in ["Drama", "War"] {
            let once: Selection = toggle(&selection, value, ToggleMode::Add);
            let twice: Selection = toggle(&once, value, ToggleMode::Add);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn test_remove_undoes_add_of_absent_value() {
    for selection in sample_selections() {
        let value: &str = "Western";
        let added: Selection = toggle(&selection, value, ToggleMode::Add);
        let removed: Selection = toggle(&added, value, ToggleMode::Remove);
        assert_eq!(removed, selection);
    }
}

#[test]
fn test_remove_absent_value_is_noop() {
    for selection in sample_selections() {
        let updated: Selection = toggle(&selection, "Horror", ToggleMode::Remove);
        assert_eq!(updated, selection);
    }
}

#[test]
fn test_remove_keeps_order_of_remaining_values() {
    let selection: Selection = Selection::from_values(["Drama", "Crime", "Sci-Fi"]);
    let updated: Selection = toggle(&selection, "Crime", ToggleMode::Remove);

    assert_eq!(updated.values(), ["Drama", "Sci-Fi"]);
}

#[test]
fn test_remove_last_value_leaves_empty_selection() {
    let selection: Selection = Selection::from_values(["Drama"]);
    let updated: Selection = toggle(&selection, "Drama", ToggleMode::Remove);

    assert!(updated.is_empty());
}

#[test]
fn test_toggle_mode_display() {
    assert_eq!(ToggleMode::Add.to_string(), "add");
    assert_eq!(ToggleMode::Remove.to_string(), "remove");
}

#[test]
fn test_add_appends_empty_value_and_remove_undoes_it() {
    let selection: Selection = Selection::from_values(["Drama"]);

    let added: Selection = toggle(&selection, "", ToggleMode::Add);
    assert_eq!(added.values(), ["Drama", ""]);

    let removed: Selection = toggle(&added, "", ToggleMode::Remove);
    assert_eq!(removed, selection);
}
