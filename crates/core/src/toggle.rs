// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filter::Criteria;
use marquee_domain::{Field, Selection};
use tracing::debug;

/// How a single clicked value merges into a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleMode {
    /// Append the value unless already selected.
    Add,
    /// Drop the value if selected.
    Remove,
}

impl ToggleMode {
    /// Returns the name of this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl std::fmt::Display for ToggleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Merges `value` into `selection` and returns the new selection.
///
/// Adding a present value and removing an absent one both leave the
/// selection unchanged.
///
/// # Arguments
///
/// * `selection` - The current selection (not modified)
/// * `value` - The value being toggled
/// * `mode` - Whether to add or remove
#[must_use]
pub fn toggle(selection: &Selection, value: &str, mode: ToggleMode) -> Selection {
    let mut updated: Selection = selection.clone();
    match mode {
        ToggleMode::Add => {
            updated.insert(value);
        }
        ToggleMode::Remove => {
            updated.remove(value);
        }
    }
    updated
}

/// A single request's worth of toggles: at most one value per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAction {
    /// Add or remove.
    pub mode: ToggleMode,
    /// The genre being toggled, if any.
    pub genre: Option<String>,
    /// The year being toggled, if any.
    pub year: Option<String>,
    /// The rating being toggled, if any.
    pub rating: Option<String>,
}

impl ToggleAction {
    /// Creates an action that toggles nothing.
    #[must_use]
    pub const fn new(mode: ToggleMode) -> Self {
        Self {
            mode,
            genre: None,
            year: None,
            rating: None,
        }
    }

    /// Sets the genre to toggle.
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Sets the year to toggle.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Sets the rating to toggle.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Returns the value toggled for `field`, ignoring empty strings.
    #[must_use]
    pub fn value_for(&self, field: Field) -> Option<&str> {
        let value: Option<&String> = match field {
            Field::Genre => self.genre.as_ref(),
            Field::Year => self.year.as_ref(),
            Field::Rating => self.rating.as_ref(),
        };
        value.map(String::as_str).filter(|v| !v.is_empty())
    }
}

/// Applies `action` to `criteria`, one toggle per field.
///
/// Fields the action does not name are carried over untouched.
#[must_use]
pub fn reconcile(criteria: Criteria, action: &ToggleAction) -> Criteria {
    let mut updated: Criteria = criteria;
    for field in [Field::Genre, Field::Year, Field::Rating] {
        if let Some(value) = action.value_for(field) {
            debug!(%field, value, mode = %action.mode, "Toggling selection");
            let next: Selection = toggle(updated.selection(field), value, action.mode);
            *updated.selection_mut(field) = next;
        }
    }
    updated
}
