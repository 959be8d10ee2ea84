// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// An ordered set of chosen filter values.
///
/// Insertion order is kept because it decides the order of the active
/// filter chips. Values are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Builds a selection from raw values.
    ///
    /// Duplicates collapse onto their first occurrence.
    #[must_use]
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection: Self = Self::new();
        for value in values {
            selection.insert(value);
        }
        selection
    }

    /// Returns whether `value` is selected.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Appends `value` if it is not already present.
    ///
    /// Returns `true` if the selection changed.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value: String = value.into();
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Removes `value` if present.
    ///
    /// Returns `true` if the selection changed.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the selected values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns an iterator over the selected values.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    /// Returns the number of selected values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        Self::from_values(values)
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.values
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}
