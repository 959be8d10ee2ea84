// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use marquee_domain::{Catalog, Field, Movie, Selection};

/// The chosen values for every filterable field.
///
/// An empty selection places no constraint on its field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Chosen genres.
    pub genres: Selection,
    /// Chosen years.
    pub years: Selection,
    /// Chosen content ratings.
    pub ratings: Selection,
}

impl Criteria {
    /// Creates criteria from per-field selections.
    #[must_use]
    pub const fn new(genres: Selection, years: Selection, ratings: Selection) -> Self {
        Self {
            genres,
            years,
            ratings,
        }
    }

    /// Criteria that every movie satisfies.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self::new(Selection::new(), Selection::new(), Selection::new())
    }

    /// Returns the selection for `field`.
    #[must_use]
    pub const fn selection(&self, field: Field) -> &Selection {
        match field {
            Field::Genre => &self.genres,
            Field::Year => &self.years,
            Field::Rating => &self.ratings,
        }
    }

    /// Returns a mutable reference to the selection for `field`.
    pub const fn selection_mut(&mut self, field: Field) -> &mut Selection {
        match field {
            Field::Genre => &mut self.genres,
            Field::Year => &mut self.years,
            Field::Rating => &mut self.ratings,
        }
    }

    /// Returns whether no field is constrained.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.genres.is_empty() && self.years.is_empty() && self.ratings.is_empty()
    }

    /// Returns whether `movie` satisfies every field.
    ///
    /// Values within a field are alternatives; fields must all hold.
    #[must_use]
    pub fn matches(&self, movie: &Movie) -> bool {
        [Field::Genre, Field::Year, Field::Rating]
            .into_iter()
            .all(|field| admits(self.selection(field), movie.value_of(field)))
    }
}

fn admits(selection: &Selection, value: &str) -> bool {
    selection.is_empty() || selection.contains(value)
}

/// Returns the movies of `catalog` that satisfy `criteria`.
///
/// The result keeps catalog order. Values unknown to the catalog simply
/// match nothing; an empty result is not an error.
///
/// # Arguments
///
/// * `catalog` - The catalog to search
/// * `criteria` - The selections to apply
#[must_use]
pub fn apply_filters<'a>(catalog: &'a Catalog, criteria: &Criteria) -> Vec<&'a Movie> {
    catalog
        .movies()
        .iter()
        .filter(|movie| criteria.matches(movie))
        .collect()
}
