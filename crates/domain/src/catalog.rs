// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::movie::{Field, Movie};
use std::collections::HashSet;

/// The records served when no other catalog is supplied.
///
/// Order matters: it is the order movies are listed in and the order
/// in which filter options are discovered.
const BUILTIN_MOVIES: [(&str, &str, &str, &str); 20] = [
    ("The Shawshank Redemption", "Drama", "1994", "R"),
    ("The Godfather", "Crime", "1972", "R"),
    ("Inception", "Sci-Fi", "2010", "PG-13"),
    ("Forrest Gump", "Drama", "1994", "PG-13"),
    ("The Dark Knight", "Action", "2008", "PG-13"),
    ("Pulp Fiction", "Crime", "1994", "R"),
    ("Fight Club", "Drama", "1999", "R"),
    ("The Matrix", "Sci-Fi", "1999", "R"),
    ("Goodfellas", "Crime", "1990", "R"),
    ("Interstellar", "Sci-Fi", "2014", "PG-13"),
    ("Whiplash", "Drama", "2014", "R"),
    ("The Prestige", "Mystery", "2006", "PG-13"),
    ("Parasite", "Thriller", "2019", "R"),
    ("1917", "War", "2019", "R"),
    ("Jojo Rabbit", "Comedy", "2019", "PG-13"),
    ("La La Land", "Musical", "2016", "PG-13"),
    ("Avengers: Endgame", "Action", "2019", "PG-13"),
    ("Toy Story 4", "Animation", "2019", "G"),
    ("The Lion King", "Animation", "1994", "G"),
    ("Jurassic Park", "Adventure", "1993", "PG-13"),
];

/// An immutable, ordered collection of movies.
///
/// The catalog is constructed once and handed to whoever needs it by
/// reference. It is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Creates a catalog from the given movies, preserving their order.
    #[must_use]
    pub const fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Creates the built-in twenty-movie catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let movies: Vec<Movie> = BUILTIN_MOVIES
            .iter()
            .map(|(title, genre, year, rating)| Movie::new(title, genre, year, rating))
            .collect();
        Self::new(movies)
    }

    /// Returns all movies in declaration order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Returns the number of movies in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns whether the catalog holds no movies.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Returns the distinct genres in first-occurrence order.
    #[must_use]
    pub fn distinct_genres(&self) -> Vec<String> {
        distinct_by(&self.movies, Field::Genre)
    }

    /// Returns the distinct years in first-occurrence order.
    #[must_use]
    pub fn distinct_years(&self) -> Vec<String> {
        distinct_by(&self.movies, Field::Year)
    }

    /// Returns the distinct content ratings in first-occurrence order.
    #[must_use]
    pub fn distinct_ratings(&self) -> Vec<String> {
        distinct_by(&self.movies, Field::Rating)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Collects the distinct values of `field` across `movies`.
///
/// Values appear in the order they are first seen. This is not sorted:
/// the result drives the order of filter options shown to the user.
#[must_use]
pub fn distinct_by(movies: &[Movie], field: Field) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    movies
        .iter()
        .map(|movie| movie.value_of(field))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
