// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A filterable attribute of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The movie's genre, e.g. "Drama".
    Genre,
    /// The release year, kept textual.
    Year,
    /// The content rating, e.g. "PG-13".
    Rating,
}

impl Field {
    /// Returns the name of this field as used in logs and messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Year => "year",
            Self::Rating => "rating",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single catalog record.
///
/// Movies carry no identity field; two movies are equal when every
/// attribute matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Movie {
    title: String,
    genre: String,
    year: String,
    rating: String,
}

impl Movie {
    /// Creates a new movie record.
    ///
    /// # Arguments
    ///
    /// * `title` - The display title
    /// * `genre` - The genre
    /// * `year` - The release year as text
    /// * `rating` - The content rating
    #[must_use]
    pub fn new(title: &str, genre: &str, year: &str, rating: &str) -> Self {
        Self {
            title: title.to_string(),
            genre: genre.to_string(),
            year: year.to_string(),
            rating: rating.to_string(),
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the genre.
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Returns the release year.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the content rating.
    #[must_use]
    pub fn rating(&self) -> &str {
        &self.rating
    }

    /// Returns the value this movie holds for the given field.
    #[must_use]
    pub fn value_of(&self, field: Field) -> &str {
        match field {
            Field::Genre => &self.genre,
            Field::Year => &self.year,
            Field::Rating => &self.rating,
        }
    }
}
