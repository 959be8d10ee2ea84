// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! View models handed to rendering.

use marquee::Criteria;
use marquee_domain::{Catalog, Movie, Selection};
use serde::{Deserialize, Serialize};

/// Path that canonical links point at.
pub const ROOT_PATH: &str = "/";

/// A movie as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieView {
    /// The title.
    pub title: String,
    /// The genre.
    pub genre: String,
    /// The release year.
    pub year: String,
    /// The content rating.
    pub rating: String,
}

impl From<&Movie> for MovieView {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title().to_string(),
            genre: movie.genre().to_string(),
            year: movie.year().to_string(),
            rating: movie.rating().to_string(),
        }
    }
}

/// Everything needed to render the full catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    /// Movies matching the current selection, in catalog order.
    pub movies: Vec<MovieView>,
    /// Every genre in the catalog, first-occurrence order.
    pub genres: Vec<String>,
    /// Every year in the catalog, first-occurrence order.
    pub years: Vec<String>,
    /// Every content rating in the catalog, first-occurrence order.
    pub ratings: Vec<String>,
    /// Currently selected genres.
    pub genres_selected: Selection,
    /// Currently selected years.
    pub years_selected: Selection,
    /// Currently selected ratings.
    pub ratings_selected: Selection,
    /// The canonical URL of the current selection.
    pub canonical_url: String,
}

impl PageView {
    /// Builds the page view for `criteria` over `catalog`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The catalog supplying the option lists
    /// * `criteria` - The current selection
    /// * `movies` - The movies matching `criteria`
    #[must_use]
    pub fn build(catalog: &Catalog, criteria: &Criteria, movies: &[&Movie]) -> Self {
        Self {
            movies: to_movie_views(movies),
            genres: catalog.distinct_genres(),
            years: catalog.distinct_years(),
            ratings: catalog.distinct_ratings(),
            genres_selected: criteria.genres.clone(),
            years_selected: criteria.years.clone(),
            ratings_selected: criteria.ratings.clone(),
            canonical_url: crate::query::canonical_url(ROOT_PATH, criteria),
        }
    }

    /// Reassembles the selection this page was built from.
    #[must_use]
    pub fn criteria(&self) -> Criteria {
        Criteria::new(
            self.genres_selected.clone(),
            self.years_selected.clone(),
            self.ratings_selected.clone(),
        )
    }
}

/// The list fragment returned after a toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    /// Movies matching the updated selection, in catalog order.
    pub movies: Vec<MovieView>,
    /// Selected genres after the toggle.
    pub genres_selected: Selection,
    /// Selected years after the toggle.
    pub years_selected: Selection,
    /// Selected ratings after the toggle.
    pub ratings_selected: Selection,
    /// The canonical URL of the updated selection.
    pub canonical_url: String,
}

impl ListView {
    /// Builds the list fragment view for `criteria`.
    #[must_use]
    pub fn build(criteria: &Criteria, movies: &[&Movie]) -> Self {
        Self {
            movies: to_movie_views(movies),
            genres_selected: criteria.genres.clone(),
            years_selected: criteria.years.clone(),
            ratings_selected: criteria.ratings.clone(),
            canonical_url: crate::query::canonical_url(ROOT_PATH, criteria),
        }
    }

    /// Reassembles the selection this fragment was built from.
    #[must_use]
    pub fn criteria(&self) -> Criteria {
        Criteria::new(
            self.genres_selected.clone(),
            self.years_selected.clone(),
            self.ratings_selected.clone(),
        )
    }
}

fn to_movie_views(movies: &[&Movie]) -> Vec<MovieView> {
    movies.iter().map(|movie| MovieView::from(*movie)).collect()
}
