// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Criteria;
use marquee_domain::{Movie, Selection};

pub fn criteria(genres: &[&str], years: &[&str], ratings: &[&str]) -> Criteria {
    Criteria::new(
        Selection::from_values(genres.iter().copied()),
        Selection::from_values(years.iter().copied()),
        Selection::from_values(ratings.iter().copied()),
    )
}

pub fn titles(movies: &[&Movie]) -> Vec<String> {
    movies.iter().map(|m| m.title().to_string()).collect()
}
