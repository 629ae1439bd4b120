use std::cmp::Ordering;

use crate::{Category, Movie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    ReleaseDate,
    VoteAverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Key and direction used to order one category's list at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Fixed ordering policy per category.
    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::NowPlaying => Self::new(SortKey::ReleaseDate, SortDirection::Ascending),
            Category::Popular | Category::Upcoming => {
                Self::new(SortKey::VoteAverage, SortDirection::Descending)
            }
        }
    }
}

/// Stable sort of `movies` by `spec`, returning a new sequence.
///
/// Descending order reverses the comparator rather than the output, so
/// movies with equal keys keep their input order in both directions.
/// Unknown release dates sort before every known date.
pub fn sort_movies(spec: SortSpec, movies: &[Movie]) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| compare(spec, a, b));
    sorted
}

fn compare(spec: SortSpec, a: &Movie, b: &Movie) -> Ordering {
    let ordering = match spec.key {
        SortKey::ReleaseDate => a.release_date.cmp(&b.release_date),
        SortKey::VoteAverage => a.vote_average.total_cmp(&b.vote_average),
    };
    match spec.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
