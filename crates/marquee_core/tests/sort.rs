use chrono::NaiveDate;
use marquee_core::{sort_movies, Movie, SortDirection, SortKey, SortSpec};

fn movie(id: u64, date: Option<(i32, u32, u32)>, vote: f64) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        release_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        vote_average: vote,
        ..Movie::default()
    }
}

fn ids(movies: &[Movie]) -> Vec<u64> {
    movies.iter().map(|m| m.id).collect()
}

#[test]
fn release_date_ascending_puts_earliest_first() {
    let movies = vec![
        movie(1, Some((2024, 3, 1)), 0.0),
        movie(2, Some((2023, 12, 31)), 0.0),
        movie(3, Some((2024, 1, 15)), 0.0),
    ];
    let spec = SortSpec::new(SortKey::ReleaseDate, SortDirection::Ascending);

    assert_eq!(ids(&sort_movies(spec, &movies)), vec![2, 3, 1]);
}

#[test]
fn vote_average_descending_puts_highest_first() {
    let movies = vec![movie(1, None, 6.5), movie(2, None, 8.2), movie(3, None, 7.0)];
    let spec = SortSpec::new(SortKey::VoteAverage, SortDirection::Descending);

    assert_eq!(ids(&sort_movies(spec, &movies)), vec![2, 3, 1]);
}

#[test]
fn unknown_release_dates_sort_first_when_ascending() {
    let movies = vec![movie(1, Some((2024, 1, 1)), 0.0), movie(2, None, 0.0)];
    let spec = SortSpec::new(SortKey::ReleaseDate, SortDirection::Ascending);

    assert_eq!(ids(&sort_movies(spec, &movies)), vec![2, 1]);
}

#[test]
fn equal_keys_keep_input_order_in_both_directions() {
    let movies = vec![
        movie(1, Some((2024, 1, 1)), 7.5),
        movie(2, Some((2024, 2, 1)), 9.0),
        movie(3, Some((2024, 1, 1)), 7.5),
        movie(4, Some((2024, 1, 1)), 7.5),
    ];

    let by_vote_desc = SortSpec::new(SortKey::VoteAverage, SortDirection::Descending);
    assert_eq!(ids(&sort_movies(by_vote_desc, &movies)), vec![2, 1, 3, 4]);

    let by_vote_asc = SortSpec::new(SortKey::VoteAverage, SortDirection::Ascending);
    assert_eq!(ids(&sort_movies(by_vote_asc, &movies)), vec![1, 3, 4, 2]);

    let by_date_desc = SortSpec::new(SortKey::ReleaseDate, SortDirection::Descending);
    assert_eq!(ids(&sort_movies(by_date_desc, &movies)), vec![2, 1, 3, 4]);
}

#[test]
fn sorting_twice_is_idempotent() {
    let movies = vec![
        movie(1, Some((2022, 5, 1)), 5.0),
        movie(2, Some((2021, 5, 1)), 5.0),
        movie(3, Some((2023, 5, 1)), 8.0),
        movie(4, None, 8.0),
    ];

    for spec in [
        SortSpec::new(SortKey::ReleaseDate, SortDirection::Ascending),
        SortSpec::new(SortKey::ReleaseDate, SortDirection::Descending),
        SortSpec::new(SortKey::VoteAverage, SortDirection::Ascending),
        SortSpec::new(SortKey::VoteAverage, SortDirection::Descending),
    ] {
        let once = sort_movies(spec, &movies);
        let twice = sort_movies(spec, &once);
        assert_eq!(once, twice, "{spec:?}");
    }
}

#[test]
fn sorting_leaves_input_untouched() {
    let movies = vec![movie(1, None, 1.0), movie(2, None, 2.0)];
    let spec = SortSpec::new(SortKey::VoteAverage, SortDirection::Descending);

    let _ = sort_movies(spec, &movies);
    assert_eq!(ids(&movies), vec![1, 2]);
}
