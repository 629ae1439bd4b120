use std::sync::Once;

use chrono::NaiveDate;
use marquee_core::{
    select, update, AppState, Category, CategoryView, ErrorInfo, Movie, MovieCategoryState,
    MovieList, Msg, SortSpec,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(marquee_logging::initialize_for_tests);
}

fn dated(id: u64, date: &str) -> Movie {
    Movie {
        id,
        release_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
        ..Movie::default()
    }
}

fn rated(id: u64, vote: f64) -> Movie {
    Movie {
        id,
        vote_average: vote,
        ..Movie::default()
    }
}

fn loaded(results: Vec<Movie>) -> MovieCategoryState {
    let mut state = MovieCategoryState::new();
    state.succeed(MovieList::new(results));
    state
}

fn failed(message: &str) -> MovieCategoryState {
    let mut state = MovieCategoryState::new();
    state.fail(ErrorInfo::new(message));
    state
}

fn every_spec() -> Vec<SortSpec> {
    Category::ALL.iter().map(|c| SortSpec::for_category(*c)).collect()
}

#[test]
fn loading_wins_over_error_and_data() {
    init_logging();
    let mut state = loaded(vec![rated(1, 5.0)]);
    state.fail(ErrorInfo::new("boom"));
    state.begin();

    for spec in every_spec() {
        assert_eq!(select(&state, spec), CategoryView::Loading);
    }
}

#[test]
fn error_wins_over_stale_data() {
    init_logging();
    let mut state = loaded(vec![rated(1, 5.0)]);
    state.fail(ErrorInfo::new("boom"));

    for spec in every_spec() {
        assert_eq!(
            select(&state, spec),
            CategoryView::Failed(ErrorInfo::new("boom"))
        );
    }
}

#[test]
fn fresh_slot_is_empty() {
    init_logging();
    let state = MovieCategoryState::new();

    for spec in every_spec() {
        assert_eq!(select(&state, spec), CategoryView::Empty);
    }
}

#[test]
fn scenario_now_playing_sorted_by_release_date() {
    init_logging();
    let state = loaded(vec![dated(1, "2024-03-01"), dated(2, "2024-01-01")]);

    let view = select(&state, SortSpec::for_category(Category::NowPlaying));

    assert_eq!(
        view,
        CategoryView::Ready(vec![dated(2, "2024-01-01"), dated(1, "2024-03-01")])
    );
}

#[test]
fn scenario_popular_sorted_by_vote_average() {
    init_logging();
    let state = loaded(vec![rated(1, 6.5), rated(2, 8.2)]);

    let view = select(&state, SortSpec::for_category(Category::Popular));

    assert_eq!(view, CategoryView::Ready(vec![rated(2, 8.2), rated(1, 6.5)]));
}

#[test]
fn scenario_upcoming_loading_hides_present_data() {
    init_logging();
    let mut state = loaded(vec![rated(1, 6.5)]);
    state.begin();

    let view = select(&state, SortSpec::for_category(Category::Upcoming));

    assert_eq!(view, CategoryView::Loading);
}

#[test]
fn scenario_error_without_data() {
    init_logging();
    let state = failed("network down");

    for spec in every_spec() {
        assert_eq!(
            select(&state, spec),
            CategoryView::Failed(ErrorInfo::new("network down"))
        );
    }
}

#[test]
fn scenario_empty_results() {
    init_logging();
    let state = loaded(Vec::new());

    for spec in every_spec() {
        assert_eq!(select(&state, spec), CategoryView::Empty);
    }
}

#[test]
fn selecting_does_not_mutate_state() {
    init_logging();
    let state = loaded(vec![rated(1, 6.5), rated(2, 8.2)]);
    let before = state.clone();

    let _ = select(&state, SortSpec::for_category(Category::Popular));
    let _ = select(&state, SortSpec::for_category(Category::Popular));

    assert_eq!(state, before);
}

#[test]
fn page_view_lists_sections_in_layout_order() {
    init_logging();
    let (state, _effects) = update(AppState::new(), Msg::PageOpened);
    let view = state.view();

    let order: Vec<_> = view.sections.iter().map(|s| s.category).collect();
    assert_eq!(
        order,
        vec![Category::NowPlaying, Category::Upcoming, Category::Popular]
    );
    let titles: Vec<_> = view.sections.iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        vec!["Now Playing", "Upcoming Movies", "Popular Movies"]
    );
    assert!(view
        .sections
        .iter()
        .all(|s| s.content == CategoryView::Loading));
}

#[test]
fn one_failure_leaves_sibling_sections_intact() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PageOpened);
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            category: Category::Popular,
            error: ErrorInfo::new("http status 500"),
        },
    );
    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            category: Category::Upcoming,
            list: MovieList::new(vec![rated(1, 6.0), rated(2, 7.0)]),
        },
    );
    let view = state.view();

    assert_eq!(
        view.section(Category::Popular).unwrap().content,
        CategoryView::Failed(ErrorInfo::new("http status 500"))
    );
    assert_eq!(
        view.section(Category::Upcoming).unwrap().content,
        CategoryView::Ready(vec![rated(2, 7.0), rated(1, 6.0)])
    );
    assert_eq!(
        view.section(Category::NowPlaying).unwrap().content,
        CategoryView::Loading
    );
}

#[test]
fn empty_labels_are_category_specific() {
    assert_eq!(Category::NowPlaying.empty_label(), "NOW PLAYING EMPTY");
    assert_eq!(Category::Popular.empty_label(), "POPULAR MOVIES EMPTY");
    assert_eq!(Category::Upcoming.empty_label(), "UPCOMING MOVIES EMPTY");
}
