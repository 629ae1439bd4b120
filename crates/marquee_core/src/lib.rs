//! Marquee core: pure category state machine, sorting and view-model helpers.
mod effect;
mod movie;
mod msg;
mod sort;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use movie::{parse_release_date, ErrorInfo, Movie, MovieList};
pub use msg::Msg;
pub use sort::{sort_movies, SortDirection, SortKey, SortSpec};
pub use state::{AppState, Category, MovieCategoryState, Theme};
pub use update::update;
pub use view_model::{select, CategoryView, PageViewModel, SectionView};
