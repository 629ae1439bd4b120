use crate::{sort_movies, Category, ErrorInfo, Movie, MovieCategoryState, SortSpec, Theme};

/// Display outcome for one category.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryView {
    Loading,
    Failed(ErrorInfo),
    Empty,
    Ready(Vec<Movie>),
}

/// Map a category slot to exactly one display outcome.
///
/// Priority is loading, then error, then a non-empty payload (sorted by
/// `spec`), then empty. Stale data behind a loading flag or an error is
/// never shown.
pub fn select(state: &MovieCategoryState, spec: SortSpec) -> CategoryView {
    if state.is_loading() {
        return CategoryView::Loading;
    }
    if let Some(error) = state.error() {
        return CategoryView::Failed(error.clone());
    }
    match state.data() {
        Some(list) if !list.is_empty() => CategoryView::Ready(sort_movies(spec, &list.results)),
        _ => CategoryView::Empty,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub category: Category,
    pub title: &'static str,
    pub content: CategoryView,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageViewModel {
    pub theme: Theme,
    pub sections: Vec<SectionView>,
    pub dirty: bool,
}

impl PageViewModel {
    pub fn section(&self, category: Category) -> Option<&SectionView> {
        self.sections
            .iter()
            .find(|section| section.category == category)
    }
}
