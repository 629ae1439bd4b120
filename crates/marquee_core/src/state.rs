use crate::view_model::{select, PageViewModel, SectionView};
use crate::{ErrorInfo, MovieList, SortSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    NowPlaying,
    Popular,
    Upcoming,
}

impl Category {
    /// Order in which fetches are dispatched.
    pub const ALL: [Category; 3] = [Category::NowPlaying, Category::Popular, Category::Upcoming];

    /// Order in which sections appear on the page.
    pub const PAGE_ORDER: [Category; 3] =
        [Category::NowPlaying, Category::Upcoming, Category::Popular];

    pub fn title(self) -> &'static str {
        match self {
            Category::NowPlaying => "Now Playing",
            Category::Popular => "Popular Movies",
            Category::Upcoming => "Upcoming Movies",
        }
    }

    pub fn empty_label(self) -> &'static str {
        match self {
            Category::NowPlaying => "NOW PLAYING EMPTY",
            Category::Popular => "POPULAR MOVIES EMPTY",
            Category::Upcoming => "UPCOMING MOVIES EMPTY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Fetch status and last result of one category.
///
/// Only `begin`, `succeed` and `fail` change it. `begin` does not clear a
/// stale error or payload from an earlier fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieCategoryState {
    is_loading: bool,
    error: Option<ErrorInfo>,
    data: Option<MovieList>,
}

impl MovieCategoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    pub fn data(&self) -> Option<&MovieList> {
        self.data.as_ref()
    }

    pub fn begin(&mut self) {
        self.is_loading = true;
    }

    pub fn succeed(&mut self, payload: MovieList) {
        self.is_loading = false;
        self.error = None;
        self.data = Some(payload);
    }

    pub fn fail(&mut self, error: ErrorInfo) {
        self.is_loading = false;
        self.error = Some(error);
    }
}

/// Page-wide state: one slot per category plus the theme.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    now_playing: MovieCategoryState,
    popular: MovieCategoryState,
    upcoming: MovieCategoryState,
    theme: Theme,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, category: Category) -> &MovieCategoryState {
        match category {
            Category::NowPlaying => &self.now_playing,
            Category::Popular => &self.popular,
            Category::Upcoming => &self.upcoming,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// True once no category has a fetch in flight.
    pub fn is_settled(&self) -> bool {
        Category::ALL
            .iter()
            .all(|category| !self.category(*category).is_loading())
    }

    pub fn view(&self) -> PageViewModel {
        let sections = Category::PAGE_ORDER
            .iter()
            .map(|&category| SectionView {
                category,
                title: category.title(),
                content: select(self.category(category), SortSpec::for_category(category)),
            })
            .collect();
        PageViewModel {
            theme: self.theme,
            sections,
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn category_mut(&mut self, category: Category) -> &mut MovieCategoryState {
        self.dirty = true;
        match category {
            Category::NowPlaying => &mut self.now_playing,
            Category::Popular => &mut self.popular,
            Category::Upcoming => &mut self.upcoming,
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.dirty = true;
        }
    }
}
