use crate::{Category, ErrorInfo, MovieList, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The page was mounted; load every category.
    PageOpened,
    /// User asked to reload every category.
    RefreshRequested,
    /// A category fetch completed with a payload.
    FetchSucceeded { category: Category, list: MovieList },
    /// A category fetch failed.
    FetchFailed { category: Category, error: ErrorInfo },
    /// User flipped between light and dark mode.
    ThemeToggled,
    /// User picked a specific theme.
    ThemeSelected(Theme),
    /// Theme loaded from stored preferences.
    ThemeRestored(Theme),
    /// Fallback for placeholder wiring.
    NoOp,
}
