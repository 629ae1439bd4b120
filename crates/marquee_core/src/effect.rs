use crate::{Category, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start fetching the list for one category.
    FetchCategory { category: Category },
    /// Store the theme preference so the next run starts with it.
    PersistTheme { theme: Theme },
}
