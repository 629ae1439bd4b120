use crate::{AppState, Category, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageOpened | Msg::RefreshRequested => {
            // All three slots enter loading in the same update so a render
            // never sees a partially dispatched batch.
            Category::ALL
                .iter()
                .map(|&category| {
                    state.category_mut(category).begin();
                    Effect::FetchCategory { category }
                })
                .collect()
        }
        Msg::FetchSucceeded { category, list } => {
            state.category_mut(category).succeed(list);
            Vec::new()
        }
        Msg::FetchFailed { category, error } => {
            state.category_mut(category).fail(error);
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            vec![Effect::PersistTheme { theme }]
        }
        Msg::ThemeSelected(theme) => {
            if state.theme() == theme {
                Vec::new()
            } else {
                state.set_theme(theme);
                vec![Effect::PersistTheme { theme }]
            }
        }
        Msg::ThemeRestored(theme) => {
            state.set_theme(theme);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
