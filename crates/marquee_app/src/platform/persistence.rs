use std::fs;
use std::path::Path;

use marquee_core::Theme;
use marquee_engine::write_atomically;
use marquee_logging::{marquee_error, marquee_info, marquee_warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
enum PersistedTheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPrefs {
    #[serde(default)]
    theme: PersistedTheme,
}

/// Remembered theme, or `None` when nothing usable is stored.
pub(crate) fn load_theme(path: &Path) -> Option<Theme> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            marquee_warn!("Failed to read preferences from {:?}: {}", path, err);
            return None;
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            marquee_warn!("Failed to parse preferences from {:?}: {}", path, err);
            return None;
        }
    };

    let theme = match prefs.theme {
        PersistedTheme::Light => Theme::Light,
        PersistedTheme::Dark => Theme::Dark,
    };
    marquee_info!("Loaded theme {:?} from {:?}", theme, path);
    Some(theme)
}

pub(crate) fn save_theme(path: &Path, theme: Theme) {
    let prefs = PersistedPrefs {
        theme: match theme {
            Theme::Light => PersistedTheme::Light,
            Theme::Dark => PersistedTheme::Dark,
        },
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            marquee_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomically(path, &content) {
        marquee_error!("Failed to write preferences to {:?}: {}", path, err);
    }
}
