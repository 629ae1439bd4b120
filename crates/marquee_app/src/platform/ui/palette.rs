use marquee_core::Theme;

/// ANSI styling for one theme. Every field is empty when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bar: &'static str,
    pub heading: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const PLAIN: Palette = Palette {
        bar: "",
        heading: "",
        accent: "",
        muted: "",
        error: "",
        reset: "",
    };

    const LIGHT: Palette = Palette {
        bar: "\x1b[30;47m",
        heading: "\x1b[1;34m",
        accent: "\x1b[33m",
        muted: "\x1b[90m",
        error: "\x1b[31m",
        reset: "\x1b[0m",
    };

    const DARK: Palette = Palette {
        bar: "\x1b[97;40m",
        heading: "\x1b[1;96m",
        accent: "\x1b[93m",
        muted: "\x1b[37m",
        error: "\x1b[91m",
        reset: "\x1b[0m",
    };

    pub fn for_theme(theme: Theme, color: bool) -> Self {
        match (color, theme) {
            (false, _) => Self::PLAIN,
            (true, Theme::Light) => Self::LIGHT,
            (true, Theme::Dark) => Self::DARK,
        }
    }
}
