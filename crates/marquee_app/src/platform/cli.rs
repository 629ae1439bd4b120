use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use marquee_core::Theme;

use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "marquee",
    version,
    about = "Browse now playing, popular and upcoming movies in the terminal"
)]
pub struct Cli {
    /// Config file (RON). Defaults to ./marquee.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API key; overrides the config file and MARQUEE_API_KEY.
    #[arg(long)]
    pub api_key: Option<String>,

    /// API base URL; overrides the config file and MARQUEE_BASE_URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Response language, e.g. en-US.
    #[arg(long)]
    pub language: Option<String>,

    /// Force a theme and remember it.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Flip the remembered theme before rendering.
    #[arg(long, conflicts_with = "theme")]
    pub toggle_theme: bool,

    /// Print every intermediate frame, not only the settled page.
    #[arg(long)]
    pub live: bool,

    /// Disable ANSI colors.
    #[arg(long)]
    pub no_color: bool,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}
