pub const APP_TITLE: &str = "Marquee";
pub const FOOTER_TEXT: &str = "Movie data provided by The Movie Database (TMDB).";
pub const PAGE_WIDTH: usize = 4 * CARD_WIDTH + 3 * CARD_GAP;
pub const CARD_WIDTH: usize = 22;
pub const CARD_GAP: usize = 2;
pub const CARDS_PER_ROW: usize = 4;
pub const LOADING_LABEL: &str = "LOADING";
pub const ERROR_LABEL: &str = "ERROR";
