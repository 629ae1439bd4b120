use chrono::NaiveDate;

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single movie as shown in a carousel.
///
/// Only `release_date` and `vote_average` take part in ordering; the other
/// fields are carried through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub overview: String,
    pub release_date: Option<NaiveDate>,
    pub vote_average: f64,
}

/// Result payload of one category fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieList {
    pub results: Vec<Movie>,
}

impl MovieList {
    pub fn new(results: Vec<Movie>) -> Self {
        Self { results }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Opaque failure attached to a category slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parse an API release date (`YYYY-MM-DD`). Blank input means "unknown".
pub fn parse_release_date(raw: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, RELEASE_DATE_FORMAT).map(Some)
}
