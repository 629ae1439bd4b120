use std::fmt;

use serde::Deserialize;

/// Remote movie lists the engine knows how to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    NowPlaying,
    Popular,
    Upcoming,
}

impl ListKind {
    /// Path segment under `/movie/`.
    pub fn path(self) -> &'static str {
        match self {
            ListKind::NowPlaying => "now_playing",
            ListKind::Popular => "popular",
            ListKind::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One entry of a list response, as sent by the API.
///
/// Everything except `id` may be absent or `null`; one sparse entry must
/// not reject the whole page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ApiMovie {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// First page of a list response. Paging metadata is not decoded.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub results: Vec<ApiMovie>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ListFetched {
        kind: ListKind,
        result: Result<MoviePage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
    /// The fetch task panicked or was aborted before reporting.
    TaskFailed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::TaskFailed => write!(f, "fetch task failed"),
        }
    }
}
