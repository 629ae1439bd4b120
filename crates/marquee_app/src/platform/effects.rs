use std::path::PathBuf;
use std::time::Duration;

use marquee_core::{parse_release_date, Category, Effect, ErrorInfo, Movie, MovieList, Msg};
use marquee_engine::{ApiMovie, EngineEvent, EngineHandle, ListKind, MoviePage};
use marquee_logging::{marquee_debug, marquee_error, marquee_info, marquee_warn};

use super::persistence;

/// Executes core effects and turns engine completions back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    prefs_path: PathBuf,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, prefs_path: PathBuf) -> Self {
        Self { engine, prefs_path }
    }

    /// Execute `effects`. Returns follow-up messages for fetches that could
    /// not be handed to the engine, so their slots still leave loading.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchCategory { category } => {
                    marquee_info!("Fetching {:?}", category);
                    if let Err(err) = self.engine.fetch(list_kind(category)) {
                        marquee_error!("Could not start {:?} fetch: {}", category, err);
                        follow_ups.push(Msg::FetchFailed {
                            category,
                            error: ErrorInfo::new(err.to_string()),
                        });
                    }
                }
                Effect::PersistTheme { theme } => {
                    marquee_debug!("Persisting theme {:?}", theme);
                    persistence::save_theme(&self.prefs_path, theme);
                }
            }
        }
        follow_ups
    }

    /// Block up to `timeout` for one completion, then drain whatever else
    /// already arrived so the caller can apply them before a single render.
    pub fn next_batch(&self, timeout: Duration) -> Vec<Msg> {
        let Some(first) = self.engine.recv_timeout(timeout) else {
            return Vec::new();
        };
        let mut batch = vec![event_to_msg(first)];
        while let Some(event) = self.engine.try_recv() {
            batch.push(event_to_msg(event));
        }
        batch
    }
}

fn list_kind(category: Category) -> ListKind {
    match category {
        Category::NowPlaying => ListKind::NowPlaying,
        Category::Popular => ListKind::Popular,
        Category::Upcoming => ListKind::Upcoming,
    }
}

fn category(kind: ListKind) -> Category {
    match kind {
        ListKind::NowPlaying => Category::NowPlaying,
        ListKind::Popular => Category::Popular,
        ListKind::Upcoming => Category::Upcoming,
    }
}

pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListFetched { kind, result } => match result {
            Ok(page) => {
                marquee_info!("{} returned {} movies", kind, page.results.len());
                Msg::FetchSucceeded {
                    category: category(kind),
                    list: movie_list(page),
                }
            }
            Err(err) => {
                marquee_warn!("{} failed: {}", kind, err);
                Msg::FetchFailed {
                    category: category(kind),
                    error: ErrorInfo::new(err.to_string()),
                }
            }
        },
    }
}

fn movie_list(page: MoviePage) -> MovieList {
    MovieList::new(page.results.into_iter().map(movie).collect())
}

fn movie(api: ApiMovie) -> Movie {
    // Absent and null fields both fall back to defaults.
    let release_date = match api.release_date.as_deref().map(parse_release_date) {
        Some(Ok(date)) => date,
        Some(Err(err)) => {
            marquee_warn!("Movie {} has unreadable release date: {}", api.id, err);
            None
        }
        None => None,
    };
    Movie {
        id: api.id,
        title: api.title.unwrap_or_default(),
        poster_path: api.poster_path,
        overview: api.overview.unwrap_or_default(),
        release_date,
        vote_average: api.vote_average.unwrap_or_default(),
    }
}
