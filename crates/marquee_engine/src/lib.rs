//! Marquee engine: movie list fetching, background execution and file IO.
mod engine;
mod fetch;
mod persist;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, MovieApi, ReqwestMovieApi};
pub use persist::{ensure_parent_dir, write_atomically, PersistError};
pub use types::{ApiMovie, EngineEvent, FailureKind, FetchError, ListKind, MoviePage};
