use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use marquee_logging::{marquee_debug, marquee_error, marquee_info};

use crate::fetch::{FetchSettings, MovieApi, ReqwestMovieApi};
use crate::{EngineEvent, FailureKind, FetchError, ListKind, MoviePage};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
    #[error("engine thread is gone")]
    Stopped,
}

enum EngineCommand {
    Fetch { kind: ListKind },
}

/// Runs list fetches on a background tokio runtime.
///
/// Every `fetch` spawns an independent task. Completions are reported in
/// whatever order they finish; there is no cancellation or deduplication.
/// A task that panics still reports a `TaskFailed` completion.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let api = ReqwestMovieApi::new(settings)?;
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn MovieApi>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("marquee-fetch")
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(handle_command(api, command, event_tx));
            }
            marquee_debug!("engine command channel closed");
        });

        marquee_info!("engine started");
        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, kind: ListKind) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Fetch { kind })
            .map_err(|_| EngineError::Stopped)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next completion.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    api: Arc<dyn MovieApi>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { kind } => {
            // The request runs in its own task so a panic surfaces as a JoinError here.
            let task = tokio::spawn(fetch_kind(api, kind));
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    marquee_error!("fetch task for {} died: {}", kind, err);
                    Err(FetchError::new(FailureKind::TaskFailed, err.to_string()))
                }
            };
            if event_tx
                .send(EngineEvent::ListFetched { kind, result })
                .is_err()
            {
                marquee_error!("completion for {} dropped: event receiver is gone", kind);
            }
        }
    }
}

async fn fetch_kind(api: Arc<dyn MovieApi>, kind: ListKind) -> Result<MoviePage, FetchError> {
    match kind {
        ListKind::NowPlaying => api.get_now_playing_movies().await,
        ListKind::Popular => api.get_popular_movies().await,
        ListKind::Upcoming => api.get_upcoming_movies().await,
    }
}
