use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use marquee_engine::{
    ApiMovie, EngineEvent, EngineHandle, FailureKind, FetchError, ListKind, MovieApi, MoviePage,
};

/// Answers instantly; popular fails, the others return one movie each.
struct CannedApi;

#[async_trait::async_trait]
impl MovieApi for CannedApi {
    async fn fetch_list(&self, kind: ListKind) -> Result<MoviePage, FetchError> {
        if kind == ListKind::Popular {
            return Err(FetchError {
                kind: FailureKind::HttpStatus(503),
                message: "503 Service Unavailable".to_string(),
            });
        }
        Ok(MoviePage {
            results: vec![ApiMovie {
                id: kind.path().len() as u64,
                title: Some(kind.path().to_string()),
                vote_average: Some(5.0),
                ..ApiMovie::default()
            }],
        })
    }
}

/// Panics on popular, answers the rest with an empty page.
struct PanickyApi;

#[async_trait::async_trait]
impl MovieApi for PanickyApi {
    async fn fetch_list(&self, kind: ListKind) -> Result<MoviePage, FetchError> {
        if kind == ListKind::Popular {
            panic!("decoder exploded");
        }
        Ok(MoviePage::default())
    }
}

fn collect(
    engine: &EngineHandle,
    expected: usize,
) -> HashMap<ListKind, Result<MoviePage, FetchError>> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut results = HashMap::new();
    while results.len() < expected && Instant::now() < deadline {
        if let Some(EngineEvent::ListFetched { kind, result }) =
            engine.recv_timeout(Duration::from_millis(100))
        {
            results.insert(kind, result);
        }
    }
    results
}

#[test]
fn batch_reports_each_list_independently() {
    let engine = EngineHandle::with_api(Arc::new(CannedApi)).expect("engine");
    engine.fetch(ListKind::NowPlaying).unwrap();
    engine.fetch(ListKind::Popular).unwrap();
    engine.fetch(ListKind::Upcoming).unwrap();

    let results = collect(&engine, 3);

    assert_eq!(results.len(), 3);
    assert_eq!(
        results[&ListKind::NowPlaying].as_ref().unwrap().results[0]
            .title
            .as_deref(),
        Some("now_playing")
    );
    assert_eq!(
        results[&ListKind::Upcoming].as_ref().unwrap().results[0]
            .title
            .as_deref(),
        Some("upcoming")
    );
    assert_eq!(
        results[&ListKind::Popular].as_ref().unwrap_err().kind,
        FailureKind::HttpStatus(503)
    );
}

#[test]
fn repeated_fetches_are_not_deduplicated() {
    let engine = EngineHandle::with_api(Arc::new(CannedApi)).expect("engine");
    engine.fetch(ListKind::Upcoming).unwrap();
    engine.fetch(ListKind::Upcoming).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = 0;
    while seen < 2 && Instant::now() < deadline {
        if engine.recv_timeout(Duration::from_millis(100)).is_some() {
            seen += 1;
        }
    }
    assert_eq!(seen, 2);
    assert!(engine.try_recv().is_none());
}

#[test]
fn panicking_fetch_still_reports_completion() {
    let engine = EngineHandle::with_api(Arc::new(PanickyApi)).expect("engine");
    engine.fetch(ListKind::Popular).unwrap();
    engine.fetch(ListKind::Upcoming).unwrap();

    let results = collect(&engine, 2);

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[&ListKind::Popular].as_ref().unwrap_err().kind,
        FailureKind::TaskFailed
    );
    assert!(results[&ListKind::Upcoming].as_ref().unwrap().results.is_empty());
}
