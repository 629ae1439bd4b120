use std::time::Duration;

use futures_util::StreamExt;
use marquee_logging::{marquee_debug, marquee_warn};
use url::Url;

use crate::{FailureKind, FetchError, ListKind, MoviePage};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub api_key: String,
    pub language: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: String::new(),
            language: "en-US".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Source of movie lists. Each call is independent; nothing is cached or retried.
#[async_trait::async_trait]
pub trait MovieApi: Send + Sync {
    async fn fetch_list(&self, kind: ListKind) -> Result<MoviePage, FetchError>;

    async fn get_now_playing_movies(&self) -> Result<MoviePage, FetchError> {
        self.fetch_list(ListKind::NowPlaying).await
    }

    async fn get_popular_movies(&self) -> Result<MoviePage, FetchError> {
        self.fetch_list(ListKind::Popular).await
    }

    async fn get_upcoming_movies(&self) -> Result<MoviePage, FetchError> {
        self.fetch_list(ListKind::Upcoming).await
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestMovieApi {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestMovieApi {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// Full request URL for the first page of `kind`.
    pub fn endpoint(&self, kind: ListKind) -> Result<Url, FetchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/movie/{}", kind.path()))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.settings.api_key)
            .append_pair("language", &self.settings.language)
            .append_pair("page", "1");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl MovieApi for ReqwestMovieApi {
    async fn fetch_list(&self, kind: ListKind) -> Result<MoviePage, FetchError> {
        let url = self.endpoint(kind)?;
        marquee_debug!("GET /movie/{} (language={})", kind, self.settings.language);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            marquee_warn!("/movie/{} answered {}", kind, status);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let page: MoviePage = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        marquee_debug!(
            "/movie/{} returned {} movies ({} bytes)",
            kind,
            page.results.len(),
            bytes.len()
        );
        Ok(page)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    // The request URL carries the api key.
    let err = err.without_url();
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return FetchError::new(FailureKind::InvalidUrl, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
