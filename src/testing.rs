use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::backoff::Backoff;
use crate::error::Result;
use crate::progress::Progress;
use crate::transport::{ApiResponse, Transport};

pub(crate) const BASE_URL: &str = "https://europe.api.riotgames.com";

pub(crate) fn base_url() -> Url {
    Url::parse(BASE_URL).unwrap()
}

pub(crate) fn ok(body: impl Into<String>) -> ApiResponse {
    respond(StatusCode::OK, body)
}

pub(crate) fn respond(status: StatusCode, body: impl Into<String>) -> ApiResponse {
    ApiResponse {
        status,
        body: body.into(),
    }
}

/// Parse `start` and `count` out of a match id page URL.
pub(crate) fn page_params(url: &Url) -> (usize, usize) {
    let mut start = None;
    let mut count = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "start" => start = value.parse().ok(),
            "count" => count = value.parse().ok(),
            _ => {}
        }
    }
    (start.unwrap(), count.unwrap())
}

type Handler = Box<dyn FnMut(&Url) -> ApiResponse + Send>;

/// Transport answering from a closure and recording every requested URL.
#[derive(Clone)]
pub(crate) struct ScriptedTransport {
    handler: Arc<Mutex<Handler>>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl ScriptedTransport {
    pub(crate) fn new(handler: impl FnMut(&Url) -> ApiResponse + Send + 'static) -> Self {
        Self {
            handler: Arc::new(Mutex::new(Box::new(handler))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|url| url.path().to_string())
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<ApiResponse> {
        self.requests.lock().unwrap().push(url.clone());
        let mut handler = self.handler.lock().unwrap();
        Ok((*handler)(url))
    }
}

/// Backoff that only counts calls.
#[derive(Debug, Default)]
pub(crate) struct CountingBackoff {
    pub(crate) waits: usize,
    pub(crate) decreases: usize,
    pub(crate) resets: usize,
}

#[async_trait]
impl Backoff for CountingBackoff {
    async fn wait(&mut self) {
        self.waits += 1;
    }

    fn decrease(&mut self) {
        self.decreases += 1;
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

/// Progress sink remembering every update it received.
#[derive(Debug, Default)]
pub(crate) struct RecordingProgress {
    pub(crate) ids: Vec<(usize, usize)>,
    pub(crate) matches: Vec<(usize, usize)>,
}

impl Progress for RecordingProgress {
    fn ids_listed(&mut self, fetched: usize, total: usize) {
        self.ids.push((fetched, total));
    }

    fn match_fetched(&mut self, fetched: usize, total: usize) {
        self.matches.push((fetched, total));
    }
}
