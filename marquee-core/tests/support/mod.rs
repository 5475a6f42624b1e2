#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use marquee_core::providers::{
    AlternateTitle, BackTranslator, CatalogApi, MovieRecord, PosterImage,
    ProviderError, SearchHit, SearchPage,
};
use marquee_core::speech::SpeechOutput;
use marquee_model::MovieId;
use tokio::sync::{Barrier, Semaphore};

/// In-memory catalog whose detail fetches can be held back per movie.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    searches: Mutex<HashMap<String, Vec<SearchHit>>>,
    records: Mutex<HashMap<MovieId, MovieRecord>>,
    images: Mutex<HashMap<MovieId, Vec<PosterImage>>>,
    failing_images: Mutex<HashSet<MovieId>>,
    failing_search: AtomicBool,
    gates: Mutex<HashMap<MovieId, Arc<Semaphore>>>,
    fanout: Mutex<Option<Arc<Barrier>>>,
    pub search_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub locales: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_search(&self, query: &str, hits: Vec<SearchHit>) {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_lowercase(), hits);
    }

    pub fn add_movie(&self, record: MovieRecord, posters: Vec<PosterImage>) {
        self.images.lock().unwrap().insert(record.id, posters);
        self.records.lock().unwrap().insert(record.id, record);
    }

    pub fn fail_images(&self, id: MovieId) {
        self.failing_images.lock().unwrap().insert(id);
    }

    pub fn fail_search(&self) {
        self.failing_search.store(true, Ordering::SeqCst);
    }

    /// Hold detail fetches for `id` until [`release`](Self::release).
    pub fn hold(&self, id: MovieId) {
        self.gates
            .lock()
            .unwrap()
            .insert(id, Arc::new(Semaphore::new(0)));
    }

    pub fn release(&self, id: MovieId) {
        if let Some(gate) = self.gates.lock().unwrap().get(&id) {
            gate.add_permits(1);
        }
    }

    /// Make the record and image fetches wait for each other.
    pub fn require_fanout(&self) {
        *self.fanout.lock().unwrap() = Some(Arc::new(Barrier::new(2)));
    }

    async fn meet_fanout(&self) {
        let barrier = self.fanout.lock().unwrap().clone();
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn search_movies(
        &self,
        query: &str,
        locale: &str,
        _page: u32,
    ) -> Result<SearchPage, ProviderError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.locales.lock().unwrap().push(locale.to_string());
        if self.failing_search.load(Ordering::SeqCst) {
            return Err(ProviderError::RateLimited);
        }
        let hits = self
            .searches
            .lock()
            .unwrap()
            .get(&query.to_lowercase())
            .cloned()
            .unwrap_or_default();
        Ok(SearchPage {
            hits,
            total_pages: 1,
        })
    }

    async fn get_movie_detail(
        &self,
        id: MovieId,
    ) -> Result<MovieRecord, ProviderError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.meet_fanout().await;

        let gate = self.gates.lock().unwrap().get(&id).cloned();
        if let Some(gate) = gate {
            gate.acquire().await.unwrap().forget();
        }

        self.records
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(ProviderError::NotFound)
    }

    async fn get_movie_images(
        &self,
        id: MovieId,
    ) -> Result<Vec<PosterImage>, ProviderError> {
        self.meet_fanout().await;
        if self.failing_images.lock().unwrap().contains(&id) {
            return Err(ProviderError::ApiError("image service down".into()));
        }
        Ok(self
            .images
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Translator with canned answers and a quota that trips after `limit`
/// calls.
#[derive(Debug)]
pub struct FakeTranslator {
    answers: Mutex<HashMap<String, String>>,
    limit: usize,
    exhausted: AtomicBool,
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<(String, String, String)>>,
}

impl FakeTranslator {
    pub fn new() -> Arc<Self> {
        Self::with_quota(usize::MAX)
    }

    pub fn with_quota(limit: usize) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(HashMap::new()),
            limit,
            exhausted: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn answer(&self, text: &str, translation: &str) {
        self.answers
            .lock()
            .unwrap()
            .insert(text.to_string(), translation.to_string());
    }
}

#[async_trait]
impl BackTranslator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<String>, ProviderError> {
        if self.is_quota_exhausted() {
            return Err(ProviderError::QuotaExhausted);
        }
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push((
            text.to_string(),
            from.to_string(),
            to.to_string(),
        ));
        if call >= self.limit {
            self.exhausted.store(true, Ordering::SeqCst);
            return Err(ProviderError::QuotaExhausted);
        }
        Ok(self.answers.lock().unwrap().get(text).cloned())
    }

    fn is_quota_exhausted(&self) -> bool {
        self.exhausted.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
pub struct RecordingSpeech {
    pub spoken: Mutex<Vec<(String, String)>>,
}

impl SpeechOutput for RecordingSpeech {
    fn speak(&self, text: &str, lang_code: &str) {
        self.spoken
            .lock()
            .unwrap()
            .push((text.to_string(), lang_code.to_string()));
    }
}

pub fn hit(id: u64, title: &str, popularity: f64) -> SearchHit {
    SearchHit {
        id: MovieId(id),
        title: title.to_string(),
        release_year: "1977".to_string(),
        poster_url: Some(format!("https://img/w185/{id}.jpg")),
        popularity,
    }
}

pub fn record(
    id: u64,
    title: &str,
    original_language: &str,
    alternates: &[(&str, &str, &str)],
) -> MovieRecord {
    MovieRecord {
        id: MovieId(id),
        title: title.to_string(),
        original_title: title.to_string(),
        original_language: original_language.to_string(),
        release_year: "1977".to_string(),
        poster_url: Some(format!("https://img/w500/{id}-default.jpg")),
        alternate_titles: alternates
            .iter()
            .map(|(region, lang, title)| AlternateTitle {
                region_code: region.to_string(),
                language_code: lang.to_string(),
                title: title.to_string(),
            })
            .collect(),
    }
}

pub fn poster(lang: &str, url: &str) -> PosterImage {
    PosterImage {
        language_code: Some(lang.to_string()),
        url: url.to_string(),
    }
}
