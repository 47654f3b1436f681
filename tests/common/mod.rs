//! Shared test fixtures: in-memory repositories and server setup.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicI64, Ordering},
};

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::mpsc;

use shortly::api;
use shortly::api::handlers::{docs_handler, health_handler, openapi_handler, redirect_handler};
use shortly::application::services::{AnalyticsService, LinkService};
use shortly::domain::click_event::ClickEvent;
use shortly::domain::entities::{Click, Link, NewClick, NewLink};
use shortly::domain::repositories::{
    AnalyticsRepository, ClickQuery, CreateLinkError, LinkRepository,
};
use shortly::error::AppError;
use shortly::state::AppState;
use shortly::utils::ip_hasher::IpHasher;

pub const TEST_SALT: &str = "test-salt";
pub const CLICK_QUEUE_CAPACITY: usize = 64;

/// Link store backed by a `Vec`, enforcing code uniqueness like the real
/// database constraint does.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a link directly, bypassing the service layer.
    pub fn insert(
        &self,
        code: &str,
        original_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Link {
        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            code.to_string(),
            original_url.to_string(),
            Utc::now(),
            expires_at,
        );
        self.links
            .lock()
            .unwrap()
            .push(link.clone());
        link
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, CreateLinkError> {
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.code == new_link.code) {
            return Err(CreateLinkError::CodeTaken);
        }

        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            new_link.code,
            new_link.original_url,
            Utc::now(),
            new_link.expires_at,
        );
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Link store where every insert collides, for exercising retry exhaustion.
pub struct AlwaysCollidingLinkRepository;

#[async_trait]
impl LinkRepository for AlwaysCollidingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, CreateLinkError> {
        Err(CreateLinkError::CodeTaken)
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Ok(None)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Click store backed by a `Vec`, with a switch to make inserts fail.
#[derive(Default)]
pub struct InMemoryAnalyticsRepository {
    clicks: Mutex<Vec<Click>>,
    next_id: AtomicI64,
    fail_inserts: AtomicBool,
}

impl InMemoryAnalyticsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `record_click` fail.
    pub fn fail_inserts(&self) {
        self.fail_inserts.store(true, Ordering::SeqCst);
    }

    /// Seeds a click with an explicit timestamp, for ordering/filter tests.
    pub fn insert_click_at(
        &self,
        link_id: i64,
        clicked_at: DateTime<Utc>,
        user_agent: Option<&str>,
    ) -> Click {
        let click = Click::new(
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            link_id,
            clicked_at,
            user_agent.map(|s| s.to_string()),
            None,
            None,
        );
        self.clicks.lock().unwrap().push(click.clone());
        click
    }

    pub fn recorded_clicks(&self) -> Vec<Click> {
        self.clicks.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyticsRepository for InMemoryAnalyticsRepository {
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::internal("insert failed", json!({})));
        }

        let click = Click::new(
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            new_click.link_id,
            Utc::now(),
            new_click.user_agent,
            new_click.referer,
            new_click.ip_hash,
        );
        self.clicks.lock().unwrap().push(click.clone());
        Ok(click)
    }

    async fn count_clicks(&self, link_id: i64) -> Result<i64, AppError> {
        Ok(self
            .clicks
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.link_id == link_id)
            .count() as i64)
    }

    async fn list_clicks(&self, link_id: i64, query: ClickQuery) -> Result<Vec<Click>, AppError> {
        let mut matching: Vec<Click> = self
            .clicks
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.link_id == link_id)
            .filter(|c| query.from.is_none_or(|from| c.clicked_at >= from))
            .filter(|c| query.to.is_none_or(|to| c.clicked_at <= to))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at));
        matching.truncate(query.limit as usize);
        Ok(matching)
    }
}

/// Everything a handler test needs: the state, the repositories behind it and
/// the consumer half of the click queue.
pub struct TestContext {
    pub state: AppState,
    pub click_rx: mpsc::Receiver<ClickEvent>,
    pub link_repo: Arc<InMemoryLinkRepository>,
    pub analytics_repo: Arc<InMemoryAnalyticsRepository>,
}

pub fn create_test_state(base_url: Option<&str>) -> TestContext {
    let link_repo = Arc::new(InMemoryLinkRepository::new());
    let analytics_repo = Arc::new(InMemoryAnalyticsRepository::new());
    let (click_tx, click_rx) = mpsc::channel(CLICK_QUEUE_CAPACITY);

    let state = AppState {
        link_service: Arc::new(LinkService::new(link_repo.clone())),
        analytics_service: Arc::new(AnalyticsService::new(analytics_repo.clone())),
        ip_hasher: Arc::new(IpHasher::new(TEST_SALT)),
        click_sender: click_tx,
        base_url: base_url.map(|s| s.to_string()),
    };

    TestContext {
        state,
        click_rx,
        link_repo,
        analytics_repo,
    }
}

/// Spins up a test server with the full route table.
pub fn test_server(state: AppState) -> TestServer {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/openapi.json", get(openapi_handler))
        .route("/docs", get(docs_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .with_state(state);

    TestServer::new(router).unwrap()
}
