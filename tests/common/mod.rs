#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use link_dashboard::prelude::*;
use link_dashboard::routes::app_router;
use std::sync::{Arc, Mutex};

/// Link store kept in memory, with the same observable behavior as the
/// PostgreSQL repository: unique codes, newest-first listing, hard delete.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a link directly, bypassing validation.
    pub fn insert(&self, code: &str, target_url: &str) {
        let mut links = self.links.lock().unwrap();
        let created_at = Utc::now() + Duration::milliseconds(links.len() as i64);
        links.push(Link::new(
            code.to_string(),
            target_url.to_string(),
            0,
            created_at,
            None,
        ));
    }

    pub fn snapshot(&self, code: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, LinkError> {
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.code == new_link.code) {
            return Err(LinkError::DuplicateCode(new_link.code));
        }

        let created_at = Utc::now() + Duration::milliseconds(links.len() as i64);
        let link = Link::new(new_link.code, new_link.target_url, 0, created_at, None);
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError> {
        Ok(self.snapshot(code))
    }

    async fn list(&self) -> Result<Vec<Link>, LinkError> {
        let mut links = self.links.lock().unwrap().clone();
        links.reverse();
        Ok(links)
    }

    async fn delete(&self, code: &str) -> Result<bool, LinkError> {
        let mut links = self.links.lock().unwrap();
        let before = links.len();
        links.retain(|l| l.code != code);
        Ok(links.len() < before)
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), LinkError> {
        let mut links = self.links.lock().unwrap();
        if let Some(link) = links.iter_mut().find(|l| l.code == code) {
            link.total_clicks += 1;
            link.last_clicked_at = Some(Utc::now());
        }
        Ok(())
    }
}

/// Wraps a repository and fails every click increment.
pub struct FailingClicksRepository(pub Arc<InMemoryLinkRepository>);

#[async_trait]
impl LinkRepository for FailingClicksRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, LinkError> {
        self.0.create(new_link).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, LinkError> {
        self.0.find_by_code(code).await
    }

    async fn list(&self) -> Result<Vec<Link>, LinkError> {
        self.0.list().await
    }

    async fn delete(&self, code: &str) -> Result<bool, LinkError> {
        self.0.delete(code).await
    }

    async fn increment_clicks(&self, _code: &str) -> Result<(), LinkError> {
        Err(LinkError::Unexpected("connection reset".to_string()))
    }
}

pub fn create_test_state(repo: Arc<dyn LinkRepository>) -> AppState {
    AppState::new(Arc::new(LinkService::new(repo)))
}

/// Full application router over an in-memory store.
pub fn make_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let server = make_server_with(repo.clone());
    (server, repo)
}

pub fn make_server_with(repo: Arc<dyn LinkRepository>) -> TestServer {
    let app = app_router(create_test_state(repo));
    TestServer::new(app).unwrap()
}
