//! In-memory repository gateway for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use base_image_scanner::{GatewayError, RepositoryGateway};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A scripted gateway: trees and files are registered up front, keyed by
/// `owner/name`.
#[derive(Default)]
pub struct StubGateway {
    trees: HashMap<String, Result<Vec<String>, String>>,
    files: HashMap<(String, String), Result<String, String>>,
    events: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree(mut self, repo: &str, paths: &[&str]) -> Self {
        self.trees.insert(
            repo.to_string(),
            Ok(paths.iter().map(|path| path.to_string()).collect()),
        );
        self
    }

    pub fn with_failing_tree(mut self, repo: &str, message: &str) -> Self {
        self.trees.insert(repo.to_string(), Err(message.to_string()));
        self
    }

    pub fn with_file(mut self, repo: &str, path: &str, content: &str) -> Self {
        self.files.insert(
            (repo.to_string(), path.to_string()),
            Ok(content.to_string()),
        );
        self
    }

    pub fn with_failing_file(mut self, repo: &str, path: &str, message: &str) -> Self {
        self.files.insert(
            (repo.to_string(), path.to_string()),
            Err(message.to_string()),
        );
        self
    }

    /// Calls made so far, as `list:owner/name` and `fetch:owner/name:path`.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Highest number of tree listings observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl RepositoryGateway for StubGateway {
    async fn list_files(
        &self,
        owner: &str,
        name: &str,
        _revision: &str,
    ) -> Result<Vec<String>, GatewayError> {
        let repo = format!("{owner}/{name}");
        self.record(format!("list:{repo}"));

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.trees.get(&repo) {
            Some(Ok(paths)) => Ok(paths.clone()),
            Some(Err(message)) => Err(GatewayError::Request {
                message: message.clone(),
            }),
            None => Err(GatewayError::Request {
                message: format!("unknown repository {repo}"),
            }),
        }
    }

    async fn fetch_file(
        &self,
        owner: &str,
        name: &str,
        _revision: &str,
        path: &str,
    ) -> Result<String, GatewayError> {
        let repo = format!("{owner}/{name}");
        self.record(format!("fetch:{repo}:{path}"));
        tokio::task::yield_now().await;

        match self.files.get(&(repo, path.to_string())) {
            Some(Ok(content)) => Ok(content.clone()),
            Some(Err(message)) => Err(GatewayError::Request {
                message: message.clone(),
            }),
            None => Err(GatewayError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}

pub const DOCKERFILE: &str = "\
FROM python:3.9-slim
FROM
COPY requirements.txt .
RUN pip install -r requirements.txt
FROM alpine:latest as base
ENTRYPOINT [\"app\"]
";
