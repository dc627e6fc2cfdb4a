//! Summary sources: where the JSON summary document comes from.
//!
//! Each render cycle loads fresh; implementations must not cache between
//! calls, so edits to the summary show up on the next invocation.

use crate::model::DesignRecord;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;

#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Fetch and parse the current summary.
    async fn load(&self) -> anyhow::Result<Vec<DesignRecord>>;

    /// Human-readable label for error and status text.
    fn origin(&self) -> String;
}

/// Reads `summary.json` from disk, re-reading on every call.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SummarySource for FileSource {
    async fn load(&self) -> anyhow::Result<Vec<DesignRecord>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("could not read summary: {}", self.path.display()))?;
        let records: Vec<DesignRecord> = serde_json::from_str(&raw).with_context(|| {
            format!(
                "summary is not a JSON array of design records: {}",
                self.path.display()
            )
        })?;
        tracing::debug!(count = records.len(), path = %self.path.display(), "loaded summary");
        Ok(records)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fetches the summary over HTTP with a cache-busting query parameter so
/// intermediaries never serve a stale document.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SummarySource for HttpSource {
    async fn load(&self) -> anyhow::Result<Vec<DesignRecord>> {
        let sep = if self.url.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}cache={}",
            self.url,
            sep,
            chrono::Utc::now().timestamp_millis()
        );
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("could not reach {}", self.url))?;
        if !resp.status().is_success() {
            anyhow::bail!(
                "could not read summary from {}: HTTP {}",
                self.url,
                resp.status()
            );
        }
        let records: Vec<DesignRecord> = resp.json().await.with_context(|| {
            format!("summary at {} is not a JSON array of design records", self.url)
        })?;
        tracing::debug!(count = records.len(), url = %self.url, "loaded summary");
        Ok(records)
    }

    fn origin(&self) -> String {
        self.url.clone()
    }
}
