//! Sitemap submission for generated sites.
//!
//! Each `<output>/<slug>/sitemap.xml` is announced to search engines as
//! `<base_url>/<slug>/sitemap.xml`. The announcement itself goes through a
//! [`SubmissionSink`]; production wires a search console client there.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::ServiceError;

/// Default public host when none is given.
pub const DEFAULT_BASE_URL: &str = "https://example.com/";

/// Receives sitemap URLs to submit.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, sitemap_url: &str) -> Result<(), ServiceError>;
}

/// Logs each sitemap URL instead of calling a search console API.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmissionSink;

#[async_trait]
impl SubmissionSink for LogSubmissionSink {
    async fn submit(&self, sitemap_url: &str) -> Result<(), ServiceError> {
        tracing::info!(url = %sitemap_url, "submitting sitemap");
        Ok(())
    }
}

pub struct SeoService {
    sink: Arc<dyn SubmissionSink>,
}

impl SeoService {
    #[must_use]
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self { sink }
    }

    /// Submit the sitemap of every generated site under `output_dir`.
    ///
    /// Returns the submitted URLs in slug order. A missing `output_dir` is
    /// an error; site directories without a sitemap are skipped.
    pub async fn submit_sitemaps(
        &self,
        output_dir: &Path,
        base_url: &str,
    ) -> Result<Vec<String>, ServiceError> {
        let mut submitted = Vec::new();
        for slug in sites_with_sitemap(output_dir)? {
            let url = sitemap_url(base_url, &slug);
            self.sink.submit(&url).await?;
            submitted.push(url);
        }
        Ok(submitted)
    }
}

/// Public URL of a site's sitemap.
#[must_use]
pub fn sitemap_url(base_url: &str, slug: &str) -> String {
    format!("{}/{slug}/sitemap.xml", base_url.trim_end_matches('/'))
}

fn sites_with_sitemap(output_dir: &Path) -> Result<Vec<String>, ServiceError> {
    let mut slugs = Vec::new();
    for entry in std::fs::read_dir(output_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() || !path.join("sitemap.xml").is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(slug) => slugs.push(slug),
            Err(name) => tracing::warn!(?name, "skipping site directory with non-UTF-8 name"),
        }
    }
    slugs.sort();
    Ok(slugs)
}
