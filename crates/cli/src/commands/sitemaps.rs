use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use leadengine_service::{LogSubmissionSink, SeoService};

pub(crate) async fn run(output_dir: &Path, base_url: &str) -> Result<()> {
    let service = SeoService::new(Arc::new(LogSubmissionSink));
    let urls = service
        .submit_sitemaps(output_dir, base_url)
        .await
        .with_context(|| format!("reading generated sites in {}", output_dir.display()))?;
    for url in &urls {
        println!("{url}");
    }
    Ok(())
}
