use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteGenError {
    /// The ranked niche file has not been produced yet.
    #[error("{} not found. Run the niche selection step first.", .0.display())]
    MissingNiches(PathBuf),

    #[error("No niche data found. Run the niche selection step first.")]
    EmptyNiches,

    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid niche json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

impl SiteGenError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
