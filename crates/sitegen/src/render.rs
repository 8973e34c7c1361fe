use std::path::{Path, PathBuf};

use chrono::Datelike as _;
use leadengine_core::Niche;

use crate::niches::{load_niches, load_top_niche};
use crate::pages::{self, DEFAULT_PHONE, FAQ_FILE, HOME_FILE, PageContext, SUB_SERVICES};
use crate::SiteGenError;

/// Renders static sites into `output_dir/<slug>/`.
#[derive(Debug, Clone)]
pub struct SiteGenerator {
    output_dir: PathBuf,
    static_dir: Option<PathBuf>,
    phone: String,
}

impl SiteGenerator {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), static_dir: None, phone: DEFAULT_PHONE.to_owned() }
    }

    /// Asset directory copied to `<site>/static` on every render.
    #[must_use]
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(static_dir.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render the site for the first-ranked niche in `niches_path`.
    pub fn render_top(&self, niches_path: &Path) -> Result<PathBuf, SiteGenError> {
        let niche = load_top_niche(niches_path)?;
        self.render_site(&niche)
    }

    /// Render a site for every niche in `niches_path`, in rank-file order.
    pub fn render_all(&self, niches_path: &Path) -> Result<Vec<PathBuf>, SiteGenError> {
        let niches = load_niches(niches_path)?;
        let mut dirs = Vec::with_capacity(niches.len());
        for niche in &niches {
            tracing::info!(niche = %niche.niche, city = %niche.city, "generating site");
            dirs.push(self.render_site(niche)?);
        }
        tracing::info!(count = dirs.len(), "all sites generated");
        Ok(dirs)
    }

    /// Write every page of one site and return its directory.
    ///
    /// Existing files are overwritten. A previous `static/` copy is
    /// replaced when a static source directory is configured and exists.
    pub fn render_site(&self, niche: &Niche) -> Result<PathBuf, SiteGenError> {
        let slug = niche.site_slug();
        let site_dir = self.output_dir.join(&slug);
        std::fs::create_dir_all(&site_dir).map_err(SiteGenError::io(&site_dir))?;

        let ctx = PageContext {
            niche: &niche.niche,
            city: &niche.city,
            phone: &self.phone,
            slug: &slug,
            year: chrono::Utc::now().year(),
        };

        write_file(&site_dir.join(HOME_FILE), &pages::home_page(&ctx))?;
        for service in &SUB_SERVICES {
            write_file(&site_dir.join(service.file_name()), &pages::service_page(&ctx, service))?;
        }
        write_file(&site_dir.join(FAQ_FILE), &pages::faq_page(&ctx))?;
        write_file(&site_dir.join("sitemap.xml"), &pages::sitemap(&slug))?;
        write_file(&site_dir.join("robots.txt"), &pages::robots(&slug))?;

        if let Some(static_dir) = self.static_dir.as_deref().filter(|dir| dir.is_dir()) {
            let dest = site_dir.join("static");
            if dest.exists() {
                std::fs::remove_dir_all(&dest).map_err(SiteGenError::io(&dest))?;
            }
            copy_dir(static_dir, &dest)?;
        }

        tracing::info!(
            niche = %niche.niche,
            city = %niche.city,
            dir = %site_dir.display(),
            "site generated"
        );
        Ok(site_dir)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), SiteGenError> {
    std::fs::write(path, contents).map_err(SiteGenError::io(path))
}

fn copy_dir(src: &Path, dest: &Path) -> Result<(), SiteGenError> {
    std::fs::create_dir_all(dest).map_err(SiteGenError::io(dest))?;
    for entry in std::fs::read_dir(src).map_err(SiteGenError::io(src))? {
        let entry = entry.map_err(SiteGenError::io(src))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            std::fs::copy(&from, &to).map_err(SiteGenError::io(&from))?;
        }
    }
    Ok(())
}
