//! Niche selection and the `top_niches` files shared with site generation.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use leadengine_core::{Niche, TOP_NICHES_CSV, TOP_NICHES_JSON, filter_niches, seed_niches};

use crate::SiteGenError;

/// Seed list filtered by `cpc >= min_cpc` and `difficulty <= max_difficulty`,
/// in rank order. May be empty.
#[must_use]
pub fn select_niches(min_cpc: f64, max_difficulty: u32) -> Vec<Niche> {
    let selected = filter_niches(&seed_niches(), min_cpc, max_difficulty);
    tracing::debug!(count = selected.len(), min_cpc, max_difficulty, "niches selected");
    selected
}

/// Write `top_niches.json` (pretty) and `top_niches.csv` into `out_dir`,
/// creating it if needed. Returns both paths.
pub fn export_niches(niches: &[Niche], out_dir: &Path) -> Result<(PathBuf, PathBuf), SiteGenError> {
    std::fs::create_dir_all(out_dir).map_err(SiteGenError::io(out_dir))?;

    let json_path = out_dir.join(TOP_NICHES_JSON);
    let file = File::create(&json_path).map_err(SiteGenError::io(&json_path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, niches)?;
    writer.flush().map_err(SiteGenError::io(&json_path))?;

    let csv_path = out_dir.join(TOP_NICHES_CSV);
    let mut csv_writer = csv::Writer::from_path(&csv_path)?;
    if niches.is_empty() {
        csv_writer.write_record(["rank", "niche", "city", "cpc", "difficulty", "rationale"])?;
    }
    for niche in niches {
        csv_writer.serialize(niche)?;
    }
    csv_writer.flush().map_err(SiteGenError::io(&csv_path))?;

    tracing::info!(
        count = niches.len(),
        json = %json_path.display(),
        csv = %csv_path.display(),
        "niche ranking exported"
    );
    Ok((json_path, csv_path))
}

/// Read the full ranked list from a `top_niches.json` file.
pub fn load_niches(path: &Path) -> Result<Vec<Niche>, SiteGenError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(SiteGenError::MissingNiches(path.to_path_buf()));
        },
        Err(e) => return Err(SiteGenError::io(path)(e)),
    };
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// First-ranked entry of a `top_niches.json` file.
pub fn load_top_niche(path: &Path) -> Result<Niche, SiteGenError> {
    load_niches(path)?.into_iter().next().ok_or(SiteGenError::EmptyNiches)
}
