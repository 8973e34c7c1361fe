use std::path::Path;

use anyhow::Result;
use leadengine_sitegen::{export_niches, select_niches};

pub(crate) fn run(out_dir: &Path, min_cpc: f64, max_difficulty: u32) -> Result<()> {
    let niches = select_niches(min_cpc, max_difficulty);
    let (json_path, csv_path) = export_niches(&niches, out_dir)?;
    println!(
        "Wrote {} niches to {} and {}.",
        niches.len(),
        json_path.display(),
        csv_path.display()
    );
    Ok(())
}
