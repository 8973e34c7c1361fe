use std::path::{Path, PathBuf};

use anyhow::Result;
use leadengine_sitegen::SiteGenerator;

pub(crate) fn run(
    niches: &Path,
    output_dir: PathBuf,
    static_dir: PathBuf,
    phone: Option<String>,
    all: bool,
) -> Result<()> {
    let mut generator = SiteGenerator::new(output_dir).with_static_dir(static_dir);
    if let Some(phone) = phone {
        generator = generator.with_phone(phone);
    }

    if all {
        let dirs = generator.render_all(niches)?;
        for dir in &dirs {
            println!("{}", dir.display());
        }
        println!("All sites generated ({}).", dirs.len());
    } else {
        let dir = generator.render_top(niches)?;
        println!("Generated site at {}", dir.display());
    }
    Ok(())
}
