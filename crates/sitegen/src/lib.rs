//! Niche ranking export and static site generation.
//!
//! [`niches`] turns the seed list into `top_niches.json`/`top_niches.csv`;
//! [`SiteGenerator`] reads that ranking back and renders one directory of
//! HTML, sitemap and robots file per niche/city pair.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
pub mod niches;
mod pages;
mod render;

pub use error::SiteGenError;
pub use niches::{export_niches, load_niches, load_top_niche, select_niches};
pub use pages::{DEFAULT_PHONE, SUB_SERVICES, SubService};
pub use render::SiteGenerator;
