//! Ranked niche/city targets.
//!
//! The seed list is curated by hand from industry CPC benchmarks; ranking
//! is fixed by the seed order and selection is a threshold filter.

use serde::{Deserialize, Serialize};

use crate::slug::site_slug;

/// One niche/city target with its keyword economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Niche {
    pub rank: u32,
    pub niche: String,
    pub city: String,
    pub cpc: f64,
    pub difficulty: u32,
    pub rationale: String,
}

impl Niche {
    fn new(rank: u32, niche: &str, city: &str, cpc: f64, difficulty: u32, rationale: &str) -> Self {
        Self {
            rank,
            niche: niche.to_owned(),
            city: city.to_owned(),
            cpc,
            difficulty,
            rationale: rationale.to_owned(),
        }
    }

    /// Slug of the site generated for this niche.
    #[must_use]
    pub fn site_slug(&self) -> String {
        site_slug(&self.niche, &self.city)
    }
}

/// Hard-coded niche/city data points, ranked 1 through 10.
#[must_use]
pub fn seed_niches() -> Vec<Niche> {
    vec![
        Niche::new(
            1,
            "Water Damage Restoration",
            "Dallas",
            250.79,
            18,
            "Highest CPC in home services; low keyword difficulty",
        ),
        Niche::new(2, "Flood Restoration", "Chicago", 151.79, 22, "High emergency intent and strong demand"),
        Niche::new(3, "Emergency Plumbing", "Houston", 82.82, 25, "Urgent need; high CPC and transactional intent"),
        Niche::new(
            4,
            "HVAC Repair Services",
            "Phoenix",
            70.84,
            31,
            "Seasonal demand; CPC around $70; moderate competition",
        ),
        Niche::new(5, "Roof Leak Repair", "Las Vegas", 14.0, 30, "Emergency roof repair keywords cost $12-18"),
        Niche::new(
            6,
            "Garage Door Repair",
            "Los Angeles",
            57.81,
            28,
            "High conversion rate and mid-level SEO difficulty",
        ),
        Niche::new(7, "Pest Control", "Miami", 34.0, 20, "Average CPC $34 in competitive markets"),
        Niche::new(8, "Window Replacement", "Orlando", 40.53, 27, "High-value home renovation term with good intent"),
        Niche::new(
            9,
            "Home Security Installation",
            "San Francisco",
            45.54,
            32,
            "Growing demand for smart home systems",
        ),
        Niche::new(10, "Duct Cleaning Services", "Charlotte", 34.04, 24, "Seasonal service with CPC around $34"),
    ]
}

/// Keep niches with `cpc >= min_cpc` and `difficulty <= max_difficulty`,
/// ordered by rank.
#[must_use]
pub fn filter_niches(niches: &[Niche], min_cpc: f64, max_difficulty: u32) -> Vec<Niche> {
    let mut kept: Vec<Niche> = niches
        .iter()
        .filter(|n| n.cpc >= min_cpc && n.difficulty <= max_difficulty)
        .cloned()
        .collect();
    kept.sort_by_key(|n| n.rank);
    kept
}
