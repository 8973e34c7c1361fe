use serde::{Deserialize, Serialize};

use crate::slug::humanize;
use crate::{SLUG_SEPARATOR, UNKNOWN_CITY};

/// A generated marketing site for one niche/city pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub slug: String,
    pub niche: String,
    pub city: String,
    pub partner_email: Option<String>,
}

impl Site {
    /// Whether leads for this site are handed to a partner.
    #[must_use]
    pub fn has_partner(&self) -> bool {
        self.partner_email.is_some()
    }
}

/// Site row to insert when intake meets an unknown slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSite {
    pub slug: String,
    pub niche: String,
    pub city: String,
}

impl NewSite {
    /// Derive niche and city from a slug.
    ///
    /// `water-damage-restoration_dallas` splits into exactly two parts and
    /// yields niche `Water Damage Restoration`, city `Dallas`. Any other
    /// shape keeps the raw slug as the niche and records the city as
    /// [`UNKNOWN_CITY`].
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        let parts: Vec<&str> = slug.split(SLUG_SEPARATOR).collect();
        let (niche, city) = match parts.as_slice() {
            [niche, city] => (humanize(niche), humanize(city)),
            _ => (slug.to_owned(), UNKNOWN_CITY.to_owned()),
        };
        Self { slug: slug.to_owned(), niche, city }
    }
}
