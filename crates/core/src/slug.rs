//! Slug helpers shared by the site generator and lead intake.
//!
//! Generated sites are published under `{niche}_{city}` where each half is
//! lower-cased with spaces turned into hyphens. Intake reverses that
//! transform when it meets a slug it has never seen.

use crate::SLUG_SEPARATOR;

/// Lower-case `text` and replace spaces with hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

/// Build the site slug for a niche/city pair.
#[must_use]
pub fn site_slug(niche: &str, city: &str) -> String {
    format!("{}{SLUG_SEPARATOR}{}", slugify(niche), slugify(city))
}

/// Title-case `text`: the first letter of every alphabetic run is
/// upper-cased and the rest of the run lower-cased.
///
/// Any non-alphabetic character starts a new run, so `o'brien` becomes
/// `O'Brien` and `3rd street` becomes `3Rd Street`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Turn one half of a slug back into display text.
pub(crate) fn humanize(part: &str) -> String {
    title_case(&part.replace('-', " "))
}
