use thiserror::Error;

use crate::MISSING_CONTACT_MESSAGE;

/// Rejections raised while validating a lead submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{}", MISSING_CONTACT_MESSAGE)]
    MissingContact,

    #[error("site_slug is required.")]
    MissingSiteSlug,
}
