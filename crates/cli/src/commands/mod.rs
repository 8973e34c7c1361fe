pub(crate) mod generate;
pub(crate) mod niches;
pub(crate) mod outreach;
pub(crate) mod partner;
pub(crate) mod serve;
pub(crate) mod sitemaps;
