//! Pipeline entry points for site lookups.
//!
//! `SiteDirectory` chains the resolvers: state name → state page URL →
//! park page URLs → park records → nearby places. Callers only see
//! `resolve_region` and `fetch_nearby`; prompting and printing stay with the
//! caller.

mod directory;

pub use directory::SiteDirectory;
