//! Service layer for the site directory.
//!
//! This module contains one resolver per pipeline stage:
//! - State index (`StateIndexResolver`)
//! - Park list for a state (`SiteListResolver`)
//! - Park page extraction (`SiteDetailExtractor`)
//! - Nearby places search (`NearbyPlacesClient`)

mod detail;
mod places;
mod sites;
mod states;

pub use detail::{DetailFields, SiteDetailExtractor};
pub use places::NearbyPlacesClient;
pub use sites::SiteListResolver;
pub use states::StateIndexResolver;
