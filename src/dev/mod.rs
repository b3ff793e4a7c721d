/// Development utilities module
///
/// Screenshot capture and an offline feed, enabled by the `development` feature.

pub mod screenshot;

use crate::data_provider::StaticFeed;
use crate::fixtures;

/// Feed serving the built-in fixture games, for working without a network
pub fn mock_feed() -> StaticFeed {
    StaticFeed::new(fixtures::scores())
}
