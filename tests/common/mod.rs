// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{flights_json, TestRepo, FLIGHT_COUNT};
#[allow(unused_imports)]
pub use helpers::{assert_valid_stats, create_test_services, create_test_services_with};
