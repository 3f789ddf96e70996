//! Shared helpers for CLI command tests

use crate::common::{create_test_services, flights_json, TestRepo};
use ragdex::Services;
use std::sync::Arc;

/// Services wrapped the way `cli::run` hands them to commands
pub fn create_cli_test_services() -> Arc<Services> {
    Arc::new(create_test_services())
}

/// Services with a `flights` index already built; keep the repo alive
#[allow(dead_code)]
pub fn setup_flights_index() -> (Arc<Services>, TestRepo) {
    let services = create_cli_test_services();
    let repo = TestRepo::with_files(&[("flights.json", flights_json().as_str())]);
    services
        .registry
        .create_index("flights", repo.path())
        .expect("flights index builds");
    (services, repo)
}
