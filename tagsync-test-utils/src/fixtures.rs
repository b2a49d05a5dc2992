//! Fixed identifiers for tests

use uuid::Uuid;

pub const UUID_A: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";
pub const UUID_B: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
pub const UUID_C: &str = "a3bb189e-8bf9-3888-9912-ace4e6543002";

/// Parse a fixture UUID
pub fn uuid(value: &str) -> Uuid {
    Uuid::parse_str(value).expect("fixture UUID must be valid")
}

/// DOI tag text for a fixture UUID
pub fn doi(value: &str) -> String {
    format!("uuid:{value}")
}
