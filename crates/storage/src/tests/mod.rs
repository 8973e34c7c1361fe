//! Test utilities and module declarations for storage tests.

use crate::StorageBackend;
use leadengine_core::{LeadSubmission, NewLead, NewSite};
use tempfile::TempDir;

pub async fn create_test_storage() -> (StorageBackend, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = StorageBackend::new_sqlite(&db_path, 4).await.unwrap();
    (storage, temp_dir)
}

pub fn create_test_lead(slug: &str, name: &str) -> (NewSite, NewLead) {
    let lead = LeadSubmission {
        site_slug: slug.to_owned(),
        name: name.to_owned(),
        phone: "555-123-4567".to_owned(),
        email: Some("jane@example.com".to_owned()),
        service: Some("Water Extraction".to_owned()),
        message: Some("Basement is flooded".to_owned()),
    }
    .validate()
    .unwrap();
    (NewSite::from_slug(slug), lead)
}

mod site_tests;
