//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p leadengine-storage -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use chrono::{Duration, Utc};
use leadengine_core::{LeadSubmission, NewSite};
use leadengine_storage::{LeadStore, PgStorage, SiteStore};

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url, 4).await.expect("Failed to connect to PostgreSQL")
}

fn unique_slug(prefix: &str) -> String {
    format!("{prefix}_city-{}", Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

fn submission(slug: &str) -> LeadSubmission {
    LeadSubmission {
        site_slug: slug.to_owned(),
        name: "Jane Doe".to_owned(),
        phone: "555-123-4567".to_owned(),
        ..LeadSubmission::default()
    }
}

#[tokio::test]
#[ignore]
async fn pg_record_lead_creates_site_once() {
    let storage = create_pg_storage().await;
    let slug = unique_slug("pg-create");
    let lead = submission(&slug).validate().unwrap();
    let site = NewSite::from_slug(&slug);

    let first = storage.record_lead(&site, &lead).await.unwrap();
    let second = storage.record_lead(&site, &lead).await.unwrap();

    assert!(first.site_created);
    assert!(!second.site_created);
    assert_eq!(first.site.id, second.site.id);
    assert_eq!(first.site.niche, "Pg Create");
    assert_eq!(storage.leads_for_site(first.site.id).await.unwrap().len(), 2);
}

#[tokio::test]
#[ignore]
async fn pg_partner_routes_new_leads() {
    let storage = create_pg_storage().await;
    let slug = unique_slug("pg-route");
    let lead = submission(&slug).validate().unwrap();
    let site = NewSite::from_slug(&slug);

    storage.record_lead(&site, &lead).await.unwrap();
    assert!(storage.set_partner(&slug, Some("partner@example.com")).await.unwrap());
    let routed = storage.record_lead(&site, &lead).await.unwrap();

    assert!(routed.lead.routed);
    let fetched = storage.get_lead(routed.lead.id).await.unwrap().unwrap();
    assert_eq!(fetched, routed.lead);
}

#[tokio::test]
#[ignore]
async fn pg_count_leads_since_window() {
    let storage = create_pg_storage().await;
    let slug = unique_slug("pg-count");
    let lead = submission(&slug).validate().unwrap();
    let recorded = storage.record_lead(&NewSite::from_slug(&slug), &lead).await.unwrap();

    let since = Utc::now() - Duration::days(30);
    assert_eq!(storage.count_leads_since(recorded.site.id, since).await.unwrap(), 1);
    let later = Utc::now() + Duration::hours(1);
    assert_eq!(storage.count_leads_since(recorded.site.id, later).await.unwrap(), 0);
}
