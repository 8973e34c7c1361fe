use super::{create_test_lead, create_test_storage};
use crate::traits::{LeadStore, SiteStore};

#[tokio::test]
async fn first_lead_creates_site_from_slug() {
    let (storage, _temp_dir) = create_test_storage().await;
    let (site, lead) = create_test_lead("water-damage-restoration_dallas", "Jane Doe");

    let recorded = storage.record_lead(&site, &lead).await.unwrap();
    assert!(recorded.site_created);

    let stored = storage.get_site_by_slug("water-damage-restoration_dallas").await.unwrap().unwrap();
    assert_eq!(stored.niche, "Water Damage Restoration");
    assert_eq!(stored.city, "Dallas");
    assert_eq!(stored.partner_email, None);
    assert_eq!(stored, recorded.site);
}

#[tokio::test]
async fn unknown_slug_returns_none() {
    let (storage, _temp_dir) = create_test_storage().await;
    assert!(storage.get_site_by_slug("nope").await.unwrap().is_none());
    assert_eq!(storage.count_sites().await.unwrap(), 0);
}

#[tokio::test]
async fn existing_site_is_used_unchanged() {
    let (storage, _temp_dir) = create_test_storage().await;
    let (site, lead) = create_test_lead("pest-control_miami", "Jane Doe");
    storage.record_lead(&site, &lead).await.unwrap();
    storage.set_partner("pest-control_miami", Some("ops@bugs.example")).await.unwrap();

    // A differently-derived NewSite must not overwrite the stored row.
    let mut altered = site.clone();
    altered.niche = "Something Else".to_owned();
    let recorded = storage.record_lead(&altered, &lead).await.unwrap();

    assert!(!recorded.site_created);
    assert_eq!(recorded.site.niche, "Pest Control");
    assert_eq!(recorded.site.partner_email.as_deref(), Some("ops@bugs.example"));
    assert_eq!(storage.count_sites().await.unwrap(), 1);
}

#[tokio::test]
async fn set_partner_assigns_and_clears() {
    let (storage, _temp_dir) = create_test_storage().await;
    let (site, lead) = create_test_lead("emergency-plumbing_houston", "Jane Doe");
    storage.record_lead(&site, &lead).await.unwrap();

    assert!(storage.set_partner("emergency-plumbing_houston", Some("pipes@example.com")).await.unwrap());
    assert!(storage.sites_without_partner().await.unwrap().is_empty());

    assert!(storage.set_partner("emergency-plumbing_houston", None).await.unwrap());
    let unassigned = storage.sites_without_partner().await.unwrap();
    assert_eq!(unassigned.len(), 1);
    assert_eq!(unassigned[0].slug, "emergency-plumbing_houston");
}

#[tokio::test]
async fn set_partner_on_missing_site_returns_false() {
    let (storage, _temp_dir) = create_test_storage().await;
    assert!(!storage.set_partner("ghost_town", Some("a@b.c")).await.unwrap());
}

#[tokio::test]
async fn sites_without_partner_are_ordered_by_id() {
    let (storage, _temp_dir) = create_test_storage().await;
    for slug in ["b-niche_city", "a-niche_city", "c-niche_city"] {
        let (site, lead) = create_test_lead(slug, "Jane Doe");
        storage.record_lead(&site, &lead).await.unwrap();
    }
    storage.set_partner("a-niche_city", Some("partner@example.com")).await.unwrap();

    let slugs: Vec<String> =
        storage.sites_without_partner().await.unwrap().into_iter().map(|s| s.slug).collect();
    assert_eq!(slugs, ["b-niche_city", "c-niche_city"]);
}
