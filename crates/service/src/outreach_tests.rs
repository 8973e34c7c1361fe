use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use leadengine_core::{LeadSubmission, NewSite};
use leadengine_storage::{LeadStore, SiteStore, StorageBackend};
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::outreach_service::window_days_or_default;
use crate::{
    NotificationSink, OutreachConfig, OutreachNotice, OutreachService, ServiceError,
    WebhookNotificationSink,
};

#[derive(Default)]
struct RecordingSink {
    notices: Mutex<Vec<OutreachNotice>>,
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn deliver(&self, notice: &OutreachNotice) -> Result<(), ServiceError> {
        self.notices.lock().unwrap().push(notice.clone());
        Ok(())
    }
}

struct FailingSink;

#[async_trait]
impl NotificationSink for FailingSink {
    async fn deliver(&self, _notice: &OutreachNotice) -> Result<(), ServiceError> {
        Err(ServiceError::Delivery("smtp relay down".to_owned()))
    }
}

async fn create_storage() -> (Arc<StorageBackend>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage =
        StorageBackend::new_sqlite(&temp_dir.path().join("outreach.db"), 4).await.unwrap();
    (Arc::new(storage), temp_dir)
}

async fn add_leads(storage: &StorageBackend, slug: &str, count: usize) {
    let site = NewSite::from_slug(slug);
    for i in 0..count {
        let lead = LeadSubmission {
            site_slug: slug.to_owned(),
            name: format!("Visitor {i}"),
            phone: "555-0100".to_owned(),
            ..LeadSubmission::default()
        }
        .validate()
        .unwrap();
        storage.record_lead(&site, &lead).await.unwrap();
    }
}

#[tokio::test]
async fn threshold_reached_drafts_notice() {
    let (storage, _dir) = create_storage().await;
    add_leads(&storage, "water-damage-restoration_dallas", 5).await;
    add_leads(&storage, "pest-control_miami", 4).await;
    let sink = Arc::new(RecordingSink::default());
    let service = OutreachService::new(Arc::clone(&storage), sink.clone(), OutreachConfig::default());

    let report = service.run_scan().await.unwrap();

    assert_eq!(report.scanned, 2);
    assert_eq!(report.delivered.len(), 1);
    let notices = sink.notices.lock().unwrap();
    let notice = &notices[0];
    assert_eq!(notice.site_slug, "water-damage-restoration_dallas");
    assert_eq!(notice.lead_count, 5);
    assert_eq!(notice.destination, "local partners in Dallas");
    assert!(notice.body.starts_with("Hello,\n\nWe operate Water Damage Restoration websites in Dallas"));
    assert!(notice.body.contains("generated 5 high-intent leads over the past 30 days"));
    assert!(notice.body.ends_with("Regards,\nLocal Authority Lead Engine"));
}

#[tokio::test]
async fn partnered_sites_are_skipped() {
    let (storage, _dir) = create_storage().await;
    add_leads(&storage, "flood-restoration_chicago", 7).await;
    storage.set_partner("flood-restoration_chicago", Some("dry@example.com")).await.unwrap();
    let sink = Arc::new(RecordingSink::default());
    let service = OutreachService::new(Arc::clone(&storage), sink.clone(), OutreachConfig::default());

    let report = service.run_scan().await.unwrap();

    assert_eq!(report.scanned, 0);
    assert!(sink.notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn leads_outside_window_do_not_count() {
    let (storage, _dir) = create_storage().await;
    add_leads(&storage, "roof-leak-repair_las-vegas", 6).await;
    let sink = Arc::new(RecordingSink::default());
    let service = OutreachService::new(Arc::clone(&storage), sink.clone(), OutreachConfig::default());

    let report = service.scan_at(Utc::now() + Duration::days(31)).await.unwrap();

    assert_eq!(report.scanned, 1);
    assert!(report.delivered.is_empty());
}

#[tokio::test]
async fn custom_threshold_and_recipient_apply() {
    let (storage, _dir) = create_storage().await;
    add_leads(&storage, "pest-control_miami", 2).await;
    let sink = Arc::new(RecordingSink::default());
    let config = OutreachConfig {
        threshold: 2,
        window_days: 7,
        recipient: Some("sales@leadengine.example".to_owned()),
    };
    let service = OutreachService::new(Arc::clone(&storage), sink.clone(), config);

    service.run_scan().await.unwrap();

    let notices = sink.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].destination, "sales@leadengine.example");
    assert!(notices[0].body.contains("over the past 7 days"));
}

#[tokio::test]
async fn oversized_window_is_config_error() {
    let (storage, _dir) = create_storage().await;
    add_leads(&storage, "pest-control_miami", 5).await;
    let sink = Arc::new(RecordingSink::default());
    let config = OutreachConfig { threshold: 5, window_days: 1_000_000_000, recipient: None };
    let service = OutreachService::new(Arc::clone(&storage), sink.clone(), config);

    let err = service.run_scan().await.unwrap_err();

    assert!(matches!(err, ServiceError::Config(_)));
    assert!(sink.notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn non_positive_window_is_config_error() {
    let (storage, _dir) = create_storage().await;
    for window_days in [0, -30, i64::MIN] {
        let config = OutreachConfig { threshold: 1, window_days, recipient: None };
        let service = OutreachService::new(
            Arc::clone(&storage),
            Arc::new(RecordingSink::default()),
            config,
        );

        let err = service.run_scan().await.unwrap_err();

        assert!(matches!(err, ServiceError::Config(_)), "window {window_days}");
    }
}

#[test]
fn out_of_range_env_window_falls_back_to_default() {
    assert_eq!(window_days_or_default(7), 7);
    assert_eq!(window_days_or_default(0), 30);
    assert_eq!(window_days_or_default(-5), 30);
    assert_eq!(window_days_or_default(1_000_000_000), 30);
}

#[tokio::test]
async fn sink_failure_is_reported_not_fatal() {
    let (storage, _dir) = create_storage().await;
    add_leads(&storage, "a-niche_city", 5).await;
    add_leads(&storage, "b-niche_city", 5).await;
    let service =
        OutreachService::new(Arc::clone(&storage), Arc::new(FailingSink), OutreachConfig::default());

    let report = service.run_scan().await.unwrap();

    assert_eq!(report.failed.len(), 2);
    assert!(report.delivered.is_empty());
}

#[tokio::test]
async fn webhook_sink_posts_notice_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hooks/outreach"))
        .and(body_partial_json(serde_json::json!({
            "site_slug": "pest-control_miami",
            "lead_count": 5
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let (storage, _dir) = create_storage().await;
    add_leads(&storage, "pest-control_miami", 5).await;
    let sink = WebhookNotificationSink::new(format!("{}/hooks/outreach", server.uri())).unwrap();
    let service = OutreachService::new(Arc::clone(&storage), Arc::new(sink), OutreachConfig::default());

    let report = service.run_scan().await.unwrap();

    assert_eq!(report.delivered.len(), 1);
}

#[tokio::test]
async fn webhook_error_status_is_delivery_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("relay offline"))
        .mount(&server)
        .await;
    let sink = WebhookNotificationSink::new(server.uri()).unwrap();
    let notice = OutreachNotice {
        site_slug: "pest-control_miami".to_owned(),
        niche: "Pest Control".to_owned(),
        city: "Miami".to_owned(),
        lead_count: 5,
        destination: "local partners in Miami".to_owned(),
        subject: "Pest Control leads available in Miami".to_owned(),
        body: "Hello".to_owned(),
    };

    let err = sink.deliver(&notice).await.unwrap_err();

    assert!(matches!(err, ServiceError::Delivery(ref msg) if msg.contains("500")));
}
