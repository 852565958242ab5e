use std::sync::Arc;

use interns::api::InternApi;
use interns::api::mock::MockInternApi;
use interns::form::{EditForm, SubmitOutcome};
use interns::model::{Field, InternId, InternRecord};
use interns::validation::{DATE_NOT_CORRECT, EMAIL_NOT_CORRECT, REQUIRED};

/// A record as the API stores it.
fn stored(id: i64) -> InternRecord {
    let mut record = InternRecord::empty(InternId::Number(id));
    record.name = "Ada Lovelace".to_string();
    record.email = "ada@example.com".to_string();
    record.internship_start = "2024-03-05T00:00+02:00".to_string();
    record.internship_end = "2024-09-05T00:00+00Z".to_string();
    record
        .extra
        .insert("mentor".to_string(), serde_json::json!("Charles"));
    record
}

async fn load(records: Vec<InternRecord>, id: i64) -> (EditForm, Arc<MockInternApi>) {
    let api = Arc::new(MockInternApi::new(records));
    let form = EditForm::load(api.clone(), InternId::Number(id))
        .await
        .unwrap();
    (form, api)
}

// ── Load ──────────────────────────────────────────────────────────

#[tokio::test]
async fn load_shows_display_dates() {
    let (form, _api) = load(vec![stored(1)], 1).await;
    assert_eq!(form.record().internship_start, "2024-03-05");
    assert_eq!(form.record().internship_end, "2024-09-05");
    assert_eq!(form.record().name, "Ada Lovelace");
    assert!(form.errors().is_valid());
}

#[tokio::test]
async fn load_unknown_id_fails() {
    let api = Arc::new(MockInternApi::new(vec![stored(1)]));
    let err = EditForm::load(api, InternId::Number(99)).await.err().unwrap();
    assert!(format!("{err:#}").contains("failed to load intern 99"));
}

#[tokio::test]
async fn load_with_unreadable_date_leaves_it_empty() {
    let mut record = stored(1);
    record.internship_end = "NaN".to_string();
    let (mut form, api) = load(vec![record], 1).await;
    assert_eq!(form.record().internship_end, "");

    let outcome = form.submit().await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(form.errors().get(Field::InternshipEnd), Some(REQUIRED));
    assert!(api.updates().unwrap().is_empty());
}

#[tokio::test]
async fn id_with_leading_zeros_loads_and_saves_unchanged() {
    let mut record = stored(1);
    record.id = InternId::Text("007".to_string());
    let api = Arc::new(MockInternApi::new(vec![record]));

    let mut form = EditForm::load(api.clone(), InternId::from("007"))
        .await
        .unwrap();
    assert_eq!(form.record().name, "Ada Lovelace");

    assert_eq!(form.submit().await.unwrap(), SubmitOutcome::Saved);
    assert_eq!(api.updates().unwrap()[0].id, InternId::Text("007".to_string()));
}

// ── Submit ────────────────────────────────────────────────────────

#[tokio::test]
async fn valid_submit_sends_exactly_one_update_in_storage_encoding() {
    let (mut form, api) = load(vec![stored(1)], 1).await;
    form.set_field(Field::InternshipEnd, "2024-12-20");

    let outcome = form.submit().await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Saved);

    let updates = api.updates().unwrap();
    assert_eq!(updates.len(), 1);
    let sent = &updates[0];
    assert_eq!(sent.id, InternId::Number(1));
    assert_eq!(sent.internship_start, "2024-03-05T00:00+00Z");
    assert_eq!(sent.internship_end, "2024-12-20T00:00+00Z");
    assert_eq!(sent.extra.get("mentor").unwrap(), "Charles");
}

#[tokio::test]
async fn submit_keeps_display_encoding_in_the_form() {
    let (mut form, _api) = load(vec![stored(1)], 1).await;
    form.submit().await.unwrap();
    assert_eq!(form.record().internship_start, "2024-03-05");
}

#[tokio::test]
async fn invalid_submit_reports_fields_and_sends_nothing() {
    let (mut form, api) = load(vec![stored(1)], 1).await;
    form.set_field(Field::Name, "");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::InternshipStart, "2024-01-01");
    form.set_field(Field::InternshipEnd, "2023-01-01");

    let SubmitOutcome::Rejected(errors) = form.submit().await.unwrap() else {
        panic!("expected Rejected");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(Field::Name), Some(REQUIRED));
    assert_eq!(errors.get(Field::InternshipEnd), Some(DATE_NOT_CORRECT));
    assert_eq!(form.errors(), &errors);
    assert!(api.updates().unwrap().is_empty());
}

#[tokio::test]
async fn resubmit_clears_stale_errors_for_fixed_fields() {
    let (mut form, _api) = load(vec![stored(1)], 1).await;
    form.set_field(Field::Name, "");
    form.set_field(Field::Email, "nope");
    form.submit().await.unwrap();
    assert_eq!(form.errors().get(Field::Email), Some(EMAIL_NOT_CORRECT));

    form.set_field(Field::Email, "user@example.com");
    form.submit().await.unwrap();
    assert_eq!(form.errors().get(Field::Email), None);
    assert_eq!(form.errors().get(Field::Name), Some(REQUIRED));
}

#[tokio::test]
async fn successful_submit_clears_all_errors() {
    let (mut form, _api) = load(vec![stored(1)], 1).await;
    form.set_field(Field::Name, "");
    form.submit().await.unwrap();
    assert!(!form.errors().is_valid());

    form.set_field(Field::Name, "Ada King");
    assert_eq!(form.submit().await.unwrap(), SubmitOutcome::Saved);
    assert!(form.errors().is_valid());
}

#[tokio::test]
async fn editing_does_not_touch_errors_until_submit() {
    let (mut form, _api) = load(vec![stored(1)], 1).await;
    form.set_field(Field::Name, "");
    form.submit().await.unwrap();

    form.set_field(Field::Name, "Back Again");
    assert_eq!(form.errors().get(Field::Name), Some(REQUIRED));
}

/// Reads succeed, every update is refused.
struct RefusingApi {
    inner: MockInternApi,
}

#[async_trait::async_trait]
impl InternApi for RefusingApi {
    async fn list(&self) -> anyhow::Result<Vec<InternRecord>> {
        self.inner.list().await
    }
    async fn get(&self, id: &InternId) -> anyhow::Result<InternRecord> {
        self.inner.get(id).await
    }
    async fn update(&self, _id: &InternId, _record: &InternRecord) -> anyhow::Result<()> {
        anyhow::bail!("interns API error (500 Internal Server Error): boom")
    }
}

#[tokio::test]
async fn transport_failure_is_surfaced_and_keeps_errors() {
    let api = Arc::new(RefusingApi {
        inner: MockInternApi::new(vec![stored(1)]),
    });
    let mut form = EditForm::load(api, InternId::Number(1)).await.unwrap();
    form.set_field(Field::Email, "bad");
    form.submit().await.unwrap();
    form.set_field(Field::Email, "ada@example.com");

    let err = form.submit().await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("failed to update intern 1"));
    assert!(message.contains("500"));
    assert_eq!(form.errors().get(Field::Email), Some(EMAIL_NOT_CORRECT));
}

#[tokio::test]
async fn unreachable_backend_fails_on_load() {
    let api = Arc::new(MockInternApi::failing("connection refused"));
    let err = EditForm::load(api, InternId::Number(1)).await.err().unwrap();
    assert!(format!("{err:#}").contains("connection refused"));
}

// ── Reload ────────────────────────────────────────────────────────

#[tokio::test]
async fn reload_sees_saved_state() {
    let (mut form, _api) = load(vec![stored(1), stored(2)], 2).await;
    form.set_field(Field::Name, "Renamed");
    form.submit().await.unwrap();

    form.set_field(Field::Name, "Unsaved");
    form.reload().await.unwrap();
    assert_eq!(form.record().name, "Renamed");
    assert_eq!(form.record().internship_start, "2024-03-05");
    assert_eq!(form.id(), &InternId::Number(2));
}
