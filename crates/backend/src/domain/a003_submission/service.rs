use chrono::{DateTime, Utc};
use contracts::domain::a003_submission::aggregate::{FormFields, SubmissionKind};
use serde_json::{json, Value};

use crate::shared::data::db::Database;
use crate::shared::data::json_log::JsonLog;

/// Журнал, в который пишется форма данного вида
pub fn log_for(db: &Database, kind: SubmissionKind) -> &JsonLog {
    match kind {
        SubmissionKind::Contact => &db.contacts,
        SubmissionKind::Signin | SubmissionKind::Location => &db.users,
        SubmissionKind::Gift => &db.gifts,
    }
}

/// Запись журнала: поля формы плюс отметка времени.
/// Локация оборачивается в `{ type, value, at }`.
pub fn build_record(kind: SubmissionKind, fields: FormFields, at: DateTime<Utc>) -> Value {
    let at = at.to_rfc3339();
    let stamp_field = match kind {
        SubmissionKind::Location => {
            return json!({ "type": "location", "value": fields, "at": at });
        }
        SubmissionKind::Contact => "receivedAt",
        SubmissionKind::Signin => "signedAt",
        SubmissionKind::Gift => "sentAt",
    };
    let mut record = fields;
    record.insert(stamp_field.to_string(), Value::String(at));
    Value::Object(record)
}

/// Сохранить отправленную форму
pub async fn record(db: &Database, kind: SubmissionKind, fields: FormFields) -> anyhow::Result<()> {
    let entry = build_record(kind, fields, Utc::now());
    log_for(db, kind).append(&entry).await?;
    tracing::info!("{:?} submission recorded", kind);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::initialize_database;
    use chrono::TimeZone;

    fn fields() -> FormFields {
        let mut f = FormFields::new();
        f.insert("email".into(), json!("a@b.c"));
        f
    }

    #[test]
    fn test_record_shapes() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let contact = build_record(SubmissionKind::Contact, fields(), at);
        assert_eq!(contact["email"], "a@b.c");
        assert_eq!(contact["receivedAt"], "2024-05-01T12:00:00+00:00");

        let signin = build_record(SubmissionKind::Signin, fields(), at);
        assert!(signin.get("signedAt").is_some());

        let gift = build_record(SubmissionKind::Gift, fields(), at);
        assert!(gift.get("sentAt").is_some());

        let location = build_record(SubmissionKind::Location, fields(), at);
        assert_eq!(location["type"], "location");
        assert_eq!(location["value"]["email"], "a@b.c");
        assert!(location.get("at").is_some());
    }

    #[tokio::test]
    async fn test_signin_and_location_share_users_log() {
        let dir = tempfile::tempdir().unwrap();
        let db = initialize_database(dir.path()).await.unwrap();

        record(&db, SubmissionKind::Signin, fields()).await.unwrap();
        record(&db, SubmissionKind::Location, fields()).await.unwrap();
        record(&db, SubmissionKind::Gift, fields()).await.unwrap();

        assert_eq!(db.users.len().await.unwrap(), 2);
        assert_eq!(db.gifts.len().await.unwrap(), 1);
        assert_eq!(db.contacts.len().await.unwrap(), 0);
    }
}
