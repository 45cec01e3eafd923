use contracts::domain::a003_submission::aggregate::{FormFields, SubmissionKind};
use contracts::shared::api_response::OkResponse;

use crate::shared::api_utils::post_json;

/// Отправить поля формы на эндпоинт своего вида
pub async fn submit(kind: SubmissionKind, fields: &FormFields) -> Result<OkResponse, String> {
    let response: OkResponse = post_json(kind.path(), fields).await?;
    if response.ok {
        Ok(response)
    } else {
        Err(format!("{} rejected", kind.path()))
    }
}
