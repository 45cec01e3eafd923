use serde::{Deserialize, Serialize};

/// Произвольные поля формы, как их отправляет клиент
pub type FormFields = serde_json::Map<String, serde_json::Value>;

/// Вид одноразовой формы, которая просто дописывается в журнал на сервере
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Contact,
    Signin,
    Location,
    Gift,
}

impl SubmissionKind {
    /// Путь эндпоинта (`/contact`, `/signin`, ...)
    pub fn path(&self) -> &'static str {
        match self {
            SubmissionKind::Contact => "/contact",
            SubmissionKind::Signin => "/signin",
            SubmissionKind::Location => "/location",
            SubmissionKind::Gift => "/gift",
        }
    }
}
