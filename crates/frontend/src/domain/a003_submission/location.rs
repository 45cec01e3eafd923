use contracts::domain::a003_submission::aggregate::FormFields;
use leptos::prelude::*;

use crate::shared::storage;

pub const LOCATION_STORAGE_KEY: &str = "amezone_location";
pub const USER_STORAGE_KEY: &str = "amezone_user";

/// Header label for a saved location form; falls back to "Location"
pub fn location_label(fields: Option<&FormFields>) -> String {
    fields
        .and_then(|f| f.get("country"))
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "Location".to_string())
}

/// Выбранное место доставки (показывается в шапке)
#[derive(Clone, Copy)]
pub struct SavedLocation {
    fields: RwSignal<Option<FormFields>>,
}

impl SavedLocation {
    pub fn load() -> Self {
        Self {
            fields: RwSignal::new(storage::load::<FormFields>(LOCATION_STORAGE_KEY)),
        }
    }

    pub fn set(&self, fields: FormFields) {
        storage::save(LOCATION_STORAGE_KEY, &fields);
        self.fields.set(Some(fields));
    }

    pub fn label(&self) -> String {
        self.fields.with(|f| location_label(f.as_ref()))
    }
}

pub fn use_location() -> SavedLocation {
    expect_context::<SavedLocation>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_label() {
        let mut fields = FormFields::new();
        assert_eq!(location_label(None), "Location");
        assert_eq!(location_label(Some(&fields)), "Location");

        fields.insert("country".into(), json!("  "));
        assert_eq!(location_label(Some(&fields)), "Location");

        fields.insert("country".into(), json!("India"));
        assert_eq!(location_label(Some(&fields)), "India");
    }
}
