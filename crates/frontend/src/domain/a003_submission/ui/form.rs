//! Описание форм: поля, эндпоинт и тексты результата.

use contracts::domain::a003_submission::aggregate::{FormFields, SubmissionKind};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, input_type: &'static str) -> FieldDef {
    FieldDef {
        name,
        label,
        input_type,
        required: true,
    }
}

const fn optional(name: &'static str, label: &'static str, input_type: &'static str) -> FieldDef {
    FieldDef {
        name,
        label,
        input_type,
        required: false,
    }
}

/// Forms that post to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Signin,
    Sell,
    Location,
    Gift,
}

impl FormKind {
    pub fn endpoint(&self) -> SubmissionKind {
        match self {
            FormKind::Contact => SubmissionKind::Contact,
            // sell requests land in the users log
            FormKind::Signin | FormKind::Sell => SubmissionKind::Signin,
            FormKind::Location => SubmissionKind::Location,
            FormKind::Gift => SubmissionKind::Gift,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Contact => "Contact us",
            FormKind::Signin => "Sign in",
            FormKind::Sell => "Sell on Amezone",
            FormKind::Location => "Choose your location",
            FormKind::Gift => "Send a gift card",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Send",
            FormKind::Signin => "Sign in",
            FormKind::Sell => "Submit",
            FormKind::Location => "Apply",
            FormKind::Gift => "Send gift",
        }
    }

    pub fn fields(&self) -> &'static [FieldDef] {
        const CONTACT: &[FieldDef] = &[
            field("name", "Name", "text"),
            field("email", "Email", "email"),
            field("message", "Message", "textarea"),
        ];
        const SIGNIN: &[FieldDef] = &[
            field("email", "Email", "email"),
            field("password", "Password", "password"),
        ];
        const SELL: &[FieldDef] = &[
            field("name", "Name", "text"),
            field("email", "Email", "email"),
            field("product", "What do you want to sell?", "text"),
        ];
        const LOCATION: &[FieldDef] = &[
            field("country", "Country", "text"),
            optional("pincode", "Pincode", "text"),
        ];
        const GIFT: &[FieldDef] = &[
            field("to", "Recipient email", "email"),
            field("amount", "Amount", "number"),
            optional("message", "Message", "textarea"),
        ];
        match self {
            FormKind::Contact => CONTACT,
            FormKind::Signin => SIGNIN,
            FormKind::Sell => SELL,
            FormKind::Location => LOCATION,
            FormKind::Gift => GIFT,
        }
    }

    /// Inline message after a successful post; `None` closes silently
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            FormKind::Contact => Some("Thanks, message received"),
            FormKind::Sell => Some("Thanks, your sell request has been received"),
            FormKind::Gift => Some("Gift saved"),
            FormKind::Signin | FormKind::Location => None,
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            FormKind::Contact => "Failed to send, try later",
            FormKind::Signin => "Sign-in failed",
            FormKind::Sell => "Failed to submit",
            FormKind::Location => "Failed to save location",
            FormKind::Gift => "Failed to send gift",
        }
    }

    /// Delay before the modal closes after success (ms)
    pub fn close_delay_ms(&self) -> u32 {
        match self {
            FormKind::Contact | FormKind::Sell => 900,
            FormKind::Signin | FormKind::Location | FormKind::Gift => 0,
        }
    }

    /// Location is saved locally first; the post is best-effort
    pub fn best_effort(&self) -> bool {
        matches!(self, FormKind::Location)
    }
}

/// Pair field names with their current values as a JSON object
pub fn collect_fields(defs: &[FieldDef], values: &[String]) -> FormFields {
    defs.iter()
        .zip(values.iter())
        .map(|(def, value)| (def.name.to_string(), Value::String(value.trim().to_string())))
        .collect()
}

/// First required field left blank, if any
pub fn first_missing(defs: &[FieldDef], values: &[String]) -> Option<&'static str> {
    defs.iter()
        .zip(values.iter())
        .find(|(def, value)| def.required && value.trim().is_empty())
        .map(|(def, _)| def.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sell_posts_to_signin() {
        assert_eq!(FormKind::Sell.endpoint(), SubmissionKind::Signin);
        assert_eq!(FormKind::Sell.endpoint().path(), "/signin");
        assert_eq!(FormKind::Gift.endpoint().path(), "/gift");
    }

    #[test]
    fn test_collect_fields_trims_values() {
        let defs = FormKind::Location.fields();
        let values = vec![" India ".to_string(), "560001".to_string()];
        let fields = collect_fields(defs, &values);
        assert_eq!(fields.get("country").and_then(|v| v.as_str()), Some("India"));
        assert_eq!(fields.get("pincode").and_then(|v| v.as_str()), Some("560001"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_first_missing_skips_optional() {
        let defs = FormKind::Gift.fields();
        let values = vec!["a@b.c".to_string(), "500".to_string(), String::new()];
        assert_eq!(first_missing(defs, &values), None);

        let values = vec!["a@b.c".to_string(), " ".to_string(), String::new()];
        assert_eq!(first_missing(defs, &values), Some("Amount"));
    }

    #[test]
    fn test_only_location_is_best_effort() {
        for kind in [FormKind::Contact, FormKind::Signin, FormKind::Sell, FormKind::Gift] {
            assert!(!kind.best_effort());
        }
        assert!(FormKind::Location.best_effort());
    }
}
