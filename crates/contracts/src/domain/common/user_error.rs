use serde::{Deserialize, Serialize};

/// Validation failure reported by the mutation layer.
///
/// `field` is `None` for errors that do not belong to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

impl UserError {
    pub fn new(field: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            field: field.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn is_for(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

/// First message reported for `field`, if any
pub fn field_error<'a>(errors: &'a [UserError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.is_for(field))
        .map(|e| e.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_picks_first_match() {
        let errors = vec![
            UserError::new(None, "Order is not valid"),
            UserError::new(Some("city"), "City is required"),
            UserError::new(Some("city"), "Second message"),
        ];
        assert_eq!(field_error(&errors, "city"), Some("City is required"));
        assert_eq!(field_error(&errors, "postalCode"), None);
    }

    #[test]
    fn test_missing_field_deserializes_as_none() {
        let err: UserError = serde_json::from_str(r#"{"message":"Oops"}"#).unwrap();
        assert_eq!(err.field, None);
        assert_eq!(err.message, "Oops");
    }
}
