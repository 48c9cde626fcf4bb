//! Phone number domain model and repository input types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents a phone number owned by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub phone_id: i32,
    pub client_id: i32,
    pub phone_number: String,
}

/// Input payload for attaching a phone number to a client.
///
/// Whether `client_id` actually exists is the store's foreign key to
/// enforce, not a local precondition.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPhone {
    pub client_id: i32,

    #[validate(length(min = 1, max = 20, message = "Phone number must be between 1 and 20 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub phone_number: String,
}

impl NewPhone {
    pub fn new(client_id: i32, phone_number: impl Into<String>) -> Self {
        Self {
            client_id,
            phone_number: phone_number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_new_phone_valid() {
        assert!(NewPhone::new(1, "+79111234567").validate().is_ok());
    }

    #[test]
    fn test_new_phone_rejects_empty_number() {
        assert!(NewPhone::new(1, "").validate().is_err());
        assert!(NewPhone::new(1, "  ").validate().is_err());
    }

    #[test]
    fn test_new_phone_rejects_overlong_number() {
        assert!(NewPhone::new(1, "+".repeat(21)).validate().is_err());
    }
}
