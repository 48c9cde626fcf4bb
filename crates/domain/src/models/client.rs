//! Client domain model and repository input types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents a client stored in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Input payload for creating a client.
///
/// Email syntax is deliberately not checked here; callers own address
/// validation. Only presence and length are local preconditions.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[validate(length(min = 1, max = 50, message = "First name must be between 1 and 50 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be between 1 and 50 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 100, message = "Email must be between 1 and 100 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub email: String,
}

impl NewClient {
    /// Convenience constructor for owned field values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// Partial update for a client.
///
/// `None` means "leave the stored value unchanged"; a supplied value is
/// validated like the corresponding `NewClient` field. An empty string is
/// therefore a validation error, never a silent skip.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    #[validate(length(min = 1, max = 50, message = "First name must be between 1 and 50 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Last name must be between 1 and 50 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Email must be between 1 and 100 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub email: Option<String>,
}

impl ClientUpdate {
    /// Returns true when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

/// Search filters for client lookups.
///
/// Absent filters do not restrict the result; present filters are exact
/// matches combined with logical AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSearchFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl ClientSearchFilter {
    /// Filter on email only.
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Filter on phone number only.
    pub fn by_phone_number(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            ..Self::default()
        }
    }
}

/// One row of a client search: a client joined to at most one of its
/// phone numbers. A client with several numbers appears once per number;
/// a client with none appears once with `phone_number` absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSearchResult {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

/// A client with all of its phone numbers, aggregated from search rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientWithPhones {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_numbers: Vec<String>,
}

impl ClientWithPhones {
    /// Folds join rows into one record per client.
    ///
    /// Clients keep the order in which they first appear; each client's
    /// phone numbers keep their row order.
    pub fn group(rows: impl IntoIterator<Item = ClientSearchResult>) -> Vec<ClientWithPhones> {
        let mut grouped: Vec<ClientWithPhones> = Vec::new();
        for row in rows {
            match grouped.iter_mut().find(|c| c.client_id == row.client_id) {
                Some(client) => {
                    if let Some(number) = row.phone_number {
                        client.phone_numbers.push(number);
                    }
                }
                None => grouped.push(ClientWithPhones {
                    client_id: row.client_id,
                    first_name: row.first_name,
                    last_name: row.last_name,
                    email: row.email,
                    phone_numbers: row.phone_number.into_iter().collect(),
                }),
            }
        }
        grouped
    }
}
