//! Client entities (database row mappings).

use sqlx::FromRow;

/// Database row mapping for the clients table.
#[derive(Debug, Clone, FromRow)]
pub struct ClientEntity {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<ClientEntity> for domain::models::Client {
    fn from(entity: ClientEntity) -> Self {
        Self {
            client_id: entity.client_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
        }
    }
}

/// Database row mapping for the clients-to-phones left join used by
/// client search. `phone_number` is NULL for clients with no phones.
#[derive(Debug, Clone, FromRow)]
pub struct ClientPhoneRow {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl From<ClientPhoneRow> for domain::models::ClientSearchResult {
    fn from(row: ClientPhoneRow) -> Self {
        Self {
            client_id: row.client_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone_number: row.phone_number,
        }
    }
}
