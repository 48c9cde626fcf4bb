//! Phone entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the phones table.
#[derive(Debug, Clone, FromRow)]
pub struct PhoneEntity {
    pub phone_id: i32,
    pub client_id: i32,
    pub phone_number: String,
}

impl From<PhoneEntity> for domain::models::Phone {
    fn from(entity: PhoneEntity) -> Self {
        Self {
            phone_id: entity.phone_id,
            client_id: entity.client_id,
            phone_number: entity.phone_number,
        }
    }
}
