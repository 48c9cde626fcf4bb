//! Client repository for database operations.
//!
//! Every operation is a single unit of work: one statement (implicitly
//! atomic) or one explicit transaction. All caller-supplied values reach
//! the database as bound parameters; no query text is ever assembled from
//! input strings.

use sqlx::PgPool;
use validator::Validate;

use domain::models::{ClientSearchFilter, ClientUpdate, NewClient, NewPhone};

use crate::entities::{ClientEntity, ClientPhoneRow};
use crate::error::RepositoryError;
use crate::metrics::QueryTimer;

const CREATE_CLIENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS clients (
        client_id SERIAL PRIMARY KEY,
        first_name VARCHAR(50) NOT NULL,
        last_name VARCHAR(50) NOT NULL,
        email VARCHAR(100) UNIQUE NOT NULL
    )
"#;

const CREATE_PHONES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS phones (
        phone_id SERIAL PRIMARY KEY,
        client_id INTEGER NOT NULL REFERENCES clients(client_id) ON DELETE CASCADE,
        phone_number VARCHAR(20) UNIQUE NOT NULL
    )
"#;

/// Repository for client and phone database operations.
#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Creates a new ClientRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the clients and phones tables if they do not exist.
    ///
    /// Both statements run in one transaction; a failure (e.g. permission
    /// denied) rolls the whole transaction back, leaving no partial
    /// schema. Safe to call on every startup.
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        let timer = QueryTimer::new("ensure_schema");

        let mut tx = self.pool.begin().await?;
        sqlx::query(CREATE_CLIENTS_TABLE).execute(&mut *tx).await?;
        sqlx::query(CREATE_PHONES_TABLE).execute(&mut *tx).await?;
        tx.commit().await?;

        timer.record();
        tracing::debug!("client directory schema ensured");
        Ok(())
    }

    /// Insert a new client and return its assigned identifier.
    ///
    /// The insert and the identifier read-back are one statement, so no
    /// separate transaction is needed. A duplicate email surfaces as
    /// [`RepositoryError::UniqueViolation`].
    pub async fn add_client(&self, new_client: &NewClient) -> Result<i32, RepositoryError> {
        new_client.validate()?;

        let timer = QueryTimer::new("add_client");
        let result = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO clients (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING client_id
            "#,
        )
        .bind(&new_client.first_name)
        .bind(&new_client.last_name)
        .bind(&new_client.email)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        Ok(result?)
    }

    /// Attach a phone number to a client and return the phone identifier.
    ///
    /// An unknown client surfaces as
    /// [`RepositoryError::ForeignKeyViolation`]; a number already assigned
    /// to any client surfaces as [`RepositoryError::UniqueViolation`].
    pub async fn add_phone(&self, new_phone: &NewPhone) -> Result<i32, RepositoryError> {
        new_phone.validate()?;

        let timer = QueryTimer::new("add_phone");
        let result = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO phones (client_id, phone_number)
            VALUES ($1, $2)
            RETURNING phone_id
            "#,
        )
        .bind(new_phone.client_id)
        .bind(&new_phone.phone_number)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        Ok(result?)
    }

    /// Apply the supplied fields of `changes` to a client, leaving absent
    /// fields untouched, and return the updated row.
    ///
    /// The whole edit is one UPDATE statement, so either every supplied
    /// field commits or none does. Returns `Ok(None)` when the client does
    /// not exist.
    pub async fn update_client(
        &self,
        client_id: i32,
        changes: &ClientUpdate,
    ) -> Result<Option<ClientEntity>, RepositoryError> {
        changes.validate()?;

        let timer = QueryTimer::new("update_client");
        let result = sqlx::query_as::<_, ClientEntity>(
            r#"
            UPDATE clients
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email)
            WHERE client_id = $1
            RETURNING client_id, first_name, last_name, email
            "#,
        )
        .bind(client_id)
        .bind(changes.first_name.as_deref())
        .bind(changes.last_name.as_deref())
        .bind(changes.email.as_deref())
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result?)
    }

    /// Delete a client; the cascade rule removes its phones in the same
    /// unit of work. Returns `false` when no such client existed.
    pub async fn delete_client(&self, client_id: i32) -> Result<bool, RepositoryError> {
        let timer = QueryTimer::new("delete_client");
        let result = sqlx::query(
            r#"
            DELETE FROM clients
            WHERE client_id = $1
            "#,
        )
        .bind(client_id)
        .execute(&self.pool)
        .await;
        timer.record();

        Ok(result?.rows_affected() > 0)
    }

    /// Delete the phone row matching the given number exactly. Returns
    /// `false` when no such number existed.
    pub async fn delete_phone(&self, phone_number: &str) -> Result<bool, RepositoryError> {
        let timer = QueryTimer::new("delete_phone");
        let result = sqlx::query(
            r#"
            DELETE FROM phones
            WHERE phone_number = $1
            "#,
        )
        .bind(phone_number)
        .execute(&self.pool)
        .await;
        timer.record();

        Ok(result?.rows_affected() > 0)
    }

    /// Search clients joined to their phone numbers.
    ///
    /// Present filters restrict to exact matches, combined with AND;
    /// absent filters do not restrict. A client with several numbers
    /// appears once per number; a client with none appears once with a
    /// NULL phone. Matching nothing returns an empty vector.
    pub async fn find_clients(
        &self,
        filter: &ClientSearchFilter,
    ) -> Result<Vec<ClientPhoneRow>, RepositoryError> {
        let timer = QueryTimer::new("find_clients");
        let result = sqlx::query_as::<_, ClientPhoneRow>(
            r#"
            SELECT c.client_id, c.first_name, c.last_name, c.email, p.phone_number
            FROM clients c
            LEFT JOIN phones p ON p.client_id = c.client_id
            WHERE ($1::varchar IS NULL OR c.first_name = $1)
              AND ($2::varchar IS NULL OR c.last_name = $2)
              AND ($3::varchar IS NULL OR c.email = $3)
              AND ($4::varchar IS NULL OR p.phone_number = $4)
            ORDER BY c.client_id, p.phone_number
            "#,
        )
        .bind(filter.first_name.as_deref())
        .bind(filter.last_name.as_deref())
        .bind(filter.email.as_deref())
        .bind(filter.phone_number.as_deref())
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    // ClientRepository tests require a database connection and live in
    // tests/client_repository.rs.
}
