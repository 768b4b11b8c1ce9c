//! MySQL implementation of the CustomerRepository trait.
//!
//! Row-mapping glue over the `customer` table. The table's unique index on
//! `email` is the final arbiter for identity uniqueness; violations raised
//! by the database are translated to [`DomainError::DuplicateEmail`] so the
//! services see the same failure whether the advisory check or the commit
//! caught the race.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use cust_core::domain::entities::customer::{Customer, Gender, NewCustomer};
use cust_core::errors::DomainError;
use cust_core::repositories::CustomerRepository;

/// MySQL implementation of CustomerRepository
pub struct MySqlCustomerRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    /// Create a new MySQL customer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Customer entity
    fn row_to_customer(row: &sqlx::mysql::MySqlRow) -> Result<Customer, DomainError> {
        let gender: String = row
            .try_get("gender")
            .map_err(|e| internal(format!("failed to get gender: {e}")))?;

        Ok(Customer {
            id: row
                .try_get("id")
                .map_err(|e| internal(format!("failed to get id: {e}")))?,
            name: row
                .try_get("name")
                .map_err(|e| internal(format!("failed to get name: {e}")))?,
            email: row
                .try_get("email")
                .map_err(|e| internal(format!("failed to get email: {e}")))?,
            password_hash: row
                .try_get("password")
                .map_err(|e| internal(format!("failed to get password: {e}")))?,
            age: row
                .try_get("age")
                .map_err(|e| internal(format!("failed to get age: {e}")))?,
            gender: parse_gender(&gender)?,
            profile_image_key: row
                .try_get("profile_image_id")
                .map_err(|e| internal(format!("failed to get profile_image_id: {e}")))?,
        })
    }
}

fn internal(message: String) -> DomainError {
    DomainError::Internal { message }
}

fn parse_gender(value: &str) -> Result<Gender, DomainError> {
    match value {
        "MALE" => Ok(Gender::Male),
        "FEMALE" => Ok(Gender::Female),
        other => Err(internal(format!("unknown gender value [{other}]"))),
    }
}

fn gender_to_str(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "MALE",
        Gender::Female => "FEMALE",
    }
}

/// Maps a write error, surfacing unique-key violations as DuplicateEmail
fn map_write_error(e: sqlx::Error, context: &str) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::DuplicateEmail;
        }
    }
    internal(format!("{context}: {e}"))
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let query = r#"
            SELECT id, name, email, password, age, gender, profile_image_id
            FROM customer
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| internal(format!("failed to select customers: {e}")))?;

        rows.iter().map(Self::row_to_customer).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let query = r#"
            SELECT id, name, email, password, age, gender, profile_image_id
            FROM customer
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal(format!("failed to select customer by id: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let query = r#"
            SELECT id, name, email, password, age, gender, profile_image_id
            FROM customer
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal(format!("failed to select customer by email: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM customer WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| internal(format!("failed to count customers by id: {e}")))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| internal(format!("failed to get count: {e}")))?;
        Ok(count > 0)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM customer WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| internal(format!("failed to count customers by email: {e}")))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| internal(format!("failed to get count: {e}")))?;
        Ok(count > 0)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let query = r#"
            INSERT INTO customer (name, email, password, age, gender)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.password_hash)
            .bind(customer.age)
            .bind(gender_to_str(customer.gender))
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "failed to insert customer"))?;

        Ok(Customer {
            id: result.last_insert_id() as i64,
            name: customer.name,
            email: customer.email,
            password_hash: customer.password_hash,
            age: customer.age,
            gender: customer.gender,
            profile_image_key: None,
        })
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let query = r#"
            UPDATE customer
            SET name = ?, email = ?, password = ?, age = ?, gender = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.password_hash)
            .bind(customer.age)
            .bind(gender_to_str(customer.gender))
            .bind(customer.id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "failed to update customer"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::customer_not_found(customer.id));
        }
        Ok(customer)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM customer WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("failed to delete customer: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_profile_image_key(&self, id: i64, key: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE customer SET profile_image_id = ? WHERE id = ?")
            .bind(key)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| internal(format!("failed to set profile image key: {e}")))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::customer_not_found(id));
        }
        Ok(())
    }
}
