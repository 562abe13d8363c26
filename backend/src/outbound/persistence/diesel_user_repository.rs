//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserCredentials, UserId};

use super::diesel_error_mapping::{
    DieselFailure, USERS_EMAIL_KEY, classify_diesel_error, pool_error_message,
};
use super::models::{NewUserRow, UserCredentialsRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        other => UserPersistenceError::query(other.message()),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let role = row.role.parse().map_err(|err| {
        warn!(user_id = %row.id, role = %row.role, "stored user has an unknown role");
        UserPersistenceError::query(format!("invalid stored role: {err}"))
    })?;
    Ok(User {
        id: UserId::from_uuid(row.id),
        name: row.name,
        email: row.email,
        role,
        phone: row.phone,
        is_first_login: row.is_first_login,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .find(id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::email.eq(email.to_lowercase()))
            .select(UserCredentialsRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|row| {
            Ok(UserCredentials {
                user: row_to_user(row.user)?,
                password_hash: row.password_hash,
            })
        })
        .transpose()
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewUserRow {
            id: uuid::Uuid::new_v4(),
            name: &user.name,
            email: &user.email,
            role: user.role.as_str(),
            password_hash: user.password_hash.as_deref(),
            is_first_login: true,
        };

        let inserted = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|error| match classify_diesel_error(error) {
                failure if failure.violates_unique(USERS_EMAIL_KEY) => {
                    UserPersistenceError::duplicate_email(user.email.clone())
                }
                DieselFailure::Connection(message) => UserPersistenceError::connection(message),
                other => UserPersistenceError::query(other.message()),
            })?;
        row_to_user(inserted)
    }

    async fn update_phone(
        &self,
        id: &UserId,
        phone: Option<String>,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(users::table.find(id.as_uuid()))
            .set(users::phone.eq(phone))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(row_to_user)
            .transpose()
    }
}
