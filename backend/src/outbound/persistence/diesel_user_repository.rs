//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Email uniqueness rests on the `users_email_key` unique index: a violating
//! insert or update fails inside PostgreSQL and is reported as
//! [`UserPersistenceError::DuplicateEmail`] with nothing written.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId, UserProfile};

use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Name of the unique index guarding `users.email`.
const EMAIL_UNIQUE_CONSTRAINT: &str = "users_email_key";

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

/// Map Diesel errors to user persistence errors.
///
/// `email` is the address being written, reported back when the unique
/// index rejects it.
fn map_diesel_error(error: diesel::result::Error, email: Option<&str>) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)
            if info.constraint_name() == Some(EMAIL_UNIQUE_CONSTRAINT) =>
        {
            UserPersistenceError::duplicate_email(email.unwrap_or_default())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        _ => UserPersistenceError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> User {
    let profile = UserProfile::from_stored(row.first_name, row.last_name, row.email, row.department);
    User::new(UserId::from_uuid(row.id), profile)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order((users::created_at.asc(), users::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(rows.into_iter().map(row_to_user).collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .find(*id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(row.map(row_to_user))
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let profile = user.profile();
        let email = profile.email().as_ref();

        let new_row = NewUserRow {
            id: *user.id().as_uuid(),
            first_name: profile.first_name(),
            last_name: profile.last_name(),
            email,
            department: profile.department(),
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(email)))?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let profile = user.profile();
        let email = profile.email().as_ref();

        let changes = UserUpdate {
            first_name: profile.first_name(),
            last_name: profile.last_name(),
            email,
            department: profile.department(),
            updated_at: Utc::now(),
        };

        let updated = diesel::update(users::table.find(*user.id().as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(email)))?;

        Ok(updated > 0)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(users::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Error translation coverage; query behaviour needs a live database.

    use super::*;
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    struct StubInfo {
        constraint: Option<&'static str>,
    }

    impl DatabaseErrorInformation for StubInfo {
        fn message(&self) -> &str {
            "stub database error"
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            Some("users")
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(StubInfo { constraint }))
    }

    #[rstest]
    fn email_unique_violation_becomes_duplicate_email() {
        let error = database_error(
            DatabaseErrorKind::UniqueViolation,
            Some(EMAIL_UNIQUE_CONSTRAINT),
        );

        assert_eq!(
            map_diesel_error(error, Some("jo@x.co")),
            UserPersistenceError::duplicate_email("jo@x.co")
        );
    }

    #[rstest]
    fn other_unique_violations_are_query_errors() {
        let error = database_error(DatabaseErrorKind::UniqueViolation, Some("users_pkey"));

        assert!(matches!(
            map_diesel_error(error, Some("jo@x.co")),
            UserPersistenceError::Query { .. }
        ));
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let error = database_error(DatabaseErrorKind::ClosedConnection, None);

        assert!(matches!(
            map_diesel_error(error, None),
            UserPersistenceError::Connection { .. }
        ));
    }

    #[rstest]
    fn pool_errors_are_connection_errors() {
        assert_eq!(
            map_pool_error(PoolError::checkout("timed out")),
            UserPersistenceError::connection("timed out")
        );
    }

    #[rstest]
    fn rows_convert_without_revalidation() {
        let id = uuid::Uuid::new_v4();
        let user = row_to_user(UserRow {
            id,
            first_name: "Jo".to_owned(),
            last_name: "Lee".to_owned(),
            email: "jo@x.co".to_owned(),
            department: "Eng".to_owned(),
        });

        assert_eq!(user.id().as_uuid(), &id);
        assert_eq!(user.profile().email().as_ref(), "jo@x.co");
    }
}
