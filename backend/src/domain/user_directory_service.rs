//! Domain service implementing the directory use cases.
//!
//! Validation runs here on every create and update, whatever the client
//! already checked. Email uniqueness is left to the repository, which
//! enforces it atomically.

use std::sync::Arc;

use async_trait::async_trait;
use directory_contract::UserFields;
use tracing::{debug, info, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserId, UserProfile};

/// Directory use cases backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserDirectoryService {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectoryService {
    /// Build the service over a repository adapter.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            warn!(%message, "user repository unavailable");
            Error::service_unavailable("user store is unavailable")
        }
        UserPersistenceError::Query { message } => Error::internal(message),
        UserPersistenceError::DuplicateEmail { email } => {
            debug!(%email, "rejected duplicate email");
            Error::duplicate_email()
        }
    }
}

fn user_not_found(id: &UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

fn profile_from(fields: UserFields) -> Result<UserProfile, Error> {
    UserProfile::try_from_fields(fields).map_err(Error::validation)
}

#[async_trait]
impl UsersQuery for UserDirectoryService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl UsersCommand for UserDirectoryService {
    async fn create_user(&self, fields: UserFields) -> Result<User, Error> {
        let user = User::new(UserId::random(), profile_from(fields)?);
        self.repository
            .insert(&user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: &UserId, fields: UserFields) -> Result<User, Error> {
        let user = User::new(*id, profile_from(fields)?);
        let updated = self
            .repository
            .update(&user)
            .await
            .map_err(map_persistence_error)?;
        if !updated {
            return Err(user_not_found(id));
        }
        info!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if !deleted {
            return Err(user_not_found(id));
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Use-case behaviour against a mocked repository.

    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use directory_contract::Field;
    use rstest::{fixture, rstest};

    const USER_ID: &str = "11111111-1111-1111-1111-111111111111";

    #[fixture]
    fn fields() -> UserFields {
        UserFields {
            first_name: "Jo".to_owned(),
            last_name: "Lee".to_owned(),
            email: "jo@x.co".to_owned(),
            department: "Eng".to_owned(),
        }
    }

    fn user_id() -> UserId {
        UserId::new(USER_ID).expect("valid id")
    }

    fn service(repository: MockUserRepository) -> UserDirectoryService {
        UserDirectoryService::new(Arc::new(repository))
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_id_and_persists(fields: UserFields) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_insert()
            .withf(|user| user.profile().email().as_ref() == "jo@x.co")
            .times(1)
            .returning(|_| Ok(()));

        let user = service(repository)
            .create_user(fields)
            .await
            .expect("create succeeds");

        assert_eq!(user.profile().first_name(), "Jo");
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_invalid_fields_without_touching_storage(mut fields: UserFields) {
        fields.first_name = " ".to_owned();
        let mut repository = MockUserRepository::new();
        repository.expect_insert().never();

        let err = service(repository)
            .create_user(fields)
            .await
            .expect_err("validation fails");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.field_errors().len(), 1);
        assert_eq!(err.field_errors()[0].param, Field::FirstName);
        assert_eq!(err.field_errors()[0].msg, "First name is required");
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_maps_to_domain_error(fields: UserFields) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_insert()
            .returning(|user| {
                Err(UserPersistenceError::duplicate_email(
                    user.profile().email().as_ref(),
                ))
            });

        let err = service(repository)
            .create_user(fields)
            .await
            .expect_err("duplicate rejected");

        assert_eq!(err.code(), ErrorCode::DuplicateEmail);
    }

    #[rstest]
    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let err = service(repository)
            .get_user(&user_id())
            .await
            .expect_err("missing user");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn update_keeps_identifier_and_replaces_fields(mut fields: UserFields) {
        fields.department = "Research".to_owned();
        let mut repository = MockUserRepository::new();
        repository
            .expect_update()
            .withf(|user| user.id().to_string() == USER_ID)
            .returning(|_| Ok(true));

        let user = service(repository)
            .update_user(&user_id(), fields)
            .await
            .expect("update succeeds");

        assert_eq!(user.id(), &user_id());
        assert_eq!(user.profile().department(), "Research");
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_unknown_user_is_not_found(fields: UserFields) {
        let mut repository = MockUserRepository::new();
        repository.expect_update().returning(|_| Ok(false));

        let err = service(repository)
            .update_user(&user_id(), fields)
            .await
            .expect_err("unknown user");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(UserPersistenceError::query("syntax"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn list_maps_persistence_failures(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockUserRepository::new();
        repository
            .expect_list()
            .return_once(move || Err(failure));

        let err = service(repository)
            .list_users()
            .await
            .expect_err("failure propagates");

        assert_eq!(err.code(), expected);
    }

    #[rstest]
    #[case(true, None)]
    #[case(false, Some(ErrorCode::NotFound))]
    #[tokio::test]
    async fn delete_reports_missing_users(
        #[case] existed: bool,
        #[case] expected: Option<ErrorCode>,
    ) {
        let mut repository = MockUserRepository::new();
        repository.expect_delete().returning(move |_| Ok(existed));

        let result = service(repository).delete_user(&user_id()).await;

        assert_eq!(result.err().map(|err| err.code()), expected);
    }
}
