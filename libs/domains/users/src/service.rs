use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User, UserPayload};
use crate::repository::UserRepository;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All users, ordered by id. No pagination.
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(row_id(id)?)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a user after checking both fields are present and non-empty
    pub async fn create_user(&self, input: UserPayload) -> UserResult<User> {
        let new_user = validated(input)?;
        self.repository.create(new_user).await
    }

    /// Overwrite name and email of an existing user.
    ///
    /// Input is validated before the id is looked up, so a bad body on a
    /// missing id reports 400.
    pub async fn update_user(&self, id: i64, input: UserPayload) -> UserResult<User> {
        let new_user = validated(input)?;
        self.repository.update(row_id(id)?, new_user).await
    }

    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        let deleted = self.repository.delete(row_id(id)?).await?;

        if !deleted {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }
}

/// The `id` column is a 32-bit INT; anything wider cannot name a row.
fn row_id(id: i64) -> UserResult<i32> {
    i32::try_from(id).map_err(|_| UserError::NotFound(id))
}

fn validated(input: UserPayload) -> UserResult<NewUser> {
    input.validate().map_err(|e| {
        tracing::debug!(error = %e, "Rejected user payload");
        UserError::missing_fields()
    })?;

    match (input.name, input.email) {
        (Some(name), Some(email)) => Ok(NewUser { name, email }),
        _ => Err(UserError::missing_fields()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn alice() -> User {
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name_without_touching_storage() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let err = service
            .create_user(UserPayload::new("", "alice@x.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Validation(ref m) if m == "Name and Email required"));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);
        let input = UserPayload {
            name: Some("Alice".to_string()),
            email: None,
        };

        assert!(matches!(
            service.create_user(input).await,
            Err(UserError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_passes_fields_through() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .with(eq(NewUser::new("Alice", "alice@x.com")))
            .times(1)
            .returning(|_| Ok(alice()));

        let service = UserService::new(mock_repo);
        let user = service
            .create_user(UserPayload::new("Alice", "alice@x.com"))
            .await
            .unwrap();

        assert_eq!(user, alice());
    }

    #[tokio::test]
    async fn test_create_surfaces_conflict() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().returning(|input| {
            Err(UserError::Conflict(format!(
                "Duplicate entry '{}' for key 'users.email'",
                input.email
            )))
        });

        let service = UserService::new(mock_repo);
        let err = service
            .create_user(UserPayload::new("Alice", "alice@x.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(5))
            .returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.get_user(5).await,
            Err(UserError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let err = service
            .update_user(99, UserPayload::new("Alicia", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(3))
            .returning(|_| Ok(false));

        let service = UserService::new(mock_repo);
        assert!(matches!(
            service.delete_user(3).await,
            Err(UserError::NotFound(3))
        ));
    }

    #[tokio::test]
    async fn test_ids_beyond_column_range_are_not_found_without_touching_storage() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();
        mock_repo.expect_delete().never();

        let service = UserService::new(mock_repo);
        let id = 3_000_000_000_i64;

        assert!(matches!(
            service.get_user(id).await,
            Err(UserError::NotFound(n)) if n == id
        ));
        assert!(matches!(
            service
                .update_user(id, UserPayload::new("Alice", "alice@x.com"))
                .await,
            Err(UserError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_user(id).await,
            Err(UserError::NotFound(_))
        ));
    }
}
