use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every user, ordered by id
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// Insert a user; the store assigns the id
    async fn create(&self, input: NewUser) -> UserResult<User>;

    /// Overwrite name and email; `NotFound` if the id does not exist
    async fn update(&self, id: i32, input: NewUser) -> UserResult<User>;

    /// Delete a user by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> UserResult<bool>;
}

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, User>,
}

impl Table {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.rows
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

fn duplicate_entry(email: &str) -> UserError {
    UserError::Conflict(format!("Duplicate entry '{}' for key 'users.email'", email))
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids are never reused after a delete, matching `AUTO_INCREMENT`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, input: NewUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        if table.email_taken(&input.email, None) {
            return Err(duplicate_entry(&input.email));
        }

        table.last_id += 1;
        let user = User {
            id: table.last_id,
            name: input.name,
            email: input.email,
        };
        table.rows.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, id: i32, input: NewUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&id) {
            return Err(UserError::NotFound(id.into()));
        }
        if table.email_taken(&input.email, Some(id)) {
            return Err(duplicate_entry(&input.email));
        }

        let user = User {
            id,
            name: input.name,
            email: input.email,
        };
        table.rows.insert(id, user.clone());

        tracing::info!(user_id = id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: i32) -> UserResult<bool> {
        let mut table = self.table.write().await;
        let removed = table.rows.remove(&id).is_some();
        if removed {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(removed)
    }
}
