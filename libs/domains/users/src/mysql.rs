use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{NewUser, User},
    repository::UserRepository,
};

/// UserRepository over a pooled SeaORM connection.
///
/// Each call checks one connection out of the pool and returns it when the
/// query future completes or is dropped.
#[derive(Clone)]
pub struct MysqlUserRepository {
    db: DatabaseConnection,
}

impl MysqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn storage_error(err: DbErr) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => UserError::Conflict(msg),
        _ => UserError::Storage(err.to_string()),
    }
}

#[async_trait]
impl UserRepository for MysqlUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(model.map(User::from))
    }

    async fn create(&self, input: NewUser) -> UserResult<User> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await.map_err(storage_error)?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    // MySQL counts matched-but-unchanged rows as unaffected, so existence is
    // decided by reading the row back rather than by rows_affected.
    async fn update(&self, id: i32, input: NewUser) -> UserResult<User> {
        entity::Entity::update_many()
            .col_expr(entity::Column::Name, Expr::value(input.name))
            .col_expr(entity::Column::Email, Expr::value(input.email))
            .filter(entity::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(storage_error)?;

        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .ok_or(UserError::NotFound(id.into()))?;

        tracing::info!(user_id = id, "Updated user");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> UserResult<bool> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(storage_error)?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
