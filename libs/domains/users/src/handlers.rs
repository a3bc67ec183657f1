use axum::{
    Json, Router,
    extract::State,
    response::Html,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity::{self, USERS_TABLE_DDL};
use crate::error::UserResult;
use crate::models::{CreatedResponse, MessageResponse, User, UserPayload};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, get_user, create_user, update_user, delete_user, table_schema),
    components(
        schemas(User, UserPayload, MessageResponse, CreatedResponse),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router.
///
/// Paths are absolute (`/users/...`, `/sql`); merge the result at the root.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users/add", post(create_user))
        .route("/users/update/{id}", put(update_user))
        .route("/users/delete/{id}", delete(delete_user))
        .route("/sql", get(table_schema))
        .with_state(shared_service)
}

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<User>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/add",
    tag = entity::Model::TAG,
    request_body = UserPayload,
    responses(
        (status = 200, description = "User added", body = CreatedResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<UserPayload>,
) -> UserResult<Json<CreatedResponse>> {
    let user = service.create_user(input).await?;
    Ok(Json(CreatedResponse {
        message: "User added successfully".to_string(),
        id: user.id,
    }))
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/users/update/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UserPayload>,
) -> UserResult<Json<MessageResponse>> {
    service.update_user(id, input).await?;
    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/delete/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<MessageResponse>> {
    service.delete_user(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// Show the DDL of the users table
#[utoipa::path(
    get,
    path = "/sql",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "Table schema wrapped in <pre>", content_type = "text/html", body = String)
    )
)]
async fn table_schema() -> Html<String> {
    Html(format!("<pre>\n{}\n</pre>\n", USERS_TABLE_DDL))
}
