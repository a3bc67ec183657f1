use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Message returned whenever `name` or `email` is missing or empty
pub const NAME_AND_EMAIL_REQUIRED: &str = "Name and Email required";

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Assigned by the database on insert
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Alice")]
    pub name: String,
    /// Unique across all users
    #[schema(example = "alice@x.com")]
    pub email: String,
}

/// Request body for create and update.
///
/// Both fields are optional at the JSON level so that a missing key and an
/// empty string are reported the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    #[validate(
        required(message = "Name and Email required"),
        length(min = 1, message = "Name and Email required")
    )]
    #[schema(example = "Alice")]
    pub name: Option<String>,

    #[validate(
        required(message = "Name and Email required"),
        length(min = 1, message = "Name and Email required")
    )]
    #[schema(example = "alice@x.com")]
    pub email: Option<String>,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Validated name/email pair handed to the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Confirmation body for update and delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User updated successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Confirmation body for create, carrying the assigned id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "User added successfully")]
    pub message: String,
    #[schema(example = 1)]
    pub id: i32,
}
