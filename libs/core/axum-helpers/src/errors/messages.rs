//! Standard error messages for consistent error responses.

pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
pub const JSON_OBJECT_REQUIRED: &str = "Request body must be a JSON object";
