//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "email": [{
                "code": "email",
                "message": null,
                "params": {"value": "not-an-email"}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - resource absent or operation failed",
    content_type = "application/json",
    example = json!({
        "code": 1009,
        "error": "UNPROCESSABLE_ENTITY",
        "message": "Unknown user"
    })
)]
pub struct UnprocessableEntityResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - Email already registered",
    content_type = "application/json",
    example = json!({
        "code": 1012,
        "error": "EMAIL_ALREADY_TAKEN",
        "message": "Email Already Used"
    })
)]
pub struct EmailAlreadyTakenResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - Password confirmation mismatch",
    content_type = "application/json",
    example = json!({
        "code": 1013,
        "error": "INVALID_PASSWORD",
        "message": "Password confirmation does not match"
    })
)]
pub struct InvalidPasswordResponse(pub ErrorResponse);
