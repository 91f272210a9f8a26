use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, EmailAlreadyTakenResponse, InternalServerErrorResponse,
        InvalidPasswordResponse, UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use tracing::instrument;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{
    ChangePasswordRequest, CreateUserRequest, CreatedUser, MessageResponse, UpdateUserRequest,
    UserIdResponse, UserResponse,
};
use crate::service::UsersService;

pub const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        get_user,
        create_user,
        update_user,
        delete_user,
        change_password,
    ),
    components(
        schemas(
            UserResponse,
            CreateUserRequest,
            CreatedUser,
            UpdateUserRequest,
            UserIdResponse,
            ChangePasswordRequest,
            MessageResponse
        ),
        responses(
            BadRequestValidationResponse,
            UnprocessableEntityResponse,
            EmailAlreadyTakenResponse,
            InvalidPasswordResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User account management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<S: UsersService + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/change-password", patch(change_password))
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all)]
async fn list_users<S: UsersService>(
    State(service): State<Arc<S>>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.get_users().await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all, fields(user_id = %id))]
async fn get_user<S: UsersService>(
    State(service): State<Arc<S>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service
        .get_user(&id)
        .await?
        .ok_or_else(|| UserError::UnprocessableEntity("Unknown user".to_string()))?;

    Ok(Json(user))
}

/// Create a new user
///
/// The email must be available before the password confirmation is checked.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = CreatedUser),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = InvalidPasswordResponse),
        (status = 409, response = EmailAlreadyTakenResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all, fields(email = %input.email))]
async fn create_user<S: UsersService>(
    State(service): State<Arc<S>>,
    ValidatedJson(input): ValidatedJson<CreateUserRequest>,
) -> UserResult<Json<CreatedUser>> {
    let CreateUserRequest {
        name,
        email,
        password,
        cpass,
    } = input;

    if !service.check_mail(&email).await? {
        return Err(UserError::EmailAlreadyTaken("Email Already Used".to_string()));
    }

    if cpass != password {
        return Err(UserError::InvalidPassword(
            "Password confirmation does not match".to_string(),
        ));
    }

    if !service.create_user(&name, &email, &password).await? {
        return Err(UserError::UnprocessableEntity(
            "Failed to create user".to_string(),
        ));
    }

    Ok(Json(CreatedUser { name, email }))
}

/// Update a user's name and email
///
/// The availability check runs before the update, so a taken email leaves
/// the stored user untouched.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserIdResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = EmailAlreadyTakenResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all, fields(user_id = %id, email = %input.email))]
async fn update_user<S: UsersService>(
    State(service): State<Arc<S>>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateUserRequest>,
) -> UserResult<Json<UserIdResponse>> {
    if !service.check_mail(&input.email).await? {
        return Err(UserError::EmailAlreadyTaken("Email Already Used".to_string()));
    }

    if !service.update_user(&id, &input.name, &input.email).await? {
        return Err(UserError::UnprocessableEntity(
            "Failed to update user".to_string(),
        ));
    }

    Ok(Json(UserIdResponse { id }))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserIdResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all, fields(user_id = %id))]
async fn delete_user<S: UsersService>(
    State(service): State<Arc<S>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserIdResponse>> {
    if !service.delete_user(&id).await? {
        return Err(UserError::UnprocessableEntity(
            "Failed to delete user".to_string(),
        ));
    }

    Ok(Json(UserIdResponse { id }))
}

/// Change a user's password
///
/// Verification of the old password and the confirmation is left to the service.
#[utoipa::path(
    patch,
    path = "/{id}/change-password",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
#[instrument(skip_all, fields(user_id = %id))]
async fn change_password<S: UsersService>(
    State(service): State<Arc<S>>,
    Path(id): Path<String>,
    Json(input): Json<ChangePasswordRequest>,
) -> UserResult<Json<MessageResponse>> {
    let changed = service
        .change_pass(&id, &input.oldpass, &input.newpass, &input.copass)
        .await?;

    if !changed {
        return Err(UserError::Failed("Failed to change password".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Password Changed Successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockUsersService;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::ErrorResponse;
    use serde_json::{Value, json};
    use test_utils::json_body;
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn alice() -> UserResponse {
        UserResponse {
            id: "1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_users_returns_array() {
        let mut mock = MockUsersService::new();
        mock.expect_get_users().times(1).returning(|| Ok(vec![alice()]));

        let response = router(mock).oneshot(empty_request("GET", "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let users: Vec<UserResponse> = json_body(response.into_body()).await;
        assert_eq!(users, vec![alice()]);
    }

    #[tokio::test]
    async fn test_list_users_failure_propagates_unchanged() {
        let mut mock = MockUsersService::new();
        mock.expect_get_users()
            .returning(|| Err(UserError::Internal("connection reset".to_string())));

        let response = router(mock).oneshot(empty_request("GET", "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.error, "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_get_user_found() {
        let mut mock = MockUsersService::new();
        mock.expect_get_user()
            .withf(|id: &str| id == "1")
            .times(1)
            .returning(|_| Ok(Some(alice())));

        let response = router(mock).oneshot(empty_request("GET", "/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let user: UserResponse = json_body(response.into_body()).await;
        assert_eq!(user, alice());
    }

    #[tokio::test]
    async fn test_get_user_missing_is_unprocessable() {
        let mut mock = MockUsersService::new();
        mock.expect_get_user().times(1).returning(|_| Ok(None));

        let response = router(mock)
            .oneshot(empty_request("GET", "/missing"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.error, "UNPROCESSABLE_ENTITY");
        assert_eq!(body.message, "Unknown user");
    }

    #[tokio::test]
    async fn test_create_user_echoes_name_and_email() {
        let mut mock = MockUsersService::new();
        mock.expect_check_mail().times(1).returning(|_| Ok(true));
        mock.expect_create_user()
            .withf(|name: &str, email: &str, password: &str| {
                name == "A" && email == "a@x.com" && password == "p"
            })
            .times(1)
            .returning(|_, _, _| Ok(true));

        let response = router(mock)
            .oneshot(json_request(
                "POST",
                "/",
                json!({"name": "A", "email": "a@x.com", "password": "p", "cpass": "p"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body, json!({"name": "A", "email": "a@x.com"}));
    }

    #[tokio::test]
    async fn test_create_user_password_mismatch_never_creates() {
        let mut mock = MockUsersService::new();
        mock.expect_check_mail().returning(|_| Ok(true));
        mock.expect_create_user().never();

        let response = router(mock)
            .oneshot(json_request(
                "POST",
                "/",
                json!({"name": "A", "email": "a@x.com", "password": "p", "cpass": "q"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.error, "INVALID_PASSWORD");
    }

    #[tokio::test]
    async fn test_create_user_taken_email() {
        let mut mock = MockUsersService::new();
        mock.expect_check_mail().times(1).returning(|_| Ok(false));
        mock.expect_create_user().never();

        let response = router(mock)
            .oneshot(json_request(
                "POST",
                "/",
                json!({"name": "A", "email": "a@x.com", "password": "p", "cpass": "q"}),
            ))
            .await
            .unwrap();

        // Availability is checked before the confirmation
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.error, "EMAIL_ALREADY_TAKEN");
    }

    #[tokio::test]
    async fn test_create_user_service_failure_is_unprocessable() {
        let mut mock = MockUsersService::new();
        mock.expect_check_mail().returning(|_| Ok(true));
        mock.expect_create_user().times(1).returning(|_, _, _| Ok(false));

        let response = router(mock)
            .oneshot(json_request(
                "POST",
                "/",
                json!({"name": "A", "email": "a@x.com", "password": "p", "cpass": "p"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_user_invalid_body_skips_service() {
        let mut mock = MockUsersService::new();
        mock.expect_check_mail().never();
        mock.expect_create_user().never();

        let response = router(mock)
            .oneshot(json_request(
                "POST",
                "/",
                json!({"name": "", "email": "nope", "password": "p", "cpass": "p"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_user_echoes_id() {
        let mut mock = MockUsersService::new();
        mock.expect_check_mail().times(1).returning(|_| Ok(true));
        mock.expect_update_user()
            .withf(|id: &str, name: &str, email: &str| {
                id == "1" && name == "B" && email == "b@x.com"
            })
            .times(1)
            .returning(|_, _, _| Ok(true));

        let response = router(mock)
            .oneshot(json_request("PUT", "/1", json!({"name": "B", "email": "b@x.com"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: UserIdResponse = json_body(response.into_body()).await;
        assert_eq!(body.id, "1");
    }

    #[tokio::test]
    async fn test_update_user_taken_email_does_not_mutate() {
        let mut mock = MockUsersService::new();
        mock.expect_check_mail().times(1).returning(|_| Ok(false));
        mock.expect_update_user().never();

        let response = router(mock)
            .oneshot(json_request("PUT", "/1", json!({"name": "B", "email": "b@x.com"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_update_user_failure_is_unprocessable() {
        let mut mock = MockUsersService::new();
        mock.expect_check_mail().returning(|_| Ok(true));
        mock.expect_update_user().times(1).returning(|_, _, _| Ok(false));

        let response = router(mock)
            .oneshot(json_request("PUT", "/1", json!({"name": "B", "email": "b@x.com"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.message, "Failed to update user");
    }

    #[tokio::test]
    async fn test_delete_user_echoes_id() {
        let mut mock = MockUsersService::new();
        mock.expect_delete_user()
            .withf(|id: &str| id == "1")
            .times(1)
            .returning(|_| Ok(true));

        let response = router(mock).oneshot(empty_request("DELETE", "/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body, json!({"id": "1"}));
    }

    #[tokio::test]
    async fn test_delete_user_failure_is_unprocessable() {
        let mut mock = MockUsersService::new();
        mock.expect_delete_user().times(1).returning(|_| Ok(false));

        let response = router(mock).oneshot(empty_request("DELETE", "/1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.error, "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_change_password_forwards_fields() {
        let mut mock = MockUsersService::new();
        mock.expect_change_pass()
            .withf(|id: &str, old: &str, new: &str, confirm: &str| {
                id == "1" && old == "old" && new == "new" && confirm == "other"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(true));

        let response = router(mock)
            .oneshot(json_request(
                "PATCH",
                "/1/change-password",
                json!({"oldpass": "old", "newpass": "new", "copass": "other"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = json_body(response.into_body()).await;
        assert_eq!(body.message, "Password Changed Successfully");
    }

    #[tokio::test]
    async fn test_change_password_false_is_generic_failure() {
        let mut mock = MockUsersService::new();
        mock.expect_change_pass().times(1).returning(|_, _, _, _| Ok(false));

        let response = router(mock)
            .oneshot(json_request(
                "PATCH",
                "/1/change-password",
                json!({"oldpass": "old", "newpass": "new", "copass": "new"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert_eq!(body.message, "Failed to change password");
    }

    #[test]
    fn test_openapi_lists_all_operations() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/{id}/change-password"));
        assert!(paths.iter().any(|p| p.as_str() == "/{id}"));
    }
}
