//! Readiness check backed by the users store.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_users::UsersService;

use super::Users;

/// Readiness check endpoint that verifies the users store answers a listing.
pub async fn ready_handler(State(service): State<Users>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "users",
        Box::pin(async {
            service
                .get_users()
                .await
                .map(|_| ())
                .map_err(|e| format!("Users store unavailable: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
