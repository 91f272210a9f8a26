use axum::Router;
use domain_users::{AccountService, InMemoryUserRepository};

pub mod health;
pub mod users;

/// The account service as wired in this binary
pub type Users = AccountService<InMemoryUserRepository>;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(service: &Users) -> Router {
    Router::new().nest("/users", users::router(service))
}

/// Creates a router with the /ready endpoint that checks the users store.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(service: Users) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(service)
}
