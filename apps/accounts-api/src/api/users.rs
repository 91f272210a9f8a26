use axum::Router;
use domain_users::handlers;

use super::Users;

pub fn router(service: &Users) -> Router {
    handlers::router(service.clone())
}
