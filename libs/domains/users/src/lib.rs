//! Users Domain
//!
//! User account management: listing, lookup, registration, profile updates,
//! deletion and password changes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, outcome to status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Password hashing and verification
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities and DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{AccountService, InMemoryUserRepository, handlers};
//!
//! let service = AccountService::new(InMemoryUserRepository::new());
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{
    ChangePasswordRequest, CreateUserRequest, CreatedUser, MessageResponse, UpdateUserRequest,
    User, UserIdResponse, UserResponse,
};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::{AccountService, UsersService};
