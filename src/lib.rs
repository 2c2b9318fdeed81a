//! User registration and password login over HTTP, issuing HS256 auth tokens.
//!
//! - `POST /api/users` registers a user.
//! - `GET /api/users/:id` returns a registered user.
//! - `POST /api/auth/login` exchanges credentials for `{"authToken": ...}`.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod users;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
