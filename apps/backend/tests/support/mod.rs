#![allow(dead_code)]

pub mod app_builder;
pub mod auth;
pub mod fixtures;

use backend::config::db::DbProfile;
use backend::error::AppError;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;

// Re-export only what current tests actually import
pub use app_builder::create_test_app;

/// Build an AppState backed by a fresh in-memory database with migrations
/// applied. Every call returns an isolated database.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state().with_db(DbProfile::Test).build().await
}
