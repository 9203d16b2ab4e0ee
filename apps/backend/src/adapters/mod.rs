//! SeaORM persistence adapters.
//!
//! Adapter functions are generic over `ConnectionTrait` so they run equally
//! against a pooled connection, a transaction, or a test-injected SharedTxn.
//! They return `DbErr`; callers map to `AppError`.

pub mod game_types_sea;
pub mod gamers_sea;
pub mod games_sea;
pub mod tokens_sea;
pub mod users_sea;
