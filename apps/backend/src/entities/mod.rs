pub mod auth_tokens;
pub mod game_types;
pub mod gamers;
pub mod games;
pub mod users;
