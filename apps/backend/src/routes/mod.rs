use actix_web::web;

pub mod auth;
pub mod game_types;
pub mod games;
pub mod health;

/// Register all application routes.
///
/// Paths follow the public API shape: `/register` and `/login` are open,
/// everything under `/games` and `/gametypes` requires a `Token` credential
/// (enforced by the `CurrentGamer` extractor on each handler).
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Auth routes: /register, /login
    cfg.configure(auth::configure_routes);

    // Games resource: /games/**
    cfg.configure(games::configure_routes);

    // Game types resource (read-only): /gametypes/**
    cfg.configure(game_types::configure_routes);
}
