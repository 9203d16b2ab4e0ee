//! Database seeding helpers.
//!
//! The API exposes no create endpoint for game types, and some flows (GET,
//! PUT, DELETE) want a pre-existing game, so tests seed rows through the
//! adapters exactly as the service would.

use backend::adapters::{game_types_sea, games_sea};
use backend::entities::{game_types, games};
use backend::services::users::gamer_for_token;
use backend::state::app_state::AppState;

fn db(state: &AppState) -> &sea_orm::DatabaseConnection {
    state.db().expect("test state should have a database")
}

/// Seed one game type; the first call in a fresh database yields id 1.
pub async fn seed_game_type(state: &AppState, label: &str) -> game_types::Model {
    game_types_sea::create_game_type(db(state), label)
        .await
        .expect("seeding a game type should succeed")
}

/// Resolve the gamer id behind a token, as the handlers do.
pub async fn gamer_id_for_token(state: &AppState, token: &str) -> i64 {
    let (_user, gamer) = gamer_for_token(db(state), token)
        .await
        .expect("token should resolve to a gamer");
    gamer.id
}

/// Seed a game row directly, bypassing the HTTP surface.
pub async fn seed_game(
    state: &AppState,
    title: &str,
    number_of_players: i32,
    description: &str,
    game_type_id: i64,
    gamer_id: i64,
) -> games::Model {
    games_sea::create_game(
        db(state),
        games_sea::GameCreate {
            title: title.to_string(),
            number_of_players,
            description: description.to_string(),
            game_type_id,
            gamer_id,
        },
    )
    .await
    .expect("seeding a game should succeed")
}
