//! DTOs for the games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub title: String,
    pub number_of_players: i32,
    pub description: String,
    pub game_type_id: i64,
    pub gamer_id: i64,
}

/// DTO for a full replacement of an existing game.
///
/// PUT semantics: every field is written, nothing is merged.
#[derive(Debug, Clone)]
pub struct GameReplace {
    pub id: i64,
    pub title: String,
    pub number_of_players: i32,
    pub description: String,
    pub game_type_id: i64,
    pub gamer_id: i64,
}
