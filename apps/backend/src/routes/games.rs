//! Game-related HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::current_gamer::CurrentGamer;
use crate::services::games::{
    create_game, delete_game, game_detail, list_games, replace_game, GameDetails, GameDraft,
};
use crate::state::app_state::AppState;

/// Wire shape shared by POST and PUT. Incoming field names are camelCase
/// where the original API used camelCase; responses are snake_case.
#[derive(Debug, Deserialize)]
pub struct GameUpsertRequest {
    pub title: String,
    #[serde(rename = "numberOfPlayers")]
    pub number_of_players: i32,
    pub description: String,
    #[serde(rename = "gameTypeId")]
    pub game_type_id: i64,
    /// Accepted for wire compatibility; the owning gamer always comes from
    /// the auth token.
    #[serde(default)]
    pub gamer: Option<i64>,
}

impl GameUpsertRequest {
    fn into_draft(self) -> GameDraft {
        GameDraft {
            title: self.title,
            number_of_players: self.number_of_players,
            description: self.description,
            game_type_id: self.game_type_id,
        }
    }
}

#[derive(Debug, Serialize)]
struct GameTypeRef {
    id: i64,
    label: String,
}

#[derive(Debug, Serialize)]
struct GamerRef {
    id: i64,
    bio: String,
}

#[derive(Debug, Serialize)]
struct GameResponse {
    id: i64,
    title: String,
    number_of_players: i32,
    description: String,
    gametype: GameTypeRef,
    gamer: GamerRef,
}

impl From<GameDetails> for GameResponse {
    fn from(details: GameDetails) -> Self {
        GameResponse {
            id: details.game.id,
            title: details.game.title,
            number_of_players: details.game.number_of_players,
            description: details.game.description,
            gametype: GameTypeRef {
                id: details.game_type.id,
                label: details.game_type.label,
            },
            gamer: GamerRef {
                id: details.gamer.id,
                bio: details.gamer.bio,
            },
        }
    }
}

/// POST /games
async fn create(
    http_req: HttpRequest,
    gamer: CurrentGamer,
    req: web::Json<GameUpsertRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = req.into_inner();

    if let Some(claimed) = body.gamer {
        if claimed != gamer.gamer_id {
            debug!(
                claimed,
                actual = gamer.gamer_id,
                "Request body names a different gamer; using the token's"
            );
        }
    }

    let gamer_id = gamer.gamer_id;
    let draft = body.into_draft();

    let details = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { create_game(txn, gamer_id, draft).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(GameResponse::from(details)))
}

/// GET /games
async fn list(
    http_req: HttpRequest,
    _gamer: CurrentGamer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let all = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { list_games(txn).await })
    })
    .await?;

    let body: Vec<GameResponse> = all.into_iter().map(GameResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /games/{id}
async fn retrieve(
    http_req: HttpRequest,
    _gamer: CurrentGamer,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();

    let details = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { game_detail(txn, game_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(GameResponse::from(details)))
}

/// PUT /games/{id}: full replacement, 204 on success.
async fn replace(
    http_req: HttpRequest,
    _gamer: CurrentGamer,
    path: web::Path<i64>,
    req: web::Json<GameUpsertRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let draft = req.into_inner().into_draft();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { replace_game(txn, game_id, draft).await })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /games/{id}: 204 on success, 404 when the row is already gone.
async fn remove(
    http_req: HttpRequest,
    _gamer: CurrentGamer,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();

    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { delete_game(txn, game_id).await })
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games")
            .route(web::post().to(create))
            .route(web::get().to(list)),
    );
    cfg.service(
        web::resource("/games/{game_id}")
            .route(web::get().to(retrieve))
            .route(web::put().to(replace))
            .route(web::delete().to(remove)),
    );
}
