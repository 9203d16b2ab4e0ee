//! Read-only game-type routes.
//!
//! The API deliberately exposes no create/update surface for game types;
//! they are seeded through the persistence layer.

use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::adapters::game_types_sea;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::current_gamer::CurrentGamer;
use crate::state::app_state::AppState;

/// GET /gametypes
async fn list(
    http_req: HttpRequest,
    _gamer: CurrentGamer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_types = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            game_types_sea::list_all(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(game_types))
}

/// GET /gametypes/{id}
async fn retrieve(
    http_req: HttpRequest,
    _gamer: CurrentGamer,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_type_id = path.into_inner();

    let game_type = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            game_types_sea::find_by_id(txn, game_type_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?
    .ok_or_else(|| {
        AppError::not_found(
            ErrorCode::NotFound,
            format!("Game type with ID {game_type_id} not found"),
        )
    })?;

    Ok(HttpResponse::Ok().json(game_type))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/gametypes").route(web::get().to(list)));
    cfg.service(web::resource("/gametypes/{game_type_id}").route(web::get().to(retrieve)));
}
