use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::users::{login as login_user, register_account, NewAccount};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub valid: bool,
    pub token: String,
}

/// POST /register
///
/// Creates the account, its gamer profile, and the first auth token in one
/// transaction. Responds 201 with the token the client must present on
/// every subsequent game-resource call.
async fn register(
    http_req: HttpRequest,
    req: web::Json<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = req.into_inner();
    let account = NewAccount {
        username: body.username,
        password: body.password,
        email: body.email,
        address: body.address,
        phone_number: body.phone_number,
        first_name: body.first_name,
        last_name: body.last_name,
        bio: body.bio,
    };

    let (_user, _gamer, token) = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { register_account(txn, account).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(RegisterResponse { token }))
}

/// POST /login
///
/// Verifies the username/password pair and issues a fresh token.
async fn login(
    http_req: HttpRequest,
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = req.into_inner();

    let token = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { login_user(txn, &body.username, &body.password).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse { valid: true, token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)));
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
