//! Resolve the request's auth token to a gamer profile.
//!
//! Handlers that take a `CurrentGamer` parameter are thereby authenticated:
//! extraction fails with 401 when the Authorization header is absent,
//! malformed, or names an unknown token.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::db::txn::SharedTxn;
use crate::error::AppError;
use crate::extractors::auth_token::AuthToken;
use crate::services::users::gamer_for_token;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentGamer {
    pub user_id: i64,
    pub gamer_id: i64,
    pub username: String,
}

impl FromRequest for CurrentGamer {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let token = AuthToken::from_request(req, payload);
        let req = req.clone();

        Box::pin(async move {
            let token = token.await?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            // Honor a test-injected transaction; otherwise read off the pool.
            let (user, gamer) = if let Some(shared) = SharedTxn::from_req(&req) {
                gamer_for_token(shared.transaction(), &token.token).await?
            } else {
                let db = require_db(app_state)?;
                gamer_for_token(db, &token.token).await?
            };

            Ok(CurrentGamer {
                user_id: user.id,
                gamer_id: gamer.id,
                username: user.username,
            })
        })
    }
}
