use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Opaque credential extracted from the Authorization header.
///
/// The wire format is `Authorization: Token <token>` (not `Bearer`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// Parse the `Token <t>` scheme out of a header value.
    pub fn parse_header(value: &str) -> Result<AuthToken, AppError> {
        let parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() != 2 || parts[0] != "Token" {
            return Err(AppError::unauthorized_missing_token());
        }

        let token = parts[1];
        if token.is_empty() {
            return Err(AppError::unauthorized_missing_token());
        }

        Ok(AuthToken {
            token: token.to_string(),
        })
    }

    fn from_headers(req: &HttpRequest) -> Result<AuthToken, AppError> {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(AppError::unauthorized_missing_token)?;

        let auth_value = auth_header
            .to_str()
            .map_err(|_| AppError::unauthorized_missing_token())?;

        Self::parse_header(auth_value)
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(Self::from_headers(req))
    }
}
