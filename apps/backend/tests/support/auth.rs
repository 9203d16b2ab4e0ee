//! Registration helpers for integration tests.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use serde_json::json;

/// The registration payload the original API test suite uses.
pub fn steve_registration() -> serde_json::Value {
    json!({
        "username": "steve",
        "password": "Admin8*",
        "email": "steve@stevebrownlee.com",
        "address": "100 Infinity Way",
        "phone_number": "555-1212",
        "first_name": "Steve",
        "last_name": "Brownlee",
        "bio": "Love those gamez!!"
    })
}

/// POST /register with the given payload, assert 201, and return the token.
pub async fn register_and_token<S>(app: &S, payload: serde_json::Value) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(payload)
        .to_request();

    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201, "registration should yield 201");

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"]
        .as_str()
        .expect("registration response should carry a token");
    assert!(!token.is_empty());

    token.to_string()
}

/// Register the canonical test account and return its token.
pub async fn register_steve<S>(app: &S) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    register_and_token(app, steve_registration()).await
}

/// Build an `Authorization: Token <t>` header pair.
pub fn token_header(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Token {token}"))
}
