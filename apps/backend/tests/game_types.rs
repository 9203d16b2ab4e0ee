// Integration tests for the read-only game-type resource.

mod common;
mod support;

use actix_web::test;
use support::auth::{register_steve, token_header};
use support::fixtures::seed_game_type;
use support::{build_test_state, create_test_app};

#[actix_web::test]
async fn test_list_game_types() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state.clone()).with_prod_routes().build().await?;

    let token = register_steve(&app).await;
    seed_game_type(&state, "Board game").await;
    seed_game_type(&state, "Card game").await;

    let req = test::TestRequest::get()
        .uri("/gametypes")
        .insert_header(token_header(&token))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let types = body.as_array().expect("list body should be an array");
    assert_eq!(types.len(), 2);
    assert_eq!(types[0]["label"], "Board game");
    assert_eq!(types[1]["label"], "Card game");

    Ok(())
}

#[actix_web::test]
async fn test_retrieve_game_type() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state.clone()).with_prod_routes().build().await?;

    let token = register_steve(&app).await;
    let game_type = seed_game_type(&state, "Board game").await;

    let req = test::TestRequest::get()
        .uri(&format!("/gametypes/{}", game_type.id))
        .insert_header(token_header(&token))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], game_type.id);
    assert_eq!(body["label"], "Board game");

    Ok(())
}

#[actix_web::test]
async fn test_retrieve_unknown_game_type() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let token = register_steve(&app).await;

    let req = test::TestRequest::get()
        .uri("/gametypes/99")
        .insert_header(token_header(&token))
        .to_request();

    let resp = test::call_service(&app, req).await;
    common::assert_problem_details_structure(resp, 404, "NOT_FOUND", "Game type with ID 99 not found")
        .await;

    Ok(())
}

#[actix_web::test]
async fn test_game_types_require_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/gametypes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);

    Ok(())
}
