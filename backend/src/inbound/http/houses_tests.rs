//! Tests for the house handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ports::{MockHouseService, fixture_house_type, fixture_houses};
use crate::domain::{LocaleStore, Role};
use crate::inbound::http::state::HttpStatePorts;
use crate::inbound::http::test_utils::{
    SIGN_IN_PATH, json_body, sign_in_as, sign_in_handler, test_session_middleware,
};

fn state_with(houses: MockHouseService) -> HttpState {
    let mut ports = HttpStatePorts::fixtures();
    ports.houses = Arc::new(houses);
    HttpState::new(ports, LocaleStore::new(false))
}

macro_rules! house_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .app_data(web::Data::new($state))
                .route(SIGN_IN_PATH, web::get().to(sign_in_handler))
                .service(
                    web::scope("/api/v1")
                        .service(available_houses)
                        .service(list_houses)
                        .service(create_house),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn anonymous_callers_are_forbidden_from_available_houses() {
    let mut houses = MockHouseService::new();
    houses.expect_available_houses().never();
    let app = house_app!(state_with(houses));

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/houses/available")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await, json!({ "error": "Forbidden" }));
}

#[rstest]
#[case(Role::Staff)]
#[case(Role::User)]
#[actix_web::test]
async fn non_admins_are_forbidden_from_available_houses(#[case] role: Role) {
    let mut houses = MockHouseService::new();
    houses.expect_available_houses().never();
    let app = house_app!(state_with(houses));
    let cookie = sign_in_as(&app, role).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/houses/available")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await, json!({ "error": "Forbidden" }));
}

#[actix_web::test]
async fn admins_receive_available_houses() {
    let mut houses = MockHouseService::new();
    houses.expect_available_houses().times(1).return_once(|| {
        Ok(fixture_houses()
            .into_iter()
            .filter(House::is_available)
            .collect())
    });
    let app = house_app!(state_with(houses));
    let cookie = sign_in_as(&app, Role::Admin).await;

    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/houses/available")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let houses = body.as_array().expect("array");
    assert_eq!(houses.len(), 1);
    assert_eq!(houses[0]["owner"], json!(null));
    assert_eq!(houses[0]["houseType"]["typeName"], json!("Standard"));
}

#[rstest]
#[case(None)]
#[case(Some(Role::Staff))]
#[case(Some(Role::User))]
#[actix_web::test]
async fn house_creation_is_forbidden_before_the_body_is_read(#[case] role: Option<Role>) {
    let mut houses = MockHouseService::new();
    houses.expect_create_house().never();
    let app = house_app!(state_with(houses));

    let mut request = test::TestRequest::post()
        .uri("/api/v1/houses")
        .insert_header(("content-type", "text/plain"));
    if let Some(role) = role {
        request = request.cookie(sign_in_as(&app, role).await);
    }
    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await, json!({ "error": "Forbidden" }));
}

#[actix_web::test]
async fn admins_receive_invalid_json_for_undecodable_bodies() {
    let mut houses = MockHouseService::new();
    houses.expect_create_house().never();
    let app = house_app!(state_with(houses));
    let cookie = sign_in_as(&app, Role::Admin).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/houses")
            .cookie(cookie)
            .insert_header(("content-type", "text/plain"))
            .set_payload("houseNumber=12")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], json!("Invalid JSON body"));
}

#[actix_web::test]
async fn create_house_reports_every_violation() {
    let mut houses = MockHouseService::new();
    houses.expect_create_house().never();
    let app = house_app!(state_with(houses));
    let cookie = sign_in_as(&app, Role::Admin).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/houses")
            .cookie(cookie)
            .set_json(json!({ "houseNumber": "", "block": "B1", "houseTypeId": "t1" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], json!("Validation failed"));
    assert_eq!(
        body["details"]["violations"][0],
        json!({ "field": "houseNumber", "message": "House number is required" })
    );
}

#[actix_web::test]
async fn create_house_returns_created() {
    let house_type = fixture_house_type();
    let mut houses = MockHouseService::new();
    houses
        .expect_create_house()
        .withf(|draft| draft.house_number == "12" && draft.block == "B1")
        .times(1)
        .return_once(|draft| {
            let mut house = fixture_houses().remove(1);
            house.house_number = draft.house_number;
            house.block = draft.block;
            Ok(house)
        });
    let app = house_app!(state_with(houses));
    let cookie = sign_in_as(&app, Role::Admin).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/houses")
            .cookie(cookie)
            .set_json(json!({
                "houseNumber": "12",
                "block": "B1",
                "houseTypeId": house_type.id.to_string(),
                "userId": ""
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["houseNumber"], json!("12"));
}
