//! End-to-end HTTP behaviour against the fixture ports.
//!
//! The app is assembled the way the server assembles it: trace middleware,
//! cookie sessions on the `/api/v1` scope and the shared route table.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};

use housing::Trace;
use housing::domain::LocaleStore;
use housing::inbound::http::configure;
use housing::inbound::http::state::{HttpState, HttpStatePorts};

macro_rules! housing_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(
                    HttpStatePorts::fixtures(),
                    LocaleStore::new(false),
                )))
                .wrap(Trace)
                .service(
                    web::scope("/api/v1")
                        .wrap(
                            SessionMiddleware::builder(
                                CookieSessionStore::default(),
                                Key::generate(),
                            )
                            .cookie_name("session".to_owned())
                            .cookie_secure(false)
                            .build(),
                        )
                        .configure(configure),
                ),
        )
        .await
    };
}

fn cookie_named<B>(response: &actix_web::dev::ServiceResponse<B>, name: &str) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == name)
        .map(Cookie::into_owned)
        .unwrap_or_else(|| panic!("{name} cookie set"))
}

async fn body<B>(response: actix_web::dev::ServiceResponse<B>) -> Value
where
    B: actix_web::body::MessageBody,
{
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[rstest]
#[actix_web::test]
async fn admin_session_reaches_every_admin_route() {
    let app = housing_app!();

    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({"email": "Admin@Example.com", "password": "password"}))
            .to_request(),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let session = cookie_named(&login, "session");
    assert_eq!(body(login).await["role"], json!("ADMIN"));

    let houses = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/houses")
            .cookie(session.clone())
            .to_request(),
    )
    .await;
    assert_eq!(houses.status(), StatusCode::OK);
    let houses = body(houses).await;
    assert_eq!(houses.as_array().map(Vec::len), Some(2));
    assert_eq!(houses[0]["block"], json!("A"));
    assert_eq!(houses[0]["owner"]["name"], json!("Admin Perumahan"));

    let available = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/houses/available")
            .cookie(session.clone())
            .to_request(),
    )
    .await;
    let available = body(available).await;
    assert_eq!(available.as_array().map(Vec::len), Some(1));
    assert_eq!(available[0]["owner"], Value::Null);

    let unpaid = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/payments/unpaid-this-month")
            .cookie(session.clone())
            .to_request(),
    )
    .await;
    assert_eq!(unpaid.status(), StatusCode::OK);

    let stats = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/payments/stats")
            .cookie(session)
            .to_request(),
    )
    .await;
    let stats = body(stats).await;
    assert_eq!(
        stats["paidHousesThisMonth"].as_u64().unwrap_or_default()
            + stats["unpaidHousesThisMonth"].as_u64().unwrap_or_default(),
        stats["occupiedHouses"].as_u64().unwrap_or_default()
    );
}

#[rstest]
#[case("/api/v1/houses")]
#[case("/api/v1/houses/available")]
#[case("/api/v1/payments/unpaid-this-month")]
#[actix_web::test]
async fn anonymous_callers_are_forbidden_on_role_gated_routes(#[case] uri: &str) {
    let app = housing_app!();
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert!(res.headers().contains_key("trace-id"));
    assert_eq!(body(res).await, json!({"error": "Forbidden"}));
}

#[rstest]
#[case("/api/v1/users/me")]
#[case("/api/v1/payments/stats")]
#[case("/api/v1/house-types")]
#[actix_web::test]
async fn anonymous_callers_are_unauthorised_on_session_routes(#[case] uri: &str) {
    let app = housing_app!();
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body(res).await, json!({"error": "Unauthorized"}));
}

#[rstest]
#[actix_web::test]
async fn session_view_tracks_login_and_logout() {
    let app = housing_app!();

    let anonymous = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/session").to_request(),
    )
    .await;
    assert_eq!(body(anonymous).await["status"], json!("unauthenticated"));

    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({"email": "admin@example.com", "password": "password"}))
            .to_request(),
    )
    .await;
    let session = cookie_named(&login, "session");

    let signed_in = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/session")
            .cookie(session.clone())
            .to_request(),
    )
    .await;
    let view = body(signed_in).await;
    assert_eq!(view["status"], json!("authenticated"));
    assert_eq!(view["user"]["email"], json!("admin@example.com"));
    assert_eq!(view["refetchIntervalSeconds"], json!(300));

    let logout = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(session)
            .to_request(),
    )
    .await;
    assert_eq!(logout.status(), StatusCode::OK);
    let cleared = cookie_named(&logout, "session");
    let after = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .cookie(cleared)
            .to_request(),
    )
    .await;
    assert_eq!(after.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[actix_web::test]
async fn house_creation_validates_then_creates() {
    let app = housing_app!();
    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({"email": "admin@example.com", "password": "password"}))
            .to_request(),
    )
    .await;
    let session = cookie_named(&login, "session");

    let invalid = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/houses")
            .cookie(session.clone())
            .set_json(json!({"houseNumber": "", "block": "B", "houseTypeId": ""}))
            .to_request(),
    )
    .await;
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    let invalid = body(invalid).await;
    assert_eq!(invalid["error"], json!("Validation failed"));
    assert!(invalid["details"]["violations"].as_array().is_some_and(|v| !v.is_empty()));

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/houses")
            .cookie(session)
            .set_json(json!({
                "houseNumber": "3",
                "block": "A",
                "houseTypeId": "0e6b3c0a-6a7c-4b7e-9f51-3a1e2c4d5f60"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body(created).await;
    assert_eq!(created["houseNumber"], json!("3"));
    assert_eq!(created["houseType"]["typeName"], json!("Standard"));
}

#[rstest]
#[actix_web::test]
async fn locale_cookie_round_trips() {
    let app = housing_app!();

    let default = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/locale").to_request(),
    )
    .await;
    assert_eq!(body(default).await, json!({"locale": "id"}));

    let set = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/locale")
            .set_json(json!({"locale": "en"}))
            .to_request(),
    )
    .await;
    assert_eq!(set.status(), StatusCode::OK);
    let cookie = cookie_named(&set, "NEXT_LOCALE");
    assert_eq!(cookie.value(), "en");

    let read_back = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/locale")
            .cookie(Cookie::new("NEXT_LOCALE", "en"))
            .to_request(),
    )
    .await;
    assert_eq!(body(read_back).await, json!({"locale": "en"}));
}
