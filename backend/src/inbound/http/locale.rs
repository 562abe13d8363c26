//! Locale preference handlers and the actix-backed cookie store.
//!
//! ```text
//! GET  /api/v1/locale
//! POST /api/v1/locale {"locale":"en"}
//! ```

use actix_web::cookie::{Cookie, SameSite, time};
use actix_web::{HttpRequest, HttpResponse, HttpResponseBuilder, get, post, web};
use serde_json::{Value, json};

use crate::domain::{CookieOptions, CookieStore, Error, Locale, SameSitePolicy};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Message returned for a missing or unsupported locale.
pub const INVALID_LOCALE_MESSAGE: &str = "Invalid locale";

/// [`CookieStore`] over one request's cookies plus the writes made while
/// handling it.
pub struct RequestCookieJar<'a> {
    request: &'a HttpRequest,
    written: Vec<Cookie<'static>>,
}

impl<'a> RequestCookieJar<'a> {
    /// Wrap the cookies sent with `request`.
    pub fn new(request: &'a HttpRequest) -> Self {
        Self {
            request,
            written: Vec::new(),
        }
    }

    /// Attach every written cookie to `response`.
    pub fn apply(self, response: &mut HttpResponseBuilder) {
        for cookie in self.written {
            response.cookie(cookie);
        }
    }
}

fn same_site(policy: SameSitePolicy) -> SameSite {
    match policy {
        SameSitePolicy::Lax => SameSite::Lax,
        SameSitePolicy::Strict => SameSite::Strict,
        SameSitePolicy::None => SameSite::None,
    }
}

impl CookieStore for RequestCookieJar<'_> {
    fn get(&self, name: &str) -> Option<String> {
        self.written
            .iter()
            .rev()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_owned())
            .or_else(|| {
                self.request
                    .cookie(name)
                    .map(|cookie| cookie.value().to_owned())
            })
    }

    fn set(&mut self, name: &str, value: &str, options: &CookieOptions) {
        let max_age = i64::try_from(options.max_age.as_secs()).unwrap_or(i64::MAX);
        let cookie = Cookie::build(name.to_owned(), value.to_owned())
            .path(options.path)
            .http_only(options.http_only)
            .secure(options.secure)
            .same_site(same_site(options.same_site))
            .max_age(time::Duration::seconds(max_age))
            .finish();
        self.written.retain(|existing| existing.name() != name);
        self.written.push(cookie);
    }
}

/// Current locale preference.
#[utoipa::path(
    get,
    path = "/api/v1/locale",
    responses((status = 200, description = "Current locale", body = Object)),
    tags = ["locale"],
    operation_id = "getLocale",
    security([])
)]
#[get("/locale")]
pub async fn get_locale(state: web::Data<HttpState>, request: HttpRequest) -> HttpResponse {
    let locale = state.locale.user_locale(&RequestCookieJar::new(&request));
    HttpResponse::Ok().json(json!({ "locale": locale }))
}

/// Persist a locale preference in the locale cookie.
#[utoipa::path(
    post,
    path = "/api/v1/locale",
    request_body(content = Object, description = "`{\"locale\": \"id\" | \"en\"}`"),
    responses(
        (status = 200, description = "Locale stored",
            headers(("Set-Cookie" = String, description = "NEXT_LOCALE cookie"))),
        (status = 400, description = "Invalid locale", body = ErrorSchema)
    ),
    tags = ["locale"],
    operation_id = "setLocale",
    security([])
)]
#[post("/locale")]
pub async fn set_locale(
    state: web::Data<HttpState>,
    request: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let locale: Locale = serde_json::from_slice::<Value>(&body)
        .ok()
        .as_ref()
        .and_then(|payload| payload.get("locale"))
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| Error::invalid_request(INVALID_LOCALE_MESSAGE))?;

    let mut jar = RequestCookieJar::new(&request);
    state.locale.set_user_locale(&mut jar, locale);

    let mut response = HttpResponse::Ok();
    jar.apply(&mut response);
    Ok(response.json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    use super::*;
    use crate::domain::{LOCALE_COOKIE_NAME, LocaleStore};
    use crate::inbound::http::state::{HttpState, HttpStatePorts};
    use crate::inbound::http::test_utils::json_body;

    fn state(secure: bool) -> HttpState {
        HttpState::new(HttpStatePorts::fixtures(), LocaleStore::new(secure))
    }

    macro_rules! locale_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .service(web::scope("/api/v1").service(get_locale).service(set_locale)),
            )
            .await
        };
    }

    #[rstest]
    #[case(json!({ "locale": "fr" }))]
    #[case(json!({ "locale": "EN" }))]
    #[case(json!({ "locale": 1 }))]
    #[case(json!({}))]
    #[actix_web::test]
    async fn unsupported_locales_are_rejected(#[case] body: Value) {
        let app = locale_app!(state(false));

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/locale")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.response().cookies().next().is_none());
        assert_eq!(json_body(response).await, json!({ "error": "Invalid locale" }));
    }

    #[rstest]
    #[case("")]
    #[case("locale=en")]
    #[case("{\"locale\":")]
    #[actix_web::test]
    async fn undecodable_bodies_are_invalid_locales(#[case] payload: &'static str) {
        let app = locale_app!(state(false));

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/locale")
                .insert_header(("content-type", "text/plain"))
                .set_payload(payload)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.response().cookies().next().is_none());
        assert_eq!(json_body(response).await, json!({ "error": "Invalid locale" }));
    }

    #[actix_web::test]
    async fn locale_bodies_decode_without_a_json_content_type() {
        let app = locale_app!(state(false));

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/locale")
                .insert_header(("content-type", "text/plain"))
                .set_payload(r#"{"locale":"en"}"#)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let locale = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == LOCALE_COOKIE_NAME)
            .map(|cookie| cookie.value().to_owned());
        assert_eq!(locale.as_deref(), Some("en"));
    }

    #[actix_web::test]
    async fn supported_locale_sets_the_cookie() {
        let app = locale_app!(state(false));

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/locale")
                .set_json(json!({ "locale": "en" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == LOCALE_COOKIE_NAME)
            .map(Cookie::into_owned)
            .expect("locale cookie");
        assert_eq!(cookie.value(), "en");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(31_536_000)));
        assert_eq!(json_body(response).await, json!({ "success": true }));

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/locale")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(json_body(response).await, json!({ "locale": "en" }));
    }

    #[actix_web::test]
    async fn production_cookies_are_secure() {
        let app = locale_app!(state(true));

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/locale")
                .set_json(json!({ "locale": "id" }))
                .to_request(),
        )
        .await;
        let secure = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == LOCALE_COOKIE_NAME)
            .and_then(|cookie| cookie.secure());
        assert_eq!(secure, Some(true));
    }

    #[rstest]
    #[case(None, "id")]
    #[case(Some("en"), "en")]
    #[case(Some("fr"), "id")]
    #[actix_web::test]
    async fn reads_fall_back_to_default(#[case] cookie: Option<&str>, #[case] expected: &str) {
        let app = locale_app!(state(false));

        let mut request = test::TestRequest::get().uri("/api/v1/locale");
        if let Some(value) = cookie {
            request = request.cookie(Cookie::new(LOCALE_COOKIE_NAME, value.to_owned()));
        }
        let response = test::call_service(&app, request.to_request()).await;
        assert_eq!(json_body(response).await, json!({ "locale": expected }));
    }
}
