//! Test helpers for inbound HTTP components.

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{HttpResponse, test, web};
use serde_json::Value;

use crate::domain::{Error, Role, SessionUser, UserId};
use crate::inbound::http::session::SessionContext;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set by `response`.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// A session snapshot with the given role.
pub fn session_user(role: Role) -> SessionUser {
    SessionUser {
        id: UserId::random(),
        name: format!("{role} Tester"),
        email: format!("{}@example.com", role.as_str().to_lowercase()),
        role,
        is_first_login: false,
    }
}

/// Path of the test-only route that signs in with a given role.
pub const SIGN_IN_PATH: &str = "/test/sign-in/{role}";

/// Test-only handler persisting a snapshot for the role in the path.
pub async fn sign_in_handler(
    session: SessionContext,
    role: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let role: Role = role
        .parse()
        .map_err(|_| Error::invalid_request("unknown role"))?;
    session.persist_user(&session_user(role))?;
    Ok(HttpResponse::Ok().finish())
}

/// Sign in through [`sign_in_handler`] and return the session cookie.
pub async fn sign_in_as<S, B>(app: &S, role: Role) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let response = test::call_service(
        app,
        test::TestRequest::get()
            .uri(&format!("/test/sign-in/{}", role.as_str()))
            .to_request(),
    )
    .await;
    assert!(response.status().is_success(), "test sign-in failed");
    session_cookie(&response)
}

/// Parse a JSON response body.
pub async fn json_body<B>(response: ServiceResponse<B>) -> Value
where
    B: MessageBody,
{
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}
