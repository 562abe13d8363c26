//! Session gate endpoint consumed by the UI shell.
//!
//! ```text
//! GET /api/v1/session
//! ```

use actix_web::{get, web};

use crate::domain::{SESSION_REFRESH_POLICY, SessionView};
use crate::inbound::http::schemas::SessionViewSchema;
use crate::inbound::http::session::SessionContext;

/// Resolved session status, snapshot and refresh policy.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses((status = 200, description = "Session gate state", body = SessionViewSchema)),
    tags = ["session"],
    operation_id = "sessionView",
    security([])
)]
#[get("/session")]
pub async fn session_view(session: SessionContext) -> web::Json<SessionView> {
    web::Json(SessionView::resolve(session.user(), SESSION_REFRESH_POLICY))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use serde_json::json;

    use super::*;
    use crate::domain::Role;
    use crate::inbound::http::test_utils::{
        SIGN_IN_PATH, json_body, sign_in_as, sign_in_handler, test_session_middleware,
    };

    #[actix_web::test]
    async fn anonymous_visitors_see_content_unauthenticated() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(session_view)),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/session").to_request(),
        )
        .await;
        assert_eq!(
            json_body(response).await,
            json!({
                "status": "unauthenticated",
                "view": "content",
                "refetchIntervalSeconds": 300,
                "refetchOnWindowFocus": false
            })
        );
    }

    #[actix_web::test]
    async fn signed_in_users_see_their_snapshot() {
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(SIGN_IN_PATH, web::get().to(sign_in_handler))
                .service(web::scope("/api/v1").service(session_view)),
        )
        .await;
        let cookie = sign_in_as(&app, Role::Staff).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/session")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["status"], json!("authenticated"));
        assert_eq!(body["user"]["role"], json!("STAFF"));
    }
}
