//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers only deal with the immutable
//! [`SessionUser`] snapshot: persist it at login, read it once per request,
//! purge it at logout.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, Role, SessionUser, authorization};

pub(crate) const SESSION_USER_KEY: &str = "user";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store `user` as the session snapshot, rotating the session id.
    pub fn persist_user(&self, user: &SessionUser) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(SESSION_USER_KEY, user)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Drop every session entry and expire the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }

    /// The session snapshot, if present and well-formed.
    ///
    /// A snapshot that no longer deserialises is treated as absent.
    pub fn user(&self) -> Option<SessionUser> {
        match self.0.get::<SessionUser>(SESSION_USER_KEY) {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable session snapshot");
                None
            }
        }
    }

    /// Require any session, or `401 Unauthorized`.
    pub fn require_user(&self) -> Result<SessionUser, Error> {
        let user = self.user();
        authorization::require_session(user.as_ref()).cloned()
    }

    /// Require a session whose role is in `allowed`, or `403 Forbidden`.
    pub fn require_role(&self, allowed: &[Role]) -> Result<SessionUser, Error> {
        let user = self.user();
        authorization::require_role(user.as_ref(), allowed).cloned()
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
