//! Role gate applied by route handlers before they reach a service.
//!
//! Handlers resolve the session once, then ask this module whether the
//! snapshot may proceed. The two failure shapes are fixed: a missing session
//! on a session-only route is `401 Unauthorized`, and any caller outside the
//! allowed roles on a role-gated route (anonymous callers included) is
//! `403 Forbidden`.

use super::{Error, Role, SessionUser};

/// Message returned when a session is required but absent.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
/// Message returned when the caller's role is not allowed.
pub const FORBIDDEN_MESSAGE: &str = "Forbidden";

/// Roles that may manage houses and house types.
pub const HOUSE_ADMINS: &[Role] = &[Role::Admin];
/// Roles that may follow up on unpaid houses.
pub const PAYMENT_COLLECTORS: &[Role] = &[Role::Admin, Role::Staff];
/// Roles that may provision user accounts.
pub const USER_ADMINS: &[Role] = &[Role::Admin];

/// Require any authenticated session.
///
/// # Examples
/// ```
/// use housing::domain::{ErrorCode, authorization};
///
/// let err = authorization::require_session(None).expect_err("anonymous");
/// assert_eq!(err.code(), ErrorCode::Unauthorized);
/// assert_eq!(err.message(), "Unauthorized");
/// ```
pub fn require_session(user: Option<&SessionUser>) -> Result<&SessionUser, Error> {
    user.ok_or_else(|| Error::unauthorized(UNAUTHORIZED_MESSAGE))
}

/// Require a session whose role is in `allowed`.
///
/// Anonymous callers are rejected as forbidden, not unauthorised, so a
/// role-gated route never reveals whether a session exists.
pub fn require_role<'a>(
    user: Option<&'a SessionUser>,
    allowed: &[Role],
) -> Result<&'a SessionUser, Error> {
    match user {
        Some(user) if allowed.contains(&user.role) => Ok(user),
        _ => Err(Error::forbidden(FORBIDDEN_MESSAGE)),
    }
}
