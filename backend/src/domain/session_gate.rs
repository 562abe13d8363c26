//! Session status gate for the UI shell.
//!
//! The shell renders a loading indicator, and nothing else, until the session
//! status is known. Redirects for anonymous visitors are left to individual
//! pages.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::SessionUser;

/// Client-visible session status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// Session resolution is still in flight.
    Loading,
    /// A session user is present.
    Authenticated,
    /// No session user.
    Unauthenticated,
}

impl SessionStatus {
    /// Status for a resolved session snapshot.
    #[must_use]
    pub fn of(user: Option<&SessionUser>) -> Self {
        if user.is_some() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// What the shell renders for a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateView {
    /// Loading indicator only.
    Loading,
    /// The wrapped content.
    Content,
}

/// Choose what to render for `status`.
///
/// # Examples
/// ```
/// use housing::domain::{GateView, SessionStatus, gate_view};
///
/// assert_eq!(gate_view(SessionStatus::Loading), GateView::Loading);
/// assert_eq!(gate_view(SessionStatus::Unauthenticated), GateView::Content);
/// ```
#[must_use]
pub const fn gate_view(status: SessionStatus) -> GateView {
    match status {
        SessionStatus::Loading => GateView::Loading,
        SessionStatus::Authenticated | SessionStatus::Unauthenticated => GateView::Content,
    }
}

/// How often clients re-validate their session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    /// Fixed re-validation interval.
    pub interval: Duration,
    /// Whether regaining window focus triggers a re-validation.
    pub refetch_on_window_focus: bool,
}

/// Re-validate every five minutes and never on focus.
pub const SESSION_REFRESH_POLICY: RefreshPolicy = RefreshPolicy {
    interval: Duration::from_secs(300),
    refetch_on_window_focus: false,
};

/// Session state handed to the UI shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Resolved status.
    pub status: SessionStatus,
    /// What the shell should render.
    pub view: GateView,
    /// Session snapshot when authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    /// Re-validation interval in seconds.
    pub refetch_interval_seconds: u64,
    /// Whether focus changes trigger a re-validation.
    pub refetch_on_window_focus: bool,
}

impl SessionView {
    /// Build the view for a resolved snapshot under `policy`.
    #[must_use]
    pub fn resolve(user: Option<SessionUser>, policy: RefreshPolicy) -> Self {
        let status = SessionStatus::of(user.as_ref());
        Self {
            status,
            view: gate_view(status),
            user,
            refetch_interval_seconds: policy.interval.as_secs(),
            refetch_on_window_focus: policy.refetch_on_window_focus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, UserId};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(SessionStatus::Loading, GateView::Loading)]
    #[case(SessionStatus::Authenticated, GateView::Content)]
    #[case(SessionStatus::Unauthenticated, GateView::Content)]
    fn only_loading_hides_content(#[case] status: SessionStatus, #[case] expected: GateView) {
        assert_eq!(gate_view(status), expected);
    }

    #[rstest]
    fn refresh_policy_is_five_minutes_without_focus() {
        assert_eq!(SESSION_REFRESH_POLICY.interval, Duration::from_secs(300));
        assert!(!SESSION_REFRESH_POLICY.refetch_on_window_focus);
    }

    #[rstest]
    fn anonymous_view_omits_user() {
        let view = SessionView::resolve(None, SESSION_REFRESH_POLICY);
        let value = serde_json::to_value(&view).expect("serialise");
        assert_eq!(
            value,
            json!({
                "status": "unauthenticated",
                "view": "content",
                "refetchIntervalSeconds": 300,
                "refetchOnWindowFocus": false
            })
        );
    }

    #[rstest]
    fn authenticated_view_carries_snapshot() {
        let user = SessionUser {
            id: UserId::random(),
            name: "Budi Santoso".to_owned(),
            email: "budi@example.com".to_owned(),
            role: Role::Staff,
            is_first_login: true,
        };
        let view = SessionView::resolve(Some(user.clone()), SESSION_REFRESH_POLICY);
        assert_eq!(view.status, SessionStatus::Authenticated);
        assert_eq!(view.user, Some(user));
    }
}
