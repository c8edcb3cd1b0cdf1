use super::*;
use crate::session::User;

fn user(id: &str) -> User {
    User { id: id.to_owned(), name: "Atom".to_owned(), email: "atom@example.com".to_owned() }
}

fn all_sessions() -> Vec<Session> {
    let mut out = Vec::new();
    for is_loading in [true, false] {
        for is_authenticated in [true, false] {
            for with_user in [true, false] {
                out.push(Session {
                    is_authenticated,
                    is_loading,
                    user: with_user.then(|| user("u1")),
                    error: None,
                });
            }
        }
    }
    out
}

// =============================================================
// decide: the three-way branch
// =============================================================

#[test]
fn loading_always_pending() {
    let req = RouteRequest::new("/characters");
    for s in all_sessions().into_iter().filter(|s| s.is_loading) {
        assert_eq!(decide(&s, &req, "/auth"), GateView::Pending);
    }
}

#[test]
fn loading_wins_over_error() {
    let mut s = Session::loading();
    s.error = Some(SessionError::Unavailable("x".to_owned()));
    assert_eq!(GateState::from_session(&s), GateState::Loading);
}

#[test]
fn authenticated_renders_protected() {
    let req = RouteRequest::new("/");
    for s in all_sessions().into_iter().filter(|s| !s.is_loading && s.is_authenticated) {
        assert_eq!(decide(&s, &req, "/auth"), GateView::Protected);
    }
}

#[test]
fn unauthenticated_redirects_to_login() {
    let req = RouteRequest::new("/stories");
    for s in all_sessions().into_iter().filter(|s| !s.is_loading && !s.is_authenticated) {
        let view = decide(&s, &req, "/auth");
        assert_eq!(view, GateView::Redirect(Redirect { to: "/auth?redirect=%2Fstories".to_owned() }));
    }
}

#[test]
fn failure_is_visible_not_pending() {
    let req = RouteRequest::new("/");
    let view = decide(&Session::failed(SessionError::Timeout { after_ms: 8000 }), &req, "/auth");
    match view {
        GateView::Failed { message, retryable } => {
            assert!(message.contains("timed out"));
            assert!(retryable);
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn corrupted_session_is_not_retryable() {
    let req = RouteRequest::new("/");
    let view = decide(&Session::failed(SessionError::Corrupted("bad".to_owned())), &req, "/auth");
    assert!(matches!(view, GateView::Failed { retryable: false, .. }));
}

#[test]
fn decide_does_not_touch_session() {
    let s = Session::signed_in(user("u1"));
    let before = s.clone();
    let _ = decide(&s, &RouteRequest::new("/"), "/auth");
    assert_eq!(s, before);
}

// =============================================================
// Gate latch: idempotent navigation
// =============================================================

#[test]
fn repeated_unauthenticated_evaluation_navigates_once() {
    let mut gate = Gate::new("/auth");
    let req = RouteRequest::new("/about");
    let s = Session::signed_out();

    let first = gate.evaluate(&s, &req);
    let second = gate.evaluate(&s, &req);

    assert!(first.navigate.is_some());
    assert_eq!(second.navigate, None);
    assert_eq!(first.view, second.view);
}

#[test]
fn latch_rearms_after_sign_in() {
    let mut gate = Gate::new("/auth");
    let req = RouteRequest::new("/");

    assert!(gate.evaluate(&Session::signed_out(), &req).navigate.is_some());
    assert!(gate.evaluate(&Session::signed_in(user("u1")), &req).navigate.is_none());
    assert!(gate.evaluate(&Session::signed_out(), &req).navigate.is_some());
}

#[test]
fn pending_and_protected_never_navigate() {
    let mut gate = Gate::new("/auth");
    let req = RouteRequest::new("/");
    assert!(gate.evaluate(&Session::loading(), &req).navigate.is_none());
    assert!(gate.evaluate(&Session::signed_in(user("u1")), &req).navigate.is_none());
}

#[test]
fn error_state_does_not_navigate() {
    let mut gate = Gate::new("/auth");
    let eval = gate.evaluate(&Session::failed(SessionError::Unavailable("down".to_owned())), &RouteRequest::new("/"));
    assert!(eval.navigate.is_none());
}

// =============================================================
// Scenario: loading -> signed out -> signed in
// =============================================================

#[test]
fn loading_then_signed_out_then_signed_in() {
    let mut gate = Gate::new("/auth");
    let req = RouteRequest::new("/");

    assert_eq!(gate.evaluate(&Session::loading(), &req).view, GateView::Pending);

    let eval = gate.evaluate(&Session::signed_out(), &req);
    assert_eq!(eval.view, GateView::Redirect(Redirect { to: "/auth".to_owned() }));
    assert_eq!(eval.navigate, Some(Redirect { to: "/auth".to_owned() }));

    let eval = gate.evaluate(&Session::signed_in(user("u1")), &req);
    assert_eq!(eval.view, GateView::Protected);
}

#[test]
fn login_path_is_configurable() {
    let gate = Gate::new("/LCBAD/auth");
    assert_eq!(gate.login_path(), "/LCBAD/auth");
}
