use super::*;

use gate::SessionError;

fn context() -> (Owner, SessionContext) {
    let owner = Owner::new();
    let ctx = owner.with(|| SessionContext::new(&AppConfig::default()));
    (owner, ctx)
}

fn reader() -> User {
    User { id: "u1".to_owned(), name: "Reader".to_owned(), email: "reader@site.test".to_owned() }
}

/// Resolve the session with a failed check and return that check's ticket.
fn fail_with(ctx: &SessionContext, error: SessionError) -> CheckTicket {
    let ticket = ctx.begin().expect("store alive");
    ctx.store.update(|s| {
        assert!(s.complete(ticket, Err(error)));
    });
    ticket
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn loading_before_start() {
    let (owner, ctx) = context();
    owner.with(|| {
        let snapshot = ctx.snapshot();
        assert!(snapshot.is_loading);
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.error.is_none());
        assert!(ctx.user().is_none());
    });
}

#[test]
fn start_with_empty_storage_resolves_signed_out() {
    let (owner, ctx) = context();
    owner.with(|| {
        ctx.start();
        let snapshot = ctx.snapshot();
        assert!(!snapshot.is_loading);
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.error.is_none());
        assert!(ctx.store.with_untracked(SessionStore::is_resolved));
    });
}

#[test]
fn sign_in_then_sign_out_clears_user() {
    let (owner, ctx) = context();
    owner.with(|| {
        ctx.start();
        ctx.sign_in(reader());
        assert!(ctx.snapshot().is_authenticated);
        assert_eq!(ctx.user().map(|u| u.name), Some("Reader".to_owned()));

        ctx.sign_out();
        assert!(ctx.user().is_none());
        assert!(!ctx.snapshot().is_authenticated);
        assert!(!ctx.snapshot().is_loading);
    });
}

#[test]
fn sign_in_supersedes_check_in_flight() {
    let (owner, ctx) = context();
    owner.with(|| {
        let ticket = ctx.begin().expect("store alive");
        ctx.sign_in(reader());
        let applied = ctx.store.try_update(|s| s.complete(ticket, Ok(None)));
        assert_eq!(applied, Some(false));
        assert!(ctx.snapshot().is_authenticated);
    });
}

// =============================================================
// Failure and retry
// =============================================================

#[test]
fn failed_check_goes_back_to_loading_on_new_check() {
    let (owner, ctx) = context();
    owner.with(|| {
        fail_with(&ctx, SessionError::Corrupted("bad json".to_owned()));
        assert!(ctx.snapshot().error.is_some());

        // First half of `retry`: a new check puts the gate back to pending.
        let _ticket = ctx.begin().expect("store alive");
        let snapshot = ctx.snapshot();
        assert!(snapshot.is_loading);
        assert!(snapshot.error.is_none());
    });
}

#[test]
fn retry_after_corrupted_resolves_and_supersedes_failed_check() {
    let (owner, ctx) = context();
    owner.with(|| {
        let failed = fail_with(&ctx, SessionError::Corrupted("bad json".to_owned()));

        ctx.retry();
        let snapshot = ctx.snapshot();
        assert!(!snapshot.is_loading);
        assert!(snapshot.error.is_none());
        assert!(!snapshot.is_authenticated);

        // The failed check's ticket is stale now.
        let applied = ctx.store.try_update(|s| s.complete(failed, Err(SessionError::Unavailable("late".to_owned()))));
        assert_eq!(applied, Some(false));
        assert!(ctx.snapshot().error.is_none());
    });
}
