//! Block and mute toggles over the viewer's own user record.
//!
//! These are owner-only mutations: the signed-in user's `blocked_users` /
//! `muted_users` lists are read, adjusted, and written back as a partial
//! update.  Nobody else's record is ever touched.

use nexchat_shared::UserId;
use nexchat_store::{RemoteStore, UserPatch};
use tracing::{info, warn};

use crate::error::{ClientError, Result};
use crate::notify::{AudioOutput, Notifier, Severity};
use crate::session::Session;
use crate::ui::UiSurface;

/// Relationship of the viewer to a target user, derived from the viewer's
/// own record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationshipFlags {
    pub is_blocked: bool,
    pub is_muted: bool,
}

/// Compute the viewer's relationship flags for `target`.  Failures
/// propagate; the fail-open default is the caller's policy, not this
/// function's.
pub async fn relationship_flags<S>(
    store: &S,
    session: &Session,
    target: &UserId,
) -> Result<RelationshipFlags>
where
    S: RemoteStore + ?Sized,
{
    let own = store.get_user(session.user_id()).await?;
    Ok(RelationshipFlags {
        is_blocked: own.blocked_users.contains(target),
        is_muted: own.muted_users.contains(target),
    })
}

/// Add `target` to the viewer's block list (idempotent).
pub async fn block_user<S, U, A>(
    store: &S,
    session: &Session,
    ui: &mut U,
    notifier: &mut Notifier<A>,
    target: &UserId,
) where
    S: RemoteStore + ?Sized,
    U: UiSurface,
    A: AudioOutput,
{
    let outcome = async {
        let own = store.get_user(session.user_id()).await?;
        let mut blocked = own.blocked_users;
        if !blocked.contains(target) {
            blocked.push(target.clone());
        }
        store
            .update_user(session.user_id(), UserPatch::blocked_users(blocked))
            .await?;
        info!(target = target.short(), "user blocked");
        Ok::<_, ClientError>(())
    }
    .await;

    finish(ui, notifier, outcome, "User blocked");
}

/// Remove `target` from the viewer's block list.
pub async fn unblock_user<S, U, A>(
    store: &S,
    session: &Session,
    ui: &mut U,
    notifier: &mut Notifier<A>,
    target: &UserId,
) where
    S: RemoteStore + ?Sized,
    U: UiSurface,
    A: AudioOutput,
{
    let outcome = async {
        let own = store.get_user(session.user_id()).await?;
        let blocked: Vec<UserId> = own
            .blocked_users
            .into_iter()
            .filter(|id| id != target)
            .collect();
        store
            .update_user(session.user_id(), UserPatch::blocked_users(blocked))
            .await?;
        info!(target = target.short(), "user unblocked");
        Ok::<_, ClientError>(())
    }
    .await;

    finish(ui, notifier, outcome, "User unblocked");
}

/// Set or clear the mute flag for `target`.
pub async fn set_muted<S, U, A>(
    store: &S,
    session: &Session,
    ui: &mut U,
    notifier: &mut Notifier<A>,
    target: &UserId,
    muted: bool,
) where
    S: RemoteStore + ?Sized,
    U: UiSurface,
    A: AudioOutput,
{
    let outcome = async {
        let own = store.get_user(session.user_id()).await?;
        let mut list = own.muted_users;
        if muted {
            if !list.contains(target) {
                list.push(target.clone());
            }
        } else {
            list.retain(|id| id != target);
        }
        store
            .update_user(session.user_id(), UserPatch::muted_users(list))
            .await?;
        info!(target = target.short(), muted, "mute flag updated");
        Ok::<_, ClientError>(())
    }
    .await;

    finish(ui, notifier, outcome, if muted { "User muted" } else { "User unmuted" });
}

fn finish<U, A>(ui: &mut U, notifier: &mut Notifier<A>, outcome: Result<()>, success: &str)
where
    U: UiSurface,
    A: AudioOutput,
{
    match outcome {
        Ok(()) => notifier.notify(ui, success, Severity::Success),
        Err(err) => {
            warn!(%err, "relationship update failed");
            notifier.notify(ui, &format!("Error: {err}"), Severity::Error);
        }
    }
}
