//! Group member management: promote, suspend/unsuspend, kick.
//!
//! The panel only opens for callers present in the group's admin list (with
//! the legacy creator fallback).  That gate is UI convenience, not a
//! security boundary: it prevents accidental UI, while the remote store's
//! own access rules are the real enforcement point.
//!
//! Every mutation re-fetches the group record, rewrites a single list
//! field, writes it back in full, and re-renders the panel.  Suspension
//! state is re-derived from the fresh record rather than trusted from the
//! row that was clicked, so a record changed between render and click
//! cannot flip the wrong way.

use nexchat_shared::{GroupId, UserId};
use nexchat_store::{GroupPatch, RemoteStore};
use tracing::{debug, info, warn};

use crate::error::{ClientError, Result};
use crate::notify::{AudioOutput, Notifier, Severity};
use crate::session::Session;
use crate::ui::UiSurface;

/// One member row of the admin panel.  The acting admin's own row is never
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub member: UserId,
    pub username: String,
    pub is_admin: bool,
    pub is_suspended: bool,
}

/// Admin panel render description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPanelView {
    pub group_id: GroupId,
    pub rows: Vec<MemberRow>,
}

/// Open the member-management panel.  Refuses (one error notification,
/// nothing rendered) unless the caller is an admin of the group.
pub async fn open_admin_panel<S, U, A>(
    store: &S,
    session: &Session,
    ui: &mut U,
    notifier: &mut Notifier<A>,
    group_id: &GroupId,
) where
    S: RemoteStore + ?Sized,
    U: UiSurface,
    A: AudioOutput,
{
    match build_panel(store, session, group_id).await {
        Ok(view) => ui.show_admin_panel(view),
        Err(err) => notify_failure(ui, notifier, err),
    }
}

/// Grant `member` admin rights.  Promoting an existing admin is a silent
/// no-op on the list (the write still happens, as the backend merges it
/// away).
pub async fn promote<S, U, A>(
    store: &S,
    session: &Session,
    ui: &mut U,
    notifier: &mut Notifier<A>,
    group_id: &GroupId,
    member: &UserId,
) where
    S: RemoteStore + ?Sized,
    U: UiSurface,
    A: AudioOutput,
{
    let outcome = async {
        let group = store.get_group(group_id).await?;
        let mut admins = group.effective_admins();
        if !admins.contains(member) {
            admins.push(member.clone());
        }
        store
            .update_group(group_id, GroupPatch::admins(admins))
            .await?;
        info!(group = %group_id, member = member.short(), "member promoted");
        Ok::<_, ClientError>(())
    }
    .await;

    match outcome {
        Ok(()) => {
            notifier.notify(ui, "Member promoted to admin", Severity::Success);
            open_admin_panel(store, session, ui, notifier, group_id).await;
        }
        Err(err) => notify_failure(ui, notifier, err),
    }
}

/// Flip `member`'s suspension.  The current state comes from the freshly
/// fetched record, never from the panel that was on screen.
pub async fn toggle_suspend<S, U, A>(
    store: &S,
    session: &Session,
    ui: &mut U,
    notifier: &mut Notifier<A>,
    group_id: &GroupId,
    member: &UserId,
) where
    S: RemoteStore + ?Sized,
    U: UiSurface,
    A: AudioOutput,
{
    let outcome = async {
        let group = store.get_group(group_id).await?;
        let mut suspended = group.suspended_members.clone();
        let now_suspended = if group.is_suspended(member) {
            suspended.retain(|id| id != member);
            false
        } else {
            suspended.push(member.clone());
            true
        };
        store
            .update_group(group_id, GroupPatch::suspended_members(suspended))
            .await?;
        info!(group = %group_id, member = member.short(), now_suspended, "suspension toggled");
        Ok::<_, ClientError>(now_suspended)
    }
    .await;

    match outcome {
        Ok(now_suspended) => {
            let message = if now_suspended {
                "Member suspended"
            } else {
                "Member unsuspended"
            };
            notifier.notify(ui, message, Severity::Success);
            open_admin_panel(store, session, ui, notifier, group_id).await;
        }
        Err(err) => notify_failure(ui, notifier, err),
    }
}

/// Remove `member` from the group after interactive confirmation.  Members
/// and admins are rewritten in one combined update; any entry in
/// `suspended_members` is intentionally left behind.
pub async fn kick<S, U, A>(
    store: &S,
    session: &Session,
    ui: &mut U,
    notifier: &mut Notifier<A>,
    group_id: &GroupId,
    member: &UserId,
) where
    S: RemoteStore + ?Sized,
    U: UiSurface,
    A: AudioOutput,
{
    let outcome = async {
        if !ui.confirm("Are you sure you want to kick this member?") {
            return Err(ClientError::Unconfirmed);
        }
        let group = store.get_group(group_id).await?;
        let mut members = group.members.clone();
        members.retain(|id| id != member);
        let mut admins = group.effective_admins();
        admins.retain(|id| id != member);
        store
            .update_group(group_id, GroupPatch::members_and_admins(members, admins))
            .await?;
        info!(group = %group_id, member = member.short(), "member kicked");
        Ok::<_, ClientError>(())
    }
    .await;

    match outcome {
        Ok(()) => {
            notifier.notify(ui, "Member kicked from group", Severity::Success);
            open_admin_panel(store, session, ui, notifier, group_id).await;
        }
        // Declining the prompt is not a failure: no toast, just a trace.
        Err(ClientError::Unconfirmed) => {
            debug!(group = %group_id, member = member.short(), "kick declined");
        }
        Err(err) => notify_failure(ui, notifier, err),
    }
}

async fn build_panel<S>(
    store: &S,
    session: &Session,
    group_id: &GroupId,
) -> Result<AdminPanelView>
where
    S: RemoteStore + ?Sized,
{
    let group = store.get_group(group_id).await?;

    if !group.is_admin(session.user_id()) {
        return Err(ClientError::PermissionDenied(
            "Only admins can manage members".into(),
        ));
    }

    let mut rows = Vec::new();
    for member in &group.members {
        if session.is_self(member) {
            continue;
        }
        let username = match store.get_user(member).await {
            Ok(user) => user.display_label(member.as_str()).to_owned(),
            Err(err) => {
                debug!(member = member.short(), %err, "member lookup failed, using raw id");
                member.as_str().to_owned()
            }
        };
        rows.push(MemberRow {
            member: member.clone(),
            username,
            is_admin: group.is_admin(member),
            is_suspended: group.is_suspended(member),
        });
    }

    Ok(AdminPanelView {
        group_id: group_id.clone(),
        rows,
    })
}

fn notify_failure<U, A>(ui: &mut U, notifier: &mut Notifier<A>, err: ClientError)
where
    U: UiSurface,
    A: AudioOutput,
{
    let message = match &err {
        ClientError::NotFound => "Group not found".to_string(),
        ClientError::PermissionDenied(reason) => reason.clone(),
        other => format!("Error: {other}"),
    };
    warn!(%err, "admin operation failed");
    notifier.notify(ui, &message, Severity::Error);
}

#[cfg(test)]
mod tests {
    use nexchat_store::{GroupRecord, MemoryStore, UserRecord};

    use super::*;
    use crate::notify::Toast;
    use crate::testing::{notifier, RecordingSurface};

    fn uid(s: &str) -> UserId {
        UserId::new(s)
    }

    fn gid() -> GroupId {
        GroupId::new("g1")
    }

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_group(
                gid(),
                GroupRecord {
                    name: Some("ops".into()),
                    group_pic: None,
                    created_by: uid("a"),
                    members: vec![uid("a"), uid("b"), uid("c")],
                    admins: Some(vec![uid("a")]),
                    suspended_members: Vec::new(),
                },
            )
            .await;
        for (id, username) in [("a", "ann"), ("b", "bob"), ("c", "cat")] {
            store
                .insert_user(
                    uid(id),
                    UserRecord {
                        username: Some(username.into()),
                        ..Default::default()
                    },
                )
                .await;
        }
        store
    }

    fn error_toasts(ui: &RecordingSurface) -> Vec<&Toast> {
        ui.toasts
            .iter()
            .filter(|t| t.severity == Severity::Error)
            .collect()
    }

    #[tokio::test]
    async fn non_admin_gets_one_error_and_no_panel() {
        let store = seeded_store().await;
        let session = Session::new(uid("b"));
        let mut ui = RecordingSurface::new();
        let mut notifier = notifier();

        open_admin_panel(&store, &session, &mut ui, &mut notifier, &gid()).await;

        assert!(ui.admin_panels.is_empty());
        let errors = error_toasts(&ui);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Only admins can manage members");
    }

    #[tokio::test]
    async fn panel_rows_exclude_self_and_carry_status() {
        let store = seeded_store().await;
        store
            .update_group(&gid(), GroupPatch::suspended_members(vec![uid("c")]))
            .await
            .unwrap();
        let session = Session::new(uid("a"));
        let mut ui = RecordingSurface::new();
        let mut notifier = notifier();

        open_admin_panel(&store, &session, &mut ui, &mut notifier, &gid()).await;

        let panel = &ui.admin_panels[0];
        let usernames: Vec<_> = panel.rows.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(usernames, vec!["bob", "cat"]);
        assert!(!panel.rows[0].is_suspended);
        assert!(panel.rows[1].is_suspended);
        assert!(panel.rows.iter().all(|r| !r.is_admin));
    }

    #[tokio::test]
    async fn promote_is_idempotent() {
        let store = seeded_store().await;
        let session = Session::new(uid("a"));
        let mut ui = RecordingSurface::new();
        let mut notifier = notifier();

        promote(&store, &session, &mut ui, &mut notifier, &gid(), &uid("b")).await;
        promote(&store, &session, &mut ui, &mut notifier, &gid(), &uid("b")).await;

        let group = store.group(&gid()).await.unwrap();
        let admins = group.effective_admins();
        assert_eq!(admins.iter().filter(|id| **id == uid("b")).count(), 1);
    }

    #[tokio::test]
    async fn toggle_suspend_rederives_from_fresh_record() {
        let store = seeded_store().await;
        let session = Session::new(uid("a"));
        let mut ui = RecordingSurface::new();
        let mut notifier = notifier();

        // Another session suspended "b" after our panel rendered; toggling
        // must see the fresh record and unsuspend.
        store
            .update_group(&gid(), GroupPatch::suspended_members(vec![uid("b")]))
            .await
            .unwrap();

        toggle_suspend(&store, &session, &mut ui, &mut notifier, &gid(), &uid("b")).await;
        assert!(store.group(&gid()).await.unwrap().suspended_members.is_empty());

        toggle_suspend(&store, &session, &mut ui, &mut notifier, &gid(), &uid("b")).await;
        assert_eq!(
            store.group(&gid()).await.unwrap().suspended_members,
            vec![uid("b")]
        );
    }

    #[tokio::test]
    async fn kick_removes_from_members_and_admins() {
        let store = seeded_store().await;
        store
            .update_group(&gid(), GroupPatch::admins(vec![uid("a"), uid("b")]))
            .await
            .unwrap();
        let session = Session::new(uid("a"));
        let mut ui = RecordingSurface::new();
        let mut notifier = notifier();

        kick(&store, &session, &mut ui, &mut notifier, &gid(), &uid("b")).await;

        let group = store.group(&gid()).await.unwrap();
        assert_eq!(group.members, vec![uid("a"), uid("c")]);
        assert_eq!(group.effective_admins(), vec![uid("a")]);
    }

    #[tokio::test]
    async fn kick_retains_suspension_entry() {
        let store = seeded_store().await;
        store
            .update_group(&gid(), GroupPatch::suspended_members(vec![uid("b")]))
            .await
            .unwrap();
        let session = Session::new(uid("a"));
        let mut ui = RecordingSurface::new();
        let mut notifier = notifier();

        kick(&store, &session, &mut ui, &mut notifier, &gid(), &uid("b")).await;

        // Kept behavior: the suspension list is not purged, so the subset
        // invariant is knowingly broken here.
        let group = store.group(&gid()).await.unwrap();
        assert!(!group.members.contains(&uid("b")));
        assert_eq!(group.suspended_members, vec![uid("b")]);
    }

    #[tokio::test]
    async fn declined_kick_writes_nothing() {
        let store = seeded_store().await;
        let session = Session::new(uid("a"));
        let mut ui = RecordingSurface::new();
        ui.confirm_response = false;
        let mut notifier = notifier();

        kick(&store, &session, &mut ui, &mut notifier, &gid(), &uid("b")).await;

        assert_eq!(ui.confirms.len(), 1);
        assert!(ui.toasts.is_empty());
        let group = store.group(&gid()).await.unwrap();
        assert!(group.members.contains(&uid("b")));
    }

    #[tokio::test]
    async fn missing_group_fails_closed() {
        let store = MemoryStore::new();
        let session = Session::new(uid("a"));
        let mut ui = RecordingSurface::new();
        let mut notifier = notifier();

        open_admin_panel(&store, &session, &mut ui, &mut notifier, &gid()).await;

        assert!(ui.admin_panels.is_empty());
        assert_eq!(error_toasts(&ui)[0].message, "Group not found");
    }

    #[tokio::test]
    async fn member_lookup_failure_falls_back_to_raw_id() {
        let store = seeded_store().await;
        store.fail_user_reads(true);
        let session = Session::new(uid("a"));
        let mut ui = RecordingSurface::new();
        let mut notifier = notifier();

        open_admin_panel(&store, &session, &mut ui, &mut notifier, &gid()).await;

        let panel = &ui.admin_panels[0];
        let usernames: Vec<_> = panel.rows.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(usernames, vec!["b", "c"]);
    }
}
