//! The detail sidebar: group and user variants of the info panel.
//!
//! Both variants fail closed on the primary record fetch (error
//! notification, nothing rendered).  Everything secondary degrades
//! instead: a failed media query renders an empty preview, a failed
//! relationship lookup renders default (unblocked/unmuted) controls.

use nexchat_shared::{GroupId, UserId};
use nexchat_store::{MediaKind, RemoteStore};
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::notify::{AudioOutput, Notifier, Severity};
use crate::relations::{relationship_flags, RelationshipFlags};
use crate::session::Session;
use crate::ui::UiSurface;

/// How many recent messages are scanned for attachments.
pub const MEDIA_SCAN_LIMIT: usize = 50;

/// Thumbnail cap for the bounded media preview.
pub const MEDIA_PREVIEW_MAX: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaThumb {
    pub kind: MediaKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMemberRow {
    pub member: UserId,
    pub username: String,
    pub is_admin: bool,
    pub is_you: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfoView {
    pub group_id: GroupId,
    pub name: String,
    pub picture: Option<String>,
    pub subtitle: String,
    /// Total attachments found in the scanned window, not just the ones
    /// shown as thumbnails.
    pub media_total: usize,
    pub media: Vec<MediaThumb>,
    pub members: Vec<GroupMemberRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfoView {
    pub user_id: UserId,
    pub name: String,
    pub picture: Option<String>,
    pub subtitle: String,
    pub flags: RelationshipFlags,
}

/// Shared header contract, polymorphic over the target kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoPanelView {
    Group(GroupInfoView),
    User(UserInfoView),
}

/// Render the group info sidebar.
pub async fn show_group_info<S, U, A>(
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
    let group = match store.get_group(group_id).await {
        Ok(group) => group,
        Err(err) => {
            let err = ClientError::from(err);
            warn!(%err, group = %group_id, "group info fetch failed");
            notifier.notify(ui, &not_found_or(&err, "Group not found"), Severity::Error);
            return;
        }
    };

    let (media_total, media) = match media_preview(store, group_id).await {
        Ok(preview) => preview,
        Err(err) => {
            debug!(%err, "media loading skipped");
            (0, Vec::new())
        }
    };

    let mut members = Vec::new();
    for member in &group.members {
        let username = match store.get_user(member).await {
            Ok(user) => user.display_label("Unknown").to_owned(),
            Err(err) => {
                debug!(member = member.short(), %err, "member lookup failed");
                "Unknown".to_owned()
            }
        };
        members.push(GroupMemberRow {
            member: member.clone(),
            username,
            is_admin: group.is_admin(member),
            is_you: session.is_self(member),
        });
    }

    ui.show_info_panel(InfoPanelView::Group(GroupInfoView {
        group_id: group_id.clone(),
        name: group.display_name().to_owned(),
        picture: group.group_pic.clone(),
        subtitle: format!("Group · {} members", group.members.len()),
        media_total,
        media,
        members,
    }));
}

/// Render the user info sidebar.  Relationship flags are fail-open: if the
/// viewer's own record cannot be read, the panel renders with default
/// (unblocked, unmuted) controls.
pub async fn show_user_info<S, U, A>(
    store: &S,
    session: &Session,
    ui: &mut U,
    notifier: &mut Notifier<A>,
    user_id: &UserId,
) where
    S: RemoteStore + ?Sized,
    U: UiSurface,
    A: AudioOutput,
{
    let user = match store.get_user(user_id).await {
        Ok(user) => user,
        Err(err) => {
            let err = ClientError::from(err);
            warn!(%err, user = user_id.short(), "user info fetch failed");
            notifier.notify(ui, &not_found_or(&err, "User not found"), Severity::Error);
            return;
        }
    };

    let flags = match relationship_flags(store, session, user_id).await {
        Ok(flags) => flags,
        Err(err) => {
            warn!(%err, "relationship flags unavailable, rendering defaults");
            RelationshipFlags::default()
        }
    };

    ui.show_info_panel(InfoPanelView::User(UserInfoView {
        user_id: user_id.clone(),
        name: user.display_label("User").to_owned(),
        picture: user.profile_pic.clone(),
        subtitle: user.email.clone().unwrap_or_else(|| "User Profile".into()),
        flags,
    }));
}

async fn media_preview<S>(store: &S, group_id: &GroupId) -> Result<(usize, Vec<MediaThumb>)>
where
    S: RemoteStore + ?Sized,
{
    let messages = store
        .recent_group_messages(group_id, MEDIA_SCAN_LIMIT)
        .await?;

    let mut total = 0;
    let mut slots = 0;
    let mut thumbs = Vec::new();
    for message in &messages {
        let Some(attachment) = &message.attachment else {
            continue;
        };
        total += 1;
        if slots < MEDIA_PREVIEW_MAX {
            // An attachment without a download locator still consumes a
            // preview slot; it just renders nothing.
            slots += 1;
            if let Some(url) = &attachment.download_url {
                thumbs.push(MediaThumb {
                    kind: attachment.media_kind(),
                    url: url.clone(),
                });
            }
        }
    }
    Ok((total, thumbs))
}

fn not_found_or(err: &ClientError, not_found: &str) -> String {
    match err {
        ClientError::NotFound => not_found.to_string(),
        other => format!("Error: {other}"),
    }
}
