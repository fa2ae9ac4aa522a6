//! Domain record structs mirroring the remote store's documents.
//!
//! Every struct derives `Serialize` and `Deserialize` with the camelCase
//! field names the documents actually carry, and `#[serde(default)]` on
//! every field a live document may omit.  Records do not embed their own
//! document id; callers key them by the id they fetched with.

use chrono::{DateTime, Utc};
use nexchat_shared::{GroupId, MessageId, UserId};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A user document.  Mutated only by the owning user (block / mute toggles).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Login handle, the preferred display string.
    #[serde(default)]
    pub username: Option<String>,
    /// Legacy display name, used when `username` is absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Profile picture locator (URL or data reference).
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Users this user has blocked.
    #[serde(default)]
    pub blocked_users: Vec<UserId>,
    /// Users this user has muted.
    #[serde(default)]
    pub muted_users: Vec<UserId>,
}

impl UserRecord {
    /// Preferred display string: username, then name, then the given
    /// fallback (callers pass `"Unknown"` or the raw id).
    pub fn display_label<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.username
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(fallback)
    }
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// A group document.
///
/// The client assumes, but does not enforce, that every admin and every
/// suspended member also appears in `members`.  Kicking a member leaves any
/// `suspended_members` entry in place, so the subset relation can be broken
/// by normal operation; rendering must tolerate that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub group_pic: Option<String>,
    pub created_by: UserId,
    #[serde(default)]
    pub members: Vec<UserId>,
    /// Admin ids.  Absent on documents created before admin support; the
    /// creator is then the sole admin.
    #[serde(default)]
    pub admins: Option<Vec<UserId>>,
    #[serde(default)]
    pub suspended_members: Vec<UserId>,
}

impl GroupRecord {
    /// The admin list with the legacy default applied: documents without an
    /// `admins` field treat the creator as the only admin.
    pub fn effective_admins(&self) -> Vec<UserId> {
        match &self.admins {
            Some(admins) => admins.clone(),
            None => vec![self.created_by.clone()],
        }
    }

    pub fn is_admin(&self, user: &UserId) -> bool {
        match &self.admins {
            Some(admins) => admins.contains(user),
            None => self.created_by == *user,
        }
    }

    pub fn is_suspended(&self, user: &UserId) -> bool {
        self.suspended_members.contains(user)
    }

    /// Display name with the render fallback applied.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Group")
    }
}

// ---------------------------------------------------------------------------
// Message / attachment
// ---------------------------------------------------------------------------

/// A group message.  Read-only in this layer; only scanned for attachments
/// when building the media preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessage {
    pub id: MessageId,
    pub group_id: GroupId,
    pub sender: UserId,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub attachment: Option<Attachment>,
    pub sent_at: DateTime<Utc>,
}

/// File metadata attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type string, e.g. `image/png`.
    #[serde(default)]
    pub file_type: Option<String>,
    /// Download locator.  Attachments without one still count toward media
    /// totals but render no thumbnail.
    #[serde(default, rename = "downloadURL")]
    pub download_url: Option<String>,
}

impl Attachment {
    pub fn media_kind(&self) -> MediaKind {
        MediaKind::from_mime(self.file_type.as_deref())
    }
}

/// Coarse media classification by MIME-type prefix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    pub fn from_mime(mime: Option<&str>) -> Self {
        match mime {
            Some(m) if m.starts_with("image/") => Self::Image,
            Some(m) if m.starts_with("video/") => Self::Video,
            _ => Self::Other,
        }
    }
}
