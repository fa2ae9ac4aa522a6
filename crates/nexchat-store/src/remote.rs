//! The remote document store, as the client sees it.
//!
//! Get / partial-update / bounded-query, nothing else.  Writes replace the
//! named list fields in full; there is no per-field merge and no
//! optimistic-concurrency token.

use async_trait::async_trait;
use nexchat_shared::{GroupId, UserId};

use crate::error::Result;
use crate::models::{GroupMessage, GroupRecord, UserRecord};

/// Partial update of a user document.  `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub blocked_users: Option<Vec<UserId>>,
    pub muted_users: Option<Vec<UserId>>,
}

impl UserPatch {
    pub fn blocked_users(list: Vec<UserId>) -> Self {
        Self {
            blocked_users: Some(list),
            ..Self::default()
        }
    }

    pub fn muted_users(list: Vec<UserId>) -> Self {
        Self {
            muted_users: Some(list),
            ..Self::default()
        }
    }
}

/// Partial update of a group document.  `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPatch {
    pub members: Option<Vec<UserId>>,
    pub admins: Option<Vec<UserId>>,
    pub suspended_members: Option<Vec<UserId>>,
}

impl GroupPatch {
    pub fn admins(list: Vec<UserId>) -> Self {
        Self {
            admins: Some(list),
            ..Self::default()
        }
    }

    pub fn suspended_members(list: Vec<UserId>) -> Self {
        Self {
            suspended_members: Some(list),
            ..Self::default()
        }
    }

    /// Combined member + admin write, used by kick so both lists change in
    /// a single update.
    pub fn members_and_admins(members: Vec<UserId>, admins: Vec<UserId>) -> Self {
        Self {
            members: Some(members),
            admins: Some(admins),
            suspended_members: None,
        }
    }
}

/// Async interface to the external document store.
///
/// Calls are non-blocking and, once issued, non-cancellable from the
/// client's point of view.  Availability and write latency are entirely the
/// collaborator's concern; no timeouts are applied here.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch a user document.  `StoreError::NotFound` if absent.
    async fn get_user(&self, id: &UserId) -> Result<UserRecord>;

    /// Fetch a group document.  `StoreError::NotFound` if absent.
    async fn get_group(&self, id: &GroupId) -> Result<GroupRecord>;

    /// Partially update a user document.
    async fn update_user(&self, id: &UserId, patch: UserPatch) -> Result<()>;

    /// Partially update a group document.
    async fn update_group(&self, id: &GroupId, patch: GroupPatch) -> Result<()>;

    /// The most recent messages of a group, newest first, at most `limit`.
    async fn recent_group_messages(
        &self,
        group: &GroupId,
        limit: usize,
    ) -> Result<Vec<GroupMessage>>;
}
