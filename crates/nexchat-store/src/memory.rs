//! In-memory [`RemoteStore`] used for local development and tests.
//!
//! Behaves like the real backend as far as this layer can observe: absent
//! documents are `NotFound`, patches replace whole list fields, and queries
//! are bounded.  Fault injection lets tests exercise the degraded paths
//! (default relationship flags, empty media preview) without a network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use nexchat_shared::{GroupId, UserId};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::models::{GroupMessage, GroupRecord, UserRecord};
use crate::remote::{GroupPatch, RemoteStore, UserPatch};

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, UserRecord>,
    groups: HashMap<GroupId, GroupRecord>,
    messages: Vec<GroupMessage>,
}

/// In-memory store with togglable fault injection.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
    fail_user_reads: AtomicBool,
    fail_group_reads: AtomicBool,
    fail_queries: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, id: UserId, record: UserRecord) {
        self.inner.write().await.users.insert(id, record);
    }

    pub async fn insert_group(&self, id: GroupId, record: GroupRecord) {
        self.inner.write().await.groups.insert(id, record);
    }

    pub async fn push_message(&self, message: GroupMessage) {
        self.inner.write().await.messages.push(message);
    }

    /// Snapshot of a group document, for assertions.
    pub async fn group(&self, id: &GroupId) -> Option<GroupRecord> {
        self.inner.read().await.groups.get(id).cloned()
    }

    /// Snapshot of a user document, for assertions.
    pub async fn user(&self, id: &UserId) -> Option<UserRecord> {
        self.inner.read().await.users.get(id).cloned()
    }

    // -- fault injection --

    pub fn fail_user_reads(&self, on: bool) {
        self.fail_user_reads.store(on, Ordering::Relaxed);
    }

    pub fn fail_group_reads(&self, on: bool) {
        self.fail_group_reads.store(on, Ordering::Relaxed);
    }

    pub fn fail_queries(&self, on: bool) {
        self.fail_queries.store(on, Ordering::Relaxed);
    }

    pub fn fail_writes(&self, on: bool) {
        self.fail_writes.store(on, Ordering::Relaxed);
    }

    fn check(&self, flag: &AtomicBool, op: &str) -> Result<()> {
        if flag.load(Ordering::Relaxed) {
            debug!(op, "injected store fault");
            return Err(StoreError::Unavailable(format!("injected fault: {op}")));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn get_user(&self, id: &UserId) -> Result<UserRecord> {
        self.check(&self.fail_user_reads, "get_user")?;
        self.inner
            .read()
            .await
            .users
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_group(&self, id: &GroupId) -> Result<GroupRecord> {
        self.check(&self.fail_group_reads, "get_group")?;
        self.inner
            .read()
            .await
            .groups
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update_user(&self, id: &UserId, patch: UserPatch) -> Result<()> {
        self.check(&self.fail_writes, "update_user")?;
        let mut inner = self.inner.write().await;
        let user = inner.users.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(blocked) = patch.blocked_users {
            user.blocked_users = blocked;
        }
        if let Some(muted) = patch.muted_users {
            user.muted_users = muted;
        }
        Ok(())
    }

    async fn update_group(&self, id: &GroupId, patch: GroupPatch) -> Result<()> {
        self.check(&self.fail_writes, "update_group")?;
        let mut inner = self.inner.write().await;
        let group = inner.groups.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(members) = patch.members {
            group.members = members;
        }
        if let Some(admins) = patch.admins {
            group.admins = Some(admins);
        }
        if let Some(suspended) = patch.suspended_members {
            group.suspended_members = suspended;
        }
        Ok(())
    }

    async fn recent_group_messages(
        &self,
        group: &GroupId,
        limit: usize,
    ) -> Result<Vec<GroupMessage>> {
        self.check(&self.fail_queries, "recent_group_messages")?;
        let inner = self.inner.read().await;
        let mut messages: Vec<GroupMessage> = inner
            .messages
            .iter()
            .filter(|m| m.group_id == *group)
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        messages.truncate(limit);
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use nexchat_shared::MessageId;

    use super::*;

    fn group(created_by: &str, members: &[&str]) -> GroupRecord {
        GroupRecord {
            name: Some("test".into()),
            group_pic: None,
            created_by: UserId::new(created_by),
            members: members.iter().map(|m| UserId::new(*m)).collect(),
            admins: None,
            suspended_members: Vec::new(),
        }
    }

    #[tokio::test]
    async fn missing_documents_are_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_user(&UserId::new("nobody")).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            store.get_group(&GroupId::new("nowhere")).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn group_patch_replaces_only_named_fields() {
        let store = MemoryStore::new();
        let gid = GroupId::new("g1");
        store.insert_group(gid.clone(), group("a", &["a", "b"])).await;

        store
            .update_group(&gid, GroupPatch::suspended_members(vec![UserId::new("b")]))
            .await
            .unwrap();

        let got = store.get_group(&gid).await.unwrap();
        assert_eq!(got.suspended_members, vec![UserId::new("b")]);
        // Untouched fields survive.
        assert_eq!(got.members.len(), 2);
        assert_eq!(got.admins, None);
    }

    #[tokio::test]
    async fn recent_messages_are_newest_first_and_bounded() {
        let store = MemoryStore::new();
        let gid = GroupId::new("g1");
        let base = Utc::now();
        for i in 0..5 {
            store
                .push_message(GroupMessage {
                    id: MessageId::new(),
                    group_id: gid.clone(),
                    sender: UserId::new("a"),
                    body: Some(format!("m{i}")),
                    attachment: None,
                    sent_at: base + Duration::seconds(i),
                })
                .await;
        }
        // A message in another group never shows up.
        store
            .push_message(GroupMessage {
                id: MessageId::new(),
                group_id: GroupId::new("other"),
                sender: UserId::new("a"),
                body: None,
                attachment: None,
                sent_at: base + Duration::seconds(100),
            })
            .await;

        let got = store.recent_group_messages(&gid, 3).await.unwrap();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].body.as_deref(), Some("m4"));
        assert_eq!(got[2].body.as_deref(), Some("m2"));
    }

    #[tokio::test]
    async fn injected_faults_surface_as_unavailable() {
        let store = MemoryStore::new();
        let uid = UserId::new("a");
        store.insert_user(uid.clone(), UserRecord::default()).await;

        store.fail_user_reads(true);
        assert!(matches!(
            store.get_user(&uid).await,
            Err(StoreError::Unavailable(_))
        ));

        store.fail_user_reads(false);
        assert!(store.get_user(&uid).await.is_ok());
    }
}
