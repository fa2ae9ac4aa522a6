//! Per-login session context.
//!
//! Replaces the module-level globals (current user, current chat, cached
//! roster) of the original design: a [`Session`] is built once at login,
//! passed into every controller, and dropped at logout.  Controllers stay
//! pure functions of `(store, session, ui, input)`.

use nexchat_shared::{ChatKind, UserId};

/// A roster entry for the currently open group chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: UserId,
    pub username: String,
}

impl Member {
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

/// Everything the controllers need to know about the signed-in user and the
/// conversation on screen.
#[derive(Debug, Clone)]
pub struct Session {
    user_id: UserId,
    active_chat: Option<ChatKind>,
    roster: Vec<Member>,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            active_chat: None,
            roster: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn is_self(&self, id: &UserId) -> bool {
        self.user_id == *id
    }

    pub fn active_chat(&self) -> Option<&ChatKind> {
        self.active_chat.as_ref()
    }

    /// Open a conversation; the roster is the member list of a group chat
    /// (empty for direct chats).
    pub fn open_chat(&mut self, chat: ChatKind, roster: Vec<Member>) {
        self.active_chat = Some(chat);
        self.roster = roster;
    }

    /// Close the current conversation (single-level "back").
    pub fn close_chat(&mut self) {
        self.active_chat = None;
        self.roster.clear();
    }

    pub fn roster(&self) -> &[Member] {
        &self.roster
    }
}
