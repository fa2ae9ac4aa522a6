//! `@`-mention autocomplete over the message draft.
//!
//! A small state machine driven per keystroke: a trailing lone `@` opens
//! the popup with the full roster (self excluded); word characters typed
//! after the `@` re-filter it by case-insensitive substring; a space after
//! the token, or the absence of any `@`, closes it.  Selecting an entry
//! rewrites the draft in place.
//!
//! The popup position is computed once, at open time, from the input's
//! bounding rectangle.  It is deliberately not re-computed on scroll or
//! resize; re-filtering reuses the anchor captured at open.

use nexchat_shared::UserId;
use tracing::debug;

use crate::session::{Member, Session};
use crate::ui::UiSurface;

/// How far above the input's top edge the popup is anchored.
pub const POPUP_RISE_PX: f64 = 220.0;

/// Bounding rectangle of the message input at the moment of a keystroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Fixed popup position, derived from the input rect at open time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPosition {
    pub top: f64,
    pub left: f64,
}

impl PopupPosition {
    pub fn above(input: &InputRect) -> Self {
        Self {
            top: input.top - POPUP_RISE_PX,
            left: input.left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionEntry {
    pub user_id: UserId,
    pub username: String,
}

/// Popup render description.
#[derive(Debug, Clone, PartialEq)]
pub struct MentionPopupView {
    pub position: PopupPosition,
    pub entries: Vec<MentionEntry>,
}

/// What a keystroke did to the popup.
#[derive(Debug, Clone, PartialEq)]
pub enum MentionAction {
    Show(MentionPopupView),
    Hide,
    /// Leave the popup exactly as it is (e.g. punctuation in the fragment).
    Keep,
}

/// Keystroke-driven mention state.
#[derive(Debug, Clone, Default)]
pub struct MentionTracker {
    open: bool,
    anchor: Option<PopupPosition>,
    listener_attached: bool,
}

impl MentionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Mark the input as wired up.  Returns `true` only on the first call,
    /// so re-running chat setup never attaches a second keyup listener.
    pub fn attach_listener(&mut self) -> bool {
        if self.listener_attached {
            debug!("mention listener already attached, skipping");
            return false;
        }
        self.listener_attached = true;
        true
    }

    /// Process one keystroke over the full draft text.  The roster and the
    /// self-exclusion id come from the session's open chat.
    pub fn on_keyup(
        &mut self,
        text: &str,
        session: &Session,
        input: &InputRect,
    ) -> MentionAction {
        let Some(at) = text.rfind('@') else {
            self.open = false;
            return MentionAction::Hide;
        };

        // `@` as the final character: open with the full roster.
        if at + 1 == text.len() {
            let position = PopupPosition::above(input);
            self.anchor = Some(position);
            self.open = true;
            return MentionAction::Show(MentionPopupView {
                position,
                entries: roster_matches(session.roster(), "", session.user_id()),
            });
        }

        let fragment = &text[at + 1..];
        if fragment.chars().all(is_word_char) {
            // Anchor only exists if the popup was opened by the trailing-@
            // path; without one there is nothing on screen to re-filter.
            let Some(position) = self.anchor else {
                return MentionAction::Keep;
            };
            let entries = roster_matches(session.roster(), fragment, session.user_id());
            if entries.is_empty() {
                self.open = false;
                return MentionAction::Hide;
            }
            self.open = true;
            MentionAction::Show(MentionPopupView { position, entries })
        } else if fragment.contains(' ') {
            self.open = false;
            MentionAction::Hide
        } else {
            MentionAction::Keep
        }
    }

    /// Process a keystroke and apply the outcome to the surface.
    pub fn handle_keyup<U: UiSurface>(
        &mut self,
        ui: &mut U,
        text: &str,
        session: &Session,
        input: &InputRect,
    ) {
        match self.on_keyup(text, session, input) {
            MentionAction::Show(view) => ui.show_mention_popup(view),
            MentionAction::Hide => ui.hide_mention_popup(),
            MentionAction::Keep => {}
        }
    }

    /// A roster entry was clicked: rewrite the draft and close the popup.
    /// Returns the new draft text, or `None` when the draft no longer holds
    /// an `@` token.
    pub fn select<U: UiSurface>(
        &mut self,
        ui: &mut U,
        text: &str,
        username: &str,
    ) -> Option<String> {
        let rewritten = insert_mention(text, username)?;
        self.open = false;
        ui.hide_mention_popup();
        Some(rewritten)
    }
}

/// Replace the trailing `@fragment` with `@username␣`, preserving whatever
/// followed the fragment's own first space (space included).
pub fn insert_mention(text: &str, username: &str) -> Option<String> {
    let at = text.rfind('@')?;
    let before = &text[..at];
    let after = &text[at + 1..];
    let tail = after.find(' ').map(|i| &after[i..]).unwrap_or("");
    Some(format!("{before}@{username} {tail}"))
}

fn roster_matches(roster: &[Member], fragment: &str, self_id: &UserId) -> Vec<MentionEntry> {
    let needle = fragment.to_lowercase();
    roster
        .iter()
        .filter(|m| m.id != *self_id)
        .filter(|m| m.username.to_lowercase().contains(&needle))
        .map(|m| MentionEntry {
            user_id: m.id.clone(),
            username: m.username.clone(),
        })
        .collect()
}

// JS `\w`: ASCII alphanumerics and underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
