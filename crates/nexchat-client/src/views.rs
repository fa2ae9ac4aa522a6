//! List/detail view switching, section navigation, and the maximized
//! presentation toggle.
//!
//! Exactly one of the list and detail views is visible at any time, and the
//! global chrome (status bar, bottom navigation) follows the active view.
//! There is no history stack: "back" is a single-level switch to the list.

use tracing::debug;

use crate::ui::UiSurface;

/// Header title shown on the chats section.
pub const APP_TITLE: &str = "NEXCHAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryView {
    List,
    Detail,
}

/// Visibility of the two primary views and their chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub list_visible: bool,
    pub detail_visible: bool,
    pub status_bar_visible: bool,
    pub bottom_nav_visible: bool,
}

impl ViewLayout {
    pub fn list() -> Self {
        Self {
            list_visible: true,
            detail_visible: false,
            status_bar_visible: true,
            bottom_nav_visible: true,
        }
    }

    pub fn detail() -> Self {
        Self {
            list_visible: false,
            detail_visible: true,
            status_bar_visible: false,
            bottom_nav_visible: false,
        }
    }
}

/// Top-level sections reachable from the bottom navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Chats,
    Updates,
    Communities,
    Announcements,
}

impl NavSection {
    pub fn header_title(self) -> &'static str {
        match self {
            Self::Chats => APP_TITLE,
            Self::Updates => "Status",
            Self::Communities => "Groups",
            Self::Announcements => "Announcements",
        }
    }
}

/// Section render description: all other sections hidden, this one shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub section: NavSection,
    pub header_title: &'static str,
}

/// The view-switching state machine.
#[derive(Debug, Clone)]
pub struct ViewState {
    active: PrimaryView,
    maximized: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active: PrimaryView::List,
            maximized: false,
        }
    }

    pub fn active(&self) -> PrimaryView {
        self.active
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Switch to the chat list.  Idempotent: re-applies the layout even when
    /// already active.  Also clears the profile overlay and restores the
    /// selected chat background.
    pub fn show_list_view<U: UiSurface>(&mut self, ui: &mut U) {
        self.active = PrimaryView::List;
        ui.apply_view(ViewLayout::list());
        ui.clear_profile_overlay();
        ui.restore_chat_background();
    }

    /// Switch to the conversation detail view, suppressing the status bar
    /// and bottom navigation.
    pub fn show_detail_view<U: UiSurface>(&mut self, ui: &mut U) {
        self.active = PrimaryView::Detail;
        ui.apply_view(ViewLayout::detail());
    }

    /// Jump to a top-level section from the bottom navigation.
    pub fn navigate<U: UiSurface>(&mut self, ui: &mut U, section: NavSection) {
        debug!(?section, "navigating");
        if section == NavSection::Chats {
            self.active = PrimaryView::List;
        }
        ui.apply_section(SectionLayout {
            section,
            header_title: section.header_title(),
        });
    }

    /// Enter or leave the maximized presentation.  Leaving is a no-op when
    /// not currently maximized.
    pub fn set_maximized<U: UiSurface>(&mut self, ui: &mut U, on: bool) {
        if on {
            self.maximized = true;
            ui.set_maximized(true);
        } else if self.maximized {
            self.maximized = false;
            ui.set_maximized(false);
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
