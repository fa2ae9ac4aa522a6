//! The rendering adapter seam.
//!
//! Controllers emit declarative view structs; exactly one implementation of
//! [`UiSurface`] applies them to the actual presentation layer.  Whatever
//! "the element might not exist anymore" means for a given frontend is that
//! adapter's problem, handled in one place — controllers never see it.
//! A store call that resolves after its panel was closed simply hands its
//! render description to the adapter, which is free to drop it.

use crate::admin::AdminPanelView;
use crate::info::InfoPanelView;
use crate::mentions::MentionPopupView;
use crate::notify::Toast;
use crate::views::{SectionLayout, ViewLayout};

pub trait UiSurface {
    /// Append a toast.  Returns `false` when the toast container is not
    /// present; the caller decides what the fallback is.
    fn push_toast(&mut self, toast: Toast) -> bool;

    /// Modal, blocking alert.  Last-resort surface for errors that must
    /// never be invisible.
    fn blocking_alert(&mut self, message: &str);

    /// Apply the list/detail layout and its chrome visibility.
    fn apply_view(&mut self, layout: ViewLayout);

    /// Show exactly one top-level section and set the header title.
    fn apply_section(&mut self, layout: SectionLayout);

    /// Enter or leave the maximized presentation (scroll locked while on).
    fn set_maximized(&mut self, on: bool);

    /// Clear the "currently viewing profile" overlay.
    fn clear_profile_overlay(&mut self);

    /// Restore the previously selected chat background image.
    fn restore_chat_background(&mut self);

    fn show_mention_popup(&mut self, view: MentionPopupView);

    fn hide_mention_popup(&mut self);

    fn show_admin_panel(&mut self, view: AdminPanelView);

    fn show_info_panel(&mut self, view: InfoPanelView);

    /// Interactive yes/no confirmation for destructive actions.
    fn confirm(&mut self, prompt: &str) -> bool;
}
