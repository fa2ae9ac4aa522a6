//! Recording test doubles for the presentation seams.

use crate::admin::AdminPanelView;
use crate::info::InfoPanelView;
use crate::mentions::MentionPopupView;
use crate::notify::{AudioError, AudioOutput, Notifier, Severity, Toast, Tone};
use crate::ui::UiSurface;
use crate::views::{SectionLayout, ViewLayout};

/// A [`UiSurface`] that records everything applied to it.
pub(crate) struct RecordingSurface {
    pub has_toast_container: bool,
    pub confirm_response: bool,
    pub toasts: Vec<Toast>,
    pub alerts: Vec<String>,
    pub view_layouts: Vec<ViewLayout>,
    pub sections: Vec<SectionLayout>,
    pub maximized: Vec<bool>,
    pub profile_overlay_clears: usize,
    pub background_restores: usize,
    pub mention_popups: Vec<MentionPopupView>,
    pub mention_hides: usize,
    pub admin_panels: Vec<AdminPanelView>,
    pub info_panels: Vec<InfoPanelView>,
    pub confirms: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            has_toast_container: true,
            confirm_response: true,
            toasts: Vec::new(),
            alerts: Vec::new(),
            view_layouts: Vec::new(),
            sections: Vec::new(),
            maximized: Vec::new(),
            profile_overlay_clears: 0,
            background_restores: 0,
            mention_popups: Vec::new(),
            mention_hides: 0,
            admin_panels: Vec::new(),
            info_panels: Vec::new(),
            confirms: Vec::new(),
        }
    }
}

impl UiSurface for RecordingSurface {
    fn push_toast(&mut self, toast: Toast) -> bool {
        if !self.has_toast_container {
            return false;
        }
        self.toasts.push(toast);
        true
    }

    fn blocking_alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn apply_view(&mut self, layout: ViewLayout) {
        self.view_layouts.push(layout);
    }

    fn apply_section(&mut self, layout: SectionLayout) {
        self.sections.push(layout);
    }

    fn set_maximized(&mut self, on: bool) {
        self.maximized.push(on);
    }

    fn clear_profile_overlay(&mut self) {
        self.profile_overlay_clears += 1;
    }

    fn restore_chat_background(&mut self) {
        self.background_restores += 1;
    }

    fn show_mention_popup(&mut self, view: MentionPopupView) {
        self.mention_popups.push(view);
    }

    fn hide_mention_popup(&mut self) {
        self.mention_hides += 1;
    }

    fn show_admin_panel(&mut self, view: AdminPanelView) {
        self.admin_panels.push(view);
    }

    fn show_info_panel(&mut self, view: InfoPanelView) {
        self.info_panels.push(view);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.confirms.push(prompt.to_owned());
        self.confirm_response
    }
}

/// An [`AudioOutput`] with scriptable clip behavior.
#[derive(Default)]
pub(crate) struct ScriptedAudio {
    pub reject_clips: bool,
    pub missing_clips: bool,
    pub no_output: bool,
    pub clip_attempts: Vec<Severity>,
    pub tones: Vec<Tone>,
}

impl ScriptedAudio {
    /// Every clip play is rejected, as under a strict autoplay policy.
    pub fn rejecting() -> Self {
        Self {
            reject_clips: true,
            ..Self::default()
        }
    }

    /// The clip assets are absent; only synthesized tones can play.
    pub fn without_clips() -> Self {
        Self {
            missing_clips: true,
            ..Self::default()
        }
    }

    /// No audio device at all.
    pub fn muted() -> Self {
        Self {
            no_output: true,
            ..Self::default()
        }
    }
}

impl AudioOutput for ScriptedAudio {
    fn play_clip(&mut self, severity: Severity) -> Result<(), AudioError> {
        self.clip_attempts.push(severity);
        if self.no_output {
            return Err(AudioError::Unavailable);
        }
        if self.missing_clips {
            return Err(AudioError::Clip("asset not found".into()));
        }
        if self.reject_clips {
            return Err(AudioError::Rejected("autoplay blocked".into()));
        }
        Ok(())
    }

    fn play_tone(&mut self, tone: Tone) -> Result<(), AudioError> {
        if self.no_output {
            return Err(AudioError::Unavailable);
        }
        self.tones.push(tone);
        Ok(())
    }
}

/// A notifier over quiet scripted audio, for controller tests.
pub(crate) fn notifier() -> Notifier<ScriptedAudio> {
    Notifier::new(ScriptedAudio::default())
}
