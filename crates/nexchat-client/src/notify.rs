//! Transient toast notifications with audio feedback.
//!
//! [`Notifier::notify`] never returns an error and never panics: audio
//! failures fall back to a synthesized tone, a missing toast container
//! falls back to a blocking alert for errors only, and everything else is
//! swallowed with a log line.

use tracing::{debug, warn};

use crate::ui::UiSurface;

/// Default hold period before a toast fades out.
pub const DEFAULT_TOAST_MS: u64 = 3000;

/// Fixed fade-out transition length, appended after the hold period.
pub const TOAST_FADE_MS: u64 = 300;

/// Synthesized tone length.
pub const TONE_DURATION_MS: u64 = 200;

/// Synthesized tone gain at the start of its exponential fade.
pub const TONE_GAIN: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Fallback-tone frequency: error lowest, success highest.
    pub fn tone_hz(self) -> f32 {
        match self {
            Self::Success => 800.0,
            Self::Error => 300.0,
            Self::Info => 500.0,
        }
    }
}

/// A toast render description.  The adapter owns scheduling: hold for
/// `hold_ms`, then fade for `fade_ms`, then remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub hold_ms: u64,
    pub fade_ms: u64,
}

/// A short sine tone, synthesized when clip playback fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u64,
    pub gain: f32,
}

impl Tone {
    pub fn for_severity(severity: Severity) -> Self {
        Self {
            frequency_hz: severity.tone_hz(),
            duration_ms: TONE_DURATION_MS,
            gain: TONE_GAIN,
        }
    }
}

/// Why a clip or tone could not be played.  Produced by [`AudioOutput`]
/// adapters; the presenter only ever logs these, it never re-raises them.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    /// Playback refused (e.g. an autoplay policy).
    #[error("Playback rejected: {0}")]
    Rejected(String),

    /// The clip could not be decoded or is missing.
    #[error("Clip unavailable: {0}")]
    Clip(String),

    /// No audio output at all.
    #[error("Audio output unavailable")]
    Unavailable,
}

/// Audio side of the presentation layer.
pub trait AudioOutput {
    /// Play the severity-mapped notification clip.
    fn play_clip(&mut self, severity: Severity) -> Result<(), AudioError>;

    /// Schedule a synthesized tone.
    fn play_tone(&mut self, tone: Tone) -> Result<(), AudioError>;
}

/// The notification presenter.  No queueing, no de-duplication, no rate
/// limiting: N calls produce N simultaneous toasts.
pub struct Notifier<A: AudioOutput> {
    audio: A,
}

impl<A: AudioOutput> Notifier<A> {
    pub fn new(audio: A) -> Self {
        Self { audio }
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Show a toast with the default hold period.
    pub fn notify<U: UiSurface>(&mut self, ui: &mut U, message: &str, severity: Severity) {
        self.notify_for(ui, message, severity, DEFAULT_TOAST_MS);
    }

    /// Show a toast held for `hold_ms` before its fixed-length fade-out.
    pub fn notify_for<U: UiSurface>(
        &mut self,
        ui: &mut U,
        message: &str,
        severity: Severity,
        hold_ms: u64,
    ) {
        let toast = Toast {
            message: message.to_owned(),
            severity,
            hold_ms,
            fade_ms: TOAST_FADE_MS,
        };

        if !ui.push_toast(toast) {
            // Errors must never be invisible; informational messages may be.
            match severity {
                Severity::Error => ui.blocking_alert(message),
                _ => warn!(message, "toast container missing, notification dropped"),
            }
            return;
        }

        self.play_sound(severity);
    }

    fn play_sound(&mut self, severity: Severity) {
        if let Err(err) = self.audio.play_clip(severity) {
            debug!(%err, "notification clip failed, synthesizing tone");
            if let Err(err) = self.audio.play_tone(Tone::for_severity(severity)) {
                warn!(%err, "could not play notification sound");
            }
        }
    }
}
