// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use bildwerk_core::error::BildwerkError;
use bildwerk_core::human_errors::{self, Severity};
use bildwerk_core::types::Channel;
use bildwerk_core::AppConfig;
use bildwerk_image::{PixelBuffer, Session};

use crate::services::app_services::AppServices;

/// One status-line entry, either plain feedback or a humanized error.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    /// Short summary shown in bold.
    pub message: String,
    /// Optional follow-up advice.
    pub suggestion: Option<String>,
    /// `None` for plain informational feedback.
    pub severity: Option<Severity>,
}

impl StatusLine {
    /// Plain feedback after a successful action.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            severity: None,
        }
    }

    /// A prompt asking the user to do something first.
    pub fn action(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: Some(suggestion.into()),
            severity: Some(Severity::ActionRequired),
        }
    }

    /// A humanized error from a failed user action.
    pub fn error(err: &BildwerkError) -> Self {
        let human = human_errors::humanize_error(err);
        Self {
            message: human.message,
            suggestion: Some(human.suggestion),
            severity: Some(human.severity),
        }
    }
}

/// Shared state accessible to all pages via `use_context`.
///
/// The editing session owns the committed `current`/`original` pair; the
/// live camera frame is display-only and never becomes part of the session
/// until the user captures it. The channel selector likewise only shapes
/// rendering — nothing here routes it into the session.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// The active editing session, if an image has been loaded or captured.
    pub session: Option<Session>,
    /// Display-only channel selector, re-evaluated on every paint.
    pub channel: Channel,
    /// Most recent frame from the live preview (pre-capture, display-only).
    pub live_frame: Option<PixelBuffer>,
    /// Whether the live camera preview loop is active.
    pub camera_running: bool,
    /// Status message for user feedback.
    pub status: Option<StatusLine>,
    /// Application settings (edited on the Settings page).
    pub config: AppConfig,
}

impl EditorState {
    pub fn new(svc: &AppServices) -> Self {
        Self {
            session: None,
            channel: Channel::All,
            live_frame: None,
            camera_running: false,
            status: None,
            config: svc.config(),
        }
    }

    /// The buffer the viewport should show right now: the live frame while
    /// the preview runs, otherwise the session's current buffer.
    pub fn displayed(&self) -> Option<&PixelBuffer> {
        if self.camera_running {
            if let Some(ref frame) = self.live_frame {
                return Some(frame);
            }
        }
        self.session.as_ref().map(|s| s.current())
    }
}
