//! Status line state
//!
//! The persistent one-line status under the results table, updated
//! synchronously before and after each search.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Ready,
    Info,
    Error,
}

impl StatusKind {
    pub fn color(self) -> Color {
        match self {
            StatusKind::Ready => Color::DarkGray,
            StatusKind::Info => Color::Gray,
            StatusKind::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    kind: StatusKind,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            message: "Ready".to_string(),
            kind: StatusKind::Ready,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.kind = StatusKind::Info;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.kind = StatusKind::Error;
    }

    /// The position readout shown while navigating matches, e.g.
    /// "2 of 5 matches: Shot020 / V1 / cut01".
    pub fn set_match_position(
        &mut self,
        position: usize,
        total: usize,
        shot: &str,
        track: &str,
        sequence: &str,
    ) {
        self.set_info(format!(
            "{} of {} matches: {} / {} / {}",
            position, total, shot, track, sequence
        ));
    }
}
