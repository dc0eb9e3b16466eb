//! Submission flow
//!
//! Input validation and the confirm-before-throwing state machine behind
//! the input box and modal.

use crate::types::{clamp_text, MAX_ENTRY_CHARS, WARN_THRESHOLD_CHARS};

/// Live validation state of the input box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputStatus {
    /// Number of characters typed
    pub chars: usize,
    /// The counter should be drawn as a warning
    pub near_limit: bool,
    /// The throw button is enabled
    pub can_submit: bool,
}

impl InputStatus {
    pub fn of(text: &str) -> Self {
        let chars = text.chars().count();
        Self {
            chars,
            near_limit: chars >= WARN_THRESHOLD_CHARS,
            can_submit: !text.trim().is_empty(),
        }
    }

    /// Counter text, e.g. `12 / 300`
    pub fn label(&self) -> String {
        format!("{} / {}", self.chars, MAX_ENTRY_CHARS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    /// Modal open, waiting for confirm or cancel
    ConfirmPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    Submit,
    Cancel,
    /// Click on the dimmed area around the modal
    BackdropClick,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Ignored,
    ModalOpened,
    ModalClosed,
    /// The user confirmed; the caller stores this text. The input has been reset.
    Committed(String),
}

/// Input text plus modal state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFlow {
    state: FlowState,
    input: String,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input, truncated to the entry cap
    pub fn set_input(&mut self, text: &str) {
        self.input = clamp_text(text);
    }

    pub fn status(&self) -> InputStatus {
        InputStatus::of(&self.input)
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_modal_open(&self) -> bool {
        self.state == FlowState::ConfirmPending
    }

    pub fn handle(&mut self, event: FlowEvent) -> FlowOutcome {
        match (self.state, event) {
            (FlowState::Idle, FlowEvent::Submit) if self.status().can_submit => {
                self.state = FlowState::ConfirmPending;
                FlowOutcome::ModalOpened
            }
            (FlowState::ConfirmPending, FlowEvent::Cancel | FlowEvent::BackdropClick) => {
                self.state = FlowState::Idle;
                FlowOutcome::ModalClosed
            }
            (FlowState::ConfirmPending, FlowEvent::Confirm) => {
                self.state = FlowState::Idle;
                if !self.status().can_submit {
                    return FlowOutcome::ModalClosed;
                }
                FlowOutcome::Committed(std::mem::take(&mut self.input))
            }
            _ => FlowOutcome::Ignored,
        }
    }
}
