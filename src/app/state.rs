//! Plane state management
//!
//! Defines the form state, the submission state machine and the events
//! that drive the controller. Stable configuration lives in the controller.

use crate::domain::region::Radius;
use crate::input::PointerEvent;
use crate::ui::popup::PopupTimer;

/// Current contents of the form controls
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// X text as entered or filled in by a click
    pub x_text: String,
    /// Raw Y text
    pub y_text: String,
    /// Exactly one radius is selected at all times
    pub radius: Radius,
}

impl FormState {
    pub fn new(radius: Radius) -> Self {
        Self {
            x_text: String::new(),
            y_text: String::new(),
            radius,
        }
    }
}

/// Whether a submission is waiting for the hit-check service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight,
}

impl SubmissionPhase {
    pub fn is_in_flight(self) -> bool {
        self == SubmissionPhase::InFlight
    }
}

/// Submission lifecycle transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Validated request handed to the service
    Started,
    /// Service answered, successfully or not
    Resolved,
}

/// State machine serialising submissions
pub struct SubmissionMachine;

impl SubmissionMachine {
    /// Processes a submission event and returns the new phase
    pub fn process_event(current: SubmissionPhase, event: SubmissionEvent) -> SubmissionPhase {
        match (current, event) {
            (SubmissionPhase::Idle, SubmissionEvent::Started) => SubmissionPhase::InFlight,
            (SubmissionPhase::InFlight, SubmissionEvent::Resolved) => SubmissionPhase::Idle,

            // Invalid transitions - ignore event
            (phase, _) => phase,
        }
    }
}

/// User interactions with the form and the plane
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    XEdited(String),
    YEdited(String),
    YBlurred,
    RadiusSelected(Radius),
    Pointer(PointerEvent),
    Submit,
}

/// Events delivered by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Debounced live validation of the Y field
    ValidateY,
    Tooltip(PopupTimer),
    Notification(PopupTimer),
}
