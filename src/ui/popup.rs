//! Transient popups: the field tooltip and the server notification
//!
//! A slot holds at most one popup. Opening a new one replaces the old one
//! immediately. Lifecycle timers are fire-and-forget: they carry the id of
//! the popup that scheduled them and are ignored once that popup is gone.

use crate::app::timers::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopupId(u64);

/// Visibility of the popup currently held by a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPhase {
    /// Attached but not yet revealed
    Pending,
    Shown,
    /// Hidden and waiting for removal
    FadingOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub id: PopupId,
    pub message: String,
    pub phase: PopupPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupStage {
    Reveal,
    Hide,
    Remove,
}

/// Timer event addressed to one popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupTimer {
    pub id: PopupId,
    pub stage: PopupStage,
}

/// Delays of one popup kind, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupTiming {
    pub show_after_ms: u64,
    pub hide_after_ms: u64,
    pub fade_out_ms: u64,
}

/// Holder for at most one popup
#[derive(Debug, Clone)]
pub struct PopupSlot {
    timing: PopupTiming,
    next_id: u64,
    current: Option<Popup>,
}

impl PopupSlot {
    pub fn new(timing: PopupTiming) -> Self {
        Self {
            timing,
            next_id: 0,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Popup> {
        self.current.as_ref()
    }

    /// Message of the popup currently attached, visible or not
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|popup| popup.message.as_str())
    }

    pub fn is_visible(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|popup| popup.phase == PopupPhase::Shown)
    }

    /// Replaces any existing popup and schedules the new one's lifecycle
    ///
    /// `wrap` lifts the slot's timer into the caller's event type.
    pub fn open<E>(
        &mut self,
        scheduler: &mut Scheduler<E>,
        now_ms: u64,
        message: impl Into<String>,
        wrap: impl Fn(PopupTimer) -> E,
    ) -> PopupId {
        self.dismiss();

        let id = PopupId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.current = Some(Popup {
            id,
            message: message.into(),
            phase: PopupPhase::Pending,
        });

        scheduler.schedule_in(
            now_ms,
            self.timing.show_after_ms,
            wrap(PopupTimer {
                id,
                stage: PopupStage::Reveal,
            }),
        );
        scheduler.schedule_in(
            now_ms,
            self.timing.hide_after_ms,
            wrap(PopupTimer {
                id,
                stage: PopupStage::Hide,
            }),
        );
        id
    }

    /// Removes the current popup right away
    pub fn dismiss(&mut self) -> Option<Popup> {
        self.current.take()
    }

    /// Applies a fired lifecycle timer; stale timers are no-ops
    pub fn on_timer<E>(
        &mut self,
        scheduler: &mut Scheduler<E>,
        now_ms: u64,
        timer: PopupTimer,
        wrap: impl Fn(PopupTimer) -> E,
    ) {
        let Some(popup) = self.current.as_mut().filter(|popup| popup.id == timer.id) else {
            log::trace!("ignoring timer for removed popup {:?}", timer.id);
            return;
        };

        match timer.stage {
            PopupStage::Reveal => {
                if popup.phase == PopupPhase::Pending {
                    popup.phase = PopupPhase::Shown;
                }
            }
            PopupStage::Hide => {
                popup.phase = PopupPhase::FadingOut;
                scheduler.schedule_in(
                    now_ms,
                    self.timing.fade_out_ms,
                    wrap(PopupTimer {
                        id: timer.id,
                        stage: PopupStage::Remove,
                    }),
                );
            }
            PopupStage::Remove => {
                self.current = None;
            }
        }
    }
}
