//! Plane controller and coordination layer
//!
//! The controller owns the form state, the history and the rendering
//! surface, and orchestrates validation, submission and redraws. All
//! time-dependent calls take the current logical time in milliseconds.

use std::sync::Arc;

use thiserror::Error;
use tiny_skia::Pixmap;

use crate::app::state::{
    AppEvent, FormState, SubmissionEvent, SubmissionMachine, SubmissionPhase, TimerEvent,
};
use crate::app::timers::{Debouncer, Scheduler};
use crate::config::{ConfigError, PlaneConfig, TimingConfig};
use crate::domain::core::{FieldCandidates, Transform, clamp_to_display_field};
use crate::domain::history::{History, SubmissionResult};
use crate::domain::region::Radius;
use crate::domain::validation::{
    FieldFeedback, ValidationError, ValidationState, YFieldValidator, YRange,
};
use crate::input::{PointerEvent, SurfaceViewport};
use crate::platform::{HitCheckError, HitCheckService, HitRequest};
use crate::ui::popup::{PopupSlot, PopupTiming};
use crate::ui::renderer::{PlaneRenderer, RendererError};

/// Errors that prevent a controller from being built
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Renderer setup failed: {0}")]
    Renderer(#[from] RendererError),
}

/// Why a submission attempt produced no result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Submission blocked by validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("A submission is already in flight")]
    InFlight,
    #[error("No submission is waiting for a result")]
    NotInFlight,
    #[error("Submission failed: {0}")]
    Remote(#[from] HitCheckError),
}

fn tooltip_timing(timing: &TimingConfig) -> PopupTiming {
    PopupTiming {
        show_after_ms: timing.tooltip_show_ms,
        hide_after_ms: timing.tooltip_hide_ms,
        fade_out_ms: timing.fade_out_ms,
    }
}

fn notification_timing(timing: &TimingConfig) -> PopupTiming {
    PopupTiming {
        show_after_ms: timing.tooltip_show_ms,
        hide_after_ms: timing.notification_ms,
        fade_out_ms: timing.fade_out_ms,
    }
}

/// X as a plain number, never "-0"
fn format_x(x: f64) -> String {
    format!("{}", x + 0.0)
}

/// Main plane controller
///
/// Generic over the hit-check service so tests can observe every call.
pub struct PlaneController<S: HitCheckService> {
    config: Arc<PlaneConfig>,
    service: S,

    transform: Transform,
    viewport: SurfaceViewport,
    surface: Pixmap,
    renderer: PlaneRenderer,

    form: FormState,
    validator: YFieldValidator,
    history: History,
    phase: SubmissionPhase,

    scheduler: Scheduler<TimerEvent>,
    debouncer: Debouncer,
    tooltip: PopupSlot,
    notification: PopupSlot,
}

impl<S: HitCheckService> PlaneController<S> {
    /// Builds the controller and draws the plane for the initial radius
    pub fn new(config: Arc<PlaneConfig>, service: S) -> Result<Self, AppError> {
        config.validate()?;

        let renderer = PlaneRenderer::new(Arc::clone(&config))?;
        let surface = renderer.create_surface()?;
        let canvas = &config.canvas;
        let transform = Transform::centered(canvas.width, canvas.height, canvas.scale);
        let viewport = SurfaceViewport::native(canvas.width, canvas.height);

        let range = YRange {
            min: config.validation.y_min,
            max: config.validation.y_max,
        };
        let initial_radius = config.validation.initial_radius();

        let mut controller = Self {
            service,
            transform,
            viewport,
            surface,
            renderer,
            form: FormState::new(initial_radius),
            validator: YFieldValidator::new(range),
            history: History::new(),
            phase: SubmissionPhase::Idle,
            scheduler: Scheduler::new(),
            debouncer: Debouncer::new(config.timing.debounce_ms),
            tooltip: PopupSlot::new(tooltip_timing(&config.timing)),
            notification: PopupSlot::new(notification_timing(&config.timing)),
            config,
        };

        log::info!(
            "Plane ready: {}x{} at {} px/unit, r={}",
            controller.surface.width(),
            controller.surface.height(),
            controller.transform.scale(),
            initial_radius
        );
        controller.redraw();
        Ok(controller)
    }

    pub fn config(&self) -> &PlaneConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn surface(&self) -> &Pixmap {
        &self.surface
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn validation_state(&self) -> ValidationState {
        self.validator.state()
    }

    /// Whether the Y field carries the error marking
    pub fn is_y_errored(&self) -> bool {
        self.validator.is_errored()
    }

    pub fn tooltip(&self) -> &PopupSlot {
        &self.tooltip
    }

    pub fn notification(&self) -> &PopupSlot {
        &self.notification
    }

    pub fn frames_rendered(&self) -> u64 {
        self.renderer.frames_rendered()
    }

    /// Instant of the next pending timer, for the event loop to sleep until
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    /// Records where the surface is displayed, for click scaling
    pub fn set_viewport(&mut self, viewport: SurfaceViewport) {
        self.viewport = viewport;
    }

    /// Dispatches one user interaction
    pub fn handle_event(&mut self, now_ms: u64, event: AppEvent) -> Result<(), SubmitError> {
        match event {
            AppEvent::XEdited(text) => self.edit_x(text),
            AppEvent::YEdited(text) => self.edit_y(now_ms, text),
            AppEvent::YBlurred => self.blur_y(now_ms),
            AppEvent::RadiusSelected(radius) => {
                self.select_radius(radius);
            }
            AppEvent::Pointer(PointerEvent::Click { client_x, client_y }) => {
                self.click(client_x, client_y);
            }
            AppEvent::Submit => {
                self.submit(now_ms)?;
            }
        }
        Ok(())
    }

    pub fn edit_x(&mut self, text: impl Into<String>) {
        self.form.x_text = text.into();
    }

    /// Stores the new Y text and schedules a debounced live check
    pub fn edit_y(&mut self, now_ms: u64, text: impl Into<String>) {
        self.form.y_text = text.into();
        self.debouncer
            .call(&mut self.scheduler, now_ms, TimerEvent::ValidateY);
    }

    /// Runs the live check right away, replacing any pending debounced one
    pub fn blur_y(&mut self, now_ms: u64) {
        self.debouncer.cancel(&mut self.scheduler);
        self.validate_y_live(now_ms);
    }

    /// Selects and draws `radius`; radii outside the configured set are ignored
    pub fn select_radius(&mut self, radius: Radius) -> bool {
        if !self.config.validation.radii.contains(&radius) {
            log::warn!("Radius {radius} is not selectable");
            return false;
        }
        log::debug!("Radius selected: {radius}");
        self.form.radius = radius;
        self.redraw();
        true
    }

    /// Fills the form fields from a click on the plane
    ///
    /// X is snapped to the half-unit grid; each field is only written when
    /// its value is inside the accepted range.
    pub fn click(&mut self, client_x: f64, client_y: f64) -> FieldCandidates {
        let Some(screen) = self.viewport.to_surface(
            client_x,
            client_y,
            self.surface.width(),
            self.surface.height(),
        ) else {
            log::debug!("Click ignored: surface is not displayed");
            return FieldCandidates::default();
        };

        let graph = self.transform.to_graph(screen);
        let candidates =
            clamp_to_display_field(graph, &self.config.validation.display_bounds());

        if let Some(x) = candidates.x {
            self.form.x_text = format_x(x);
        }
        if let Some(y) = candidates.y {
            self.form.y_text = format!("{y:.2}");
        }
        log::debug!(
            "Click at ({:.2}, {:.2}) -> x={:?} y={:?}",
            graph.x,
            graph.y,
            candidates.x,
            candidates.y
        );
        candidates
    }

    /// Validates the form and marks a submission as in flight
    ///
    /// The returned request must be resolved with [`Self::finish_submission`].
    pub fn begin_submission(&mut self, now_ms: u64) -> Result<HitRequest, SubmitError> {
        if self.phase.is_in_flight() {
            log::debug!("Submission ignored: previous one still in flight");
            return Err(SubmitError::InFlight);
        }

        self.debouncer.cancel(&mut self.scheduler);
        self.tooltip.dismiss();

        let y = match self.validator.validate_for_submit(&self.form.y_text) {
            Ok(y) => y,
            Err(err) => {
                log::debug!("Submission blocked: {err}");
                self.show_tooltip(now_ms, &err);
                return Err(err.into());
            }
        };
        self.validator.clear_error();

        let request = HitRequest {
            x: self.form.x_text.clone(),
            y,
            r: self.form.radius,
        };
        self.phase = SubmissionMachine::process_event(self.phase, SubmissionEvent::Started);
        log::info!(
            "Submitting x={} y={} r={}",
            request.x,
            request.y,
            request.r
        );
        Ok(request)
    }

    /// Applies the service's answer to an in-flight submission
    ///
    /// On success the history is replaced and the plane redrawn; on failure
    /// nothing but the notification changes.
    pub fn finish_submission(
        &mut self,
        now_ms: u64,
        outcome: Result<Vec<SubmissionResult>, HitCheckError>,
    ) -> Result<&SubmissionResult, SubmitError> {
        if !self.phase.is_in_flight() {
            log::warn!("Dropping hit-check result: no submission in flight");
            return Err(SubmitError::NotInFlight);
        }
        self.phase = SubmissionMachine::process_event(self.phase, SubmissionEvent::Resolved);

        let outcome = outcome.and_then(|entries| {
            if entries.is_empty() {
                Err(HitCheckError::EmptyHistory)
            } else {
                Ok(entries)
            }
        });

        let entries = match outcome {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Hit check failed: {err}");
                let message = err.user_message(&self.config.text);
                self.notification.open(
                    &mut self.scheduler,
                    now_ms,
                    message,
                    TimerEvent::Notification,
                );
                return Err(err.into());
            }
        };

        self.history.replace(entries);
        self.redraw();

        let latest = self
            .history
            .latest()
            .ok_or(SubmitError::Remote(HitCheckError::EmptyHistory))?;
        log::info!(
            "Point ({}, {}) r={} resolved: {} in {} ns",
            latest.x,
            latest.y,
            latest.r,
            if latest.hit { "hit" } else { "miss" },
            latest.exec_time_nanos
        );
        Ok(latest)
    }

    /// Validates, calls the service and applies its answer
    pub fn submit(&mut self, now_ms: u64) -> Result<&SubmissionResult, SubmitError> {
        let request = self.begin_submission(now_ms)?;
        let outcome = self.service.check(&request);
        self.finish_submission(now_ms, outcome)
    }

    /// Fires every timer due at or before `now_ms`, each at its own due time
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some(due) = self.scheduler.next_due().filter(|due| *due <= now_ms) {
            for event in self.scheduler.drain_due(due) {
                log::trace!("Timer {event:?} at {due} ms");
                self.on_timer(due, event);
                fired += 1;
            }
        }
        fired
    }

    fn on_timer(&mut self, now_ms: u64, event: TimerEvent) {
        match event {
            TimerEvent::ValidateY => self.validate_y_live(now_ms),
            TimerEvent::Tooltip(timer) => {
                self.tooltip
                    .on_timer(&mut self.scheduler, now_ms, timer, TimerEvent::Tooltip);
            }
            TimerEvent::Notification(timer) => {
                self.notification.on_timer(
                    &mut self.scheduler,
                    now_ms,
                    timer,
                    TimerEvent::Notification,
                );
            }
        }
    }

    fn validate_y_live(&mut self, now_ms: u64) {
        self.tooltip.dismiss();
        match self.validator.evaluate(&self.form.y_text) {
            FieldFeedback::Clear => {}
            FieldFeedback::Error(err) => self.show_tooltip(now_ms, &err),
        }
    }

    fn show_tooltip(&mut self, now_ms: u64, err: &ValidationError) {
        let message = err.user_message(&self.config.text).to_owned();
        self.tooltip
            .open(&mut self.scheduler, now_ms, message, TimerEvent::Tooltip);
    }

    fn redraw(&mut self) {
        self.renderer.render(
            &mut self.surface,
            &self.transform,
            self.form.radius,
            &self.history,
        );
    }
}
