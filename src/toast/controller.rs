// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast lifecycle.
//!
//! The `ToastController` owns the toast currently on screen (if any) together
//! with its dismissal timer and animation. Showing a new toast while one is
//! visible force-retires the old one first, so two toasts never overlap.
//!
//! ```text
//! Idle ──display──▶ Showing(Entering ─▶ Visible) ──dismiss/timer/tap──▶ Dismissing(Exiting) ──▶ Idle
//! ```
//!
//! All work happens on the UI thread. Time only moves through the injected
//! [`Clock`]; the host application calls [`ToastController::tick`] (or routes
//! [`Message::Tick`] from [`ToastController::subscription`]) to advance
//! animations and fire timers.

use super::animation::{AnimationPhase, AnimationState};
use super::clock::{Clock, SystemClock};
use super::delegate::{DelegateSlot, LifecycleEvent, Notifications, ToastDelegate};
use super::host::{self, HostHandle, HostSurface};
use super::request::{TapCallback, ToastId, ToastRequest};
use super::style::{resolve, MessageType};
use super::view::{Appearance, ToastView};
use crate::config::ToastConfig;
use crate::error::{Error, Result};
use iced::widget::Space;
use iced::{Element, Subscription};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Advance animations and timers.
    Tick,
    /// The user pressed the toast.
    Tapped(ToastId),
}

/// Coarse lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    /// Entering or fully visible.
    Showing,
    /// Exit animation running.
    Dismissing,
}

/// One-shot dismissal deadline, owned by the toast it belongs to.
#[derive(Debug, Clone, Copy)]
struct DismissTimer {
    deadline: Instant,
}

impl DismissTimer {
    fn is_due(self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// The toast currently on screen.
struct VisibleToast {
    view: ToastView,
    message_type: MessageType,
    /// `None` for persistent toasts.
    duration: Option<Duration>,
    on_tap: Option<TapCallback>,
    timer: Option<DismissTimer>,
    animation: AnimationState,
    host: Weak<dyn HostSurface>,
    attached_at: Instant,
}

impl VisibleToast {
    fn id(&self) -> ToastId {
        self.view.id()
    }

    fn detach(&self) {
        match self.host.upgrade() {
            Some(host) => host.detach(self.id()),
            None => log::trace!("host of {} is gone, nothing to detach", self.id()),
        }
    }
}

/// Next step `settle` should take.
enum Step {
    FinishEntrance,
    StartExit(Instant),
    FinishExit,
}

pub struct ToastController {
    config: ToastConfig,
    clock: Box<dyn Clock>,
    delegate: DelegateSlot,
    current: Option<VisibleToast>,
    outbox: Vec<LifecycleEvent>,
}

impl ToastController {
    /// Creates a controller with default configuration and wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(ToastConfig::default(), SystemClock)
    }

    #[must_use]
    pub fn with_config(config: ToastConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    #[must_use]
    pub fn with_clock(config: ToastConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
            delegate: DelegateSlot::default(),
            current: None,
            outbox: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Replaces the configuration used for subsequent toasts.
    ///
    /// The toast on screen keeps the timing it was shown with.
    pub fn set_config(&mut self, config: ToastConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Observes lifecycle events. Only a weak reference is kept.
    pub fn set_delegate(&mut self, delegate: &Rc<dyn ToastDelegate>) {
        self.delegate.set(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate.clear();
    }

    // =========================================================================
    // Public operations
    // =========================================================================

    /// Shows a toast, replacing the current one.
    ///
    /// Fails without touching the visible toast when the message is blank or
    /// the host has no area to show it in.
    pub fn display(&mut self, request: ToastRequest, host: &HostHandle) -> Result<ToastId> {
        let result = self.show(request, host);
        self.deliver_notifications();
        result
    }

    /// Shows a toast that stays until dismissed or replaced.
    pub fn display_persistently(
        &mut self,
        request: ToastRequest,
        host: &HostHandle,
    ) -> Result<ToastId> {
        self.display(request.persistent(), host)
    }

    /// Starts dismissing the visible toast.
    ///
    /// Returns `false` when there is nothing to dismiss or a dismissal is
    /// already running.
    pub fn dismiss(&mut self) -> bool {
        let started = self.begin_dismiss();
        self.deliver_notifications();
        started
    }

    /// Handles a press on toast `id`: runs its callback once, then dismisses it.
    ///
    /// Returns `false` when `id` is stale, already leaving, or not tappable.
    pub fn tap(&mut self, id: ToastId) -> bool {
        let Some(callback) = self.take_tap(id) else {
            return false;
        };
        callback();
        self.dismiss_toast(id);
        self.deliver_notifications();
        true
    }

    /// Advances animations and fires an expired timer.
    pub fn tick(&mut self) {
        self.advance();
        self.deliver_notifications();
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick => self.tick(),
            Message::Tapped(id) => {
                self.tap(id);
            }
        }
    }

    /// Ticks at the configured frame rate while a toast is on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.current.is_some() {
            iced::time::every(self.config.animation.frame_interval()).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the visible toast on its frame, or nothing.
    ///
    /// Meant to be layered over the host content, e.g. with `stack!`. The
    /// element owns its data, so it outlives the borrow of the controller.
    pub fn view<'a>(&self) -> Element<'a, Message> {
        let Some(toast) = &self.current else {
            return Space::new().into();
        };

        let now = self.clock.now();
        let appearance = Appearance {
            opacity: toast.animation.opacity(now),
            offset: toast.animation.offset(now),
            elapsed: now.saturating_duration_since(toast.attached_at),
        };
        let on_press = (toast.on_tap.is_some()
            && toast.animation.phase() != AnimationPhase::Exiting)
            .then_some(Message::Tapped(toast.id()));

        toast.view.render(appearance, on_press)
    }

    // =========================================================================
    // Observers
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> ControllerState {
        match self.current.as_ref().map(|t| t.animation.phase()) {
            None => ControllerState::Idle,
            Some(AnimationPhase::Exiting) => ControllerState::Dismissing,
            Some(AnimationPhase::Entering | AnimationPhase::Visible) => ControllerState::Showing,
        }
    }

    /// Whether a toast is attached (including while it animates out).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn current_id(&self) -> Option<ToastId> {
        self.current.as_ref().map(VisibleToast::id)
    }

    #[must_use]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.view.message())
    }

    #[must_use]
    pub fn current_type(&self) -> Option<MessageType> {
        self.current.as_ref().map(|t| t.message_type)
    }

    #[must_use]
    pub fn current_view(&self) -> Option<&ToastView> {
        self.current.as_ref().map(|t| &t.view)
    }

    #[must_use]
    pub fn phase(&self) -> Option<AnimationPhase> {
        self.current.as_ref().map(|t| t.animation.phase())
    }

    /// Whether the visible toast will never dismiss on its own.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.current.as_ref().is_some_and(|t| t.duration.is_none())
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.current.as_ref().is_some_and(|t| t.timer.is_some())
    }

    /// Time until the armed timer fires.
    #[must_use]
    pub fn time_remaining(&self) -> Option<Duration> {
        let timer = self.current.as_ref()?.timer?;
        Some(timer.deadline.saturating_duration_since(self.clock.now()))
    }

    // =========================================================================
    // Buffered operations
    //
    // These mutate state and queue lifecycle events without delivering them,
    // so callers holding the controller behind a `RefCell` can release the
    // borrow before delegates run.
    // =========================================================================

    /// Takes the events queued so far.
    pub fn take_notifications(&mut self) -> Notifications {
        Notifications::new(self.delegate.clone(), std::mem::take(&mut self.outbox))
    }

    fn deliver_notifications(&mut self) {
        self.take_notifications().deliver();
    }

    fn emit(&mut self, event: LifecycleEvent) {
        self.outbox.push(event);
    }

    pub(crate) fn show(&mut self, request: ToastRequest, host: &HostHandle) -> Result<ToastId> {
        if let Err(err) = request.validate() {
            log::warn!("toast rejected: {err}");
            return Err(err);
        }

        let ToastRequest {
            message,
            duration,
            message_type,
            on_tap,
            persistent,
        } = request;

        let style = resolve(message_type);
        let Some(frame) = host::frame_for(host.as_ref(), style.height.height(), &self.config.layout)
        else {
            log::warn!("toast rejected: host surface has no visible area");
            return Err(Error::NoHostSurface);
        };

        self.retire_current();

        let now = self.clock.now();
        let id = ToastId::next();
        let duration = if persistent {
            None
        } else {
            duration.or_else(|| message_type.default_duration(&self.config.timing))
        };

        log::debug!(
            "displaying {id} ({message_type:?}, {})",
            duration.map_or_else(|| "persistent".to_string(), |d| format!("{d:?}"))
        );

        host.attach(id, frame);
        self.current = Some(VisibleToast {
            view: ToastView::new(id, message, style, frame),
            message_type,
            duration,
            on_tap,
            timer: None,
            animation: AnimationState::entering(now, &self.config.animation),
            host: Rc::downgrade(host),
            attached_at: now,
        });
        self.emit(LifecycleEvent::WillDisplay(message_type));
        self.settle(now);

        Ok(id)
    }

    pub(crate) fn begin_dismiss(&mut self) -> bool {
        let Some(toast) = &self.current else {
            log::trace!("dismiss ignored: no toast");
            return false;
        };
        if toast.animation.phase() == AnimationPhase::Exiting {
            log::trace!("dismiss ignored: {} already leaving", toast.id());
            return false;
        }
        let now = self.clock.now();
        self.start_exit(now);
        self.settle(now);
        true
    }

    /// Dismisses only if `id` is still the visible toast.
    pub(crate) fn dismiss_toast(&mut self, id: ToastId) -> bool {
        if self.current_id() != Some(id) {
            return false;
        }
        self.begin_dismiss()
    }

    /// Takes the tap callback of toast `id` and cancels its timer.
    pub(crate) fn take_tap(&mut self, id: ToastId) -> Option<TapCallback> {
        let toast = self.current.as_mut().filter(|t| t.id() == id)?;
        if toast.animation.phase() == AnimationPhase::Exiting {
            return None;
        }
        let callback = toast.on_tap.take()?;
        toast.timer = None;
        log::debug!("{id} tapped");
        Some(callback)
    }

    pub(crate) fn advance(&mut self) {
        let now = self.clock.now();
        self.settle(now);
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Applies every transition that is due at `now`.
    fn settle(&mut self, now: Instant) {
        loop {
            let Some(toast) = &self.current else {
                return;
            };
            let step = match toast.animation.phase() {
                AnimationPhase::Entering if toast.animation.is_phase_complete(now) => {
                    Step::FinishEntrance
                }
                AnimationPhase::Visible => match toast.timer {
                    Some(timer) if timer.is_due(now) => Step::StartExit(timer.deadline),
                    _ => return,
                },
                AnimationPhase::Exiting if toast.animation.is_phase_complete(now) => {
                    Step::FinishExit
                }
                AnimationPhase::Entering | AnimationPhase::Exiting => return,
            };

            match step {
                Step::FinishEntrance => self.finish_entrance(),
                Step::StartExit(at) => self.start_exit(at),
                Step::FinishExit => self.finish_exit(),
            }
        }
    }

    fn finish_entrance(&mut self) {
        let Some(toast) = self.current.as_mut() else {
            return;
        };
        let visible_at = toast.animation.phase_end();
        toast.animation.transition_to(AnimationPhase::Visible, visible_at);
        // A deadline past the clock's range never fires.
        toast.timer = toast
            .duration
            .and_then(|duration| visible_at.checked_add(duration))
            .map(|deadline| DismissTimer { deadline });
        if toast.duration.is_some() && toast.timer.is_none() {
            log::debug!(
                "{} duration is out of range, keeping it until dismissed",
                toast.id()
            );
        }
        let message_type = toast.message_type;
        self.emit(LifecycleEvent::DidDisplay(message_type));
    }

    fn start_exit(&mut self, at: Instant) {
        let Some(toast) = self.current.as_mut() else {
            return;
        };
        toast.timer = None;
        toast.animation.transition_to(AnimationPhase::Exiting, at);
        log::debug!("dismissing {}", toast.id());
        let message_type = toast.message_type;
        self.emit(LifecycleEvent::WillDismiss(message_type));
    }

    fn finish_exit(&mut self) {
        let Some(toast) = self.current.take() else {
            return;
        };
        toast.detach();
        log::debug!("{} dismissed", toast.id());
        self.emit(LifecycleEvent::DidDismiss(toast.message_type));
    }

    /// Removes the current toast immediately, skipping its exit animation.
    fn retire_current(&mut self) {
        let Some(toast) = self.current.take() else {
            return;
        };
        log::debug!("force-retiring {}", toast.id());
        if toast.animation.phase() != AnimationPhase::Exiting {
            self.emit(LifecycleEvent::WillDismiss(toast.message_type));
        }
        toast.detach();
        self.emit(LifecycleEvent::DidDismiss(toast.message_type));
    }
}

impl Default for ToastController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToastController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastController")
            .field("config", &self.config)
            .field("delegate", &self.delegate)
            .field("current", &self.current_id())
            .field("state", &self.state())
            .field("queued_events", &self.outbox.len())
            .finish_non_exhaustive()
    }
}
