// SPDX-License-Identifier: MPL-2.0
//! Process-wide toast access.
//!
//! [`Toast`] forwards to a [`ToastController`] created on first use and kept
//! for the lifetime of the UI thread. Applications that prefer explicit
//! ownership can hold a `ToastController` directly, or swap the shared one
//! with [`Toast::install`].
//!
//! Delegate callbacks and tap callbacks run after the controller is released,
//! so they may call back into `Toast`.
//!
//! # Example
//!
//! ```no_run
//! use iced::Size;
//! use iced_toast::toast::{HostHandle, MessageType, Surface, Toast};
//!
//! let host: HostHandle = Surface::shared(Size::new(800.0, 600.0));
//! Toast::display_typed("Saved", &host, MessageType::Success).expect("host has area");
//! ```

use super::controller::{Message, ToastController};
use super::delegate::ToastDelegate;
use super::global;
use super::host::HostHandle;
use super::request::{ToastId, ToastRequest};
use super::style::MessageType;
use crate::config::ToastConfig;
use crate::error::{Error, Result};
use iced::{Element, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static CONTROLLER: RefCell<Option<ToastController>> = const { RefCell::new(None) };
}

/// Runs `f` on the shared controller, then delivers the events it queued.
///
/// Returns `None` if the controller is already borrowed, which only happens
/// when called from inside [`Toast::with`].
fn operate<R>(f: impl FnOnce(&mut ToastController) -> R) -> Option<R> {
    let (result, notifications) = CONTROLLER.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            log::warn!("toast controller is busy, call ignored");
            return None;
        };
        let controller = slot.get_or_insert_with(ToastController::new);
        let result = f(controller);
        Some((result, controller.take_notifications()))
    })?;
    notifications.deliver();
    Some(result)
}

fn busy() -> Error {
    Error::invalid("toast controller is busy")
}

fn show(request: ToastRequest, host: &HostHandle) -> Result<ToastId> {
    operate(|controller| controller.show(request, host)).unwrap_or_else(|| Err(busy()))
}

fn show_globally(request: ToastRequest) -> Result<ToastId> {
    let host = global::resolve().inspect_err(|_| {
        log::warn!("toast rejected: no default surface registered");
    })?;
    show(request, &host)
}

/// Shared toast entry points.
pub struct Toast;

impl Toast {
    // =========================================================================
    // Timed toasts
    // =========================================================================

    /// Shows `message` for the default duration.
    pub fn display(message: impl Into<String>, host: &HostHandle) -> Result<ToastId> {
        show(ToastRequest::new(message), host)
    }

    /// Shows `message` for `seconds`. Non-positive values use the default.
    pub fn display_for(
        message: impl Into<String>,
        seconds: f64,
        host: &HostHandle,
    ) -> Result<ToastId> {
        show(ToastRequest::new(message).duration_secs(seconds), host)
    }

    /// Shows a tappable toast; `on_tap` runs once if the user presses it.
    pub fn display_for_with_tap(
        message: impl Into<String>,
        seconds: f64,
        on_tap: impl FnOnce() + 'static,
        host: &HostHandle,
    ) -> Result<ToastId> {
        show(
            ToastRequest::new(message)
                .duration_secs(seconds)
                .on_tap(on_tap),
            host,
        )
    }

    pub fn display_typed(
        message: impl Into<String>,
        host: &HostHandle,
        message_type: MessageType,
    ) -> Result<ToastId> {
        show(ToastRequest::new(message).message_type(message_type), host)
    }

    pub fn display_typed_for(
        message: impl Into<String>,
        seconds: f64,
        host: &HostHandle,
        message_type: MessageType,
    ) -> Result<ToastId> {
        show(
            ToastRequest::new(message)
                .message_type(message_type)
                .duration_secs(seconds),
            host,
        )
    }

    pub fn display_typed_for_with_tap(
        message: impl Into<String>,
        seconds: f64,
        on_tap: impl FnOnce() + 'static,
        host: &HostHandle,
        message_type: MessageType,
    ) -> Result<ToastId> {
        show(
            ToastRequest::new(message)
                .message_type(message_type)
                .duration_secs(seconds)
                .on_tap(on_tap),
            host,
        )
    }

    // =========================================================================
    // Persistent toasts
    // =========================================================================

    /// Shows `message` until it is dismissed or replaced.
    pub fn display_persistently(message: impl Into<String>, host: &HostHandle) -> Result<ToastId> {
        show(ToastRequest::new(message).persistent(), host)
    }

    pub fn display_persistently_typed(
        message: impl Into<String>,
        host: &HostHandle,
        message_type: MessageType,
    ) -> Result<ToastId> {
        show(
            ToastRequest::new(message)
                .message_type(message_type)
                .persistent(),
            host,
        )
    }

    pub fn display_persistently_with_tap(
        message: impl Into<String>,
        host: &HostHandle,
        on_tap: impl FnOnce() + 'static,
        message_type: MessageType,
    ) -> Result<ToastId> {
        show(
            ToastRequest::new(message)
                .message_type(message_type)
                .on_tap(on_tap)
                .persistent(),
            host,
        )
    }

    // =========================================================================
    // Default-surface toasts
    // =========================================================================

    /// Shows `message` on the surface registered with [`global::register`].
    #[deprecated(note = "pass the host surface to `Toast::display` instead")]
    pub fn display_globally(message: impl Into<String>) -> Result<ToastId> {
        show_globally(ToastRequest::new(message))
    }

    #[deprecated(note = "pass the host surface to `Toast::display_for` instead")]
    pub fn display_globally_for(message: impl Into<String>, seconds: f64) -> Result<ToastId> {
        show_globally(ToastRequest::new(message).duration_secs(seconds))
    }

    #[deprecated(note = "pass the host surface to `Toast::display_for_with_tap` instead")]
    pub fn display_globally_for_with_tap(
        message: impl Into<String>,
        seconds: f64,
        on_tap: impl FnOnce() + 'static,
    ) -> Result<ToastId> {
        show_globally(
            ToastRequest::new(message)
                .duration_secs(seconds)
                .on_tap(on_tap),
        )
    }

    #[deprecated(note = "pass the host surface to `Toast::display_typed_for_with_tap` instead")]
    pub fn display_globally_typed_for_with_tap(
        message: impl Into<String>,
        seconds: f64,
        on_tap: impl FnOnce() + 'static,
        message_type: MessageType,
    ) -> Result<ToastId> {
        show_globally(
            ToastRequest::new(message)
                .message_type(message_type)
                .duration_secs(seconds)
                .on_tap(on_tap),
        )
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Starts dismissing the visible toast. Returns `false` if there is none.
    pub fn dismiss() -> bool {
        operate(ToastController::begin_dismiss).unwrap_or(false)
    }

    /// Runs the tap callback of toast `id` and dismisses it.
    pub fn tap(id: ToastId) -> bool {
        let Some(callback) = operate(|controller| controller.take_tap(id)).flatten() else {
            return false;
        };
        callback();
        operate(|controller| controller.dismiss_toast(id));
        true
    }

    pub fn tick() {
        operate(ToastController::advance);
    }

    pub fn update(message: Message) {
        match message {
            Message::Tick => Self::tick(),
            Message::Tapped(id) => {
                Self::tap(id);
            }
        }
    }

    pub fn subscription() -> Subscription<Message> {
        operate(|controller| controller.subscription()).unwrap_or_else(Subscription::none)
    }

    /// Overlay element for the visible toast.
    pub fn view() -> Element<'static, Message> {
        operate(|controller| controller.view())
            .unwrap_or_else(|| iced::widget::Space::new().into())
    }

    // =========================================================================
    // State and setup
    // =========================================================================

    #[must_use]
    pub fn is_visible() -> bool {
        operate(|controller| controller.is_visible()).unwrap_or(false)
    }

    #[must_use]
    pub fn current_id() -> Option<ToastId> {
        operate(|controller| controller.current_id()).flatten()
    }

    pub fn set_delegate(delegate: &Rc<dyn ToastDelegate>) {
        operate(|controller| controller.set_delegate(delegate));
    }

    pub fn clear_delegate() {
        operate(ToastController::clear_delegate);
    }

    /// Replaces the shared configuration after validating it.
    pub fn configure(config: ToastConfig) -> Result<()> {
        operate(|controller| controller.set_config(config)).unwrap_or_else(|| Err(busy()))
    }

    /// Replaces the shared controller, returning the previous one.
    ///
    /// The previous controller keeps its toast; dismiss it first if it should
    /// leave the screen.
    pub fn install(controller: ToastController) -> Option<ToastController> {
        CONTROLLER.with(|cell| match cell.try_borrow_mut() {
            Ok(mut slot) => slot.replace(controller),
            Err(_) => {
                log::warn!("toast controller is busy, install ignored");
                Some(controller)
            }
        })
    }

    /// Gives direct access to the shared controller.
    ///
    /// Calling other `Toast` functions from inside `f` is ignored.
    pub fn with<R>(f: impl FnOnce(&mut ToastController) -> R) -> Option<R> {
        operate(f)
    }
}
