// SPDX-License-Identifier: MPL-2.0
//! Display requests and toast identifiers.

use super::style::MessageType;
use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocates the next identifier. Identifiers are never reused.
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// Invoked when the user taps the toast.
pub type TapCallback = Box<dyn FnOnce()>;

/// Everything needed to display one toast.
pub struct ToastRequest {
    pub(super) message: String,
    pub(super) duration: Option<Duration>,
    pub(super) message_type: MessageType,
    pub(super) on_tap: Option<TapCallback>,
    pub(super) persistent: bool,
}

impl ToastRequest {
    /// Creates a request for a default-styled, timed toast.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: None,
            message_type: MessageType::Default,
            on_tap: None,
            persistent: false,
        }
    }

    #[must_use]
    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    /// Sets how long the toast stays visible. Zero means "type default".
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = (!duration.is_zero()).then_some(duration);
        self
    }

    /// Sets the duration in seconds.
    ///
    /// Zero, negative and non-finite values leave the duration unset so the
    /// type default applies.
    #[must_use]
    pub fn duration_secs(mut self, seconds: f64) -> Self {
        self.duration = Duration::try_from_secs_f64(seconds)
            .ok()
            .filter(|d| !d.is_zero());
        self
    }

    /// Invoked once when the toast is tapped; the toast then dismisses.
    #[must_use]
    pub fn on_tap(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    /// Keeps the toast until it is dismissed or replaced.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn requested_duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn kind(&self) -> MessageType {
        self.message_type
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    #[must_use]
    pub fn has_tap_callback(&self) -> bool {
        self.on_tap.is_some()
    }

    /// Rejects requests that would render a blank toast.
    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(Error::invalid("toast message must not be empty"));
        }
        Ok(())
    }
}

impl fmt::Debug for ToastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("message", &self.message)
            .field("duration", &self.duration)
            .field("message_type", &self.message_type)
            .field("on_tap", &self.on_tap.is_some())
            .field("persistent", &self.persistent)
            .finish()
    }
}
