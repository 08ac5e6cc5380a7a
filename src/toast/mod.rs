// SPDX-License-Identifier: MPL-2.0
//! Transient single-toast notifications.
//!
//! # Components
//!
//! - [`ToastController`]: owns the visible toast, its timer and animation
//! - [`Toast`]: shared controller for code without an explicit handle
//! - [`ToastRequest`]: message, type, duration and tap callback
//! - [`resolve`]: maps a [`MessageType`] to colors, icon and height
//! - [`HostSurface`]: the view a toast is placed in
//! - [`ToastDelegate`]: lifecycle observer

mod animation;
mod clock;
mod controller;
mod delegate;
pub mod global;
mod host;
mod request;
mod shared;
mod style;
mod view;

pub use animation::{AnimationPhase, AnimationState, Easing};
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{ControllerState, Message, ToastController};
pub use delegate::{DelegateSlot, LifecycleEvent, Notifications, ToastDelegate};
pub use host::{frame_for, HostHandle, HostSurface, Surface};
pub use request::{TapCallback, ToastId, ToastRequest};
pub use shared::Toast;
pub use style::{resolve, ColorTheme, HeightClass, IconKey, MessageType, ResolvedStyle};
pub use view::{Appearance, ToastView};
