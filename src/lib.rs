// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows short, transient notifications ("toasts") over an Iced
//! application.
//!
//! At most one toast is on screen at a time. Showing a new one replaces the
//! current toast, timed toasts leave on their own, and persistent ones stay
//! until dismissed. Lifecycle changes are reported to an optional
//! [`toast::ToastDelegate`].

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod error;
pub mod toast;
pub mod ui;

pub use config::{SMALL_TOAST_HEIGHT, TOAST_HEIGHT};
pub use error::{Error, Result};
pub use toast::{MessageType, Toast, ToastController, ToastRequest};
