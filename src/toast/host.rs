// SPDX-License-Identifier: MPL-2.0
//! Host surfaces: the containers a toast is attached into.
//!
//! The controller never owns a host. It keeps a weak handle to the surface it
//! attached into so it can detach later; if the host is gone by then, the
//! detach is skipped.

use super::request::ToastId;
use crate::config::LayoutConfig;
use iced::{Point, Rectangle, Size};
use std::cell::Cell;
use std::rc::Rc;

/// A container that can show a toast.
pub trait HostSurface {
    /// Visible bounds in the host's coordinate space.
    fn bounds(&self) -> Rectangle;

    /// Height reserved at the bottom edge (tab bar, toolbar) that the toast
    /// must stay above.
    fn bottom_inset(&self) -> f32 {
        0.0
    }

    /// Called once the toast's frame is known.
    fn attach(&self, toast: ToastId, frame: Rectangle);

    /// Called when the toast leaves the surface.
    fn detach(&self, toast: ToastId);
}

/// Shared handle to a host surface.
pub type HostHandle = Rc<dyn HostSurface>;

/// Computes where a toast of `height` goes inside `host`.
///
/// Centered horizontally with `layout.horizontal_margin()` on each side
/// (capped at `layout.max_width()`), its bottom edge resting
/// `layout.bottom_margin()` above the host's bottom inset. Returns `None` when
/// the host has no area to show anything in.
#[must_use]
pub fn frame_for(host: &dyn HostSurface, height: f32, layout: &LayoutConfig) -> Option<Rectangle> {
    let bounds = host.bounds();
    if !(bounds.width > 0.0 && bounds.height > 0.0) {
        return None;
    }

    let margin = layout.horizontal_margin();
    let mut width = (bounds.width - 2.0 * margin).min(layout.max_width());
    if width <= 0.0 {
        width = bounds.width;
    }
    let x = bounds.x + (bounds.width - width) / 2.0;

    let bottom = bounds.y + bounds.height - host.bottom_inset().max(0.0) - layout.bottom_margin();
    let y = (bottom - height).max(bounds.y);

    Some(Rectangle::new(Point::new(x, y), Size::new(width, height)))
}

/// Host surface backed by a window or widget area of an Iced application.
///
/// Update its size from `window::Event::Resized` and render the controller's
/// view on top of the content it describes.
#[derive(Debug)]
pub struct Surface {
    size: Cell<Size>,
    bottom_inset: Cell<f32>,
    attached: Cell<Option<(ToastId, Rectangle)>>,
}

impl Surface {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size: Cell::new(size),
            bottom_inset: Cell::new(0.0),
            attached: Cell::new(None),
        }
    }

    /// Creates a shared handle, ready to pass to the controller.
    #[must_use]
    pub fn shared(size: Size) -> Rc<Self> {
        Rc::new(Self::new(size))
    }

    #[must_use]
    pub fn with_bottom_inset(self, inset: f32) -> Self {
        self.bottom_inset.set(inset);
        self
    }

    pub fn resize(&self, size: Size) {
        self.size.set(size);
    }

    pub fn set_bottom_inset(&self, inset: f32) {
        self.bottom_inset.set(inset);
    }

    /// Toast currently attached, with the frame it was given.
    #[must_use]
    pub fn attached(&self) -> Option<(ToastId, Rectangle)> {
        self.attached.get()
    }
}

impl HostSurface for Surface {
    fn bounds(&self) -> Rectangle {
        Rectangle::with_size(self.size.get())
    }

    fn bottom_inset(&self) -> f32 {
        self.bottom_inset.get()
    }

    fn attach(&self, toast: ToastId, frame: Rectangle) {
        self.attached.set(Some((toast, frame)));
    }

    fn detach(&self, toast: ToastId) {
        // A newer toast may already own the slot
        if matches!(self.attached.get(), Some((current, _)) if current == toast) {
            self.attached.set(None);
        }
    }
}
