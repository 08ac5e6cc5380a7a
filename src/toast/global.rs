// SPDX-License-Identifier: MPL-2.0
//! Default host surface for the `display_globally*` entry points.
//!
//! The application registers its main surface once; the deprecated global
//! calls resolve it here and forward to the regular display path. Only a weak
//! reference is held, so a closed window resolves to [`Error::NoHostSurface`].

use super::host::{HostHandle, HostSurface};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

thread_local! {
    static DEFAULT_SURFACE: RefCell<Option<Weak<dyn HostSurface>>> = const { RefCell::new(None) };
}

/// Makes `host` the surface used by the global entry points.
pub fn register(host: &HostHandle) {
    DEFAULT_SURFACE.with(|slot| *slot.borrow_mut() = Some(Rc::downgrade(host)));
    log::debug!("registered default toast surface");
}

pub fn unregister() {
    DEFAULT_SURFACE.with(|slot| slot.borrow_mut().take());
}

/// The registered surface, if it is still alive.
pub fn resolve() -> Result<HostHandle> {
    DEFAULT_SURFACE
        .with(|slot| slot.borrow().as_ref().and_then(Weak::upgrade))
        .ok_or(Error::NoHostSurface)
}
