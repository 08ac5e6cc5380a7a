// SPDX-License-Identifier: MPL-2.0
//! Lifecycle observers.
//!
//! A delegate implements whichever of the four callbacks it cares about; the
//! rest default to doing nothing. The controller only holds a weak reference,
//! so a dropped delegate simply stops receiving events.
//!
//! Events are buffered while the controller mutates its state and delivered
//! afterwards, so a delegate may call back into the controller from a
//! callback.

use super::style::MessageType;
use std::rc::{Rc, Weak};

pub trait ToastDelegate {
    fn will_display(&self, _message_type: MessageType) {}
    fn did_display(&self, _message_type: MessageType) {}
    fn will_dismiss(&self, _message_type: MessageType) {}
    fn did_dismiss(&self, _message_type: MessageType) {}
}

/// A lifecycle transition of the visible toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    WillDisplay(MessageType),
    DidDisplay(MessageType),
    WillDismiss(MessageType),
    DidDismiss(MessageType),
}

impl LifecycleEvent {
    #[must_use]
    pub fn message_type(self) -> MessageType {
        match self {
            LifecycleEvent::WillDisplay(t)
            | LifecycleEvent::DidDisplay(t)
            | LifecycleEvent::WillDismiss(t)
            | LifecycleEvent::DidDismiss(t) => t,
        }
    }

    fn deliver_to(self, delegate: &dyn ToastDelegate) {
        match self {
            LifecycleEvent::WillDisplay(t) => delegate.will_display(t),
            LifecycleEvent::DidDisplay(t) => delegate.did_display(t),
            LifecycleEvent::WillDismiss(t) => delegate.will_dismiss(t),
            LifecycleEvent::DidDismiss(t) => delegate.did_dismiss(t),
        }
    }
}

/// Weak slot for the current delegate.
#[derive(Default, Clone)]
pub struct DelegateSlot(Option<Weak<dyn ToastDelegate>>);

impl DelegateSlot {
    pub fn set(&mut self, delegate: &Rc<dyn ToastDelegate>) {
        self.0 = Some(Rc::downgrade(delegate));
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// The delegate, if one was set and is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Rc<dyn ToastDelegate>> {
        self.0.as_ref().and_then(Weak::upgrade)
    }
}

impl std::fmt::Debug for DelegateSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DelegateSlot")
            .field(&self.upgrade().is_some())
            .finish()
    }
}

/// Events collected during one controller operation.
#[derive(Debug, Default)]
#[must_use = "notifications do nothing until delivered"]
pub struct Notifications {
    delegate: DelegateSlot,
    events: Vec<LifecycleEvent>,
}

impl Notifications {
    pub(crate) fn new(delegate: DelegateSlot, events: Vec<LifecycleEvent>) -> Self {
        Self { delegate, events }
    }

    #[must_use]
    pub fn events(&self) -> &[LifecycleEvent] {
        &self.events
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hands every event to the delegate, in order.
    pub fn deliver(self) {
        if self.events.is_empty() {
            return;
        }
        let Some(delegate) = self.delegate.upgrade() else {
            log::trace!("no delegate, skipping {} toast event(s)", self.events.len());
            return;
        };
        for event in self.events {
            event.deliver_to(delegate.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<LifecycleEvent>>);

    impl ToastDelegate for Recorder {
        fn will_display(&self, t: MessageType) {
            self.0.borrow_mut().push(LifecycleEvent::WillDisplay(t));
        }
        fn did_dismiss(&self, t: MessageType) {
            self.0.borrow_mut().push(LifecycleEvent::DidDismiss(t));
        }
    }

    #[test]
    fn only_implemented_callbacks_observe_events() {
        let recorder = Rc::new(Recorder::default());
        let delegate: Rc<dyn ToastDelegate> = recorder.clone();
        let mut slot = DelegateSlot::default();
        slot.set(&delegate);

        Notifications::new(
            slot,
            vec![
                LifecycleEvent::WillDisplay(MessageType::Error),
                LifecycleEvent::DidDisplay(MessageType::Error),
                LifecycleEvent::WillDismiss(MessageType::Error),
                LifecycleEvent::DidDismiss(MessageType::Error),
            ],
        )
        .deliver();

        assert_eq!(
            *recorder.0.borrow(),
            vec![
                LifecycleEvent::WillDisplay(MessageType::Error),
                LifecycleEvent::DidDismiss(MessageType::Error),
            ]
        );
    }

    #[test]
    fn dropped_delegate_is_skipped() {
        let mut slot = DelegateSlot::default();
        {
            let delegate: Rc<dyn ToastDelegate> = Rc::new(Recorder::default());
            slot.set(&delegate);
        }
        assert!(slot.upgrade().is_none());
        Notifications::new(slot, vec![LifecycleEvent::DidDisplay(MessageType::Default)]).deliver();
    }

    #[test]
    fn event_reports_its_type() {
        assert_eq!(
            LifecycleEvent::WillDismiss(MessageType::LoadingSmall).message_type(),
            MessageType::LoadingSmall
        );
    }
}
