use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use slotmap::SlotMap;
use tracing::trace;

use crate::responsive::Breakpoint;

slotmap::new_key_type! {
    /// Handle for a listener registered with a [`Viewport`].
    pub struct ListenerId;
}

/// The measurement side of responsive selection: reports the current width,
/// answers range queries and notifies listeners when the width changes.
///
/// Listeners may be notified for changes that do not cross any breakpoint.
pub trait Viewport {
    fn width(&self) -> u32;

    /// Whether the current width lies inside `breakpoint`.
    fn matches(&self, breakpoint: &Breakpoint) -> bool {
        breakpoint.contains(self.width())
    }

    fn subscribe(&self, listener: Rc<dyn Fn()>) -> ListenerId;

    /// Returns `false` if `id` was not registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

/// An in-process [`Viewport`] whose width is set by hand.
///
/// Widths set from inside a listener are coalesced: the notification in
/// progress is abandoned and restarted with the latest width, so listeners
/// never observe a stale width after a newer one was set.
pub struct SimulatedViewport {
    width: Cell<u32>,
    listeners: RefCell<SlotMap<ListenerId, Rc<dyn Fn()>>>,
    notifying: Cell<bool>,
    pending: Cell<bool>,
}

impl SimulatedViewport {
    pub fn new(width: u32) -> Self {
        Self {
            width: Cell::new(width),
            listeners: RefCell::new(SlotMap::with_key()),
            notifying: Cell::new(false),
            pending: Cell::new(false),
        }
    }

    pub fn set_width(&self, width: u32) {
        self.width.set(width);
        if self.notifying.get() {
            trace!(width, "viewport width changed during notification");
            self.pending.set(true);
            return;
        }

        self.notifying.set(true);
        loop {
            self.pending.set(false);
            let listeners: Vec<_> = self.listeners.borrow().values().cloned().collect();
            trace!(
                width = self.width.get(),
                listeners = listeners.len(),
                "notifying viewport listeners"
            );
            for listener in listeners {
                listener();
                if self.pending.get() {
                    break;
                }
            }
            if !self.pending.get() {
                break;
            }
        }
        self.notifying.set(false);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Viewport for SimulatedViewport {
    fn width(&self) -> u32 {
        self.width.get()
    }

    fn subscribe(&self, listener: Rc<dyn Fn()>) -> ListenerId {
        self.listeners.borrow_mut().insert(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id).is_some()
    }
}
