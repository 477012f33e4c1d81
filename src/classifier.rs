use std::{cell::Cell, rc::Rc};

use floem_reactive::{RwSignal, Scope, SignalGet, SignalUpdate};
use tracing::{debug, trace};

use crate::responsive::Breakpoints;
use crate::signals::ResponsiveSignals;
use crate::viewport::{ListenerId, Viewport};

/// Live breakpoint state published by a mounted [`BreakpointClassifier`].
///
/// Reads inside an effect subscribe it to the underlying signal. The state
/// belongs to the scope it was mounted under and must not be read after that
/// scope is disposed.
#[derive(Clone, Copy)]
pub struct ResponsiveState {
    signals: RwSignal<ResponsiveSignals>,
}

impl ResponsiveState {
    pub fn get(&self) -> ResponsiveSignals {
        self.signals.get()
    }

    pub fn get_untracked(&self) -> ResponsiveSignals {
        self.signals.get_untracked()
    }

    pub fn is_mobile(&self) -> bool {
        self.get().is_mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.get().is_tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.get().is_desktop
    }
}

/// Turns viewport width changes into [`ResponsiveState`] updates.
///
/// Each [`mount`](Self::mount) registers one viewport listener and each
/// [`unmount`](Self::unmount) removes it again. Dropping a mounted classifier
/// unmounts it.
pub struct BreakpointClassifier {
    breakpoints: Breakpoints,
    viewport: Rc<dyn Viewport>,
    listener: Cell<Option<ListenerId>>,
}

impl BreakpointClassifier {
    pub fn new(breakpoints: Breakpoints, viewport: Rc<dyn Viewport>) -> Self {
        Self {
            breakpoints,
            viewport,
            listener: Cell::new(None),
        }
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Measures the viewport now, without mounting.
    pub fn signals(&self) -> ResponsiveSignals {
        self.breakpoints.measure(&*self.viewport)
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.get().is_some()
    }

    /// Creates the state under `scope` and starts following the viewport.
    ///
    /// The state is only written when the measured signals differ from the
    /// current ones, so redundant notifications do not wake dependents.
    pub fn mount(&self, scope: Scope) -> ResponsiveState {
        self.unmount();

        let state = ResponsiveState {
            signals: scope.create_rw_signal(self.signals()),
        };

        let breakpoints = self.breakpoints;
        let viewport = Rc::downgrade(&self.viewport);
        let id = self.viewport.subscribe(Rc::new(move || {
            let Some(viewport) = viewport.upgrade() else {
                return;
            };
            let next = breakpoints.measure(&*viewport);
            let current = state.signals.get_untracked();
            if current == next {
                trace!(width = viewport.width(), "breakpoint unchanged");
                return;
            }
            debug!(
                width = viewport.width(),
                from = ?current.category(),
                to = ?next.category(),
                "breakpoint crossed"
            );
            state.signals.set(next);
        }));
        self.listener.set(Some(id));

        debug!(initial = ?state.get_untracked().category(), "classifier mounted");
        state
    }

    /// Stops following the viewport. Returns `false` if it was not mounted.
    pub fn unmount(&self) -> bool {
        let Some(id) = self.listener.take() else {
            return false;
        };
        let removed = self.viewport.unsubscribe(id);
        debug!(removed, "classifier unmounted");
        true
    }
}

impl Drop for BreakpointClassifier {
    fn drop(&mut self) {
        self.unmount();
    }
}
