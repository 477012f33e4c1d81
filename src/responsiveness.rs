use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use floem_reactive::{Scope, create_effect, with_scope};
use tracing::{debug, trace};

use crate::classifier::{BreakpointClassifier, ResponsiveState};
use crate::content::ContentMap;
use crate::responsive::Breakpoints;
use crate::selector::select;
use crate::signals::ResponsiveSignals;
use crate::viewport::Viewport;

/// The engine side of responsive selection: receives whatever content the
/// selector realized.
///
/// Content is replaced, never patched: the previous content is unmounted
/// before the next is mounted, and a selection of nothing only unmounts.
pub trait RenderTarget<V> {
    fn mount(&mut self, content: V);
    fn unmount(&mut self);
}

/// A shared [`RenderTarget`] that keeps the mounted content around.
///
/// Clones share the same storage, so one clone can be handed to
/// [`Responsiveness::mount`] while another inspects the result.
pub struct Slot<V> {
    inner: Rc<RefCell<SlotState<V>>>,
}

struct SlotState<V> {
    content: Option<V>,
    mounts: usize,
    unmounts: usize,
}

impl<V> Clone for Slot<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SlotState {
                content: None,
                mounts: 0,
                unmounts: 0,
            })),
        }
    }
}

impl<V> Slot<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<V>
    where
        V: Clone,
    {
        self.inner.borrow().content.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().content.is_none()
    }

    pub fn mounts(&self) -> usize {
        self.inner.borrow().mounts
    }

    pub fn unmounts(&self) -> usize {
        self.inner.borrow().unmounts
    }
}

impl<V> RenderTarget<V> for Slot<V> {
    fn mount(&mut self, content: V) {
        let mut state = self.inner.borrow_mut();
        state.content = Some(content);
        state.mounts += 1;
    }

    fn unmount(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.content = None;
        state.unmounts += 1;
    }
}

/// Tracks whether the target currently holds content so that it is only
/// unmounted when there is something to unmount.
///
/// A target may resize the viewport from inside `mount`, which re-runs the
/// rendering effect before `present` returns. Such nested presents are
/// queued and applied once the target call in progress has finished.
struct Presenter<V> {
    target: RefCell<Box<dyn RenderTarget<V>>>,
    live: Cell<bool>,
    presenting: Cell<bool>,
    queued: RefCell<Option<Option<V>>>,
}

impl<V> Presenter<V> {
    fn new(target: Box<dyn RenderTarget<V>>) -> Self {
        Self {
            target: RefCell::new(target),
            live: Cell::new(false),
            presenting: Cell::new(false),
            queued: RefCell::new(None),
        }
    }

    fn present(&self, content: Option<V>) {
        if self.presenting.get() {
            trace!("queueing content presented during a target call");
            *self.queued.borrow_mut() = Some(content);
            return;
        }

        self.presenting.set(true);
        let mut next = Some(content);
        while let Some(content) = next {
            self.replace(content);
            next = self.queued.borrow_mut().take();
        }
        self.presenting.set(false);
    }

    fn replace(&self, content: Option<V>) {
        let mut target = self.target.borrow_mut();
        if self.live.replace(false) {
            target.unmount();
        }
        if let Some(content) = content {
            target.mount(content);
            self.live.set(true);
        }
    }

    fn clear(&self) {
        self.queued.borrow_mut().take();
        if self.live.replace(false) {
            self.target.borrow_mut().unmount();
        }
    }
}

/// Renders one of several alternative contents depending on which
/// breakpoint the viewport width falls in.
///
/// ```rust
/// use std::rc::Rc;
/// use floem_responsive::{ContentMap, Responsiveness, SimulatedViewport, Slot};
///
/// let viewport = Rc::new(SimulatedViewport::new(375));
/// let slot = Slot::new();
/// let mounted = Responsiveness::new(
///     ContentMap::new()
///         .tablet("tablet")
///         .fallback_with(|s| if s.is_mobile { "mobile" } else { "wide" }),
/// )
/// .mount(viewport.clone(), slot.clone());
///
/// assert_eq!(slot.content(), Some("mobile"));
/// viewport.set_width(800);
/// assert_eq!(slot.content(), Some("tablet"));
/// viewport.set_width(1200);
/// assert_eq!(slot.content(), Some("wide"));
///
/// mounted.unmount();
/// assert_eq!(slot.content(), None);
/// ```
pub struct Responsiveness<V> {
    content: ContentMap<V>,
    breakpoints: Breakpoints,
}

impl<V: Clone + 'static> Responsiveness<V> {
    pub fn new(content: ContentMap<V>) -> Self {
        Self {
            content,
            breakpoints: Breakpoints::default(),
        }
    }

    /// Replaces the default breakpoint table.
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// One-shot selection for the given signals.
    pub fn render(&self, signals: ResponsiveSignals) -> Option<V> {
        select(signals, &self.content)
    }

    /// One-shot selection for a width, classified with this table.
    pub fn render_at(&self, width: u32) -> Option<V> {
        self.render(self.breakpoints.classify(width))
    }

    /// Follows `viewport` and keeps `target` showing the selected content
    /// until the returned handle is unmounted or dropped.
    pub fn mount(
        self,
        viewport: Rc<dyn Viewport>,
        target: impl RenderTarget<V> + 'static,
    ) -> Mounted<V> {
        let scope = Scope::new();
        let classifier = BreakpointClassifier::new(self.breakpoints, viewport);
        let state = classifier.mount(scope);

        let content = self.content;
        let presenter = Rc::new(Presenter::new(Box::new(target)));

        let effect_presenter = presenter.clone();
        with_scope(scope, move || {
            create_effect(move |_| {
                let signals = state.get();
                let realized = select(signals, &content);
                // Realizing may resize the viewport, in which case a nested run
                // has already presented content for the newer signals.
                if state.get_untracked() != signals {
                    trace!(?signals, "dropping content for superseded signals");
                    return;
                }
                effect_presenter.present(realized);
            })
        });

        Mounted {
            teardown: Some(Teardown {
                scope,
                classifier,
                state,
                presenter,
            }),
        }
    }
}

struct Teardown<V> {
    scope: Scope,
    classifier: BreakpointClassifier,
    state: ResponsiveState,
    presenter: Rc<Presenter<V>>,
}

/// A mounted [`Responsiveness`]. Unmounting (explicitly or by drop) stops
/// following the viewport and removes the content from the target.
pub struct Mounted<V> {
    teardown: Option<Teardown<V>>,
}

impl<V> Mounted<V> {
    /// The live signals, or `None` once unmounted.
    pub fn state(&self) -> Option<ResponsiveState> {
        self.teardown.as_ref().map(|t| t.state)
    }

    pub fn signals(&self) -> Option<ResponsiveSignals> {
        self.state().map(|state| state.get_untracked())
    }

    pub fn is_mounted(&self) -> bool {
        self.teardown.is_some()
    }

    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let Some(teardown) = self.teardown.take() else {
            return;
        };
        teardown.classifier.unmount();
        teardown.scope.dispose();
        teardown.presenter.clear();
        debug!("responsiveness unmounted");
    }
}

impl<V> Drop for Mounted<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}
