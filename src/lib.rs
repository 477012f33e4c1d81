//! # Floem Responsive
//! Breakpoint-driven content selection built on [`floem_reactive`].
//!
//! A [`Responsiveness`] holds one alternative per width category
//! (`mobile`, `tablet`, `desktop`) plus an optional default, and keeps a
//! [`RenderTarget`] showing the alternative that matches the current viewport
//! width. The pieces, leaf first:
//!
//! - [`Breakpoints`] maps a width to [`ResponsiveSignals`]
//!   (`mobile ..=767`, `tablet 768..=991`, `desktop 992..` by default).
//! - [`BreakpointClassifier`] follows a [`Viewport`] and publishes those
//!   signals as reactive state.
//! - [`select`] picks and realizes one [`Content`] out of a [`ContentMap`].
//!   The matched category's own content wins over the default; empty entries
//!   count as absent; with neither, nothing is rendered.
//!
//! ## Example
//! ```rust
//! use floem_responsive::{ContentMap, Responsiveness, ResponsiveSignals};
//!
//! let responsive = Responsiveness::new(
//!     ContentMap::new()
//!         .desktop("D")
//!         .fallback_with(|s: ResponsiveSignals| if s.is_mobile { "mobile" } else { "other" }),
//! );
//!
//! assert_eq!(responsive.render_at(375), Some("mobile"));
//! assert_eq!(responsive.render_at(800), Some("other"));
//! assert_eq!(responsive.render_at(1200), Some("D"));
//! ```
//!
//! ## Lifecycle
//! [`Responsiveness::mount`] registers exactly one listener with the viewport
//! and creates a reactive scope for the signals and the rendering effect.
//! Each breakpoint crossing replaces the mounted content. Unmounting the
//! returned [`Mounted`] handle, or dropping it, removes the listener once and
//! disposes the scope.

pub mod classifier;
pub mod content;
pub mod error;
pub mod responsive;
pub mod responsiveness;
pub mod selector;
pub mod signals;
pub mod viewport;

pub use classifier::{BreakpointClassifier, ResponsiveState};
pub use content::{Content, ContentKey, ContentMap};
pub use error::{BreakpointError, ConfigError};
pub use responsive::{Breakpoint, Breakpoints, Category};
pub use responsiveness::{Mounted, RenderTarget, Responsiveness, Slot};
pub use selector::{Selection, resolve, select};
pub use signals::ResponsiveSignals;
pub use viewport::{ListenerId, SimulatedViewport, Viewport};
