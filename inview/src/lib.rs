//! A headless "render once scrolled into view" detector.
//!
//! This crate decides when an element has scrolled into view within its nearest scrollable
//! ancestor (or the window), optionally shrinking the viewport by an offset, and flips a
//! hidden → visible state exactly once (or again after a configured reset event).
//!
//! It is UI-agnostic. A DOM/TUI/GUI binding is expected to provide, through [`Host`]:
//! - element and window geometry
//! - the nearest scrollable ancestor and the document's root elements
//! - listener registration, with fired events forwarded to [`Controller::handle_event`]
//! - a display-refresh tick forwarded to [`Controller::on_frame`]
//!
//! For render-slot selection and an in-memory host, see the `inview-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bounds;
mod container;
mod controller;
mod frame;
mod host;
mod listeners;
mod options;
mod state;
mod types;


pub use bounds::{element_bounds, is_in_viewport, offset_bounds, viewport_bounds};
pub use container::{CompatMode, Container, DocumentRoots, resolve_container};
pub use controller::{Controller, Lifecycle};
pub use host::{
    ControllerId, EventName, EventTarget, Host, Listener, ListenerOptions, Subscription,
};
pub use options::{InViewOptions, TransitionCallback};
pub use state::{Visibility, VisibilityState};
pub use types::{Bounds, Offset, SideOffsets, Size, Transition};
