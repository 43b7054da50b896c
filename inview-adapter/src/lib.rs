//! Adapter utilities for the `inview` crate.
//!
//! The `inview` crate is UI-agnostic and focuses on the geometry and the visibility state
//! machine. This crate provides small, framework-neutral helpers commonly needed by bindings:
//!
//! - Render-slot selection (placeholder / content / render function)
//! - A `LazyRender` component facade bundling a controller with its wrapper element
//! - `SimHost`, an in-memory [`inview::Host`] for tests, demos and self-laid-out UIs
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod component;
mod render;
mod sim;

#[cfg(test)]
mod tests;

pub use component::{LazyRender, Rendered, Wrapper};
pub use render::{RenderFn, RenderSlots};
pub use sim::{NodeId, SimHost};
