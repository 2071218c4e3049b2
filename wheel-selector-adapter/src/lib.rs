//! Adapter utilities for the `wheel-selector` crate.
//!
//! The `wheel-selector` crate is UI-agnostic and focuses on the selection math and state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - [`ScrollSurface`]: a reference host surface with clamped scrolling, tween-based smooth
//!   scrolling and subscription bookkeeping
//! - [`Controller`]: routes layout, drag, gesture, tap and frame-tick events into a selector
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod surface;
mod tween;


pub use controller::Controller;
pub use surface::ScrollSurface;
pub use tween::Tween;
