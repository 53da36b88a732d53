//! Camera input: discrete directional triggers mapped from key names.
//!
//! # Invariants
//! - The viewer core never reads devices; it consumes `CameraAction`s.
//! - Each key maps to at most one action.

pub mod action;
pub mod bindings;

pub use action::{CameraAction, HeldActions};
pub use bindings::{BindingError, KeyBindings};
