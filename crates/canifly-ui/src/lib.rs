//! CanIFly UI Components
//!
//! Reusable Dioxus primitives shared by the desktop app: buttons, loading
//! skeletons and the progress ring. They hold no application state; class
//! names match the global stylesheet in the desktop crate.

pub mod components;

pub use components::*;
