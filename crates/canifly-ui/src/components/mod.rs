//! Reusable UI primitives

mod button;
mod progress_ring;
mod skeleton;

pub use button::*;
pub use progress_ring::*;
pub use skeleton::*;
