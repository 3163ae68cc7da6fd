//! The reactive engine behind every screen controller.
//!
//! A controller owns an [`Engine`] parameterized over its state and effect
//! types. State is continuous — the latest value is replayed to every new
//! observer — while effects are one-shot: delivered at most once, to at most
//! one consumer, and dropped rather than replayed when nobody is listening.

mod controller;
mod engine;

pub use controller::Controller;
pub use engine::{EFFECT_BUFFER, Engine};
