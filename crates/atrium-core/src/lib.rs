//! Core types for the atrium GUI layer: geometry, the raw input event
//! model, and the traits the GUI system consumes from its host engine.
//!
//! The GUI core never talks to a device or a GPU directly. It sees three
//! collaborator seams, all defined here:
//!
//! - [`DrawSurface`] — draws textured regions; acquired per draw tick.
//! - [`ViewportAdapter`] — maps raw pointer coordinates into UI space and
//!   supplies the bounding rectangle screens are laid out against.
//! - [`InputListener`] — polled once per update tick, emits discrete
//!   pointer/key events synchronously through a sink.
//!
//! [`RecordingSurface`] and [`ScriptedListener`] are headless
//! implementations used by tests and demos.

pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod prelude;
pub mod render_api;
pub mod viewport;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use render_api::*;
pub use viewport::*;
