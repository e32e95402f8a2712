//! Application layer - Use cases and port interfaces
//!
//! Contains the clip workflow, the parser-document lifecycle, and trait
//! definitions for external system interactions.

pub mod clip;
pub mod offscreen;
pub mod ports;

// Re-export use cases
pub use clip::{ClipPageUseCase, ALLOWED_SCHEMES};
pub use offscreen::OffscreenLifecycle;
