//! Rendering backends
//!
//! ```text
//! ┌───────────────────────┐
//! │  Application: Render  │ ← consumer implements the per-frame hook
//! └──────────┬────────────┘
//!            │ owns
//!  ┌─────────▼──────────┐
//!  │ OpenGlBackend<P>   │ ← window + context lifecycle (opengl/backend.rs)
//!  └─────────┬──────────┘
//!            │ drives
//!     ┌──────▼──────┐
//!     │ P: Platform │ ← GLFW, or a test double
//!     └─────────────┘
//! ```
//!
//! [`BackendKind::Vulkan`] is declared but has no implementation yet.

pub mod backend;
pub mod opengl;

pub use backend::{BackendError, BackendKind, Render};
pub use opengl::OpenGlBackend;

use serde::{Deserialize, Serialize};

/// RGBA color used to clear the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearColor {
    /// Red channel, 0.0..=1.0
    pub r: f32,
    /// Green channel, 0.0..=1.0
    pub g: f32,
    /// Blue channel, 0.0..=1.0
    pub b: f32,
    /// Alpha channel, 0.0..=1.0
    pub a: f32,
}

impl ClearColor {
    /// Opaque blue
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque color from three channels
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Channels in the order glClearBufferfv expects
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::BLUE
    }
}
