//! Backend-agnostic render contract
//!
//! Every backend variant shares one per-frame hook, [`Render::render`].
//! Backends own their window and context; the driver loop in
//! [`crate::app`] owns the call.

use crate::platform::PlatformError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Per-frame render hook
///
/// Implementors issue drawing commands and present the frame: typically
/// clear, swap buffers, poll events. There is no default body and backends
/// never call it on their own.
pub trait Render {
    /// Draw and present one frame
    fn render(&mut self);
}

/// Available rendering backend variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// OpenGL through GLFW
    #[default]
    #[serde(rename = "opengl")]
    OpenGl,
    /// Vulkan; declared for the render contract, not implemented
    Vulkan,
}

impl BackendKind {
    /// Fail for variants that have no implementation
    pub fn ensure_supported(self) -> Result<Self, BackendError> {
        match self {
            Self::OpenGl => Ok(self),
            Self::Vulkan => Err(BackendError::Unsupported(self)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenGl => f.write_str("OpenGL"),
            Self::Vulkan => f.write_str("Vulkan"),
        }
    }
}

/// Backend construction errors
#[derive(Error, Debug)]
pub enum BackendError {
    /// Global windowing library initialization failed
    #[error("Failed to initialize GLFW")]
    Init(#[source] PlatformError),

    /// The window or its surface could not be created
    #[error("Failed to create Window")]
    WindowCreation,

    /// GL entry points could not be resolved after binding the context
    #[error("Failed to load OpenGL functions: {0}")]
    ContextLoad(#[source] PlatformError),

    /// Requested framebuffer size has a zero dimension
    #[error("Invalid window size {width}x{height}")]
    InvalidSize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Backend variant has no implementation
    #[error("{0} backend is not implemented")]
    Unsupported(BackendKind),
}

/// Convenience alias for backend results
pub type BackendResult<T> = Result<T, BackendError>;
