//! Windowing library abstraction
//!
//! [`Platform`] is the seam between the backend lifecycle and the library
//! that actually talks to the display server. It covers exactly what the
//! backend needs: global init and terminate, window create and destroy,
//! context binding, GL entry-point loading, buffer swaps, event pumping, the
//! close flag and the title.
//!
//! The window type is associated so that each platform keeps its own handle
//! representation and ownership of that handle moves back into the platform
//! on [`Platform::destroy_window`].
//!
//! ```text
//! OpenGlBackend<P> ──uses──▶ P: Platform
//!                              ├── GlfwPlatform      (glfw + gl crates)
//!                              └── RecordingPlatform (tests only)
//! ```

pub mod glfw_platform;
#[cfg(test)]
pub(crate) mod recording;

pub use glfw_platform::{GlfwPlatform, GlfwWindow};

use crate::config::ContextConfig;
use crate::diagnostics::ErrorSink;
use crate::render::ClearColor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform-level failures
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Global library initialization failed
    #[error("windowing library initialization failed: {0}")]
    Init(String),

    /// GL function pointers could not be resolved for the current context
    #[error("GL entry points unavailable: {0}")]
    GlLoad(String),
}

/// Where the window is placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorMode {
    /// A regular decorated window
    #[default]
    Windowed,
    /// Fullscreen on the primary monitor
    Primary,
}

/// Parameters for a single window creation call
#[derive(Debug, Clone, Copy)]
pub struct WindowRequest<'a> {
    /// Framebuffer width in pixels
    pub width: u32,
    /// Framebuffer height in pixels
    pub height: u32,
    /// Initial title
    pub title: &'a str,
    /// Windowed or fullscreen
    pub monitor: MonitorMode,
    /// GL context hints
    pub context: &'a ContextConfig,
}

/// Windowing and context library operations used by the backend
///
/// Implementations are single-threaded: every call happens on the thread
/// that called [`Platform::init`].
pub trait Platform {
    /// Owned window handle
    type Window;

    /// Install `sink` as the library error callback and initialize the library
    fn init(&mut self, sink: ErrorSink) -> Result<(), PlatformError>;

    /// Create a window with a GL context, `None` when the library refuses
    fn create_window(&mut self, request: &WindowRequest<'_>) -> Option<Self::Window>;

    /// Bind the window's context to the calling thread
    fn make_context_current(&mut self, window: &mut Self::Window);

    /// Resolve GL entry points for the current context
    fn load_gl(&mut self, window: &mut Self::Window) -> Result<(), PlatformError>;

    /// Enable or disable vsync for the current context
    fn set_swap_interval(&mut self, vsync: bool);

    /// Release a window handle
    fn destroy_window(&mut self, window: Self::Window);

    /// Remove the error callback installed by `init` and shut the library down
    fn terminate(&mut self);

    /// Whether the close flag is set
    fn should_close(&self, window: &Self::Window) -> bool;

    /// Set or clear the close flag
    fn set_should_close(&mut self, window: &mut Self::Window, value: bool);

    /// Change the title shown in the window chrome
    fn set_title(&mut self, window: &mut Self::Window, title: &str);

    /// Clear the default framebuffer's color buffer
    fn clear(&mut self, window: &mut Self::Window, color: ClearColor);

    /// Present the back buffer
    fn swap_buffers(&mut self, window: &mut Self::Window);

    /// Process pending window system events
    fn poll_events(&mut self, window: &mut Self::Window);
}
