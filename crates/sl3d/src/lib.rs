//! # sl3d
//!
//! A small OpenGL windowing backend built on GLFW.
//!
//! The crate owns the lifecycle of one window and its GL context: library
//! initialization, window creation, context binding, GL entry-point loading
//! and teardown in reverse order. Applications implement [`Render`] and hand
//! themselves to [`app::run`], which drives the frame loop until the window
//! is asked to close.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sl3d::prelude::*;
//!
//! struct Blue {
//!     backend: OpenGlBackend<GlfwPlatform>,
//! }
//!
//! impl Render for Blue {
//!     fn render(&mut self) {
//!         self.backend.clear(ClearColor::BLUE);
//!         self.backend.swap_buffers();
//!         self.backend.poll_events();
//!     }
//! }
//!
//! impl Application for Blue {
//!     fn should_close(&self) -> bool {
//!         self.backend.should_close()
//!     }
//! }
//!
//! fn main() -> Result<(), BackendError> {
//!     let config = AppConfig::default();
//!     let backend = OpenGlBackend::new(GlfwPlatform::new(), &config.window, &config.context)?;
//!     let mut app = Blue { backend };
//!     sl3d::app::run(&mut app);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod foundation;
pub mod platform;
pub mod render;

/// Common imports for backend users
pub mod prelude {
    pub use crate::{
        app::Application,
        config::{AppConfig, Config, ConfigError, ContextConfig, LoggingConfig, WindowConfig},
        diagnostics::ErrorSink,
        platform::{GlfwPlatform, MonitorMode, Platform},
        render::{BackendError, BackendKind, ClearColor, OpenGlBackend, Render},
    };
}
