//! Window and GL context lifecycle
//!
//! [`OpenGlBackend`] acquires, in order: the library error callback and
//! global initialization, the window, the current context, and the GL entry
//! points. It releases the window and then the library when dropped.
//!
//! Construction is all-or-nothing. As soon as the library is initialized the
//! half-built backend exists as a value, so any later `?` drops it and the
//! regular [`Drop`] path releases exactly what was acquired.

use crate::config::{ContextConfig, WindowConfig};
use crate::diagnostics::ErrorSink;
use crate::platform::{MonitorMode, Platform, WindowRequest};
use crate::render::backend::{BackendError, BackendResult};
use crate::render::ClearColor;

/// An OpenGL window with a current context
///
/// Owns the platform for its whole lifetime; the window handle is `Some`
/// from successful construction until drop.
pub struct OpenGlBackend<P: Platform> {
    platform: P,
    window: Option<P::Window>,
    title: String,
    size: (u32, u32),
    monitor: MonitorMode,
    errors: ErrorSink,
}

impl<P: Platform> OpenGlBackend<P> {
    /// Initialize the library, open a window and make its GL context current
    ///
    /// # Errors
    /// - [`BackendError::InvalidSize`] for a zero dimension, before the library is touched
    /// - [`BackendError::Init`] when the library cannot start; no window is attempted
    /// - [`BackendError::WindowCreation`] when the window is refused; the library is terminated
    /// - [`BackendError::ContextLoad`] when GL entry points are missing; window and library are released
    pub fn new(
        mut platform: P,
        config: &WindowConfig,
        context: &ContextConfig,
    ) -> BackendResult<Self> {
        if config.validate().is_err() {
            return Err(BackendError::InvalidSize {
                width: config.width,
                height: config.height,
            });
        }

        let errors = ErrorSink::new();
        platform.init(errors.clone()).map_err(BackendError::Init)?;

        let mut backend = Self {
            platform,
            window: None,
            title: config.title.clone(),
            size: (config.width, config.height),
            monitor: config.monitor,
            errors,
        };

        let request = WindowRequest {
            width: config.width,
            height: config.height,
            title: &config.title,
            monitor: config.monitor,
            context,
        };
        let window = backend.platform.create_window(&request).ok_or_else(|| {
            log::error!("Window creation refused for {}x{}", config.width, config.height);
            BackendError::WindowCreation
        })?;
        let window = backend.window.insert(window);

        backend.platform.make_context_current(window);
        backend
            .platform
            .load_gl(window)
            .map_err(BackendError::ContextLoad)?;
        backend.platform.set_swap_interval(config.vsync);

        log::info!(
            "OpenGL {}.{} window \"{}\" created ({}x{}, {:?})",
            context.major_version,
            context.minor_version,
            backend.title,
            config.width,
            config.height,
            config.monitor
        );
        Ok(backend)
    }

    /// Current window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Update the title shown in the window chrome
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if let Some(window) = self.window.as_mut() {
            self.platform.set_title(window, &self.title);
        }
    }

    /// Requested framebuffer size
    pub const fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Windowed or fullscreen
    pub const fn monitor(&self) -> MonitorMode {
        self.monitor
    }

    /// Sink receiving library errors for this backend
    pub const fn errors(&self) -> &ErrorSink {
        &self.errors
    }

    /// Whether the window system has asked the window to close
    pub fn should_close(&self) -> bool {
        self.window
            .as_ref()
            .map_or(true, |window| self.platform.should_close(window))
    }

    /// Set or clear the close flag from application code
    pub fn set_should_close(&mut self, value: bool) {
        if let Some(window) = self.window.as_mut() {
            self.platform.set_should_close(window, value);
        }
    }

    /// Clear the color buffer of the default framebuffer
    pub fn clear(&mut self, color: ClearColor) {
        if let Some(window) = self.window.as_mut() {
            self.platform.clear(window, color);
        }
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        if let Some(window) = self.window.as_mut() {
            self.platform.swap_buffers(window);
        }
    }

    /// Process pending window system events
    pub fn poll_events(&mut self) {
        if let Some(window) = self.window.as_mut() {
            self.platform.poll_events(window);
        }
    }
}

impl<P: Platform> Drop for OpenGlBackend<P> {
    fn drop(&mut self) {
        if let Some(window) = self.window.take() {
            self.platform.destroy_window(window);
        }
        self.platform.terminate();
        log::debug!("OpenGL backend released \"{}\"", self.title);
    }
}
