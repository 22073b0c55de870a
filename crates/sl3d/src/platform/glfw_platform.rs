//! GLFW-based platform for OpenGL rendering
//!
//! Uses the `glfw` crate for the window and context and the `gl` crate for
//! entry-point loading and the clear call. The library handle is held in an
//! `Option` so that [`Platform::terminate`] can release it explicitly;
//! dropping the last `glfw::Glfw` handle terminates the library.
//!
//! GLFW state is process-global. At most one platform may hold it at a
//! time; a second `init` fails until the first has terminated.

use super::{MonitorMode, Platform, PlatformError, WindowRequest};
use crate::diagnostics::ErrorSink;
use crate::render::ClearColor;
use glfw::Context;
use std::sync::atomic::{AtomicBool, Ordering};

static LIBRARY_ACTIVE: AtomicBool = AtomicBool::new(false);

/// A GLFW window and its event receiver
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

/// GLFW implementation of [`Platform`]
#[derive(Default)]
pub struct GlfwPlatform {
    glfw: Option<glfw::Glfw>,
}

impl GlfwPlatform {
    /// Create an uninitialized platform; [`Platform::init`] starts GLFW
    pub fn new() -> Self {
        Self::default()
    }
}

/// Run `start` while holding the process-wide library claim
///
/// Fails without calling `start` when another platform holds the claim, and
/// releases the claim again when `start` fails.
fn claim_library<T>(
    start: impl FnOnce() -> Result<T, PlatformError>,
) -> Result<T, PlatformError> {
    if LIBRARY_ACTIVE
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return Err(PlatformError::Init(
            "GLFW is already owned by another backend".to_string(),
        ));
    }

    start().inspect_err(|_| LIBRARY_ACTIVE.store(false, Ordering::Release))
}

impl Platform for GlfwPlatform {
    type Window = GlfwWindow;

    fn init(&mut self, sink: ErrorSink) -> Result<(), PlatformError> {
        let glfw = claim_library(|| {
            glfw::init(move |error: glfw::Error, description: String| {
                sink.report(error as i32, &description);
            })
            .map_err(|e| PlatformError::Init(format!("{e:?}")))
        })?;

        log::debug!("GLFW {} initialized", glfw::get_version_string());
        self.glfw = Some(glfw);
        Ok(())
    }

    fn create_window(&mut self, request: &WindowRequest<'_>) -> Option<GlfwWindow> {
        let glfw = self.glfw.as_mut()?;

        let context = request.context;
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::OpenGl));
        glfw.window_hint(glfw::WindowHint::ContextVersion(
            context.major_version,
            context.minor_version,
        ));
        if context.core_profile {
            glfw.window_hint(glfw::WindowHint::OpenGlProfile(
                glfw::OpenGlProfileHint::Core,
            ));
        }
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(context.forward_compatible));

        let (width, height, title) = (request.width, request.height, request.title);
        let created = match request.monitor {
            MonitorMode::Windowed => {
                glfw.create_window(width, height, title, glfw::WindowMode::Windowed)
            }
            MonitorMode::Primary => glfw.with_primary_monitor(|glfw, monitor| {
                let Some(monitor) = monitor else {
                    log::warn!("No primary monitor available for fullscreen window");
                    return None;
                };
                glfw.create_window(width, height, title, glfw::WindowMode::FullScreen(&*monitor))
            }),
        };

        let (mut window, events) = created?;
        window.set_close_polling(true);
        Some(GlfwWindow { window, events })
    }

    fn make_context_current(&mut self, window: &mut GlfwWindow) {
        window.window.make_current();
    }

    fn load_gl(&mut self, window: &mut GlfwWindow) -> Result<(), PlatformError> {
        gl::load_with(|symbol| window.window.get_proc_address(symbol) as *const _);

        if !gl::ClearBufferfv::is_loaded() {
            return Err(PlatformError::GlLoad(
                "glClearBufferfv could not be resolved for the current context".to_string(),
            ));
        }
        Ok(())
    }

    fn set_swap_interval(&mut self, vsync: bool) {
        if let Some(glfw) = self.glfw.as_mut() {
            let interval = if vsync {
                glfw::SwapInterval::Sync(1)
            } else {
                glfw::SwapInterval::None
            };
            glfw.set_swap_interval(interval);
        }
    }

    fn destroy_window(&mut self, window: GlfwWindow) {
        // PWindow destroys the native window on drop
        drop(window);
    }

    fn terminate(&mut self) {
        if let Some(mut glfw) = self.glfw.take() {
            // The callback slot is process-global and outlives the handle
            glfw.unset_error_callback();
            drop(glfw);
            LIBRARY_ACTIVE.store(false, Ordering::Release);
            log::debug!("GLFW terminated");
        }
    }

    fn should_close(&self, window: &GlfwWindow) -> bool {
        window.window.should_close()
    }

    fn set_should_close(&mut self, window: &mut GlfwWindow, value: bool) {
        window.window.set_should_close(value);
    }

    fn set_title(&mut self, window: &mut GlfwWindow, title: &str) {
        window.window.set_title(title);
    }

    #[allow(unsafe_code)]
    fn clear(&mut self, _window: &mut GlfwWindow, color: ClearColor) {
        let rgba = color.to_array();
        // SAFETY: load_gl succeeded for the current context during construction,
        // and rgba holds the four components glClearBufferfv reads for GL_COLOR.
        unsafe {
            gl::ClearBufferfv(gl::COLOR, 0, rgba.as_ptr());
        }
    }

    fn swap_buffers(&mut self, window: &mut GlfwWindow) {
        window.window.swap_buffers();
    }

    fn poll_events(&mut self, window: &mut GlfwWindow) {
        if let Some(glfw) = self.glfw.as_mut() {
            glfw.poll_events();
        }
        // Only the close event is subscribed; nothing consumes the queue
        for (_, event) in glfw::flush_messages(&window.events) {
            log::trace!("window event: {event:?}");
        }
    }
}
