//! Recording test double for [`Platform`]
//!
//! Every call is appended to a log shared between clones, so a test keeps
//! one clone and inspects teardown after the backend has been dropped.
//! Failures are injected through the builder methods.

use super::{MonitorMode, Platform, PlatformError, WindowRequest};
use crate::diagnostics::ErrorSink;
use crate::render::ClearColor;
use std::cell::RefCell;
use std::rc::Rc;

/// One observed platform call
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Init,
    CreateWindow {
        width: u32,
        height: u32,
        title: String,
        monitor: MonitorMode,
    },
    MakeContextCurrent(u32),
    LoadGl(u32),
    SetSwapInterval(bool),
    DestroyWindow(u32),
    Terminate,
    SetTitle(u32, String),
    Clear(u32, ClearColor),
    SwapBuffers(u32),
    PollEvents(u32),
}

/// Fake window: an id plus the close flag the library would own
#[derive(Debug)]
pub(crate) struct FakeWindow {
    id: u32,
    should_close: bool,
    frames: u64,
}

/// Library state shared by every clone of a [`RecordingPlatform`]
///
/// GLFW state is process-global, so clones model "the same library".
#[derive(Debug, Default)]
pub(crate) struct LibraryState {
    pub(crate) calls: Vec<Call>,
    pub(crate) initialized: bool,
    pub(crate) live_windows: u32,
    next_id: u32,
    sink: Option<ErrorSink>,
}

#[derive(Clone, Default)]
pub(crate) struct RecordingPlatform {
    state: Rc<RefCell<LibraryState>>,
    fail_init: bool,
    fail_create_window: bool,
    fail_load_gl: bool,
    close_after_frames: Option<u64>,
}

impl RecordingPlatform {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub(crate) fn failing_window(mut self) -> Self {
        self.fail_create_window = true;
        self
    }

    pub(crate) fn failing_gl_load(mut self) -> Self {
        self.fail_load_gl = true;
        self
    }

    /// Simulate the user closing the window after `frames` buffer swaps
    pub(crate) fn closing_after(mut self, frames: u64) -> Self {
        self.close_after_frames = Some(frames);
        self
    }

    /// Shared state handle that stays readable after the backend is dropped
    pub(crate) fn state(&self) -> Rc<RefCell<LibraryState>> {
        Rc::clone(&self.state)
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    /// Report through the sink installed at init, as the library would
    pub(crate) fn raise_error(&self, code: i32, description: &str) {
        if let Some(sink) = &self.state.borrow().sink {
            sink.report(code, description);
        }
    }
}

impl Platform for RecordingPlatform {
    type Window = FakeWindow;

    fn init(&mut self, sink: ErrorSink) -> Result<(), PlatformError> {
        self.record(Call::Init);
        if self.fail_init {
            sink.report(0x0001_0006, "No display server available");
            return Err(PlatformError::Init("no display".to_string()));
        }
        let mut state = self.state.borrow_mut();
        assert!(!state.initialized, "library initialized twice");
        state.initialized = true;
        state.sink = Some(sink);
        Ok(())
    }

    fn create_window(&mut self, request: &WindowRequest<'_>) -> Option<FakeWindow> {
        self.record(Call::CreateWindow {
            width: request.width,
            height: request.height,
            title: request.title.to_string(),
            monitor: request.monitor,
        });
        assert!(self.state.borrow().initialized, "window created before init");
        if self.fail_create_window {
            self.raise_error(0x0001_0009, "Pixel format not supported");
            return None;
        }
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.live_windows += 1;
        Some(FakeWindow {
            id: state.next_id,
            should_close: false,
            frames: 0,
        })
    }

    fn make_context_current(&mut self, window: &mut FakeWindow) {
        self.record(Call::MakeContextCurrent(window.id));
    }

    fn load_gl(&mut self, window: &mut FakeWindow) -> Result<(), PlatformError> {
        self.record(Call::LoadGl(window.id));
        if self.fail_load_gl {
            return Err(PlatformError::GlLoad("glClearBufferfv missing".to_string()));
        }
        Ok(())
    }

    fn set_swap_interval(&mut self, vsync: bool) {
        self.record(Call::SetSwapInterval(vsync));
    }

    fn destroy_window(&mut self, window: FakeWindow) {
        self.record(Call::DestroyWindow(window.id));
        self.state.borrow_mut().live_windows -= 1;
    }

    fn terminate(&mut self) {
        self.record(Call::Terminate);
        let mut state = self.state.borrow_mut();
        assert!(state.initialized, "terminate without init");
        assert_eq!(state.live_windows, 0, "terminate with live windows");
        state.initialized = false;
        state.sink = None;
    }

    fn should_close(&self, window: &FakeWindow) -> bool {
        window.should_close
    }

    fn set_should_close(&mut self, window: &mut FakeWindow, value: bool) {
        window.should_close = value;
    }

    fn set_title(&mut self, window: &mut FakeWindow, title: &str) {
        self.record(Call::SetTitle(window.id, title.to_string()));
    }

    fn clear(&mut self, window: &mut FakeWindow, color: ClearColor) {
        self.record(Call::Clear(window.id, color));
    }

    fn swap_buffers(&mut self, window: &mut FakeWindow) {
        self.record(Call::SwapBuffers(window.id));
        window.frames += 1;
    }

    fn poll_events(&mut self, window: &mut FakeWindow) {
        self.record(Call::PollEvents(window.id));
        if self.close_after_frames.is_some_and(|n| window.frames >= n) {
            window.should_close = true;
        }
    }
}
