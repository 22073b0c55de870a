//! Frame loop driver
//!
//! The loop checks the close flag before every frame, so the hook is called
//! exactly once per iteration and never again once the window system has
//! requested the close.

use crate::render::Render;

/// A renderable application that knows when its window wants to close
pub trait Application: Render {
    /// Whether the frame loop should stop
    fn should_close(&self) -> bool;
}

/// Run frames until the application reports close; returns the frame count
pub fn run<A: Application + ?Sized>(app: &mut A) -> u64 {
    log::info!("Starting main loop...");

    let mut frames = 0_u64;
    while !app.should_close() {
        app.render();
        frames += 1;
    }

    log::info!("Main loop finished after {frames} frames");
    frames
}
